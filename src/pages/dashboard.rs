//! Dashboard Page
//!
//! Authenticated home screen: medicine list with create/edit/delete,
//! plus the profile card.

use leptos::*;

use crate::api;
use crate::components::{Header, Loading, MedicineCard, MedicineForm, ProfileCard};
use crate::state::global::GlobalState;
use crate::state::SessionStore;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (loading_meds, set_loading_meds) = create_signal(false);
    let (deleting_id, set_deleting_id) = create_signal(None::<String>);

    // Fetch the medicine list and refresh the profile on entry
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let Some(token) = state.store.token() else {
            return;
        };

        set_loading_meds.set(true);
        spawn_local(async move {
            match api::fetch_medicines(&token).await {
                Ok(list) => {
                    state.medicines.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load medicines: {}", e).into(),
                    );
                }
            }
            set_loading_meds.set(false);

            // Background refresh of the session user; failures are not fatal
            match api::fetch_profile(&token).await {
                Ok(user) => {
                    state.update_user(user);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to refresh profile: {}", e).into(),
                    );
                }
            }
        });
    });

    let state_for_edit = state.clone();
    let on_edit = Callback::new(move |medicine| {
        state_for_edit.form.load(&medicine);
    });

    let state_for_delete = state.clone();
    let on_delete = Callback::new(move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = state_for_delete.store.token() else {
            return;
        };

        set_deleting_id.set(Some(id.clone()));

        let state_clone = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_medicine(&token, &id).await {
                Ok(()) => {
                    state_clone.remove_medicine(&id);
                    state_clone.show_success("Medicine deleted");
                }
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e.to_string());
                    }
                }
            }
            set_deleting_id.set(None);
        });
    });

    let medicines = state.medicines;

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
                <div class="grid md:grid-cols-2 gap-8">
                    // Create/edit form
                    <section class="bg-white dark:bg-gray-800 rounded-xl shadow p-6">
                        <h2 class="text-xl font-semibold mb-4">
                            {
                                let form = state.form;
                                move || if form.editing_id.get().is_some() {
                                    "Edit Medicine"
                                } else {
                                    "Add Medicine"
                                }
                            }
                        </h2>
                        <MedicineForm />
                    </section>

                    // Profile and avatar
                    <section class="bg-white dark:bg-gray-800 rounded-xl shadow p-6">
                        <h2 class="text-xl font-semibold mb-4">"Profile"</h2>
                        <ProfileCard />
                    </section>
                </div>

                // Medicine list
                <section>
                    <h2 class="text-lg font-semibold mb-4">"Your Medicines"</h2>
                    {move || {
                        if loading_meds.get() {
                            return view! { <Loading /> }.into_view();
                        }

                        let list = medicines.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm py-8 text-center">
                                    "No medicines yet. Add your first one above."
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {list.into_iter().map(|medicine| {
                                        let id = medicine.id.clone();
                                        let deleting = create_memo(move |_| {
                                            deleting_id.get().as_deref() == Some(id.as_str())
                                        });
                                        view! {
                                            <MedicineCard
                                                medicine=medicine
                                                deleting=deleting
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
