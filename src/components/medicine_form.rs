//! Medicine Form Component
//!
//! Create/edit form for medicines. While an editing id is set, save
//! performs an update instead of a create.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, MedicineType};
use crate::state::SessionStore;

/// Medicine create/edit form component
#[component]
pub fn MedicineForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = state.form;
    let (saving, set_saving) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(user) = state_for_submit.user.get_untracked() else {
            return;
        };
        let Some(token) = state_for_submit.store.token() else {
            return;
        };

        let data = form.data(&user.id);
        let editing_id = form.editing_id.get_untracked();

        set_saving.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_medicine(&token, id, &data).await,
                None => api::add_medicine(&token, &data).await,
            };

            match result {
                Ok(saved) => {
                    if editing_id.is_some() {
                        state_clone.replace_medicine(saved);
                        state_clone.show_success("Medicine updated");
                    } else {
                        state_clone.push_medicine(saved);
                        state_clone.show_success("Medicine added");
                    }
                    form.reset();
                }
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e.to_string());
                    }
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                <input
                    type="text"
                    required
                    prop:value=move || form.name.get()
                    on:input=move |ev| form.name.set(event_target_value(&ev))
                    class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-300 dark:border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Dosage"</label>
                    <input
                        type="text"
                        placeholder="e.g. 100mg"
                        prop:value=move || form.dosage.get()
                        on:input=move |ev| form.dosage.set(event_target_value(&ev))
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Frequency"</label>
                    <input
                        type="text"
                        placeholder="e.g. twice daily"
                        prop:value=move || form.frequency.get()
                        on:input=move |ev| form.frequency.set(event_target_value(&ev))
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                <select
                    on:change=move |ev| {
                        form.kind.set(MedicineType::from_wire(&event_target_value(&ev)))
                    }
                    prop:value=move || form.kind.get().as_str().to_string()
                    class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-300 dark:border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    {MedicineType::ALL.into_iter().map(|kind| view! {
                        <option value=kind.as_str()>{kind.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if saving.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>"Saving..."</span>
                        }.into_view()
                    } else if form.editing_id.get().is_some() {
                        view! { <span>"Update"</span> }.into_view()
                    } else {
                        view! { <span>"Add"</span> }.into_view()
                    }}
                </button>

                // Cancel edit, back to create-mode defaults
                {move || {
                    form.editing_id.get().map(|_| view! {
                        <button
                            type="button"
                            on:click=move |_| form.reset()
                            class="px-4 py-3 rounded-lg bg-gray-200 dark:bg-gray-700
                                   hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors"
                        >
                            "Cancel"
                        </button>
                    })
                }}
            </div>
        </form>
    }
}
