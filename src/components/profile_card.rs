//! Profile Card Component
//!
//! Avatar picker plus the account details form backed by the profile
//! endpoints.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, AVATARS};
use crate::state::SessionStore;

/// Profile card component
#[component]
pub fn ProfileCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let user = state.user.get_untracked();
    let (choice, set_choice) = create_signal(state.avatar.get_untracked());
    let (name, set_name) = create_signal(
        user.as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = create_signal(
        user.as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let state_for_avatar = state.clone();
    let save_avatar = move |_| {
        state_for_avatar.save_avatar(&choice.get());
        state_for_avatar.show_success("Profile saved!");
    };

    let state_for_profile = state.clone();
    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = state_for_profile.store.token() else {
            return;
        };

        let display_name = name.get().trim().to_string();
        let address = email.get().trim().to_string();

        set_saving.set(true);

        let state_clone = state_for_profile.clone();
        spawn_local(async move {
            let name_arg = (!display_name.is_empty()).then_some(display_name);
            let email_arg = (!address.is_empty()).then_some(address);

            match api::update_profile(&token, name_arg.as_deref(), email_arg.as_deref()).await {
                Ok(user) => {
                    state_clone.update_user(user);
                    state_clone.show_success("Profile saved!");
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

    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    view! {
        <div class="space-y-6">
            // Account summary
            <div class="flex items-center space-x-3">
                <span class="text-4xl">{move || choice.get()}</span>
                <div>
                    <p class="font-semibold">{username}</p>
                    <p class="text-sm text-gray-400">
                        {move || email.get()}
                    </p>
                </div>
            </div>

            // Avatar picker
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Avatar"</label>
                <div class="flex flex-wrap gap-2">
                    {AVATARS.into_iter().map(|avatar| {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| set_choice.set(avatar.to_string())
                                class=move || {
                                    let base = "text-2xl p-2 rounded-lg transition-colors";
                                    if choice.get() == avatar {
                                        format!("{} bg-primary-600/20 ring-2 ring-primary-500", base)
                                    } else {
                                        format!("{} bg-gray-100 dark:bg-gray-700 \
                                                 hover:bg-gray-200 dark:hover:bg-gray-600", base)
                                    }
                                }
                            >
                                {avatar}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <button
                    on:click=save_avatar
                    class="mt-3 px-4 py-2 text-sm rounded-lg bg-primary-600 hover:bg-primary-700
                           text-white font-medium transition-colors"
                >
                    "Save Avatar"
                </button>
            </div>

            // Account details
            <form on:submit=save_profile class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Display name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-4 py-2 text-sm rounded-lg bg-primary-600 hover:bg-primary-700
                           disabled:bg-gray-600 text-white font-medium transition-colors"
                >
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </div>
    }
}
