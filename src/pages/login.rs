//! Login Page
//!
//! Identifier + password form; entry point of the app when no session
//! is persisted.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, Screen};

/// Login screen component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (identifier, set_identifier) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username = identifier.get().trim().to_string();
        let pass = password.get();

        state_for_submit.auth_error.set(None);
        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::login(&username, &pass).await {
                Ok(auth) => {
                    state_clone.complete_auth(&auth.token, auth.user);
                    // Clear the form only on success
                    set_identifier.set(String::new());
                    set_password.set(String::new());
                }
                Err(e) => {
                    state_clone.auth_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let state_for_register = state.clone();
    let state_for_forgot = state.clone();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <span class="text-4xl">"💊"</span>
                    <h1 class="text-2xl font-bold mt-2">"MediTrack"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to manage your medicines"</p>
                </div>

                // Inline error from a failed attempt
                {
                    let auth_error = state.auth_error;
                    move || {
                        auth_error.get().map(|msg| view! {
                            <p class="mb-4 text-sm text-red-500 bg-red-500/10 rounded-lg px-4 py-3">
                                {msg}
                            </p>
                        })
                    }
                }

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || identifier.get()
                            on:input=move |ev| set_identifier.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign In"</span>
                            }.into_view()
                        }}
                    </button>
                </form>

                <div class="mt-6 flex items-center justify-between text-sm">
                    <button
                        on:click=move |_| state_for_forgot.navigate(Screen::ForgotPassword)
                        class="text-primary-500 hover:text-primary-400 transition-colors"
                    >
                        "Forgot password?"
                    </button>
                    <button
                        on:click=move |_| state_for_register.navigate(Screen::Register)
                        class="text-primary-500 hover:text-primary-400 transition-colors"
                    >
                        "Create an account"
                    </button>
                </div>
            </div>
        </div>
    }
}
