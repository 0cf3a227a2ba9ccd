//! Register Page
//!
//! Account creation with a free-form contact field that becomes either
//! an email or a phone number in the payload.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, Screen};

/// Split the free-form contact field into the register payload's
/// email/phone slots. A contact containing "@" is an email; anything
/// else non-empty is a phone number.
fn split_contact(contact: &str) -> (Option<String>, Option<String>) {
    let trimmed = contact.trim();
    if trimmed.is_empty() {
        (None, None)
    } else if trimmed.contains('@') {
        (Some(trimmed.to_string()), None)
    } else {
        (None, Some(trimmed.to_string()))
    }
}

/// Register screen component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (contact, set_contact) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        let (email, phone) = split_contact(&contact.get());
        let pass = password.get();

        state_for_submit.auth_error.set(None);
        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::register(&name, email.as_deref(), phone.as_deref(), &pass).await {
                Ok(auth) => {
                    state_clone.complete_auth(&auth.token, auth.user);
                    set_username.set(String::new());
                    set_contact.set(String::new());
                    set_password.set(String::new());
                }
                Err(e) => {
                    state_clone.auth_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let state_for_login = state.clone();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <span class="text-4xl">"💊"</span>
                    <h1 class="text-2xl font-bold mt-2">"Create Account"</h1>
                    <p class="text-gray-400 mt-1">"Start tracking your medicines"</p>
                </div>

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
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">
                            "Email or phone (optional)"
                        </label>
                        <input
                            type="text"
                            prop:value=move || contact.get()
                            on:input=move |ev| set_contact.set(event_target_value(&ev))
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
                                <span>"Creating account..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign Up"</span>
                            }.into_view()
                        }}
                    </button>
                </form>

                <div class="mt-6 text-center text-sm">
                    <button
                        on:click=move |_| state_for_login.navigate(Screen::Login)
                        class="text-primary-500 hover:text-primary-400 transition-colors"
                    >
                        "Already have an account? Sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_with_at_is_email() {
        assert_eq!(
            split_contact("alice@example.com"),
            (Some("alice@example.com".to_string()), None)
        );
        assert_eq!(
            split_contact("  alice@example.com  "),
            (Some("alice@example.com".to_string()), None)
        );
    }

    #[test]
    fn test_contact_without_at_is_phone() {
        assert_eq!(
            split_contact("555-0134"),
            (None, Some("555-0134".to_string()))
        );
    }

    #[test]
    fn test_empty_contact_is_neither() {
        assert_eq!(split_contact(""), (None, None));
        assert_eq!(split_contact("   "), (None, None));
    }
}
