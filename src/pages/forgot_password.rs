//! Forgot Password Page
//!
//! Requests a reset link. The confirmation message never reveals
//! whether the account exists, and a missing backend endpoint is
//! treated the same as success.

use leptos::*;

use crate::api;
use crate::api::error::ApiResult;
use crate::state::global::{GlobalState, Screen};

/// Generic confirmation shown regardless of account existence
const CONFIRMATION: &str = "If an account exists, a reset link was sent.";

/// Map the reset-request outcome to what the user sees.
///
/// A backend-provided message wins on success; a 404 from the endpoint
/// itself still reads as the generic confirmation. Everything else is a
/// real error.
fn confirmation_message(result: ApiResult<Option<String>>) -> Result<String, String> {
    match result {
        Ok(message) => Ok(message.unwrap_or_else(|| CONFIRMATION.to_string())),
        Err(e) if e.is_not_found() => Ok(CONFIRMATION.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Forgot-password screen component
#[component]
pub fn ForgotPassword() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let address = email.get().trim().to_string();

        state_for_submit.auth_error.set(None);
        state_for_submit.auth_notice.set(None);
        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match confirmation_message(api::forgot_password(&address).await) {
                Ok(notice) => {
                    state_clone.auth_notice.set(Some(notice));
                    set_email.set(String::new());
                }
                Err(e) => {
                    state_clone.auth_error.set(Some(e));
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
                    <span class="text-4xl">"🔑"</span>
                    <h1 class="text-2xl font-bold mt-2">"Reset Password"</h1>
                    <p class="text-gray-400 mt-1">
                        "Enter your email and we'll send you a reset link"
                    </p>
                </div>

                {
                    let auth_notice = state.auth_notice;
                    move || {
                        auth_notice.get().map(|msg| view! {
                            <p class="mb-4 text-sm text-green-500 bg-green-500/10 rounded-lg px-4 py-3">
                                {msg}
                            </p>
                        })
                    }
                }

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
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                               transition-colors"
                    >
                        {move || if submitting.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                </form>

                <div class="mt-6 text-center text-sm">
                    <button
                        on:click=move |_| state_for_login.navigate(Screen::Login)
                        class="text-primary-500 hover:text-primary-400 transition-colors"
                    >
                        "Back to sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;

    #[test]
    fn test_success_uses_backend_message() {
        let result = confirmation_message(Ok(Some("Reset link sent to inbox".to_string())));
        assert_eq!(result, Ok("Reset link sent to inbox".to_string()));
    }

    #[test]
    fn test_success_without_message_is_generic() {
        assert_eq!(confirmation_message(Ok(None)), Ok(CONFIRMATION.to_string()));
    }

    #[test]
    fn test_missing_endpoint_reads_as_confirmation() {
        assert_eq!(
            confirmation_message(Err(ApiError::EndpointNotFound)),
            Ok(CONFIRMATION.to_string())
        );
        // A JSON 404 counts too
        assert_eq!(
            confirmation_message(Err(ApiError::Rejected {
                status: 404,
                message: "no such route".to_string()
            })),
            Ok(CONFIRMATION.to_string())
        );
    }

    #[test]
    fn test_other_errors_surface() {
        let result = confirmation_message(Err(ApiError::Network("offline".to_string())));
        assert_eq!(result, Err("Network error: offline".to_string()));

        let result = confirmation_message(Err(ApiError::ServerError));
        assert_eq!(result, Err("Internal server error (500)".to_string()));
    }
}
