//! App Root Component
//!
//! Provides global state, runs the startup session restore and renders
//! the current screen.

use leptos::*;
use std::rc::Rc;

use crate::components::Toast;
use crate::pages::{Dashboard, ForgotPassword, Login, Register};
use crate::state::global::{provide_global_state, GlobalState, Screen, QUOTES};
use crate::state::BrowserStorage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state backed by localStorage
    provide_global_state(Rc::new(BrowserStorage));

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Startup: restore a persisted session and pick the daily quote
    state.restore_session();
    state.quote.set(pick_quote());

    // Mirror the dark-mode flag onto the document root
    let dark_mode = state.dark_mode;
    create_effect(move |_| {
        let dark = dark_mode.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    let screen = state.screen;

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white">
            {move || match screen.get() {
                Screen::Login => view! { <Login /> }.into_view(),
                Screen::Register => view! { <Register /> }.into_view(),
                Screen::ForgotPassword => view! { <ForgotPassword /> }.into_view(),
                Screen::Dashboard => view! { <Dashboard /> }.into_view(),
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Random daily quote
fn pick_quote() -> &'static str {
    let idx = (js_sys::Math::random() * QUOTES.len() as f64) as usize;
    QUOTES.get(idx).copied().unwrap_or(QUOTES[0])
}
