//! Header Component
//!
//! Dashboard chrome: brand, daily quote, dark-mode toggle, avatar and
//! logout.

use leptos::*;

use crate::state::global::GlobalState;

/// Dashboard header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_logout = state.clone();
    let on_logout = move |_| {
        state_for_logout.logout();
    };

    let state_for_toggle = state.clone();
    let on_toggle = move |_| {
        state_for_toggle.toggle_dark_mode();
    };

    let user = state.user;
    let avatar = state.avatar;
    let dark_mode = state.dark_mode;
    let quote = state.quote;

    view! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💊"</span>
                        <span class="text-xl font-bold">"MediTrack"</span>
                    </div>

                    // Daily quote
                    <p class="hidden md:block text-sm text-gray-400 italic">
                        {move || quote.get()}
                    </p>

                    <div class="flex items-center space-x-4">
                        // Dark-mode toggle
                        <button
                            on:click=on_toggle
                            class="text-xl p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700
                                   transition-colors"
                        >
                            {move || if dark_mode.get() { "☀️" } else { "🌙" }}
                        </button>

                        // Avatar and username
                        <div class="flex items-center space-x-2">
                            <span class="text-2xl">{move || avatar.get()}</span>
                            <span class="text-sm font-medium">
                                {move || {
                                    user.get().map(|u| u.username).unwrap_or_default()
                                }}
                            </span>
                        </div>

                        <button
                            on:click=on_logout
                            class="px-3 py-2 text-sm rounded-lg bg-gray-100 dark:bg-gray-700
                                   hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
