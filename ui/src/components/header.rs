//! Header component

use crate::state::AppState;
use bionary_core::views::admin;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    view! {
        <header class="bg-white border-b border-gray-200 h-16 sticky top-0 z-40">
            <div class="h-full max-w-5xl mx-auto px-4 flex items-center justify-between">
                <a href="/" class="hover:opacity-80 transition-opacity">
                    <h1 class="text-xl font-bold text-blue-600">"Bionary"</h1>
                    <p class="text-xs text-gray-500 -mt-0.5">"Club knowledge agent"</p>
                </a>

                <nav class="flex items-center gap-4 text-sm">
                    <a href="/" class="text-gray-600 hover:text-blue-600">"Search"</a>

                    {move || {
                        if state.signed_in() {
                            let navigate = navigate.clone();
                            view! {
                                <a href="/admin" class="text-gray-600 hover:text-blue-600">
                                    "Add Event"
                                </a>
                                <button
                                    on:click=move |_| {
                                        let route = admin::logout(&state);
                                        navigate(
                                            route.path(),
                                            NavigateOptions {
                                                replace: true,
                                                ..Default::default()
                                            },
                                        );
                                    }
                                    class="text-red-500 hover:underline"
                                >
                                    "Logout"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <a href="/login" class="text-gray-600 hover:text-blue-600">
                                    "Admin Login"
                                </a>
                            }
                            .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
