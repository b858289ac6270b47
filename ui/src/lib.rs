//! Bionary web client
//!
//! Three pages: a public search page that asks the club agent about past
//! events, an admin login page, and a guarded admin page for adding events.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{admin::AdminPage, chat::ChatPage, login::LoginPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title text="Bionary Search Agent" />
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ChatPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Back to Search"
                </a>
            </div>
        </div>
    }
}
