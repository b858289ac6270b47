//! Admin login page

use crate::api;
use crate::components::{Header, StatusBanner, SubmitButton};
use crate::state::AppState;
use bionary_core::views::login::redirect_if_signed_in;
use bionary_core::{LoginForm, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::new());

    // Redirect if already logged in
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        state.token.track();
        if let Some(route) = redirect_if_signed_in(&state) {
            navigate_for_redirect(route.path(), Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(credentials) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = api::client(&state).login(&credentials).await;
            let next = form
                .try_update(|f| f.finish_submit(result, &state))
                .flatten();
            if let Some(route) = next {
                navigate(route.path(), Default::default());
            }
        });
    };

    let error = Signal::derive(move || form.with(|f| f.error.clone().map(Status::error)));
    let loading = Signal::derive(move || form.with(|f| f.loading));

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <div class="flex-1 flex items-center justify-center px-4">
                <div class="w-full max-w-md bg-white rounded-2xl shadow-2xl p-8">
                    <h1 class="text-3xl font-extrabold text-gray-800 mb-2">"Admin Login"</h1>
                    <p class="text-sm text-gray-500 mb-6">
                        "Restricted access · Authorized users only"
                    </p>

                    <StatusBanner status=error />

                    <form on:submit=on_submit class="space-y-4">
                        <input
                            type="text"
                            placeholder="Username"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                        <SubmitButton
                            loading=loading
                            label="Login"
                            busy_label="Signing in…"
                            class="w-full py-3"
                        />
                    </form>
                </div>
            </div>
        </div>
    }
}
