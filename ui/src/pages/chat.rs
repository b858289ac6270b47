//! Public search page

use crate::api;
use crate::components::{Header, SubmitButton};
use crate::state::AppState;
use bionary_core::ChatSearch;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ask the agent about past club events
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let search = RwSignal::new(ChatSearch::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(query) = search.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::client(&state).chat(&query).await;
            search.update(|s| s.finish_submit(result));
        });
    };

    let loading = Signal::derive(move || search.with(|s| s.loading));
    let answer = move || search.with(|s| s.answer.clone());

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <div class="flex-1 flex flex-col items-center p-8">
                <h1 class="text-4xl font-bold text-blue-600 mb-2">"Bionary Search Agent"</h1>
                <p class="text-gray-600 mb-8">"Ask anything about past club events"</p>

                <div class="w-full max-w-2xl">
                    <form on:submit=on_submit class="flex gap-3 mb-6">
                        <input
                            type="text"
                            placeholder="e.g., What events covered AI?"
                            prop:value=move || search.with(|s| s.query.clone())
                            on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                            class="flex-1 px-4 py-3 rounded-lg bg-white border border-gray-300 shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                        <SubmitButton
                            loading=loading
                            label="Ask"
                            busy_label="Thinking…"
                            class="px-6 py-3"
                        />
                    </form>

                    <Show when=move || search.with(|s| !s.answer.is_empty())>
                        <div class="bg-white p-6 rounded-xl shadow-md border border-gray-200">
                            <h3 class="text-sm font-bold text-gray-500 mb-2 tracking-wide">
                                "AGENT RESPONSE"
                            </h3>
                            <div class="text-gray-800 whitespace-pre-wrap">{answer}</div>
                        </div>
                    </Show>
                </div>

                <div class="mt-12">
                    <a href="/admin" class="text-sm text-gray-500 hover:text-blue-600 underline">
                        "Go to Admin Dashboard"
                    </a>
                </div>
            </div>
        </div>
    }
}
