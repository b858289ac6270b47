//! Admin page: add a new event

use crate::api;
use crate::components::{Header, StatusBanner, SubmitButton};
use crate::state::AppState;
use bionary_core::views::admin;
use bionary_core::{AdminForm, EventField, EventMode, EventSection, InputKind, SubmitStart};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white border border-gray-300 \
                           focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Guarded admin page. Visitors without a session are sent to the login page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let redirect = Memo::new(move |_| {
        state.token.track();
        admin::guard(&state)
    });

    move || match redirect.get() {
        Some(route) => view! { <Redirect path=route.path() /> }.into_any(),
        None => view! {
            <div class="min-h-screen flex flex-col">
                <Header />
                <EventForm />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn EventForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let form = RwSignal::new(AdminForm::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(|f| f.begin_submit(&state)) {
            Some(SubmitStart::Send(submission)) => submission,
            Some(SubmitStart::Redirect(route)) => {
                navigate(
                    route.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
                return;
            }
            Some(SubmitStart::InFlight) | None => return,
        };

        spawn_local(async move {
            let result = api::client(&state)
                .add_event(&submission.event, &submission.token)
                .await;
            form.update(|f| f.finish_submit(&submission, result));
        });
    };

    let status = Signal::derive(move || form.with(|f| f.status.clone()));
    let loading = Signal::derive(move || form.with(|f| f.loading));

    view! {
        <div class="p-8">
            <div class="max-w-5xl mx-auto bg-white rounded-xl shadow-lg p-8">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-800">"Add New Event"</h1>
                    <a href="/" class="text-blue-600 hover:underline">"Back to Chat"</a>
                </div>

                <StatusBanner status=status />

                <form on:submit=on_submit class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {EventSection::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <div class="md:col-span-2 border-b pb-2 mt-4 text-lg font-semibold">
                                    {section.title()}
                                </div>
                                {section.fields().map(|field| field_input(form, field)).collect_view()}
                            }
                        })
                        .collect_view()}

                    <SubmitButton
                        loading=loading
                        label="Submit Event"
                        busy_label="Saving…"
                        class="md:col-span-2 py-4"
                    />
                </form>
            </div>
        </div>
    }
}

/// One bound input, rendered according to the field's kind
fn field_input(form: RwSignal<AdminForm>, field: EventField) -> AnyView {
    let name = field.name();
    let value = move || form.with(|f| f.event.get(field).to_string());
    let class = if field.full_width() {
        format!("{} md:col-span-2", INPUT_CLASS)
    } else {
        INPUT_CLASS.to_string()
    };

    match field.input_kind() {
        InputKind::Select => view! {
            <select
                name=name
                class=class
                prop:value=value
                on:change=move |ev| set_named(form, name, &ev)
            >
                {EventMode::ALL
                    .into_iter()
                    .map(|mode| view! { <option value=mode.as_str()>{mode.as_str()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        InputKind::TextArea => {
            let height = if field == EventField::Description { "h-32" } else { "h-20" };
            view! {
                <textarea
                    name=name
                    placeholder=field.placeholder()
                    required=field.is_required()
                    class=format!("{} {}", class, height)
                    prop:value=value
                    on:input=move |ev| set_named(form, name, &ev)
                ></textarea>
            }
            .into_any()
        }
        kind => {
            let input_type = match kind {
                InputKind::Date => "date",
                InputKind::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    name=name
                    placeholder=field.placeholder()
                    required=field.is_required()
                    class=class
                    prop:value=value
                    on:input=move |ev| set_named(form, name, &ev)
                />
            }
            .into_any()
        }
    }
}

/// Change handler keyed by the input's `name` attribute
fn set_named(form: RwSignal<AdminForm>, name: &'static str, ev: &web_sys::Event) {
    let value = event_target_value(ev);
    form.update(|f| {
        f.set_named(name, value);
    });
}
