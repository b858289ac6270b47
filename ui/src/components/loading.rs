//! Loading indicators

use leptos::prelude::*;

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(#[prop(default = "w-5 h-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Submit button that shows a spinner and `busy_label` while `loading`
#[component]
pub fn SubmitButton(
    #[prop(into)] loading: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || loading.get()
            class=format!(
                "flex items-center justify-center gap-2 font-semibold text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 rounded-lg transition {}",
                class,
            )
        >
            <Show when=move || loading.get()>
                <LoadingSpinner size="w-4 h-4" />
            </Show>
            {move || if loading.get() { busy_label } else { label }}
        </button>
    }
}
