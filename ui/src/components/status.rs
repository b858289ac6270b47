//! Success and error banners

use bionary_core::Status;
use leptos::prelude::*;

/// Banner for the latest outcome; renders nothing while `status` is `None`
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<Option<Status>>) -> impl IntoView {
    move || {
        status.get().map(|status| {
            let colors = if status.is_success() {
                "bg-green-100 text-green-700 border-green-200"
            } else {
                "bg-red-100 text-red-700 border-red-200"
            };
            view! {
                <div role="status" class=format!("p-4 mb-6 rounded-md border text-sm {}", colors)>
                    {status.message}
                </div>
            }
        })
    }
}
