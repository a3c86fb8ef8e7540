//! Toast Notification Component
//!
//! Shows success and error messages fed by the global signals.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastVariant::Success => ("✓", "bg-green-600"),
            ToastVariant::Error => ("✕", "bg-red-600"),
        }
    }
}

/// Toast notification container; sits bottom-left so the chat button
/// keeps the bottom-right corner
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-6 left-4 z-50 space-y-2">
            {move || {
                success
                    .get()
                    .map(|msg| view! { <ToastMessage message=msg variant=ToastVariant::Success /> })
            }}

            {move || {
                error
                    .get()
                    .map(|msg| view! { <ToastMessage message=msg variant=ToastVariant::Error /> })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(#[prop(into)] message: String, variant: ToastVariant) -> impl IntoView {
    let (icon, bg_class) = variant.style();

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
