//! Loading Component
//!
//! Spinner and skeleton states.

use leptos::*;

/// Full-page loading state shown while the first fetch is in flight
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center">
            <div class="loading-spinner w-16 h-16 mb-4" />
            <p class="text-gray-400">"Loading data..."</p>
        </div>
    }
}

/// Skeleton loader for charts
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse">
            <div class="h-64 md:h-80 bg-gray-700 rounded-lg" />
        </div>
    }
}
