//! Dashboard Header
//!
//! Branded top bar with the sign-out action.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::global::GlobalState;

/// Header bar shown above the dashboard
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        state.authenticated.set(false);
        state.metrics.set(None);
        navigate("/login", Default::default());
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <div class="bg-primary-600 h-12 w-12 rounded-lg flex items-center justify-center font-bold text-xl">
                        "F"
                    </div>
                    <div>
                        <h1 class="text-2xl font-bold">"Footfall Analytics"</h1>
                        <p class="text-sm text-gray-400">"Store visitor monitoring"</p>
                    </div>
                </div>

                <button
                    on:click=on_logout
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
