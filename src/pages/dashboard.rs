//! Dashboard Page
//!
//! Filterable visitor metrics: headline cards, charts, chat panel.

use leptos::*;
use leptos_router::Redirect;

use crate::analytics;
use crate::api;
use crate::components::metric_card::{format_count, CardVariant, Trend};
use crate::components::{
    AgeBracketChart, ChartSkeleton, ChatPanel, DashboardHeader, FilterBar, GenderPieChart,
    LoadingScreen, MetricCard, VisitsBarChart,
};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;
    let loading = state.loading;
    let metrics = state.metrics;

    // Refetch and re-aggregate whenever the store or range changes
    let state_for_effect = state.clone();
    create_effect(move |_| {
        // Nothing to fetch behind the login screen
        if !state_for_effect.authenticated.get() {
            return;
        }

        let store = state_for_effect.selected_store.get();
        let range = state_for_effect.date_range.get();

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let visitors = match api::fetch_visitors(&store, &range).await {
                Ok(visitors) => visitors,
                Err(e) => {
                    // A failed fetch is not fatal: render a zeroed view
                    log::error!("Failed to fetch visitors: {}", e);
                    Vec::new()
                }
            };

            state
                .metrics
                .set(Some(analytics::aggregate(&visitors, &store, &range)));
            state.loading.set(false);
        });
    });

    view! {
        // Not signed in: everything here is behind the login form
        {move || (!authenticated.get()).then(|| view! { <Redirect path="/login" /> })}

        <div class="min-h-screen bg-gray-900 text-white">
            <DashboardHeader />

            <main class="container mx-auto px-6 py-8 space-y-8">
                {move || {
                    if loading.get() && metrics.get().is_none() {
                        view! { <LoadingScreen /> }.into_view()
                    } else {
                        view! { <DashboardBody /> }.into_view()
                    }
                }}
            </main>

            <ChatPanel />
        </div>
    }
}

/// Filter bar, metric cards, and charts
#[component]
fn DashboardBody() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let metrics = state.metrics;
    let date_range = state.date_range;

    view! {
        // Page header
        <div class="flex items-center justify-between">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Visitor traffic at a glance"</p>
            </div>

            <div class="text-sm text-gray-400">{move || date_range.get().label}</div>
        </div>

        <FilterBar />

        // Headline metrics
        <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <MetricCard
                title="Total Visitors"
                value=Signal::derive(move || {
                    metrics
                        .get()
                        .map(|m| format_count(m.total_visitors))
                        .unwrap_or_else(|| "—".to_string())
                })
                icon="👥"
                trend=Trend { value: 12.5, positive: true }
                variant=CardVariant::Primary
            />
            <MetricCard
                title="Total Tracked"
                value=Signal::derive(move || {
                    metrics
                        .get()
                        .map(|m| format_count(m.total_tracked))
                        .unwrap_or_else(|| "—".to_string())
                })
                icon="📈"
                trend=Trend { value: 8.3, positive: true }
                variant=CardVariant::Secondary
            />
            <MetricCard
                title="Passers-by"
                value=Signal::derive(move || {
                    metrics
                        .get()
                        .map(|m| format_count(m.total_passersby))
                        .unwrap_or_else(|| "—".to_string())
                })
                icon="🚶"
                trend=Trend { value: 5.7, positive: false }
                variant=CardVariant::Accent
            />
            <MetricCard
                title="Average Age"
                value=Signal::derive(move || {
                    metrics
                        .get()
                        .map(|m| format!("{:.0} yrs", m.average_age))
                        .unwrap_or_else(|| "—".to_string())
                })
                icon="📅"
            />
        </section>

        // Charts
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Visits per Day"</h2>
                {move || {
                    if metrics.get().is_some() {
                        view! { <VisitsBarChart /> }.into_view()
                    } else {
                        view! { <ChartSkeleton /> }.into_view()
                    }
                }}
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Gender Split"</h2>
                {move || {
                    if metrics.get().is_some() {
                        view! { <GenderPieChart /> }.into_view()
                    } else {
                        view! { <ChartSkeleton /> }.into_view()
                    }
                }}
            </section>
        </div>

        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Age Brackets"</h2>
            {move || {
                if metrics.get().is_some() {
                    view! { <AgeBracketChart /> }.into_view()
                } else {
                    view! { <ChartSkeleton /> }.into_view()
                }
            }}
        </section>
    }
}
