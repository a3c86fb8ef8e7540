//! Filter Bar
//!
//! Store selector and quick date-range buttons. Both write into the
//! global filter signals; the dashboard fetch effect reacts to them.

use leptos::*;

use crate::state::global::{DateRange, GlobalState, STORES};

/// Store and period filters for the dashboard
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected_store = state.selected_store;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex flex-col md:flex-row gap-4 md:items-end justify-between">
                // Store selector
                <div class="flex-1">
                    <label class="block text-sm text-gray-400 mb-2">"Store"</label>
                    <select
                        on:change=move |ev| selected_store.set(event_target_value(&ev))
                        prop:value=move || selected_store.get()
                        class="w-full md:w-72 bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {STORES
                            .iter()
                            .map(|store| view! { <option value=store.id>{store.name}</option> })
                            .collect_view()}
                    </select>
                </div>

                // Quick range buttons
                <div class="flex items-center space-x-2">
                    <RangeButton label="Today" days=1 />
                    <RangeButton label="7D" days=7 />
                    <RangeButton label="30D" days=30 />
                </div>
            </div>
        </section>
    }
}

/// Date range selection button
#[component]
fn RangeButton(label: &'static str, days: i64) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let date_range = state.date_range;

    let is_active = create_memo(move |_| date_range.get().num_days() == days);

    view! {
        <button
            on:click=move |_| date_range.set(DateRange::last_days(days))
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}
