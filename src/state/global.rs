//! Global Application State
//!
//! Reactive state management using Leptos signals.

use chrono::{Duration, Local, NaiveDate};
use leptos::*;

use crate::analytics::DashboardMetrics;

/// A store that feeds visitor records into the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
}

/// Sentinel store id meaning "no store filter"
pub const ALL_STORES: &str = "all";

/// Fixed store catalog; there is no store management UI
pub const STORES: [Store; 6] = [
    Store { id: ALL_STORES, name: "All Stores" },
    Store { id: "downtown", name: "Downtown Market" },
    Store { id: "riverside", name: "Riverside Plaza" },
    Store { id: "northgate", name: "North Gate" },
    Store { id: "eastside", name: "Eastside Depot" },
    Store { id: "harbor", name: "Harbor Point" },
];

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Whether the login form was submitted successfully
    pub authenticated: RwSignal<bool>,
    /// Selected store id; `ALL_STORES` disables the store filter
    pub selected_store: RwSignal<String>,
    /// Selected date range for the dashboard
    pub date_range: RwSignal<DateRange>,
    /// Latest aggregated metrics, `None` until the first fetch settles
    pub metrics: RwSignal<Option<DashboardMetrics>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Inclusive date range selected on the filter bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub label: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::last_days(7)
    }
}

impl DateRange {
    /// Range covering the last `days` days, today included
    pub fn last_days(days: i64) -> Self {
        let to = Local::now().date_naive();
        let from = to - Duration::days(days - 1);
        Self {
            from,
            to,
            label: if days == 1 {
                "Today".to_string()
            } else {
                format!("Last {} days", days)
            },
        }
    }

    /// Number of days covered, inclusive on both ends
    pub fn num_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Iterate every day of the range in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        authenticated: create_rw_signal(false),
        selected_store: create_rw_signal(ALL_STORES.to_string()),
        date_range: create_rw_signal(DateRange::default()),
        metrics: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success = self.success;
        gloo_timers::callback::Timeout::new(3_000, move || {
            success.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error = self.error;
        gloo_timers::callback::Timeout::new(5_000, move || {
            error.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_default() {
        let range = DateRange::default();
        assert_eq!(range.num_days(), 7);
        assert_eq!(range.label, "Last 7 days");
    }

    #[test]
    fn test_date_range_single_day() {
        let range = DateRange::last_days(1);
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.from, range.to);
        assert_eq!(range.label, "Today");
    }

    #[test]
    fn test_date_range_last_days() {
        let range = DateRange::last_days(30);
        assert_eq!(range.num_days(), 30);
        assert_eq!(range.label, "Last 30 days");
    }

    #[test]
    fn test_days_iterator_covers_range() {
        let range = DateRange::last_days(7);
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&range.from));
        assert_eq!(days.last(), Some(&range.to));
    }

    #[test]
    fn test_store_catalog_has_all_sentinel() {
        assert_eq!(STORES[0].id, ALL_STORES);
        assert!(STORES.iter().skip(1).all(|s| s.id != ALL_STORES));
    }
}
