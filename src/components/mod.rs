//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod chat;
pub mod filters;
pub mod header;
pub mod loading;
pub mod metric_card;
pub mod toast;

pub use charts::{AgeBracketChart, GenderPieChart, VisitsBarChart};
pub use chat::ChatPanel;
pub use filters::FilterBar;
pub use header::DashboardHeader;
pub use loading::{ChartSkeleton, LoadingScreen};
pub use metric_card::MetricCard;
pub use toast::Toast;
