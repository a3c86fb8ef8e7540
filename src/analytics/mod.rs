//! Visitor Analytics
//!
//! Pure aggregation of visitor records into chart-ready metrics.

pub mod aggregate;

pub use aggregate::{
    aggregate, BracketCount, DashboardMetrics, DayVisits, Gender, GenderSlice, Visitor,
};
