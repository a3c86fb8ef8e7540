//! Metrics Aggregator
//!
//! Turns raw visitor records into the aggregate the dashboard renders.
//! Everything here is synchronous arithmetic on in-memory data; an empty
//! input produces an all-zero aggregate, never an error.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

use crate::state::global::{DateRange, ALL_STORES};

/// Recognized gender values; anything else in a payload maps to `Unknown`
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from(value.as_str())
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

/// A single tracked-person observation
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Visitor {
    /// Age in years; non-positive values mean the age is unknown
    pub age: i32,
    pub gender: Gender,
    /// Interaction count; zero marks a passer-by
    pub track_count: u32,
    pub store_id: String,
    pub seen_at: NaiveDate,
}

impl Visitor {
    /// A record counts as a visit once it has at least one interaction
    pub fn is_visit(&self) -> bool {
        self.track_count > 0
    }
}

/// One of the five fixed age brackets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AgeBracket {
    label: &'static str,
    min: i32,
    /// Inclusive upper bound; `i32::MAX` for the open-ended bracket
    max: i32,
}

impl AgeBracket {
    fn contains(&self, age: i32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Fixed histogram brackets; under-18 records fall in no bracket
const AGE_BRACKETS: [AgeBracket; 5] = [
    AgeBracket { label: "18-25", min: 18, max: 25 },
    AgeBracket { label: "26-35", min: 26, max: 35 },
    AgeBracket { label: "36-45", min: 36, max: 45 },
    AgeBracket { label: "46-60", min: 46, max: 60 },
    AgeBracket { label: "60+", min: 61, max: i32::MAX },
];

/// One slice of the gender pie
#[derive(Clone, Debug, PartialEq)]
pub struct GenderSlice {
    pub label: &'static str,
    pub percent: f64,
}

/// One entry of the per-day visit series
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVisits {
    pub label: String,
    pub visits: u64,
}

/// One entry of the age-bracket histogram
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketCount {
    pub label: &'static str,
    pub count: u64,
}

/// Chart-ready aggregate over a filtered set of visitor records
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardMetrics {
    /// Records that converted into a visit
    pub total_visitors: u64,
    /// All records that survived the filter
    pub total_tracked: u64,
    /// Records that never interacted
    pub total_passersby: u64,
    /// Mean over strictly positive ages, 0 when none qualify
    pub average_age: f64,
    /// Two slices summing to 100, or empty without recognized genders
    pub gender_split: Vec<GenderSlice>,
    /// One entry per day of the selected range
    pub visits_by_day: Vec<DayVisits>,
    /// Always five entries, one per fixed bracket
    pub age_brackets: Vec<BracketCount>,
}

/// Base volume for the placeholder day series
const BASE_DAILY_VISITS: f64 = 4200.0;

/// Relative weekday traffic profile; weekends run hottest
fn weekday_factor(day: Weekday) -> f64 {
    match day {
        Weekday::Mon => 1.0,
        Weekday::Tue => 1.2,
        Weekday::Wed => 1.15,
        Weekday::Thu => 1.5,
        Weekday::Fri => 1.75,
        Weekday::Sat => 2.1,
        Weekday::Sun => 1.95,
    }
}

/// Placeholder per-day series: the base volume scaled by the weekday
/// profile, zeroed when nothing survived the filter. One entry per day
/// of the range, inclusive.
fn day_series(range: &DateRange, has_data: bool) -> Vec<DayVisits> {
    let short_range = range.num_days() <= 7;

    range
        .days()
        .map(|date| {
            let visits = if has_data {
                (BASE_DAILY_VISITS * weekday_factor(date.weekday())).round() as u64
            } else {
                0
            };
            let label = if short_range {
                date.format("%a").to_string()
            } else {
                date.format("%m/%d").to_string()
            };
            DayVisits { label, visits }
        })
        .collect()
}

/// Aggregate visitor records into dashboard metrics.
///
/// Records are filtered by store (`ALL_STORES` is a pass-through) and by
/// the inclusive date range before any arithmetic runs.
pub fn aggregate(visitors: &[Visitor], store: &str, range: &DateRange) -> DashboardMetrics {
    let filtered: Vec<&Visitor> = visitors
        .iter()
        .filter(|v| store == ALL_STORES || v.store_id == store)
        .filter(|v| v.seen_at >= range.from && v.seen_at <= range.to)
        .collect();

    let total_tracked = filtered.len() as u64;
    let total_visitors = filtered.iter().filter(|v| v.is_visit()).count() as u64;
    let total_passersby = total_tracked - total_visitors;

    // Records without a usable age stay out of the mean
    let ages: Vec<f64> = filtered
        .iter()
        .filter(|v| v.age > 0)
        .map(|v| v.age as f64)
        .collect();
    let average_age = if ages.is_empty() {
        0.0
    } else {
        ages.iter().sum::<f64>() / ages.len() as f64
    };

    let male = filtered.iter().filter(|v| v.gender == Gender::Male).count();
    let female = filtered
        .iter()
        .filter(|v| v.gender == Gender::Female)
        .count();
    let recognized = male + female;
    // The female share is the complement, so the pair sums to exactly 100
    let gender_split = if recognized == 0 {
        Vec::new()
    } else {
        let male_pct = male as f64 / recognized as f64 * 100.0;
        vec![
            GenderSlice { label: "Male", percent: male_pct },
            GenderSlice { label: "Female", percent: 100.0 - male_pct },
        ]
    };

    let age_brackets = AGE_BRACKETS
        .iter()
        .map(|bracket| BracketCount {
            label: bracket.label,
            count: filtered.iter().filter(|v| bracket.contains(v.age)).count() as u64,
        })
        .collect();

    DashboardMetrics {
        total_visitors,
        total_tracked,
        total_passersby,
        average_age,
        gender_split,
        visits_by_day: day_series(range, total_tracked > 0),
        age_brackets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(age: i32, gender: Gender, track_count: u32) -> Visitor {
        Visitor {
            age,
            gender,
            track_count,
            store_id: "downtown".to_string(),
            seen_at: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        }
    }

    fn range() -> DateRange {
        DateRange {
            from: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
            label: "Last 7 days".to_string(),
        }
    }

    fn one_day_range() -> DateRange {
        DateRange {
            from: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            label: "Today".to_string(),
        }
    }

    #[test]
    fn test_gender_percentages_sum_to_100() {
        let visitors = vec![
            visitor(30, Gender::Male, 1),
            visitor(41, Gender::Male, 2),
            visitor(25, Gender::Female, 1),
            visitor(52, Gender::Unknown, 1),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.gender_split.len(), 2);

        let total: f64 = metrics.gender_split.iter().map(|s| s.percent).sum();
        assert_eq!(total, 100.0);

        // Unknown stays out of the denominator: 2 of 3 recognized are male
        let male = &metrics.gender_split[0];
        assert_eq!(male.label, "Male");
        assert!((male.percent - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_gender_split_empty_without_recognized_genders() {
        let visitors = vec![
            visitor(30, Gender::Unknown, 1),
            visitor(44, Gender::Unknown, 0),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert!(metrics.gender_split.is_empty());
    }

    #[test]
    fn test_bracket_counts_sum_to_adult_count() {
        let visitors = vec![
            visitor(17, Gender::Male, 1), // under 18, no bracket
            visitor(18, Gender::Female, 1),
            visitor(25, Gender::Male, 1),
            visitor(26, Gender::Male, 1),
            visitor(45, Gender::Female, 1),
            visitor(46, Gender::Male, 1),
            visitor(60, Gender::Female, 1),
            visitor(61, Gender::Male, 1),
            visitor(88, Gender::Female, 1),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.age_brackets.len(), 5);

        let adults = visitors.iter().filter(|v| v.age >= 18).count() as u64;
        let bracketed: u64 = metrics.age_brackets.iter().map(|b| b.count).sum();
        assert_eq!(bracketed, adults);
    }

    #[test]
    fn test_bracket_boundaries_are_inclusive() {
        let visitors = vec![
            visitor(25, Gender::Male, 1),
            visitor(60, Gender::Male, 1),
            visitor(61, Gender::Male, 1),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        let by_label = |label: &str| {
            metrics
                .age_brackets
                .iter()
                .find(|b| b.label == label)
                .map(|b| b.count)
                .unwrap_or(0)
        };

        assert_eq!(by_label("18-25"), 1);
        assert_eq!(by_label("46-60"), 1);
        assert_eq!(by_label("60+"), 1);
    }

    #[test]
    fn test_average_age_ignores_non_positive_ages() {
        let visitors = vec![
            visitor(20, Gender::Male, 1),
            visitor(40, Gender::Female, 1),
            visitor(0, Gender::Male, 1),
            visitor(-3, Gender::Female, 1),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.average_age, 30.0);
    }

    #[test]
    fn test_average_age_zero_without_usable_ages() {
        let visitors = vec![visitor(0, Gender::Male, 1), visitor(-1, Gender::Female, 1)];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.average_age, 0.0);
    }

    #[test]
    fn test_visitor_passerby_split() {
        let visitors = vec![
            visitor(30, Gender::Male, 3),
            visitor(31, Gender::Female, 1),
            visitor(32, Gender::Male, 0),
        ];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.total_tracked, 3);
        assert_eq!(metrics.total_visitors, 2);
        assert_eq!(metrics.total_passersby, 1);
    }

    #[test]
    fn test_store_filter() {
        let mut other = visitor(50, Gender::Female, 1);
        other.store_id = "harbor".to_string();
        let visitors = vec![visitor(30, Gender::Male, 1), other];

        let all = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(all.total_tracked, 2);

        let harbor = aggregate(&visitors, "harbor", &range());
        assert_eq!(harbor.total_tracked, 1);
        assert_eq!(harbor.average_age, 50.0);
    }

    #[test]
    fn test_date_filter_excludes_out_of_range() {
        let mut stale = visitor(30, Gender::Male, 1);
        stale.seen_at = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let visitors = vec![visitor(40, Gender::Female, 1), stale];

        let metrics = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(metrics.total_tracked, 1);
        assert_eq!(metrics.average_age, 40.0);
    }

    #[test]
    fn test_day_series_length_follows_range() {
        let visitors = vec![visitor(30, Gender::Male, 1)];

        let week = aggregate(&visitors, ALL_STORES, &range());
        assert_eq!(week.visits_by_day.len(), 7);

        let day = aggregate(&visitors, ALL_STORES, &one_day_range());
        assert_eq!(day.visits_by_day.len(), 1);
    }

    #[test]
    fn test_day_series_zeroed_without_data() {
        let metrics = aggregate(&[], ALL_STORES, &range());
        assert_eq!(metrics.visits_by_day.len(), 7);
        assert!(metrics.visits_by_day.iter().all(|d| d.visits == 0));
    }

    #[test]
    fn test_day_series_scales_base_by_weekday() {
        let visitors = vec![visitor(30, Gender::Male, 1)];
        let metrics = aggregate(&visitors, ALL_STORES, &range());

        // 2026-03-02 is a Monday, the profile baseline
        assert_eq!(metrics.visits_by_day[0].label, "Mon");
        assert_eq!(metrics.visits_by_day[0].visits, 4200);
        // Saturday runs at 2.1x
        assert_eq!(metrics.visits_by_day[5].visits, 8820);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let metrics = aggregate(&[], ALL_STORES, &range());
        assert_eq!(metrics.total_tracked, 0);
        assert_eq!(metrics.total_visitors, 0);
        assert_eq!(metrics.total_passersby, 0);
        assert_eq!(metrics.average_age, 0.0);
        assert!(metrics.gender_split.is_empty());
        assert!(metrics.age_brackets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_gender_parses_loosely() {
        assert_eq!(Gender::from("male"), Gender::Male);
        assert_eq!(Gender::from("F"), Gender::Female);
        assert_eq!(Gender::from("nonbinary"), Gender::Unknown);
        assert_eq!(Gender::from(""), Gender::Unknown);
    }
}
