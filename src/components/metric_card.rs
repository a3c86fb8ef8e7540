//! Metric Card Component
//!
//! Displays a single headline metric with an optional trend badge.

use leptos::*;

/// Trend badge contents; values are placeholders until the endpoint
/// exposes period-over-period data
#[derive(Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub positive: bool,
}

/// Card color variants
#[derive(Clone, Copy, PartialEq)]
pub enum CardVariant {
    Primary,
    Secondary,
    Accent,
    Plain,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Primary => "bg-primary-600",
            CardVariant::Secondary => "bg-indigo-600",
            CardVariant::Accent => "bg-emerald-600",
            CardVariant::Plain => "bg-gray-800 border border-gray-700",
        }
    }
}

/// Headline metric card
#[component]
pub fn MetricCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    #[prop(optional)] trend: Option<Trend>,
    #[prop(default = CardVariant::Plain)] variant: CardVariant,
) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-lg p-6 hover:shadow-lg transition-shadow {}",
            variant.class()
        )>
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <p class="text-sm text-gray-300 mb-2">{title}</p>
                    <p class="text-3xl font-bold">{move || value.get()}</p>

                    {trend.map(|t| {
                        let (arrow, color) = if t.positive {
                            ("↑", "text-green-300")
                        } else {
                            ("↓", "text-red-300")
                        };
                        view! {
                            <p class=format!("text-sm mt-2 {}", color)>
                                {arrow} " " {format!("{:.1}", t.value.abs())} "% vs. previous period"
                            </p>
                        }
                    })}
                </div>

                <div class="bg-white/10 p-3 rounded-lg text-2xl">{icon}</div>
            </div>
        </div>
    }
}

/// Format a count with thousands separators: 45678 -> "45,678"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(4200), "4,200");
        assert_eq!(format_count(45678), "45,678");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
