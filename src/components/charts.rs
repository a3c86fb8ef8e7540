//! Chart Components
//!
//! Dashboard charts drawn on HTML5 Canvas: visits per day as bars, the
//! gender split as a pie, the age-bracket histogram as a line.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::analytics::{BracketCount, DayVisits, GenderSlice};
use crate::state::global::GlobalState;

const BAR_COLOR: &str = "#FF9800"; // orange
const LINE_COLOR: &str = "#2196F3"; // blue
const PIE_COLORS: [&str; 2] = ["#FF9800", "#9C27B0"];
const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Visits-per-day bar chart
#[component]
pub fn VisitsBarChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let metrics = state.metrics;
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the aggregate changes
    create_effect(move |_| {
        let series = metrics.get().map(|m| m.visits_by_day).unwrap_or_default();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Gender split pie chart
#[component]
pub fn GenderPieChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let metrics = state.metrics;
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = metrics.get().map(|m| m.gender_split).unwrap_or_default();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &slices);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Age-bracket line chart
#[component]
pub fn AgeBracketChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let metrics = state.metrics;
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let brackets = metrics.get().map(|m| m.age_brackets).unwrap_or_default();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &brackets);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn clear_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Horizontal grid lines with y-axis labels from 0 to `y_max`
fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, chart_height: f64, y_max: f64) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data for selected range", width / 2.0 - 80.0, height / 2.0);
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &[DayVisits]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    clear_background(&ctx, width, height);

    if series.is_empty() || series.iter().all(|d| d.visits == 0) {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let max = series.iter().map(|d| d.visits).max().unwrap_or(0) as f64;
    let y_max = max * 1.1;

    draw_grid(&ctx, width, chart_height, y_max);

    let slot = chart_width / series.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&BAR_COLOR.into());
    for (i, day) in series.iter().enumerate() {
        let bar_height = day.visits as f64 / y_max * chart_height;
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = MARGIN_TOP + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // X labels; thin them out on long ranges
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    let step = (series.len() / 10).max(1);
    for (i, day) in series.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0 - 12.0;
        let _ = ctx.fill_text(&day.label, x, height - 10.0);
    }
}

fn draw_pie_chart(canvas: &HtmlCanvasElement, slices: &[GenderSlice]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    clear_background(&ctx, width, height);

    if slices.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = height.min(width) / 2.0 - 50.0;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, slice) in slices.iter().enumerate() {
        let sweep = slice.percent / 100.0 * std::f64::consts::PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style(&PIE_COLORS[i % PIE_COLORS.len()].into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Label at the slice midpoint, pushed past the rim
        let mid = start + sweep / 2.0;
        let lx = cx + (radius + 24.0) * mid.cos();
        let ly = cy + (radius + 24.0) * mid.sin();
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text(&format!("{}: {:.0}%", slice.label, slice.percent), lx - 32.0, ly);

        start = end;
    }
}

fn draw_line_chart(canvas: &HtmlCanvasElement, brackets: &[BracketCount]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    clear_background(&ctx, width, height);

    if brackets.is_empty() || brackets.iter().all(|b| b.count == 0) {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let max = brackets.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let y_max = max * 1.1;

    draw_grid(&ctx, width, chart_height, y_max);

    let slot = chart_width / brackets.len() as f64;
    let point = |i: usize, count: u64| {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * slot;
        let y = MARGIN_TOP + (1.0 - count as f64 / y_max) * chart_height;
        (x, y)
    };

    // Connecting line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, bracket) in brackets.iter().enumerate() {
        let (x, y) = point(i, bracket.count);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Dots
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, bracket) in brackets.iter().enumerate() {
        let (x, y) = point(i, bracket.count);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Bracket labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, bracket) in brackets.iter().enumerate() {
        let (x, _) = point(i, bracket.count);
        let _ = ctx.fill_text(bracket.label, x - 15.0, height - 10.0);
    }
}
