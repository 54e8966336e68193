use crate::dashboards::d100_overview::view_model::{format_amount, ChartKind, ChartSeries};
use crate::shared::components::card_animated::CardAnimated;
use leptos::prelude::*;

const NO_DATA: &str = "Sem dados para exibir";

const PALETTE: [&str; 6] = [
    "#0f6cbd", "#e3008c", "#13a10e", "#ffb900", "#8764b8", "#00b7c3",
];

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Percentage of the total for each value. Negative and non-finite values
/// count as zero; an all-zero series yields all zeros.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let clean: Vec<f64> = values.iter().map(|v| clamp_non_negative(*v)).collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return vec![0.0; clean.len()];
    }
    clean.iter().map(|v| v / total * 100.0).collect()
}

/// Bar length as a percentage of the largest value
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let clean: Vec<f64> = values.iter().map(|v| clamp_non_negative(*v)).collect();
    let max = clean.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; clean.len()];
    }
    clean.iter().map(|v| v / max * 100.0).collect()
}

/// `conic-gradient(...)` drawing a pie from percentage shares
pub fn conic_gradient(shares: &[f64]) -> String {
    let mut start = 0.0_f64;
    let stops: Vec<String> = shares
        .iter()
        .enumerate()
        .filter(|(_, share)| **share > 0.0)
        .map(|(i, share)| {
            let end = start + share;
            let stop = format!("{} {:.2}% {:.2}%", color(i), start, end);
            start = end;
            stop
        })
        .collect();

    if stops.is_empty() {
        "conic-gradient(#e0e0e0 0% 100%)".to_string()
    } else {
        format!("conic-gradient({})", stops.join(", "))
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[component]
pub fn ChartPanel(
    series: ChartSeries,
    /// Spans the whole chart row
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let class = if wide {
        "d100-chart d100-chart--wide"
    } else {
        "d100-chart"
    };
    let title = series.title;

    let body = if series.is_empty() {
        view! { <div class="d100-chart__empty">{NO_DATA}</div> }.into_any()
    } else {
        match series.kind {
            ChartKind::Pie => pie_view(&series),
            ChartKind::Bar => bar_view(&series),
        }
    };

    view! {
        <div class=class>
            <CardAnimated>
                <h3 class="d100-chart__title">{title}</h3>
                {body}
            </CardAnimated>
        </div>
    }
}

fn pie_view(series: &ChartSeries) -> AnyView {
    let shares = shares(&series.values);
    let disc_style = format!(
        "width: 180px; height: 180px; border-radius: 50%; background: {};",
        conic_gradient(&shares)
    );

    let legend = series
        .points()
        .zip(shares.iter().copied())
        .enumerate()
        .map(|(i, ((label, value), share))| {
            let swatch = format!(
                "display: inline-block; width: 10px; height: 10px; background: {};",
                color(i)
            );
            let label = label.to_string();
            view! {
                <li class="d100-chart__legend-row">
                    <span style=swatch></span>
                    <span class="d100-chart__label">{label}</span>
                    <span class="d100-chart__value">{format!("{} ({:.1}%)", format_amount(value), share)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="d100-chart__pie">
            <div style=disc_style role="img"></div>
            <ul class="d100-chart__legend">{legend}</ul>
        </div>
    }
    .into_any()
}

fn bar_view(series: &ChartSeries) -> AnyView {
    let widths = bar_widths(&series.values);
    let series_label = series.series_label.unwrap_or_default();

    let rows = series
        .points()
        .zip(widths.iter().copied())
        .map(|((label, value), width)| {
            let bar_style = format!(
                "height: 14px; width: {:.2}%; background: {};",
                width,
                color(0)
            );
            let label = label.to_string();
            view! {
                <div class="d100-chart__bar-row">
                    <span class="d100-chart__label">{label}</span>
                    <div class="d100-chart__bar-track">
                        <div style=bar_style></div>
                    </div>
                    <span class="d100-chart__value">{format_amount(value)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="d100-chart__bars">
            <div class="d100-chart__series-label">{series_label}</div>
            {rows}
        </div>
    }
    .into_any()
}
