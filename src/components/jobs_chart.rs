//! SVG line chart of total jobs per year.
//!
//! Hovering a year column enlarges its dot and shows a tooltip with the
//! exact value.

use leptos::prelude::*;

use crate::chart::{CartesianLayout, ChartLayout, LineSeries};
use crate::config::ChartConfig;

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn JobsChart(
    /// Points in dataset order.
    series: LineSeries,
    /// Size, colors and tick count.
    config: ChartConfig,
) -> impl IntoView {
    let geometry = CartesianLayout::from(&config).layout(&series);
    let (hovered, set_hovered) = signal::<Option<usize>>(None);

    let plot = geometry.plot;
    let dash = config.grid_dash.clone();
    let stroke = config.stroke.clone();
    let dot_radius = config.dot_radius;
    let active_dot_radius = config.active_dot_radius;
    let band = if geometry.points.len() > 1 {
        plot.width() / (geometry.points.len() - 1) as f64
    } else {
        plot.width()
    };

    let horizontal_grid = geometry.y_ticks.iter().map(|t| view! {
        <line
            class="grid-line"
            x1=px(plot.left) x2=px(plot.right)
            y1=px(t.position) y2=px(t.position)
            stroke-dasharray=dash.clone()
        />
    }).collect::<Vec<_>>();

    let vertical_grid = geometry.x_ticks.iter().map(|t| view! {
        <line
            class="grid-line"
            x1=px(t.position) x2=px(t.position)
            y1=px(plot.top) y2=px(plot.bottom)
            stroke-dasharray=dash.clone()
        />
    }).collect::<Vec<_>>();

    let x_labels = geometry.x_ticks.iter().map(|t| view! {
        <text class="axis-label" x=px(t.position) y=px(plot.bottom + 18.0) text-anchor="middle">
            {t.label.clone()}
        </text>
    }).collect::<Vec<_>>();

    let y_labels = geometry.y_ticks.iter().map(|t| view! {
        <text
            class="axis-label"
            x=px(plot.left - 8.0) y=px(t.position)
            text-anchor="end" dominant-baseline="middle"
        >
            {t.label.clone()}
        </text>
    }).collect::<Vec<_>>();

    let hit_areas = geometry.points.iter().enumerate().map(|(i, p)| view! {
        <rect
            class="hit-area"
            x=px(p.x - band / 2.0) y=px(plot.top)
            width=px(band) height=px(plot.height())
            fill="transparent"
            on:mouseenter=move |_| set_hovered.set(Some(i))
        />
    }).collect::<Vec<_>>();

    let dots = geometry.points.iter().enumerate().map(|(i, p)| {
        let stroke = stroke.clone();
        view! {
            <circle
                class="dot"
                cx=px(p.x) cy=px(p.y)
                r=move || px(if hovered.get() == Some(i) { active_dot_radius } else { dot_radius })
                fill=stroke.clone() stroke="#fff" stroke-width="2"
                pointer-events="none"
            />
        }
    }).collect::<Vec<_>>();

    let legend = geometry.legend.clone();
    let line_path = geometry.path.clone();
    let view_box = format!("0 0 {} {}", geometry.width, geometry.height);
    let tooltip_style = format!("color: {}", stroke);
    let geometry = StoredValue::new(geometry);
    let cursor = move || {
        hovered
            .get()
            .and_then(|i| geometry.with_value(|g| g.points.get(i).map(|p| p.x)))
    };

    view! {
        <div class="jobs-chart" style=format!("width: {}px", config.width)>
            <style>{include_str!("jobs_chart.css")}</style>
            <svg
                width=config.width.to_string() height=config.height.to_string()
                viewBox=view_box
                on:mouseleave=move |_| set_hovered.set(None)
            >
                <g class="grid">{horizontal_grid}{vertical_grid}</g>
                <line class="axis" x1=px(plot.left) x2=px(plot.right) y1=px(plot.bottom) y2=px(plot.bottom) />
                <line class="axis" x1=px(plot.left) x2=px(plot.left) y1=px(plot.top) y2=px(plot.bottom) />
                <g class="x-axis">{x_labels}</g>
                <g class="y-axis">{y_labels}</g>
                {move || cursor().map(|x| view! {
                    <line class="cursor" x1=px(x) x2=px(x) y1=px(plot.top) y2=px(plot.bottom) />
                })}
                <path class="series-line" d=line_path fill="none" stroke=stroke.clone() stroke-width="2" />
                {dots}
                {hit_areas}
                <g class="legend">
                    <line
                        x1=px(legend.x - 40.0) x2=px(legend.x - 26.0)
                        y1=px(legend.y) y2=px(legend.y)
                        stroke=stroke.clone() stroke-width="2"
                    />
                    <text class="legend-label" x=px(legend.x - 20.0) y=px(legend.y) dominant-baseline="middle" fill=stroke.clone()>
                        {legend.label}
                    </text>
                </g>
            </svg>
            {move || hovered.get().and_then(|i| geometry.with_value(|g| g.tooltip(i))).map(|tip| view! {
                <div
                    class="chart-tooltip"
                    style=format!("left: {}px; top: {}px", px(tip.x + 12.0), px(tip.y - 12.0))
                >
                    <p class="tooltip-title">{tip.title}</p>
                    <p class="tooltip-value" style=tooltip_style.clone()>{tip.line}</p>
                </div>
            })}
        </div>
    }
}
