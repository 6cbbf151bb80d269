//! Cartesian layout for the jobs-per-year line chart.
//!
//! Turns a [`LineSeries`] into pixel geometry that the SVG component draws
//! directly. Years are laid out as evenly spaced categories; the value axis
//! starts at zero and is stretched to a "nice" step size.

use std::fmt::Write;

use super::series::LineSeries;
use crate::config::ChartConfig;

// Space reserved around the plot area for axes and the legend.
const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 30.0;
const Y_AXIS_WIDTH: f64 = 60.0;
const X_AXIS_HEIGHT: f64 = 30.0;
const LEGEND_HEIGHT: f64 = 24.0;

/// Produces drawable geometry from a series.
pub trait ChartLayout {
    fn layout(&self, series: &LineSeries) -> ChartGeometry;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// x for category ticks, y for value ticks
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub year: i32,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub points: Vec<PlotPoint>,
    /// SVG path data through every point, empty without points
    pub path: String,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub legend: LegendEntry,
    series_name: &'static str,
}

impl ChartGeometry {
    /// Hover content for the point at `index`.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|p| Tooltip {
            x: p.x,
            y: p.y,
            title: p.year.to_string(),
            line: format!("{} : {}", self.series_name, p.value),
        })
    }
}

/// Category x axis, zero-based linear y axis.
#[derive(Debug, Clone)]
pub struct CartesianLayout {
    pub width: f64,
    pub height: f64,
    pub y_tick_count: usize,
}

impl From<&ChartConfig> for CartesianLayout {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: f64::from(config.width),
            height: f64::from(config.height),
            y_tick_count: config.y_tick_count,
        }
    }
}

impl CartesianLayout {
    fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: Y_AXIS_WIDTH,
            top: MARGIN_TOP,
            right: (self.width - MARGIN_RIGHT).max(Y_AXIS_WIDTH),
            bottom: (self.height - X_AXIS_HEIGHT - LEGEND_HEIGHT).max(MARGIN_TOP),
        }
    }
}

impl ChartLayout for CartesianLayout {
    fn layout(&self, series: &LineSeries) -> ChartGeometry {
        let plot = self.plot_area();
        let (step, tick_count) = nice_step(series.max_value(), self.y_tick_count);
        let domain_max = (step * (tick_count - 1)) as f64;

        let y_of = |value: usize| plot.bottom - value as f64 / domain_max * plot.height();
        let count = series.points.len();
        let x_of = |index: usize| {
            if count <= 1 {
                plot.left + plot.width() / 2.0
            } else {
                plot.left + index as f64 * plot.width() / (count - 1) as f64
            }
        };

        let points: Vec<PlotPoint> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| PlotPoint {
                x: x_of(i),
                y: y_of(p.total_jobs),
                year: p.year,
                value: p.total_jobs,
            })
            .collect();

        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let path = monotone_path(&coords);

        let x_ticks = points
            .iter()
            .map(|p| AxisTick {
                position: p.x,
                label: p.year.to_string(),
            })
            .collect();

        let y_ticks = (0..tick_count)
            .map(|i| AxisTick {
                position: y_of(i * step),
                label: (i * step).to_string(),
            })
            .collect();

        ChartGeometry {
            width: self.width,
            height: self.height,
            plot,
            points,
            path,
            x_ticks,
            y_ticks,
            legend: LegendEntry {
                label: series.name,
                x: plot.left + plot.width() / 2.0,
                y: self.height - LEGEND_HEIGHT / 2.0,
            },
            series_name: series.name,
        }
    }
}

/// SVG path through `points` as a monotone cubic in x.
///
/// Tangents are computed as in d3's `curveMonotoneX`, so the curve
/// never overshoots between two points: flat runs stay flat and rising runs
/// keep rising. Two points draw a straight segment.
fn monotone_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    let Some(&(x0, y0)) = points.first() else {
        return path;
    };
    let _ = write!(path, "M{:.2},{:.2}", x0, y0);

    match points.len() {
        1 => return path,
        2 => {
            let (x1, y1) = points[1];
            let _ = write!(path, "L{:.2},{:.2}", x1, y1);
            return path;
        }
        _ => {}
    }

    let secants: Vec<f64> = points
        .windows(2)
        .map(|w| {
            let h = w[1].0 - w[0].0;
            if h == 0.0 {
                0.0
            } else {
                (w[1].1 - w[0].1) / h
            }
        })
        .collect();

    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let (s0, s1) = (secants[i - 1], secants[i]);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_nan() { 0.0 } else { t };
    }
    tangents[0] = (3.0 * secants[0] - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * secants[n - 2] - tangents[n - 2]) / 2.0;

    for i in 0..n - 1 {
        let (xa, ya) = points[i];
        let (xb, yb) = points[i + 1];
        let dx = (xb - xa) / 3.0;
        let _ = write!(
            path,
            "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            xa + dx,
            ya + dx * tangents[i],
            xb - dx,
            yb - dx * tangents[i + 1],
            xb,
            yb
        );
    }
    path
}

// zero counts as positive
fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Integer tick step covering `max` in `tick_count - 1` steps.
///
/// Returns the step and the tick count actually used (at least two).
fn nice_step(max: usize, tick_count: usize) -> (usize, usize) {
    let tick_count = tick_count.max(2);
    if max == 0 {
        return (1, tick_count);
    }

    let raw = max as f64 / (tick_count - 1) as f64;
    if raw <= 1.0 {
        return (1, tick_count);
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|n| *n >= normalized)
        .unwrap_or(10.0);
    let step = (nice * magnitude).ceil().max(1.0) as usize;
    (step, tick_count)
}
