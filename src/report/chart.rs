// src/report/chart.rs
//! Chart geometry, independent of any output format.
//!
//! `layout` turns rows + benchmark into rectangles, segments and labels in
//! pixel space (origin top-left, y down). The SVG, PNG and GUI renderers only
//! paint what is here.

use crate::config::options::ChartStyle;
use crate::core::sanitize::group_thousands;

use super::table::SalaryRow;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn right(&self) -> f32 { self.x + self.w }
    pub fn bottom(&self) -> f32 { self.y + self.h }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor { Start, Middle, End }

/// Text positioned by its anchor point; `y` is the vertical centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub anchor: Anchor,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series { High, Low, Range }

impl Series {
    pub fn name(&self) -> &'static str {
        match self {
            Series::High => "High End",
            Series::Low => "Low End",
            Series::Range => "Salary range",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Series::High => [99, 110, 250],
            Series::Low => [239, 85, 59],
            Series::Range => [99, 110, 250],
        }
    }
}

pub const BENCHMARK_RGB: [u8; 3] = [0, 160, 0];
pub const GRID_RGB: [u8; 3] = [225, 229, 237];
pub const TEXT_RGB: [u8; 3] = [42, 63, 95];
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub rect: Rect,
    pub series: Series,
    pub tooltip: String,
    /// Box style only: midpoint of the range.
    pub median: Option<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub swatch: Rect,
    pub series: Series,
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub width: f32,
    pub height: f32,
    pub title: Label,
    pub plot: Rect,
    pub gridlines: Vec<Segment>,
    pub ticks: Vec<Label>,
    pub categories: Vec<Label>,
    pub marks: Vec<Mark>,
    pub legend: Vec<LegendEntry>,
    pub benchmark: Segment,
    pub annotation: Label,
}

pub fn money(v: i64) -> String {
    let sign = if v < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(v.unsigned_abs()))
}

/// Axis value → whole dollars; out-of-range ticks pin to the i64 ends.
fn tick_value(t: f64) -> i64 {
    t.clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

pub fn annotation_text(benchmark: i64) -> String {
    format!("Salary to compare ({})", money(benchmark))
}

/// Rough advance of proportional text; good enough to truncate labels.
pub fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.6
}

fn fit(text: &str, max_w: f32, size: f32) -> String {
    if approx_text_width(text, size) <= max_w {
        return s!(text);
    }
    let keep = ((max_w / (size * 0.6)) as usize).saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

/// Value axis covering every bound, zero and the benchmark, on round steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Scale {
    pub fn covering(rows: &[SalaryRow], benchmark: i64) -> Self {
        let hi = rows.iter().map(|r| r.low.max(r.high) as f64).fold(benchmark as f64, f64::max);
        let lo = rows.iter().map(|r| r.low.min(r.high) as f64).fold(benchmark as f64, f64::min);
        let (lo, hi) = (lo.min(0.0), hi.max(0.0));
        let span = if hi > lo { hi - lo } else { 1.0 };
        let step = nice_step(span / 6.0).max(1.0);
        Self {
            min: (lo / step).floor() * step,
            max: ((hi / step).ceil() * step).max((lo / step).floor() * step + step),
            step,
        }
    }

    /// 0.0 at `min`, 1.0 at `max`.
    pub fn frac(&self, v: f64) -> f32 {
        ((v - self.min) / (self.max - self.min)) as f32
    }

    pub fn ticks(&self) -> Vec<f64> {
        let n = ((self.max - self.min) / self.step).round() as usize;
        (0..=n).map(|i| self.min + i as f64 * self.step).collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

pub fn layout(
    rows: &[SalaryRow],
    benchmark: i64,
    style: ChartStyle,
    width: f32,
    height: f32,
    title: &str,
) -> Chart {
    let text = (height * 0.016).max(9.0);
    let title_size = (height * 0.03).max(14.0);

    let (left, bottom) = match style {
        ChartStyle::GroupedBar => (0.22, 0.08),
        ChartStyle::Box => (0.09, 0.12),
    };
    let top = height * 0.12;
    let plot = Rect {
        x: width * left,
        y: top,
        w: width * (0.86 - left),
        h: height * (1.0 - bottom) - top,
    };

    let scale = Scale::covering(rows, benchmark);
    let title = Label {
        x: width * 0.02,
        y: height * 0.045,
        text: s!(title),
        anchor: Anchor::Start,
        size: title_size,
    };

    let body = match style {
        ChartStyle::GroupedBar => grouped(rows, benchmark, &scale, plot, text),
        ChartStyle::Box => boxes(rows, benchmark, &scale, plot, text),
    };
    Chart {
        width,
        height,
        title,
        plot,
        gridlines: body.gridlines,
        ticks: body.ticks,
        categories: body.categories,
        marks: body.marks,
        legend: legend(style, plot, text),
        benchmark: body.benchmark,
        annotation: body.annotation,
    }
}

/// The style-dependent part of a chart.
struct Body {
    gridlines: Vec<Segment>,
    ticks: Vec<Label>,
    categories: Vec<Label>,
    marks: Vec<Mark>,
    benchmark: Segment,
    annotation: Label,
}

fn legend(style: ChartStyle, plot: Rect, text: f32) -> Vec<LegendEntry> {
    let series: &[Series] = match style {
        ChartStyle::GroupedBar => &[Series::High, Series::Low],
        ChartStyle::Box => &[Series::Range],
    };
    let x = plot.right() + text * 1.5;
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let y = plot.y + text * 1.8 * i as f32;
            LegendEntry {
                swatch: Rect { x, y: y - text * 0.5, w: text, h: text },
                series: *s,
                label: Label { x: x + text * 1.5, y, text: s!(s.name()), anchor: Anchor::Start, size: text },
            }
        })
        .collect()
}

fn grouped(rows: &[SalaryRow], benchmark: i64, scale: &Scale, plot: Rect, text: f32) -> Body {
    let x_of = |v: f64| plot.x + scale.frac(v) * plot.w;
    let x0 = x_of(0.0);

    let gridlines = scale.ticks().iter().map(|&t| {
        let x = x_of(t);
        Segment { from: (x, plot.y), to: (x, plot.bottom()) }
    }).collect();
    let ticks = scale.ticks().iter().map(|&t| Label {
        x: x_of(t),
        y: plot.bottom() + text * 1.4,
        text: money(tick_value(t)),
        anchor: Anchor::Middle,
        size: text,
    }).collect();

    let band = if rows.is_empty() { plot.h } else { plot.h / rows.len() as f32 };
    let pad = band * 0.15;
    let bar_h = (band - 2.0 * pad) / 2.0;

    let mut marks = Vec::with_capacity(rows.len() * 2);
    let mut categories = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let top = plot.y + band * i as f32;
        for (j, (series, v)) in [(Series::High, row.high), (Series::Low, row.low)].into_iter().enumerate() {
            let xv = x_of(v as f64);
            marks.push(Mark {
                rect: Rect { x: x0.min(xv), y: top + pad + bar_h * j as f32, w: (xv - x0).abs(), h: bar_h },
                series,
                tooltip: format!("{}: {} {}", row.role, series.name(), money(v as i64)),
                median: None,
            });
        }
        categories.push(Label {
            x: plot.x - text * 0.6,
            y: top + band / 2.0,
            text: fit(&row.role, plot.x - text * 1.2, text),
            anchor: Anchor::End,
            size: text,
        });
    }

    let xb = x_of(benchmark as f64);
    Body {
        gridlines,
        ticks,
        categories,
        marks,
        benchmark: Segment { from: (xb, plot.y), to: (xb, plot.bottom()) },
        annotation: Label {
            x: xb,
            y: plot.y - text * 1.2,
            text: annotation_text(benchmark),
            anchor: Anchor::Middle,
            size: text,
        },
    }
}

fn boxes(rows: &[SalaryRow], benchmark: i64, scale: &Scale, plot: Rect, text: f32) -> Body {
    let y_of = |v: f64| plot.bottom() - scale.frac(v) * plot.h;

    let gridlines = scale.ticks().iter().map(|&t| {
        let y = y_of(t);
        Segment { from: (plot.x, y), to: (plot.right(), y) }
    }).collect();
    let ticks = scale.ticks().iter().map(|&t| Label {
        x: plot.x - text * 0.6,
        y: y_of(t),
        text: money(tick_value(t)),
        anchor: Anchor::End,
        size: text,
    }).collect();

    let band = if rows.is_empty() { plot.w } else { plot.w / rows.len() as f32 };
    let box_w = band * 0.5;

    let mut marks = Vec::with_capacity(rows.len());
    let mut categories = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cx = plot.x + band * (i as f32 + 0.5);
        let (y_hi, y_lo) = (y_of(row.high as f64), y_of(row.low as f64));
        let rect = Rect { x: cx - box_w / 2.0, y: y_hi.min(y_lo), w: box_w, h: (y_lo - y_hi).abs() };
        let mid = (y_hi + y_lo) / 2.0;
        marks.push(Mark {
            rect,
            series: Series::Range,
            tooltip: format!("{}: {} to {}", row.role, money(row.low as i64), money(row.high as i64)),
            median: Some(Segment { from: (rect.x, mid), to: (rect.right(), mid) }),
        });
        categories.push(Label {
            x: cx,
            y: plot.bottom() + text * 1.4,
            text: fit(&row.role, band * 0.95, text),
            anchor: Anchor::Middle,
            size: text,
        });
    }

    let yb = y_of(benchmark as f64);
    Body {
        gridlines,
        ticks,
        categories,
        marks,
        benchmark: Segment { from: (plot.x, yb), to: (plot.right(), yb) },
        annotation: Label {
            x: plot.right(),
            y: yb - text * 1.2,
            text: annotation_text(benchmark),
            anchor: Anchor::End,
            size: text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SalaryRow> {
        vec![
            SalaryRow { role: s!("Scientist"), low: 120_000, high: 150_000 },
            SalaryRow { role: s!("Technician"), low: 60_000, high: 75_000 },
        ]
    }

    #[test]
    fn scale_covers_zero_data_and_benchmark() {
        let s = Scale::covering(&rows(), 50_000);
        assert_eq!(s.min, 0.0);
        assert!(s.max >= 150_000.0);
        let neg = Scale::covering(&rows(), -20_000);
        assert!(neg.min <= -20_000.0);
    }

    #[test]
    fn empty_rows_still_have_an_axis() {
        let s = Scale::covering(&[], 0);
        assert!(s.max > s.min);
        let c = layout(&[], 0, ChartStyle::GroupedBar, 2000.0, 1000.0, "T");
        assert!(c.marks.is_empty());
        assert!(!c.ticks.is_empty());
    }

    #[test]
    fn grouped_bars_two_per_role_inside_plot() {
        let c = layout(&rows(), 50_000, ChartStyle::GroupedBar, 2000.0, 1000.0, "T");
        assert_eq!(c.marks.len(), 4);
        assert_eq!(c.categories.len(), 2);
        for m in &c.marks {
            assert!(m.rect.x >= c.plot.x - 0.5 && m.rect.right() <= c.plot.right() + 0.5);
            assert!(m.rect.y >= c.plot.y && m.rect.bottom() <= c.plot.bottom() + 0.5);
        }
        // High bar is longer than the Low bar of the same role
        assert!(c.marks[0].rect.w > c.marks[1].rect.w);
        // Vertical benchmark line
        assert_eq!(c.benchmark.from.0, c.benchmark.to.0);
        assert_eq!(c.annotation.text, "Salary to compare ($50,000)");
    }

    #[test]
    fn box_spans_low_to_high() {
        let c = layout(&rows(), 100_000, ChartStyle::Box, 2000.0, 1000.0, "T");
        assert_eq!(c.marks.len(), 2);
        let scientist = &c.marks[0];
        let technician = &c.marks[1];
        // Higher salaries sit higher up (smaller y)
        assert!(scientist.rect.y < technician.rect.y);
        assert!(scientist.median.is_some());
        // Horizontal benchmark line
        assert_eq!(c.benchmark.from.1, c.benchmark.to.1);
    }

    #[test]
    fn negative_benchmark_is_plotted() {
        let c = layout(&rows(), -10_000, ChartStyle::GroupedBar, 2000.0, 1000.0, "T");
        assert!(c.benchmark.from.0 >= c.plot.x && c.benchmark.from.0 < c.marks[0].rect.x + 1.0);
        assert_eq!(c.annotation.text, "Salary to compare (-$10,000)");
    }

    #[test]
    fn extreme_benchmarks_do_not_overflow() {
        assert_eq!(annotation_text(i64::MIN), "Salary to compare (-$9,223,372,036,854,775,808)");
        assert_eq!(money(i64::MAX), "$9,223,372,036,854,775,807");

        for style in [ChartStyle::GroupedBar, ChartStyle::Box] {
            let low = layout(&rows(), i64::MIN, style, 2000.0, 1000.0, "T");
            assert!(low.ticks[0].text.starts_with("-$"));
            assert_eq!(low.annotation.text, annotation_text(i64::MIN));
            let high = layout(&rows(), i64::MAX, style, 2000.0, 1000.0, "T");
            assert_eq!(high.marks.len(), rows().len() * if style == ChartStyle::Box { 1 } else { 2 });
        }
        assert_eq!(tick_value(-1e30), i64::MIN);
        assert_eq!(tick_value(1e30), i64::MAX);
    }

    #[test]
    fn long_roles_are_truncated() {
        let long = SalaryRow { role: "X".repeat(400), low: 1, high: 2 };
        let c = layout(&[long], 0, ChartStyle::GroupedBar, 2000.0, 1000.0, "T");
        assert!(c.categories[0].text.ends_with(".."));
        assert!(approx_text_width(&c.categories[0].text, c.categories[0].size) <= c.plot.x);
    }
}
