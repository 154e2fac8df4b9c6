// src/report/html.rs
//! Self-contained HTML page: inline SVG chart + the rows it was drawn from.

use std::fmt::Write as _;

use super::chart::{Anchor, BENCHMARK_RGB, Chart, GRID_RGB, Label, Segment, TEXT_RGB};
use super::table::{SalaryRow, TABLE_HEADERS};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn rgb(c: [u8; 3]) -> String {
    format!("rgb({},{},{})", c[0], c[1], c[2])
}

fn anchor(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn text(out: &mut String, l: &Label, class: &str) {
    let _ = writeln!(
        out,
        r#"<text class="{class}" x="{:.1}" y="{:.1}" font-size="{:.1}" text-anchor="{}" dominant-baseline="central">{}</text>"#,
        l.x, l.y, l.size, anchor(l.anchor), escape(&l.text)
    );
}

fn line(out: &mut String, s: &Segment, stroke: [u8; 3], width: f32, extra: &str) {
    let _ = writeln!(
        out,
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{width}"{extra}/>"#,
        s.from.0, s.from.1, s.to.0, s.to.1, rgb(stroke)
    );
}

pub fn svg(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img">"#,
        w = chart.width,
        h = chart.height
    );
    out.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    out.push('\n');

    for g in &chart.gridlines {
        line(&mut out, g, GRID_RGB, 1.0, "");
    }
    for m in &chart.marks {
        let _ = writeln!(
            out,
            r#"<rect class="mark" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
            m.rect.x, m.rect.y, m.rect.w, m.rect.h, rgb(m.series.rgb()), escape(&m.tooltip)
        );
        if let Some(median) = &m.median {
            line(&mut out, median, [255, 255, 255], 2.0, "");
        }
    }
    line(&mut out, &chart.benchmark, BENCHMARK_RGB, 3.0, r#" stroke-dasharray="18 10""#);

    for l in chart.ticks.iter().chain(&chart.categories) {
        text(&mut out, l, "axis");
    }
    for entry in &chart.legend {
        let r = &entry.swatch;
        let _ = writeln!(
            out,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            r.x, r.y, r.w, r.h, rgb(entry.series.rgb())
        );
        text(&mut out, &entry.label, "legend");
    }
    text(&mut out, &chart.annotation, "benchmark");
    text(&mut out, &chart.title, "title");
    out.push_str("</svg>\n");
    out
}

fn table(rows: &[SalaryRow]) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for h in TABLE_HEADERS {
        let _ = write!(out, "<th>{}</th>", escape(h));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        let _ = writeln!(
            out,
            r#"<tr><td>{}</td><td class="num">{}</td><td class="num">{}</td></tr>"#,
            escape(&row.role),
            row.low,
            row.high
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

pub fn document(chart: &Chart, rows: &[SalaryRow]) -> String {
    let title = escape(&chart.title.text);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="en">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"<meta charset="utf-8">"#);
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>");
    let _ = writeln!(out, "body {{ font-family: sans-serif; color: {}; margin: 1.5em; }}", rgb(TEXT_RGB));
    let _ = writeln!(out, "svg {{ max-width: 100%; height: auto; }}");
    let _ = writeln!(out, "svg text {{ fill: {}; }}", rgb(TEXT_RGB));
    let _ = writeln!(out, "svg text.benchmark {{ fill: {}; }}", rgb(BENCHMARK_RGB));
    let _ = writeln!(out, ".mark:hover {{ opacity: 0.75; }}");
    let _ = writeln!(out, "table {{ border-collapse: collapse; margin-top: 1em; }}");
    let _ = writeln!(out, "th, td {{ border: 1px solid {}; padding: 0.25em 0.75em; }}", rgb(GRID_RGB));
    let _ = writeln!(out, "td.num {{ text-align: right; }}");
    let _ = writeln!(out, "</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    out.push_str(&svg(chart));
    out.push_str(&table(rows));
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}
