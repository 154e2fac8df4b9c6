// src/report/raster.rs
//! Chart → RGB pixels → PNG.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::file::ensure_directory;

use super::chart::{
    Anchor, BACKGROUND_RGB, BENCHMARK_RGB, Chart, GRID_RGB, Label, Rect, Segment, TEXT_RGB,
};
use super::font::{self, GLYPH_H};

pub fn render(chart: &Chart) -> RgbImage {
    let (w, h) = (chart.width.round().max(1.0) as u32, chart.height.round().max(1.0) as u32);
    let mut img = RgbImage::from_pixel(w, h, Rgb(BACKGROUND_RGB));

    for g in &chart.gridlines {
        draw_segment(&mut img, g, 1.0, Rgb(GRID_RGB), None);
    }
    for m in &chart.marks {
        fill_rect(&mut img, &m.rect, Rgb(m.series.rgb()));
        if let Some(median) = &m.median {
            draw_segment(&mut img, median, 2.0, Rgb(BACKGROUND_RGB), None);
        }
    }
    draw_segment(&mut img, &chart.benchmark, 3.0, Rgb(BENCHMARK_RGB), Some((18.0, 10.0)));

    for l in chart.ticks.iter().chain(&chart.categories) {
        draw_text(&mut img, l, Rgb(TEXT_RGB));
    }
    for entry in &chart.legend {
        fill_rect(&mut img, &entry.swatch, Rgb(entry.series.rgb()));
        draw_text(&mut img, &entry.label, Rgb(TEXT_RGB));
    }
    draw_text(&mut img, &chart.annotation, Rgb(BENCHMARK_RGB));
    draw_text(&mut img, &chart.title, Rgb(TEXT_RGB));
    img
}

pub fn write_png(chart: &Chart, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    render(chart).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(img: &mut RgbImage, r: &Rect, color: Rgb<u8>) {
    let (x0, y0) = (r.x.round() as i64, r.y.round() as i64);
    let (x1, y1) = (r.right().round() as i64, r.bottom().round() as i64);
    for y in y0..y1.max(y0 + 1) {
        for x in x0..x1.max(x0 + 1) {
            put(img, x, y, color);
        }
    }
}

/// Square brush of `width` px stepped along the segment; `dash` is (on, off) in px.
fn draw_segment(img: &mut RgbImage, s: &Segment, width: f32, color: Rgb<u8>, dash: Option<(f32, f32)>) {
    let (dx, dy) = (s.to.0 - s.from.0, s.to.1 - s.from.1);
    let len = (dx * dx + dy * dy).sqrt();
    let steps = len.ceil().max(1.0) as usize;
    let half = width / 2.0;

    for i in 0..=steps {
        let along = len * i as f32 / steps as f32;
        if let Some((on, off)) = dash {
            if along % (on + off) >= on {
                continue;
            }
        }
        let t = i as f32 / steps as f32;
        let (cx, cy) = (s.from.0 + dx * t, s.from.1 + dy * t);
        let brush = Rect { x: cx - half, y: cy - half, w: width, h: width };
        fill_rect(img, &brush, color);
    }
}

fn draw_text(img: &mut RgbImage, label: &Label, color: Rgb<u8>) {
    let scale = font::scale_for(label.size);
    let width = font::text_width(&label.text, scale) as f32;
    let left = match label.anchor {
        Anchor::Start => label.x,
        Anchor::Middle => label.x - width / 2.0,
        Anchor::End => label.x - width,
    };
    let top = label.y - (GLYPH_H * scale) as f32 / 2.0;
    let (left, top, scale_i) = (left.round() as i64, top.round() as i64, scale as i64);

    for (n, ch) in label.text.chars().enumerate() {
        let gx = left + n as i64 * (font::ADVANCE * scale) as i64;
        for (row, bits) in font::glyph(ch).iter().enumerate() {
            for col in 0..font::GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let (px, py) = (gx + col as i64 * scale_i, top + row as i64 * scale_i);
                for sy in 0..scale_i {
                    for sx in 0..scale_i {
                        put(img, px + sx, py + sy, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ChartStyle;
    use crate::report::chart::layout;
    use crate::report::table::SalaryRow;

    fn chart(style: ChartStyle) -> Chart {
        let rows = vec![SalaryRow { role: s!("Scientist"), low: 100_000, high: 140_000 }];
        layout(&rows, 50_000, style, 400.0, 200.0, "Salaries")
    }

    #[test]
    fn fixed_size_canvas() {
        let img = render(&chart(ChartStyle::GroupedBar));
        assert_eq!(img.dimensions(), (400, 200));
    }

    #[test]
    fn bars_and_benchmark_are_painted() {
        let c = chart(ChartStyle::GroupedBar);
        let img = render(&c);

        let high = &c.marks[0].rect;
        let (cx, cy) = ((high.x + high.w / 2.0) as u32, (high.y + high.h / 2.0) as u32);
        assert_eq!(img.get_pixel(cx, cy), &Rgb(c.marks[0].series.rgb()));

        let bx = c.benchmark.from.0.round() as u32;
        let found = (c.plot.y as u32..c.plot.bottom() as u32)
            .any(|y| img.get_pixel(bx, y) == &Rgb(BENCHMARK_RGB));
        assert!(found);
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let mut img = RgbImage::new(10, 10);
        fill_rect(&mut img, &Rect { x: -5.0, y: -5.0, w: 30.0, h: 30.0 }, Rgb([1, 2, 3]));
        assert_eq!(img.get_pixel(9, 9), &Rgb([1, 2, 3]));
    }
}
