// src/gui/components/salary_chart.rs
//
// Live preview of the report chart. Paints the same geometry the HTML and PNG
// outputs use, scaled to the panel, so the benchmark and style controls show
// their effect before anything is written.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use crate::config::options::ChartStyle;
use crate::gui::app::App;
use crate::report::chart::{
    self, Anchor, BENCHMARK_RGB, Chart, GRID_RGB, Label, Segment, TEXT_RGB,
};

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn controls(ui: &mut egui::Ui, app: &mut App) {
    let report = &mut app.state.options.report;
    ui.horizontal(|ui| {
        ui.label("Style:");
        for style in [ChartStyle::GroupedBar, ChartStyle::Box] {
            if ui.selectable_value(&mut report.style, style, style.label()).changed() {
                tracing::debug!("UI: chart style → {style}");
            }
        }

        ui.separator();
        ui.label("Salary to compare:");
        ui.add(egui::DragValue::new(&mut report.benchmark).speed(500.0).prefix("$"));
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    controls(ui, app);
    ui.separator();

    let rows = crate::gui::actions::current_rows(app);
    let size = ui.available_size().max(Vec2::new(200.0, 150.0));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    let report = &app.state.options.report;
    let c = chart::layout(&rows, report.benchmark, report.style, rect.width(), rect.height(), &report.title);
    paint(&painter, &c, rect.min);

    // Tooltip for whatever mark is under the pointer
    let hovered = response.hover_pos().and_then(|pos| {
        let local = pos - rect.min;
        c.marks.iter().find(|m| {
            let r = m.rect;
            local.x >= r.x && local.x <= r.right() && local.y >= r.y && local.y <= r.bottom()
        })
    });
    if let Some(mark) = hovered {
        response.on_hover_text(mark.tooltip.clone());
    }
}

fn paint(painter: &egui::Painter, c: &Chart, origin: Pos2) {
    let at = |(x, y): (f32, f32)| origin + Vec2::new(x, y);
    let rect = |r: &chart::Rect| egui::Rect::from_min_size(at((r.x, r.y)), Vec2::new(r.w, r.h));
    let seg = |s: &Segment| [at(s.from), at(s.to)];

    painter.rect_filled(rect(&chart::Rect { x: 0.0, y: 0.0, w: c.width, h: c.height }), 0.0, Color32::WHITE);

    for g in &c.gridlines {
        painter.line_segment(seg(g), Stroke::new(1.0, color(GRID_RGB)));
    }
    for m in &c.marks {
        painter.rect_filled(rect(&m.rect), 0.0, color(m.series.rgb()));
        if let Some(median) = &m.median {
            painter.line_segment(seg(median), Stroke::new(2.0, Color32::WHITE));
        }
    }
    painter.extend(Shape::dashed_line(
        &seg(&c.benchmark),
        Stroke::new(3.0, color(BENCHMARK_RGB)),
        18.0,
        10.0,
    ));

    let text = |l: &Label, rgb: [u8; 3]| {
        let align = match l.anchor {
            Anchor::Start => Align2::LEFT_CENTER,
            Anchor::Middle => Align2::CENTER_CENTER,
            Anchor::End => Align2::RIGHT_CENTER,
        };
        painter.text(at((l.x, l.y)), align, &l.text, FontId::proportional(l.size), color(rgb));
    };
    for l in c.ticks.iter().chain(&c.categories) {
        text(l, TEXT_RGB);
    }
    for entry in &c.legend {
        painter.rect_filled(rect(&entry.swatch), 0.0, color(entry.series.rgb()));
        text(&entry.label, TEXT_RGB);
    }
    text(&c.annotation, BENCHMARK_RGB);
    text(&c.title, TEXT_RGB);
}
