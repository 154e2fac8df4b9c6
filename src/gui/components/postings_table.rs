// src/gui/components/postings_table.rs
//
// Every posting in the collection, salary or not. Purely a view.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 5] = ["Role", "Posted", "ID", "Low End", "High End"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Postings");
        let before = app.state.gui.only_with_salary;
        ui.checkbox(&mut app.state.gui.only_with_salary, "Only with salary");
        if app.state.gui.only_with_salary != before {
            tracing::debug!("UI: only_with_salary → {}", app.state.gui.only_with_salary);
        }
    });
    ui.separator();

    let visible = app.visible_postings();
    if visible.is_empty() {
        ui.label("No postings loaded.");
        return;
    }

    let num = |ui: &mut egui::Ui, v: Option<u32>| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| match v {
            Some(v) => ui.label(v.to_string()),
            None => ui.weak("—"),
        });
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(220.0).at_least(80.0).clip(true))
        .column(Column::initial(90.0))
        .column(Column::initial(90.0).clip(true))
        .column(Column::initial(80.0))
        .column(Column::remainder().at_least(80.0))
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, visible.len(), |mut row| {
                let p = visible[row.index()];
                row.col(|ui| {
                    ui.label(p.role.as_str()).on_hover_text(p.role.as_str());
                });
                row.col(|ui| {
                    ui.label(p.date.to_string());
                });
                row.col(|ui| {
                    ui.label(p.id.as_str());
                });
                row.col(|ui| num(ui, p.salary_low_end));
                row.col(|ui| num(ui, p.salary_high_end));
            });
        });
}
