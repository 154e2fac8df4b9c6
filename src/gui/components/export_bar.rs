// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let prev_fmt = app.export.format;
        ui.label("Format:");
        ui.selectable_value(&mut app.export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut app.export.format, ExportFormat::Tsv, "TSV");
        if app.export.format != prev_fmt {
            tracing::info!("UI: Export format → {:?}", app.export.format);
            // Refresh the extension unless the user has typed a path.
            if !app.out_path_dirty {
                app.out_path_text = app.export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = app.export.include_headers;
        ui.checkbox(&mut app.export.include_headers, "Include headers");
        if app.export.include_headers != before_headers {
            tracing::info!("UI: Include_headers → {}", app.export.include_headers);
        }

        ui.separator();
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            tracing::debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
