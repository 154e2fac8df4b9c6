// src/gui/actions/export.rs
use eframe::egui;

use crate::{
    csv::to_export_string,
    file::export_table,
    gui::app::App,
    report::table::TABLE_HEADERS,
};

use super::current_rows;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.export.set_path(&app.out_path_text);
        tracing::info!("Export: Out path set → {}", app.export.out_path().display());
        app.out_path_dirty = false;
    }

    let rows = current_rows(app);
    if rows.is_empty() {
        tracing::debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let status_msg = match export_table(&app.export, &rows) {
        Ok(path) => {
            tracing::info!("Export: OK rows={} → {}", rows.len(), path.display());
            format!("Exported {} row(s) → {}", rows.len(), path.display())
        }
        Err(e) => {
            tracing::error!("Export: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(status_msg);
}

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let rows = current_rows(app);
    if rows.is_empty() {
        app.status("Nothing to copy");
        tracing::debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers: Vec<String> = TABLE_HEADERS.iter().map(|h| s!(*h)).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();
    let txt = to_export_string(&headers, &cells, app.export.include_headers, app.export.format.delim());

    tracing::info!("Copy: rows={}", rows.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
