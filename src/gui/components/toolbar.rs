// src/gui/components/toolbar.rs
//
// Top row: data source + report actions, status line.

use eframe::egui;

use crate::gui::{actions, app::App};
use crate::store::Origin;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let label = if app.cache_on_disk { "Load cache" } else { "Scrape" };
        if ui
            .button(label)
            .on_hover_text(format!("Cache: {}", app.state.options.cache.path.display()))
            .clicked()
        {
            actions::scrape(app);
        }

        if ui
            .add_enabled(!app.postings.is_empty(), egui::Button::new("Write report"))
            .on_hover_text(format!(
                "{} + {}",
                app.state.options.report.html_path().display(),
                app.state.options.report.png_path().display()
            ))
            .clicked()
        {
            actions::report(app);
        }

        ui.separator();
        let source = match app.origin {
            Some(Origin::Cache) => "cache",
            Some(Origin::Fresh) => "fresh scrape",
            None => "nothing loaded",
        };
        ui.label(format!("{} posting(s) · {source}", app.postings.len()));

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
