// src/gui/actions/report.rs
use crate::gui::app::App;
use crate::report::write_report;

pub fn report(app: &mut App) {
    if app.postings.is_empty() {
        app.status("Nothing to report (no postings loaded)");
        tracing::debug!("Report: Clicked, but there are no postings");
        return;
    }

    match write_report(&app.postings, &app.state.options.report) {
        Ok(paths) => app.status(format!("Wrote {} and {}", paths.html.display(), paths.png.display())),
        Err(e) => {
            tracing::error!("Report: {e}");
            app.status(format!("Report error: {e}"));
        }
    }
}
