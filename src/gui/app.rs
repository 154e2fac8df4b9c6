// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::ExportOptions, state::AppState},
    data::JobPosting,
    store::{Origin, PostingCache},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init();
    eframe::run_native(
        "Salary Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // table export settings; the CLI keeps these optional, the GUI always has one
    pub export: ExportOptions,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub postings: Vec<JobPosting>,
    pub origin: Option<Origin>,
    /// Artifact seen on disk at start or written by the last scrape
    pub cache_on_disk: bool,

    // status line; GuiProgress writes here during a scrape
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let export = state.options.export.clone().unwrap_or_default();
        let out_path_text = export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            export,
            out_path_text,
            out_path_dirty: false,
            postings: Vec::new(),
            origin: None,
            cache_on_disk: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        // Only read what is already on disk; fetching waits for the button.
        let cache = app.cache();
        app.cache_on_disk = cache.exists();
        if app.cache_on_disk {
            match cache.load() {
                Ok(postings) => {
                    tracing::info!("Init: {} posting(s) from {}", postings.len(), cache.path().display());
                    app.status(format!("Loaded {} posting(s) from cache", postings.len()));
                    app.postings = postings;
                    app.origin = Some(Origin::Cache);
                }
                Err(e) => {
                    tracing::error!("Init: {e}");
                    app.status(format!("Error: {e}"));
                }
            }
        } else {
            tracing::debug!("Init: no cache at {}", cache.path().display());
        }
        app
    }

    pub fn cache(&self) -> PostingCache {
        PostingCache::new(&self.state.options.cache.path)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Postings shown in the table, honouring the salary filter.
    pub fn visible_postings(&self) -> Vec<&JobPosting> {
        self.postings
            .iter()
            .filter(|p| !self.state.gui.only_with_salary || p.has_salary())
            .collect()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::toolbar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::SidePanel::left("postings")
            .resizable(true)
            .default_width(self.state.gui.window_w as f32 * 0.45)
            .show(ctx, |ui| {
                components::postings_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::salary_chart::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state_with_cache(path: std::path::PathBuf) -> AppState {
        let mut state = AppState::default();
        state.options.cache.path = path;
        state
    }

    #[test]
    fn start_without_artifact_fetches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(state_with_cache(dir.path().join("job_postings.json")));
        assert!(!app.cache_on_disk);
        assert!(app.postings.is_empty());
        assert_eq!(app.origin, None);
    }

    #[test]
    fn start_with_artifact_loads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_postings.json");
        let day = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        PostingCache::new(&path)
            .save(&[JobPosting::new("Scientist", day, "R1").with_salary(Some((90_000, 110_000)))])
            .unwrap();

        let app = App::new(state_with_cache(path));
        assert!(app.cache_on_disk);
        assert_eq!(app.origin, Some(Origin::Cache));
        assert_eq!(app.postings.len(), 1);
    }
}
