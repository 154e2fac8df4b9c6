// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub cache: CacheOptions,
    pub report: ReportOptions,
    /// Table export is opt-in.
    pub export: Option<ExportOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { listing_url: s!(LISTING_URL) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub path: PathBuf,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(CACHE_FILE) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Horizontal High/Low bars per role, vertical benchmark line
    #[default]
    GroupedBar,
    /// One low..high box per role, horizontal benchmark line
    Box,
}

impl ChartStyle {
    pub fn label(&self) -> &'static str {
        match self {
            ChartStyle::GroupedBar => "Grouped bars",
            ChartStyle::Box => "Box",
        }
    }
}

impl FromStr for ChartStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grouped" | "bar" | "bars" => Ok(ChartStyle::GroupedBar),
            "box" => Ok(ChartStyle::Box),
            other => Err(format!("Unknown chart style: {other} (expected grouped|box)")),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartStyle::GroupedBar => "grouped",
            ChartStyle::Box => "box",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub out_dir: PathBuf,
    pub stem: String,
    pub title: String,
    pub style: ChartStyle,
    pub width: u32,
    pub height: u32,
    pub benchmark: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stem: s!(REPORT_STEM),
            title: s!(CHART_TITLE),
            style: ChartStyle::default(),
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            benchmark: DEFAULT_BENCHMARK,
        }
    }
}

impl ReportOptions {
    pub fn html_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.stem, ".html"))
    }

    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.stem, ".png"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            path: PathBuf::from(DEFAULT_TABLE_FILE),
        }
    }
}

impl ExportOptions {
    pub fn new(path: impl AsRef<Path>, format: ExportFormat) -> Self {
        let mut opts = Self { format, ..Self::default() };
        opts.set_path(path);
        opts
    }

    /// A user-supplied extension is kept; otherwise the format decides it.
    pub fn out_path(&self) -> PathBuf {
        if self.path.extension().is_some() {
            self.path.clone()
        } else {
            self.path.with_extension(self.format.ext())
        }
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.path = path.as_ref().to_path_buf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_paths_share_stem() {
        let opts = ReportOptions { out_dir: PathBuf::from("out"), ..ReportOptions::default() };
        assert_eq!(opts.html_path(), Path::new("out").join("abcellera_salaries.html"));
        assert_eq!(opts.png_path(), Path::new("out").join("abcellera_salaries.png"));
    }

    #[test]
    fn export_extension_follows_format_unless_given() {
        let mut opts = ExportOptions::new("table", ExportFormat::Tsv);
        assert_eq!(opts.out_path(), PathBuf::from("table.tsv"));
        opts.set_path("table.txt");
        assert_eq!(opts.out_path(), PathBuf::from("table.txt"));
    }

    #[test]
    fn chart_style_parses_cli_values() {
        assert_eq!("box".parse::<ChartStyle>(), Ok(ChartStyle::Box));
        assert_eq!("Grouped".parse::<ChartStyle>(), Ok(ChartStyle::GroupedBar));
        assert!("pie".parse::<ChartStyle>().is_err());
    }
}
