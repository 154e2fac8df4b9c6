// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://abcellera.com/careers-openings/";
pub const USER_AGENT: &str = "salary_scrape/0.3";

// Markup conventions of the careers site
pub const LINK_MARKER: &str = "View position";
pub const PLACEHOLDER_HEADING: &str = "DO YOU DREAM BIG";
pub const HIRING_RANGE_PHRASE: &str = "hiring range";
pub const POSTING_DATE_FORMAT: &str = "%B %d, %Y";
pub const ID_SEPARATOR: &str = ": ";

// Local cache
pub const CACHE_FILE: &str = "job_postings.json";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Report
pub const DEFAULT_BENCHMARK: i64 = 50_000;
pub const DEFAULT_OUT_DIR: &str = ".";
pub const REPORT_STEM: &str = "abcellera_salaries";
pub const CHART_TITLE: &str = "Salaries at AbCellera (Job Postings)";
pub const IMAGE_WIDTH: u32 = 2000;
pub const IMAGE_HEIGHT: u32 = 1000;

// Export
pub const DEFAULT_TABLE_FILE: &str = "salaries";
