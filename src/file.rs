// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::{Error, Result};
use crate::report::table::{SalaryRow, TABLE_HEADERS};

/// Write the salary table according to ExportOptions (path, headers, delimiter).
/// Returns the final path written to.
pub fn export_table(export: &ExportOptions, rows: &[SalaryRow]) -> Result<PathBuf> {
    let path = export.out_path();

    let headers: Vec<String> = TABLE_HEADERS.iter().map(|h| s!(*h)).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(SalaryRow::cells).collect();
    let contents = to_export_string(&headers, &cells, export.include_headers, export.format.delim());

    write_output(&path, contents.as_bytes())?;
    Ok(path)
}

/// Create parent directories, then write/overwrite `path`.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let report = |source: io::Error| Error::Report { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(report)?;
        }
    }
    fs::write(path, contents).map_err(report)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
