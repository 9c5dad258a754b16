// SPDX-License-Identifier: MPL-2.0
//! Writing the activity log to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::DiagnosticsCollector;
use crate::error::Result;

/// Generates a default filename for diagnostic reports.
///
/// Format: `iced_playback_overlay_diagnostics_YYYYMMDD_HHMMSS.json`, in local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "iced_playback_overlay_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` to a temporary sibling, then renames it over `path`.
///
/// # Errors
///
/// Returns the I/O error of the write or the rename. The temporary file is
/// removed when the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the default directory for saving diagnostic reports.
///
/// Uses the user's Documents folder if available, otherwise the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Exports the collector's report as JSON into `dir` under a timestamped name.
///
/// Creates `dir` when missing and returns the path of the written file.
///
/// # Errors
///
/// Returns [`crate::error::Error::Export`] if the report cannot be serialized
/// and [`crate::error::Error::Io`] if the file cannot be written.
pub fn export_to_dir(collector: &DiagnosticsCollector, dir: &Path) -> Result<PathBuf> {
    let json = collector.export_json()?;
    fs::create_dir_all(dir)?;
    let path = dir.join(generate_default_filename());
    write_atomic(&path, &json)?;
    Ok(path)
}
