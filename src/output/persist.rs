use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::output::format::{OutputFormat, render};
use crate::snapshot::document::Document;
use crate::snapshot::error::SnapshotError;

pub const DEFAULT_OUTPUT_DIR: &str = "element_collector_output";

const FILE_PREFIX: &str = "page_elements_";

/// `page_elements_<yyyyMMdd_HHmmss>.<ext>`
pub fn snapshot_file_name(saved_at: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        saved_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Render `document` and write it under `dir`, creating the directory when
/// needed. Returns the path written.
pub fn save_document(
    document: &Document,
    dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, SnapshotError> {
    save_document_at(document, dir, format, Local::now().naive_local())
}

pub fn save_document_at(
    document: &Document,
    dir: &Path,
    format: OutputFormat,
    saved_at: NaiveDateTime,
) -> Result<PathBuf, SnapshotError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| SnapshotError::io(format!("creating {}", dir.display()), e))?;

    let path = dir.join(snapshot_file_name(saved_at, format));
    let content = render(document, format)?;

    std::fs::write(&path, content)
        .map_err(|e| SnapshotError::io(format!("writing {}", path.display()), e))?;

    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(path)
}
