use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::snapshot::Snapshot;

/// A file written by the exporter and how many records it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub records: usize,
}

/// Pretty-printed JSON array followed by a newline.
pub fn write_json<T: Serialize>(dir: &Path, filename: &str, records: &[T]) -> Result<ExportedFile> {
    let path = dir.join(filename);

    let mut contents = serde_json::to_string_pretty(records)?;
    contents.push('\n');

    fs::write(&path, contents).map_err(|source| ExportError::WriteError {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Exported {} ({} records)", filename, records.len());

    Ok(ExportedFile {
        path,
        records: records.len(),
    })
}

impl Snapshot {
    /// Writes the five public files into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<ExportedFile>> {
        fs::create_dir_all(dir).map_err(|source| ExportError::WriteError {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(vec![
            write_json(dir, "standings.json", &self.standings)?,
            write_json(dir, "upcoming.json", &self.upcoming)?,
            write_json(dir, "recent.json", &self.recent)?,
            write_json(dir, "jornadas.json", &self.jornadas)?,
            write_json(dir, "matches.json", &self.matches)?,
        ])
    }
}
