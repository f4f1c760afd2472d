pub mod error;
pub mod snapshot;
pub mod writer;

pub use error::{ExportError, Result};
pub use snapshot::Snapshot;
pub use writer::ExportedFile;

use sqlx::SqlitePool;
use std::path::Path;
use storage::LeagueSettings;

/// Reads the league from `pool` and writes the public JSON files to `output`.
pub async fn export(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    output: &Path,
) -> Result<Vec<ExportedFile>> {
    let snapshot = Snapshot::collect(pool, settings).await?;
    snapshot.write_to(output)
}

#[cfg(test)]
mod tests;
