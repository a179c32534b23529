//! JSON mirror of the last successful MPS response.
//!
//! Nothing in the service reads the file back; it exists for operators who
//! want an on-disk copy of the schedule. Disabled unless `MPS_SNAPSHOT_PATH`
//! is set.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Overwrites `path` with `payload` as pretty-printed JSON.
///
/// The payload goes to a sibling temp file that is then renamed over `path`,
/// so readers and concurrent writers only ever see a complete snapshot.
pub async fn write_snapshot<T: Serialize + ?Sized>(
    path: &Path,
    payload: &T,
) -> Result<(), SnapshotError> {
    let json = serde_json::to_vec_pretty(payload)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let temp = temp_path(path);
    tokio::fs::write(&temp, json).await?;
    if let Err(err) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(err.into());
    }
    Ok(())
}

/// Unique hidden file next to `path`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_owned());
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{n}.tmp", std::process::id()))
}
