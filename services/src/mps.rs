//! `GET /api/mps`: the Master Production Schedule.

use axum::{Extension, Json, extract::State};

use crate::AppState;
use crate::config::Config;
use crate::database::{MpsRecord, MpsStorage};
use crate::error::ApiError;
use crate::snapshot::write_snapshot;

/// Reads every schedule row and returns them in camelCase, ordered by id.
///
/// When a snapshot path is configured the payload is also written to disk.
/// A failed snapshot write is logged and does not fail the request.
#[tracing::instrument(skip_all)]
pub async fn list_mps<S: MpsStorage>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
) -> Result<Json<Vec<MpsRecord>>, ApiError> {
    let rows = state.storage.list_mps().await.map_err(ApiError::MpsFetch)?;
    let records: Vec<MpsRecord> = rows.into_iter().map(MpsRecord::from).collect();
    tracing::debug!(count = records.len(), "Fetched MPS rows");

    if let Some(path) = config.mps_snapshot_path() {
        match write_snapshot(path, &records).await {
            Ok(()) => tracing::debug!(path = %path.display(), "MPS snapshot written"),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to write MPS snapshot");
            }
        }
    }

    Ok(Json(records))
}
