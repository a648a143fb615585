use axum::Json;
use axum::extract::{Multipart, State};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::{DataFileEntry, DataManifestResponse, UploadResponse};
use crate::pipeline::cache;

pub async fn upload_data(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("multipart error: {e}")))?
        .ok_or_else(|| ApiError::BadRequest("no file uploaded".to_string()))?;

    let name = field.file_name().unwrap_or("unnamed.csv").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("reading field: {e}")))?;

    let upload_id = cache::content_key(&bytes);

    let state_inner = state.inner.read().await;
    let uploads_dir = state_inner.uploads_dir();
    let path = state_inner.upload_path(&upload_id);
    drop(state_inner);

    std::fs::create_dir_all(&uploads_dir)
        .map_err(|e| ApiError::Internal(format!("creating uploads dir: {e}")))?;
    std::fs::write(&path, &bytes)
        .map_err(|e| ApiError::Internal(format!("writing {name}: {e}")))?;

    Ok(Json(UploadResponse {
        upload_id,
        name,
        size: bytes.len() as u64,
    }))
}

pub async fn get_manifest(
    State(state): State<AppState>,
) -> Result<Json<DataManifestResponse>, ApiError> {
    let state_inner = state.inner.read().await;
    let uploads_dir = state_inner.uploads_dir();
    drop(state_inner);

    let mut files = Vec::new();

    if uploads_dir.exists() {
        for entry in std::fs::read_dir(&uploads_dir)
            .map_err(|e| ApiError::Internal(format!("reading uploads dir: {e}")))?
        {
            let entry = entry.map_err(|e| ApiError::Internal(e.to_string()))?;
            let meta = entry
                .metadata()
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            if meta.is_file() {
                files.push(DataFileEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    size: meta.len(),
                });
            }
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(DataManifestResponse { files }))
}
