use axum::Json;

use crate::api::error::ApiError;

pub async fn get_schema() -> Result<Json<serde_json::Value>, ApiError> {
    let json_str = crate::schema::schema_json()?;
    let val: serde_json::Value =
        serde_json::from_str(&json_str).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(val))
}
