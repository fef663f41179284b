use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;

// Downloads are always served as images; there is no per-object metadata.
const DOWNLOAD_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// Create the fixed bucket; 400 with a conflict message if it exists.
#[tracing::instrument(skip(state))]
pub async fn create_bucket_handler(State(state): State<AppState>) -> ApiResult<StatusCode> {
    info!("Processing create-bucket request");
    state.object_store.create_container().await?;
    Ok(StatusCode::OK)
}

/// Store the uploaded file content under the `fileName` query parameter.
#[tracing::instrument(skip(state, multipart), fields(file_name = %params.file_name))]
pub async fn upload_file_handler(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> ApiResult<StatusCode> {
    info!("Processing upload request");

    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read file field: {e}")))?;

    state
        .object_store
        .upload_object(&params.file_name, bytes.to_vec())
        .await?;
    Ok(StatusCode::OK)
}

/// Stream the object back with the fixed content type.
#[tracing::instrument(skip(state))]
pub async fn download_file_handler(
    Path(file_name): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    info!("Processing download request");
    let bytes = state.object_store.download_object(&file_name).await?;
    Ok(([(header::CONTENT_TYPE, DOWNLOAD_CONTENT_TYPE)], bytes).into_response())
}
