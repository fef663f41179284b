use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::server::AppState;
use crate::models::{CreateRecordRequest, PatchOperation, Record};

#[derive(Debug, Deserialize)]
pub struct UpdateParams {
    pub id: String,
}

/// Create a record from the JSON body, returning 201 with the stored record.
#[tracing::instrument(skip(state, body), fields(name = %body.name))]
pub async fn insert_record_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateRecordRequest>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    info!("Processing insert request");
    let record = state.records.insert_record(body.name).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Scan and return every record, in whatever order the store yields.
#[tracing::instrument(skip(state))]
pub async fn list_records_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Record>>> {
    info!("Processing list request");
    let records = state.records.list_records().await?;
    Ok(Json(records))
}

/// Fetch one record by key; 204 when the key was never inserted.
#[tracing::instrument(skip(state))]
pub async fn get_record_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Response> {
    info!("Processing get request");
    match state.records.get_record(&id).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Apply a partial-patch document to a record; 204 when the key is absent,
/// 400 when the patch violates model constraints.
#[tracing::instrument(skip(state, ops), fields(id = %params.id))]
pub async fn update_record_handler(
    State(state): State<AppState>,
    Query(params): Query<UpdateParams>,
    Json(ops): Json<Vec<PatchOperation>>,
) -> ApiResult<Response> {
    info!("Processing update request");
    match state.records.patch_record(&params.id, &ops).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
