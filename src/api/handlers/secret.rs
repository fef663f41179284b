use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SecretParams {
    #[serde(rename = "secretName")]
    pub secret_name: String,
}

/// Create a secret under the given name with the fixed placeholder value.
#[tracing::instrument(skip(state), fields(secret_name = %params.secret_name))]
pub async fn create_secret_handler(
    State(state): State<AppState>,
    Query(params): Query<SecretParams>,
) -> ApiResult<StatusCode> {
    info!("Processing create-secret request");
    state.secrets.create_secret(&params.secret_name).await?;
    Ok(StatusCode::OK)
}

/// Resolve a secret by name from the listing and return its value.
#[tracing::instrument(skip(state), fields(secret_name = %params.secret_name))]
pub async fn list_secret_handler(
    State(state): State<AppState>,
    Query(params): Query<SecretParams>,
) -> ApiResult<String> {
    info!("Processing list-secret request");
    let value = state
        .secrets
        .list_and_fetch_secret(&params.secret_name)
        .await?;
    Ok(value)
}
