use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::dynamo::{
    get_record_handler, insert_record_handler, list_records_handler, update_record_handler,
};
use crate::api::handlers::s3::{create_bucket_handler, download_file_handler, upload_file_handler};
use crate::api::handlers::secret::{create_secret_handler, list_secret_handler};
use crate::clients::{
    DynamoRecordStore, ObjectStoreClient, RecordStoreClient, S3ObjectStore, SecretsClient,
    SecretsManagerClient,
};
use crate::config::AppConfig;
use crate::gateway::{ObjectStoreGateway, RecordStoreGateway, SecretsGateway};

/// Shared handler state: one gateway per service family. Gateways are
/// stateless, so cloning the state per request just bumps refcounts.
#[derive(Clone)]
pub struct AppState {
    pub object_store: Arc<ObjectStoreGateway>,
    pub secrets: Arc<SecretsGateway>,
    pub records: Arc<RecordStoreGateway>,
}

impl AppState {
    pub fn new(
        object_store: Arc<dyn ObjectStoreClient>,
        secrets: Arc<dyn SecretsClient>,
        records: Arc<dyn RecordStoreClient>,
    ) -> Self {
        Self {
            object_store: Arc::new(ObjectStoreGateway::new(object_store)),
            secrets: Arc::new(SecretsGateway::new(secrets)),
            records: Arc::new(RecordStoreGateway::new(records)),
        }
    }

    /// Build AWS SDK clients against the configured (emulator) endpoints.
    pub async fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(S3ObjectStore::new(&config.s3_endpoint).await),
            Arc::new(SecretsManagerClient::new(&config.secrets_endpoint).await),
            Arc::new(DynamoRecordStore::new(&config.dynamo_endpoint).await),
        )
    }
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/services/s3/create-bucket", get(create_bucket_handler))
        .route("/api/services/s3/upload-file", post(upload_file_handler))
        .route(
            "/api/services/s3/download-file/{fileName}",
            get(download_file_handler),
        )
        .route("/api/services/secret/create", post(create_secret_handler))
        .route("/api/services/secret/list", get(list_secret_handler))
        .route("/api/services/dynamo/insert", post(insert_record_handler))
        .route("/api/services/dynamo/list", get(list_records_handler))
        .route("/api/services/dynamo/get/{id}", get(get_record_handler))
        .route("/api/services/dynamo/update", patch(update_record_handler))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn create_app() -> Result<Router, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(
        s3 = %config.s3_endpoint,
        secrets = %config.secrets_endpoint,
        dynamo = %config.dynamo_endpoint,
        "Configured service endpoints"
    );
    let state = AppState::from_config(&config).await;
    Ok(router(state))
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting localstack gateway server");

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let config = AppConfig::from_env()?;
    let app = create_app().await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
