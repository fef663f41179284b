pub mod api;
pub mod clients;
pub mod config;
pub mod gateway;
pub mod models;

// Re-export commonly used types
pub use clients::{
    MockObjectStoreClient, MockRecordStoreClient, MockSecretsClient, ObjectStoreClient,
    RecordStoreClient, SecretSummary, SecretsClient,
};

pub use gateway::{
    GatewayError, ObjectStoreGateway, RecordStoreGateway, SecretsGateway, ServiceError,
    ServiceFamily,
};

pub use models::{apply_patch, PatchOp, PatchOperation, Record};
