//! Capability traits over the external cloud services.
//!
//! Each gateway depends on one of these traits rather than on a concrete
//! SDK client, so the HTTP layer can be exercised against mocks and the AWS
//! implementations stay swappable for any wire-compatible emulator.

pub mod dynamo;
pub mod s3;
pub mod secrets;

use async_trait::async_trait;
use mockall::automock;

use crate::gateway::error::ServiceError;
use crate::models::Record;

pub use dynamo::DynamoRecordStore;
pub use s3::S3ObjectStore;
pub use secrets::SecretsManagerClient;

/// Metadata row returned by the secrets listing call; the identifier is what
/// the follow-up value lookup resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSummary {
    pub name: String,
    pub arn: String,
}

#[automock]
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    async fn list_buckets(&self) -> Result<Vec<String>, ServiceError>;
    async fn create_bucket(&self, name: &str) -> Result<(), ServiceError>;
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ServiceError>;
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ServiceError>;
}

#[automock]
#[async_trait]
pub trait SecretsClient: Send + Sync {
    async fn create_secret(
        &self,
        name: &str,
        description: &str,
        value: &str,
    ) -> Result<(), ServiceError>;
    async fn list_secrets(&self) -> Result<Vec<SecretSummary>, ServiceError>;
    async fn get_secret_value(&self, secret_id: &str) -> Result<String, ServiceError>;
}

#[automock]
#[async_trait]
pub trait RecordStoreClient: Send + Sync {
    async fn list_tables(&self) -> Result<Vec<String>, ServiceError>;
    /// Create a table keyed by a single string hash attribute `Id`.
    async fn create_table(&self, name: &str) -> Result<(), ServiceError>;
    async fn put_record(&self, table: &str, record: &Record) -> Result<(), ServiceError>;
    async fn scan_records(&self, table: &str) -> Result<Vec<Record>, ServiceError>;
    async fn get_record(&self, table: &str, id: &str) -> Result<Option<Record>, ServiceError>;
}
