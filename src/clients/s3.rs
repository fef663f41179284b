//! Object storage backed by `aws-sdk-s3`.
//!
//! Pointing `endpoint_url` at a LocalStack or MinIO instance makes the
//! client talk to the emulator; path-style addressing is forced because
//! those emulators do not resolve virtual-host bucket names.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::clients::ObjectStoreClient;
use crate::gateway::error::{ServiceError, ServiceFamily};

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Build the client against the given endpoint, resolving region and
    /// credentials from the standard AWS chain. For LocalStack set
    /// `AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY` to any value.
    pub async fn new(endpoint_url: &str) -> Self {
        let region = aws_config::meta::region::RegionProviderChain::default_provider()
            .or_else("us-east-1");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let config = S3ConfigBuilder::from(&sdk_config)
            .endpoint_url(endpoint_url)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }
}

fn classify<E>(err: SdkError<E>) -> ServiceError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(ctx) => {
            let err = ctx.into_err();
            let message = err
                .message()
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string());
            ServiceError::ServiceSpecific {
                family: ServiceFamily::S3,
                message,
            }
        }
        other => ServiceError::Generic(other.to_string()),
    }
}

#[async_trait]
impl ObjectStoreClient for S3ObjectStore {
    async fn list_buckets(&self) -> Result<Vec<String>, ServiceError> {
        let output = self.client.list_buckets().send().await.map_err(classify)?;
        Ok(output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_owned))
            .collect())
    }

    async fn create_bucket(&self, name: &str) -> Result<(), ServiceError> {
        self.client
            .create_bucket()
            .bucket(name)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ServiceError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ServiceError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(classify)?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| ServiceError::Unknown(format!("failed to read object body: {e}")))?;
        Ok(bytes.into_bytes().to_vec())
    }
}
