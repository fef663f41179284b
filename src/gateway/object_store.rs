use std::sync::Arc;

use tracing::info;

use crate::clients::ObjectStoreClient;
use crate::gateway::error::GatewayError;

/// The single well-known bucket every object operation targets.
pub const BUCKET_NAME: &str = "test-bucket";

/// Maps container and object operations onto the object storage service.
pub struct ObjectStoreGateway {
    client: Arc<dyn ObjectStoreClient>,
}

impl ObjectStoreGateway {
    pub fn new(client: Arc<dyn ObjectStoreClient>) -> Self {
        Self { client }
    }

    /// Create the fixed bucket unless it already exists.
    ///
    /// The list-then-create pair is not atomic; two concurrent callers can
    /// both observe the bucket as absent and race on the create, which the
    /// store itself has to tolerate or reject.
    pub async fn create_container(&self) -> Result<(), GatewayError> {
        let buckets = self.client.list_buckets().await?;
        if buckets.iter().any(|b| b == BUCKET_NAME) {
            return Err(GatewayError::Conflict("Bucket already created".to_string()));
        }

        self.client.create_bucket(BUCKET_NAME).await?;
        info!(bucket = BUCKET_NAME, "bucket created");
        Ok(())
    }

    pub async fn upload_object(&self, name: &str, body: Vec<u8>) -> Result<(), GatewayError> {
        self.client.put_object(BUCKET_NAME, name, body).await?;
        Ok(())
    }

    pub async fn download_object(&self, name: &str) -> Result<Vec<u8>, GatewayError> {
        Ok(self.client.get_object(BUCKET_NAME, name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockObjectStoreClient;
    use crate::gateway::error::{ServiceError, ServiceFamily};

    #[tokio::test]
    async fn create_container_succeeds_when_bucket_absent() {
        let mut client = MockObjectStoreClient::new();
        client
            .expect_list_buckets()
            .returning(|| Ok(vec!["other-bucket".to_string()]));
        client
            .expect_create_bucket()
            .withf(|name| name == BUCKET_NAME)
            .times(1)
            .returning(|_| Ok(()));

        let gateway = ObjectStoreGateway::new(Arc::new(client));
        assert!(gateway.create_container().await.is_ok());
    }

    #[tokio::test]
    async fn create_container_conflicts_when_bucket_exists() {
        let mut client = MockObjectStoreClient::new();
        client
            .expect_list_buckets()
            .returning(|| Ok(vec![BUCKET_NAME.to_string()]));

        let gateway = ObjectStoreGateway::new(Arc::new(client));
        let err = gateway.create_container().await.unwrap_err();
        assert!(matches!(err, GatewayError::Conflict(msg) if msg == "Bucket already created"));
    }

    #[tokio::test]
    async fn download_propagates_service_error() {
        let mut client = MockObjectStoreClient::new();
        client.expect_get_object().returning(|_, _| {
            Err(ServiceError::ServiceSpecific {
                family: ServiceFamily::S3,
                message: "The specified key does not exist.".to_string(),
            })
        });

        let gateway = ObjectStoreGateway::new(Arc::new(client));
        let err = gateway.download_object("missing.jpg").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "S3 Exception: The specified key does not exist."
        );
    }

    #[tokio::test]
    async fn upload_then_download_returns_same_bytes() {
        let payload = b"jpeg bytes".to_vec();
        let stored = payload.clone();

        let mut client = MockObjectStoreClient::new();
        client
            .expect_put_object()
            .withf(|bucket, key, body| {
                bucket == BUCKET_NAME && key == "photo.jpg" && body == b"jpeg bytes"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        client
            .expect_get_object()
            .returning(move |_, _| Ok(stored.clone()));

        let gateway = ObjectStoreGateway::new(Arc::new(client));
        gateway
            .upload_object("photo.jpg", payload.clone())
            .await
            .unwrap();
        assert_eq!(gateway.download_object("photo.jpg").await.unwrap(), payload);
    }
}
