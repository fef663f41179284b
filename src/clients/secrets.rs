//! Secrets vault backed by `aws-sdk-secretsmanager`.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Builder as SecretsConfigBuilder;
use aws_sdk_secretsmanager::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::Client;

use crate::clients::{SecretSummary, SecretsClient};
use crate::gateway::error::{ServiceError, ServiceFamily};

pub struct SecretsManagerClient {
    client: Client,
}

impl SecretsManagerClient {
    pub async fn new(endpoint_url: &str) -> Self {
        let region = aws_config::meta::region::RegionProviderChain::default_provider()
            .or_else("us-east-1");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let config = SecretsConfigBuilder::from(&sdk_config)
            .endpoint_url(endpoint_url)
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
                family: ServiceFamily::Secrets,
                message,
            }
        }
        other => ServiceError::Generic(other.to_string()),
    }
}

#[async_trait]
impl SecretsClient for SecretsManagerClient {
    async fn create_secret(
        &self,
        name: &str,
        description: &str,
        value: &str,
    ) -> Result<(), ServiceError> {
        self.client
            .create_secret()
            .name(name)
            .description(description)
            .secret_string(value)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn list_secrets(&self) -> Result<Vec<SecretSummary>, ServiceError> {
        let output = self.client.list_secrets().send().await.map_err(classify)?;
        Ok(output
            .secret_list()
            .iter()
            .filter_map(|entry| {
                Some(SecretSummary {
                    name: entry.name()?.to_string(),
                    arn: entry.arn()?.to_string(),
                })
            })
            .collect())
    }

    async fn get_secret_value(&self, secret_id: &str) -> Result<String, ServiceError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(classify)?;

        output
            .secret_string()
            .map(str::to_owned)
            .ok_or_else(|| ServiceError::Unknown("secret has no string value".to_string()))
    }
}
