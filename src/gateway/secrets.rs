use std::sync::Arc;

use tracing::info;

use crate::clients::SecretsClient;
use crate::gateway::error::GatewayError;

const SECRET_DESCRIPTION: &str = "Secrets Test";

// Illustrative placeholder only - this service never handles real
// credentials.
const SECRET_VALUE: &str =
    "Server=127.0.0.1;Port=5432;Database=myDataBase;User Id=myUsername;Password=myPassword;";

/// Maps secret operations onto the secrets management service.
pub struct SecretsGateway {
    client: Arc<dyn SecretsClient>,
}

impl SecretsGateway {
    pub fn new(client: Arc<dyn SecretsClient>) -> Self {
        Self { client }
    }

    /// Create a secret under the given name with the fixed placeholder value.
    pub async fn create_secret(&self, name: &str) -> Result<(), GatewayError> {
        self.client
            .create_secret(name, SECRET_DESCRIPTION, SECRET_VALUE)
            .await?;
        info!(secret = name, "secret created");
        Ok(())
    }

    /// Find a secret by exact name in the listing, then fetch its value by
    /// the listed identifier. Always two round trips, no caching between
    /// the list and the fetch.
    pub async fn list_and_fetch_secret(&self, name: &str) -> Result<String, GatewayError> {
        let secrets = self.client.list_secrets().await?;
        if secrets.is_empty() {
            return Err(GatewayError::Conflict("List Secrets Empty".to_string()));
        }

        let secret = secrets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| GatewayError::Conflict("Secret name not found".to_string()))?;

        Ok(self.client.get_secret_value(&secret.arn).await?)
    }
}
