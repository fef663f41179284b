use std::env;

/// A single LocalStack instance serves all three families on one port.
const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Per-service endpoint URLs plus the listen port, all environment-driven
/// so the binary can point at LocalStack, separate emulators, or real
/// endpoints without a rebuild.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub s3_endpoint: String,
    pub secrets_endpoint: String,
    pub dynamo_endpoint: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()?;

        Ok(Self {
            s3_endpoint: env_or_default("AWS_S3_ENDPOINT"),
            secrets_endpoint: env_or_default("AWS_SECRETS_ENDPOINT"),
            dynamo_endpoint: env_or_default("AWS_DYNAMO_ENDPOINT"),
            port,
        })
    }
}

fn env_or_default(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}
