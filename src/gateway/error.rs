use std::fmt;

use thiserror::Error;

/// Which external service family produced a modeled service error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFamily {
    S3,
    Secrets,
    Dynamo,
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceFamily::S3 => write!(f, "S3"),
            ServiceFamily::Secrets => write!(f, "Secrets"),
            ServiceFamily::Dynamo => write!(f, "Dynamo"),
        }
    }
}

/// Closed error-kind enumeration for failures from the external services.
///
/// Replaces a three-tier exception hierarchy: a modeled error from the
/// specific service, a transport-level failure reaching the service, and
/// everything else. All three surface to the caller as client errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{family} Exception: {message}")]
    ServiceSpecific {
        family: ServiceFamily,
        message: String,
    },
    #[error("Service Exception: {0}")]
    Generic(String),
    #[error("Exception: {0}")]
    Unknown(String),
}

/// Failures surfaced by the gateways: either an underlying service error or
/// a contract-level refusal the gateway itself decides on.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// The requested state transition conflicts with existing remote state
    /// (bucket already present, secret missing from the list).
    #[error("{0}")]
    Conflict(String),
    /// A patch document or the record it produces violates model constraints.
    #[error("{0}")]
    Validation(String),
}
