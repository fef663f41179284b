// Gateways - the behavioral contract between the HTTP layer and the
// external services. Each gateway holds one injected client capability and
// owns the fixed resource names; handlers only translate to and from HTTP.

pub mod error;
pub mod object_store;
pub mod records;
pub mod secrets;

pub use error::{GatewayError, ServiceError, ServiceFamily};
pub use object_store::ObjectStoreGateway;
pub use records::RecordStoreGateway;
pub use secrets::SecretsGateway;
