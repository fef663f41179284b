use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted length for a record name.
pub const MAX_NAME_LEN: usize = 256;

/// The single modeled entity: a key + name pair stored in the document store.
///
/// The key is minted server-side at insert time and never changes afterwards;
/// it uniquely identifies the record within the single `customer` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
}

/// Body of the insert endpoint - the server supplies the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must not exceed {MAX_NAME_LEN} characters")]
    NameTooLong,
}

impl Record {
    /// Check the record against the model constraints enforced on the
    /// patch path before the updated record is written back.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ModelError::NameTooLong);
        }
        Ok(())
    }
}
