//! Whitelisted partial-patch operations for [`Record`].
//!
//! The wire format is a JSON-Patch-shaped array (`[{op, path, value}]`) but
//! application is a closed whitelist: only `replace` and `remove` on `/name`
//! are recognized. Anything else is rejected before the store is touched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Replace,
    Remove,
}

/// A single field-level operation from the PATCH request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("path '{0}' is not patchable")]
    UnknownPath(String),
    #[error("replace on '{0}' requires a string value")]
    InvalidValue(String),
}

/// Apply the given operations to an in-memory record.
///
/// The record is mutated in place; callers validate the result with
/// [`Record::validate`] before persisting, so a failed patch or a patch that
/// leaves the record invalid never reaches the store.
pub fn apply_patch(record: &mut Record, ops: &[PatchOperation]) -> Result<(), PatchError> {
    for op in ops {
        match op.path.as_str() {
            "/name" => match op.op {
                PatchOp::Replace => {
                    let value = op
                        .value
                        .as_ref()
                        .and_then(|v| v.as_str())
                        .ok_or_else(|| PatchError::InvalidValue(op.path.clone()))?;
                    record.name = value.to_string();
                }
                // Name is required, so a remove always fails the later
                // validation pass; the field is cleared here and the
                // caller surfaces the constraint violation.
                PatchOp::Remove => record.name.clear(),
            },
            other => return Err(PatchError::UnknownPath(other.to_string())),
        }
    }
    Ok(())
}
