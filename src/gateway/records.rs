use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::clients::RecordStoreClient;
use crate::gateway::error::GatewayError;
use crate::models::{apply_patch, PatchOperation, Record};

/// The single table all record operations target.
pub const TABLE_NAME: &str = "customer";

/// Maps record operations onto the key-value document store.
pub struct RecordStoreGateway {
    client: Arc<dyn RecordStoreClient>,
}

impl RecordStoreGateway {
    pub fn new(client: Arc<dyn RecordStoreClient>) -> Self {
        Self { client }
    }

    /// Create the table if it is not in the listing. Best-effort idempotency
    /// only: concurrent callers can both observe "absent" and both issue the
    /// create, which the store must tolerate or reject.
    async fn ensure_table(&self) -> Result<(), GatewayError> {
        let tables = self.client.list_tables().await?;
        if !tables.iter().any(|t| t == TABLE_NAME) {
            self.client.create_table(TABLE_NAME).await?;
            info!(table = TABLE_NAME, "table created");
        }
        Ok(())
    }

    /// Mint a fresh key, persist a record with the given name, return it.
    pub async fn insert_record(&self, name: String) -> Result<Record, GatewayError> {
        self.ensure_table().await?;

        let record = Record {
            id: Uuid::new_v4().to_string(),
            name,
        };
        self.client.put_record(TABLE_NAME, &record).await?;
        info!(id = %record.id, "record inserted");
        Ok(record)
    }

    /// Full unfiltered scan; ordering is whatever the store yields.
    pub async fn list_records(&self) -> Result<Vec<Record>, GatewayError> {
        Ok(self.client.scan_records(TABLE_NAME).await?)
    }

    /// Load a record by key; `None` when absent (not an error).
    pub async fn get_record(&self, id: &str) -> Result<Option<Record>, GatewayError> {
        Ok(self.client.get_record(TABLE_NAME, id).await?)
    }

    /// Load, apply the whitelisted patch ops, validate, write the full
    /// record back. `None` when the key is absent. An invalid patch leaves
    /// the stored record untouched. Last write wins between concurrent
    /// patches to the same key.
    pub async fn patch_record(
        &self,
        id: &str,
        ops: &[PatchOperation],
    ) -> Result<Option<Record>, GatewayError> {
        let Some(mut record) = self.client.get_record(TABLE_NAME, id).await? else {
            return Ok(None);
        };

        apply_patch(&mut record, ops).map_err(|e| GatewayError::Validation(e.to_string()))?;
        record
            .validate()
            .map_err(|e| GatewayError::Validation(e.to_string()))?;

        self.client.put_record(TABLE_NAME, &record).await?;
        info!(id = %record.id, "record patched");
        Ok(Some(record))
    }
}
