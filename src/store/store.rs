//! [`RecordStore`] trait definition and the in-memory implementation.

use crate::error::ProvisionError;
use crate::store::DeploymentRecord;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Trait for persisting deployment records indexed by id.
///
/// Every record is independently keyed, so single-document atomicity is
/// all an implementation must provide: a `create` either lands the whole
/// record or nothing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a record. Overwrites any existing record with this id.
    /// Returns the stored id.
    async fn create(&mut self, record: &DeploymentRecord) -> Result<String, ProvisionError>;

    /// Load a record by id. Returns `None` if not found.
    async fn load(&self, id: &str) -> Result<Option<DeploymentRecord>, ProvisionError>;

    /// All records owned by `owner_id`, newest first.
    async fn query_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<DeploymentRecord>, ProvisionError>;

    /// Delete a record by id. Idempotent.
    async fn delete(&mut self, id: &str) -> Result<(), ProvisionError>;
}

/// Sort newest first, with id as a deterministic tie-breaker.
pub(crate) fn sort_newest_first(records: &mut [DeploymentRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// In-memory record store for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: BTreeMap<String, DeploymentRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&mut self, record: &DeploymentRecord) -> Result<String, ProvisionError> {
        self.records.insert(record.id.clone(), record.clone());
        Ok(record.id.clone())
    }

    async fn load(&self, id: &str) -> Result<Option<DeploymentRecord>, ProvisionError> {
        Ok(self.records.get(id).cloned())
    }

    async fn query_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<DeploymentRecord>, ProvisionError> {
        let mut records: Vec<DeploymentRecord> = self
            .records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&mut self, id: &str) -> Result<(), ProvisionError> {
        self.records.remove(id);
        Ok(())
    }
}
