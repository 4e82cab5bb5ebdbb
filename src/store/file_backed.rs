//! File-backed record store.
//!
//! Each record is its own document, `{records_dir}/{id}.json`, written
//! through a temp file and rename so a half-finished write never looks
//! like a record.

use crate::error::ProvisionError;
use crate::store::store::sort_newest_first;
use crate::store::{DeploymentRecord, RecordStore};
use async_trait::async_trait;
use std::path::PathBuf;

/// [`RecordStore`] backed by one JSON file per record.
pub struct FileRecordStore {
    records_dir: PathBuf,
}

impl FileRecordStore {
    /// Store at the default directory (`~/.infra-wizard/deployments`).
    pub async fn new_default() -> Result<Self, ProvisionError> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProvisionError::Storage("could not determine home directory".into()))?;
        Self::new(home.join(".infra-wizard").join("deployments")).await
    }

    /// Store at a custom directory path.
    pub async fn new(records_dir: PathBuf) -> Result<Self, ProvisionError> {
        tokio::fs::create_dir_all(&records_dir)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to create records dir: {e}")))?;
        Ok(Self { records_dir })
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.records_dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn create(&mut self, record: &DeploymentRecord) -> Result<String, ProvisionError> {
        let content = serde_json::to_string_pretty(record)
            .map_err(|e| ProvisionError::Storage(format!("failed to serialize record: {e}")))?;

        let path = self.record_path(&record.id);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to write record: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to commit record: {e}")))?;

        tracing::debug!(id = %record.id, "deployment record stored");
        Ok(record.id.clone())
    }

    async fn load(&self, id: &str) -> Result<Option<DeploymentRecord>, ProvisionError> {
        let path = self.record_path(id);
        if tokio::fs::metadata(&path).await.is_err() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to read record: {e}")))?;
        let record = serde_json::from_str(&content)
            .map_err(|e| ProvisionError::Storage(format!("failed to parse record: {e}")))?;
        Ok(Some(record))
    }

    async fn query_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<DeploymentRecord>, ProvisionError> {
        let mut records = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.records_dir)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to read records dir: {e}")))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to read dir entry: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // Unparseable files are skipped, not fatal
            if let Ok(content) = tokio::fs::read_to_string(&path).await {
                if let Ok(record) = serde_json::from_str::<DeploymentRecord>(&content) {
                    if record.owner_id == owner_id {
                        records.push(record);
                    }
                }
            }
        }

        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&mut self, id: &str) -> Result<(), ProvisionError> {
        let path = self.record_path(id);
        if tokio::fs::metadata(&path).await.is_ok() {
            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| ProvisionError::Storage(format!("failed to delete record: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DeploymentRequest;
    use crate::types::Provider;

    fn make_record(id: &str, created_at: u64) -> DeploymentRecord {
        let mut request = DeploymentRequest::new();
        request.set_project_name("demo");
        request.set_variable("instance_name", "x");
        let mut record = DeploymentRecord::from_request(
            id,
            "uid-1",
            &request,
            Provider::Gcp,
            "compute-engine",
        );
        record.created_at = created_at;
        record.updated_at = created_at;
        record
    }

    #[tokio::test]
    async fn test_file_store_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileRecordStore::new(dir.path().to_path_buf()).await.unwrap();

        let id = store.create(&make_record("dep-1", 100)).await.unwrap();
        assert_eq!(id, "dep-1");

        let loaded = store.load("dep-1").await.unwrap().unwrap();
        assert_eq!(loaded.project_name, "demo");
        assert!(store.load("dep-missing").await.unwrap().is_none());

        store.delete("dep-1").await.unwrap();
        assert!(store.load("dep-1").await.unwrap().is_none());
        store.delete("dep-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_query_skips_bad_files_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileRecordStore::new(dir.path().to_path_buf()).await.unwrap();

        store.create(&make_record("dep-old", 100)).await.unwrap();
        store.create(&make_record("dep-new", 200)).await.unwrap();
        tokio::fs::write(dir.path().join("garbage.json"), "not valid json")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), "ignore me")
            .await
            .unwrap();

        let records = store.query_by_owner("uid-1").await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["dep-new", "dep-old"]);
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = FileRecordStore::new(dir.path().to_path_buf()).await.unwrap();
            store.create(&make_record("dep-55", 100)).await.unwrap();
        }

        let store = FileRecordStore::new(dir.path().to_path_buf()).await.unwrap();
        let loaded = store.load("dep-55").await.unwrap();
        assert!(loaded.is_some());
        assert_eq!(store.query_by_owner("uid-1").await.unwrap().len(), 1);
    }
}
