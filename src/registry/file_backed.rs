//! File-backed credential vault.
//!
//! The whole collection is one JSON document. Replacement goes through a
//! temp file and an atomic rename so readers never observe a torn write.

use crate::error::ProvisionError;
use crate::registry::{CloudCredentialEntry, CredentialVault};
use async_trait::async_trait;
use std::path::PathBuf;

/// [`CredentialVault`] backed by a single JSON file.
pub struct FileBackedVault {
    path: PathBuf,
}

impl FileBackedVault {
    /// Vault at the default location (`~/.infra-wizard/credentials.json`).
    pub fn new_default() -> Result<Self, ProvisionError> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProvisionError::Storage("could not determine home directory".into()))?;
        Ok(Self::new(home.join(".infra-wizard").join("credentials.json")))
    }

    /// Vault at a custom file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl CredentialVault for FileBackedVault {
    async fn load_all(&self) -> Result<Vec<CloudCredentialEntry>, ProvisionError> {
        if tokio::fs::metadata(&self.path).await.is_err() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to read credentials: {e}")))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| ProvisionError::Storage(format!("failed to parse credentials: {e}")))
    }

    async fn store_all(&mut self, entries: &[CloudCredentialEntry]) -> Result<(), ProvisionError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ProvisionError::Storage(format!("failed to create credentials dir: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ProvisionError::Storage(format!("failed to serialize credentials: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to write credentials: {e}")))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ProvisionError::Storage(format!("failed to replace credentials: {e}")))?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "credential collection stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CredentialRegistry;
    use crate::types::Provider;
    use std::collections::BTreeMap;

    fn azure_fields() -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("subscription_id".to_string(), "sub-1".to_string());
        fields.insert("client_id".to_string(), "client-1".to_string());
        fields.insert("client_secret".to_string(), "hunter2".to_string());
        fields.insert("tenant_id".to_string(), "tenant-1".to_string());
        fields.insert("location".to_string(), "East US".to_string());
        fields
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FileBackedVault::new(dir.path().join("credentials.json"));
        assert!(vault.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lifecycle_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        {
            let vault = FileBackedVault::new(path.clone());
            let mut registry = CredentialRegistry::new(vault);
            registry.save(Provider::Azure, azure_fields()).await.unwrap();
        }

        let registry = CredentialRegistry::new(FileBackedVault::new(path));
        let entries = registry.list_configured().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].provider, Provider::Azure);
        assert_eq!(
            entries[0].field_values.get("location").map(String::as_str),
            Some("East US")
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        tokio::fs::write(&path, "not valid json").await.unwrap();

        let vault = FileBackedVault::new(path);
        let err = vault.load_all().await.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn test_no_leftover_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let mut vault = FileBackedVault::new(path.clone());
        vault.store_all(&[]).await.unwrap();

        assert!(tokio::fs::metadata(&path).await.is_ok());
        assert!(tokio::fs::metadata(path.with_extension("json.tmp"))
            .await
            .is_err());
    }
}
