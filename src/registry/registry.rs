//! [`CredentialRegistry`] — validated credential lifecycle over a vault.

use crate::catalog;
use crate::error::{ProvisionError, ValidationError};
use crate::registry::{CloudCredentialEntry, CredentialVault};
use crate::types::{current_unix_millis, current_unix_time, Provider};
use std::collections::BTreeMap;

/// Query and mutate the configured-credential collection.
///
/// Parameterized by the vault — you provide the durable backing store.
pub struct CredentialRegistry<V: CredentialVault> {
    vault: V,
}

impl<V: CredentialVault> CredentialRegistry<V> {
    pub fn new(vault: V) -> Self {
        Self { vault }
    }

    /// All stored entries. An empty collection is a valid answer; callers
    /// gate provider selection on it.
    pub async fn list_configured(&self) -> Result<Vec<CloudCredentialEntry>, ProvisionError> {
        self.vault.load_all().await
    }

    /// Providers that currently have credentials, in stored order.
    pub async fn configured_providers(&self) -> Result<Vec<Provider>, ProvisionError> {
        Ok(self
            .list_configured()
            .await?
            .iter()
            .map(|entry| entry.provider)
            .collect())
    }

    pub async fn is_configured(&self, provider: Provider) -> Result<bool, ProvisionError> {
        Ok(self
            .list_configured()
            .await?
            .iter()
            .any(|entry| entry.provider == provider))
    }

    /// Validate and store credentials for a provider, replacing any prior
    /// entry for that provider in one collection write.
    ///
    /// Fails with [`ValidationError::MissingFields`] naming the labels of
    /// every required field that is absent or blank.
    pub async fn save(
        &mut self,
        provider: Provider,
        fields: BTreeMap<String, String>,
    ) -> Result<CloudCredentialEntry, ProvisionError> {
        let missing: Vec<String> = catalog::credential_schema_for(provider)
            .iter()
            .filter(|spec| {
                spec.required
                    && fields
                        .get(spec.key)
                        .map(|v| v.trim().is_empty())
                        .unwrap_or(true)
            })
            .map(|spec| spec.label.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing }.into());
        }

        let entry = CloudCredentialEntry {
            id: generate_entry_id(provider),
            provider,
            display_name: format!("{} Configuration", provider.display_name()),
            field_values: fields,
            configured_at: current_unix_time(),
        };

        let mut entries = self.vault.load_all().await?;
        entries.retain(|existing| existing.provider != provider);
        entries.push(entry.clone());
        self.vault.store_all(&entries).await?;

        tracing::info!(provider = provider.id(), "credentials saved");
        Ok(entry)
    }

    /// Remove an entry by id. Deleting an unknown id is a no-op success.
    pub async fn delete(&mut self, entry_id: &str) -> Result<(), ProvisionError> {
        let entries = self.vault.load_all().await?;
        let remaining: Vec<CloudCredentialEntry> = entries
            .iter()
            .filter(|entry| entry.id != entry_id)
            .cloned()
            .collect();

        if remaining.len() == entries.len() {
            return Ok(());
        }

        self.vault.store_all(&remaining).await?;
        tracing::info!(entry_id, "credentials deleted");
        Ok(())
    }
}

// Random suffix keeps ids unique when saves land in the same millisecond
fn generate_entry_id(provider: Provider) -> String {
    format!(
        "{}-{}-{:08x}",
        provider.id(),
        current_unix_millis(),
        rand::random::<u32>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryVault;

    fn gcp_fields() -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("project_id".to_string(), "demo-123".to_string());
        fields.insert("service_account_key".to_string(), "{}".to_string());
        fields.insert("region".to_string(), "us-central1".to_string());
        fields
    }

    #[tokio::test]
    async fn test_save_and_query() {
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        assert!(!registry.is_configured(Provider::Gcp).await.unwrap());

        let entry = registry.save(Provider::Gcp, gcp_fields()).await.unwrap();
        assert!(entry.id.starts_with("gcp-"));
        assert_eq!(entry.display_name, "Google Cloud Platform Configuration");

        assert!(registry.is_configured(Provider::Gcp).await.unwrap());
        assert!(!registry.is_configured(Provider::Aws).await.unwrap());
        assert_eq!(
            registry.configured_providers().await.unwrap(),
            vec![Provider::Gcp]
        );
    }

    #[tokio::test]
    async fn test_save_rejects_missing_fields() {
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        let mut fields = BTreeMap::new();
        fields.insert("project_id".to_string(), "demo".to_string());
        fields.insert("region".to_string(), "  ".to_string());

        let err = registry.save(Provider::Gcp, fields).await.unwrap_err();
        match err {
            ProvisionError::Validation(ValidationError::MissingFields { fields }) => {
                assert_eq!(
                    fields,
                    vec![
                        "Service Account Key (JSON)".to_string(),
                        "Default Region".to_string()
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(registry.list_configured().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_optional_credential_field_may_be_absent() {
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        let mut fields = BTreeMap::new();
        fields.insert("access_key_id".to_string(), "AKIA...".to_string());
        fields.insert("secret_access_key".to_string(), "secret".to_string());
        fields.insert("region".to_string(), "us-east-1".to_string());
        // session_token omitted
        registry.save(Provider::Aws, fields).await.unwrap();
        assert!(registry.is_configured(Provider::Aws).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_replaces_prior_entry_for_provider() {
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        let first = registry.save(Provider::Gcp, gcp_fields()).await.unwrap();

        let mut updated = gcp_fields();
        updated.insert("region".to_string(), "europe-west1".to_string());
        let second = registry.save(Provider::Gcp, updated).await.unwrap();

        let entries = registry.list_configured().await.unwrap();
        assert_eq!(entries.len(), 1, "exactly one entry per provider");
        assert_eq!(entries[0].id, second.id);
        assert_ne!(entries[0].id, first.id);
        assert_eq!(
            entries[0].field_values.get("region").map(String::as_str),
            Some("europe-west1")
        );
    }

    #[tokio::test]
    async fn test_back_to_back_saves_get_distinct_ids() {
        // Saves can land within the same millisecond; ids must still differ
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        let first = registry.save(Provider::Gcp, gcp_fields()).await.unwrap();
        let second = registry.save(Provider::Gcp, gcp_fields()).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mut registry = CredentialRegistry::new(MemoryVault::new());
        let entry = registry.save(Provider::Gcp, gcp_fields()).await.unwrap();

        registry.delete("no-such-id").await.unwrap();
        assert_eq!(registry.list_configured().await.unwrap().len(), 1);

        registry.delete(&entry.id).await.unwrap();
        assert!(registry.list_configured().await.unwrap().is_empty());

        // Deleting again is still a success
        registry.delete(&entry.id).await.unwrap();
    }
}
