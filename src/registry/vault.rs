//! [`CredentialVault`] trait definition and the in-memory implementation.

use crate::error::ProvisionError;
use crate::registry::CloudCredentialEntry;
use async_trait::async_trait;

/// Durable store for the credential collection.
///
/// The whole collection lives under one logical key with read/replace
/// semantics: read everything, mutate, write everything back. A missing or
/// empty backing key reads as an empty collection, never an error.
#[async_trait]
pub trait CredentialVault: Send + Sync {
    /// Load the full collection. Empty if nothing has been stored yet.
    async fn load_all(&self) -> Result<Vec<CloudCredentialEntry>, ProvisionError>;

    /// Replace the full collection. Must be atomic: readers observe either
    /// the old collection or the new one, never a partial write.
    async fn store_all(&mut self, entries: &[CloudCredentialEntry]) -> Result<(), ProvisionError>;
}

/// In-memory vault for tests and ephemeral sessions. Nothing survives drop.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Vec<CloudCredentialEntry>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialVault for MemoryVault {
    async fn load_all(&self) -> Result<Vec<CloudCredentialEntry>, ProvisionError> {
        Ok(self.entries.clone())
    }

    async fn store_all(&mut self, entries: &[CloudCredentialEntry]) -> Result<(), ProvisionError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}
