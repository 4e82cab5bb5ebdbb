//! Credential registry: which providers have valid configured credentials.
//!
//! This module contains:
//! - [`CloudCredentialEntry`] — one stored configuration per provider
//! - [`CredentialVault`] trait — the durable collection store, plus
//!   [`MemoryVault`] and [`FileBackedVault`] implementations
//! - [`CredentialRegistry`] — validated save/delete/query over a vault
//!
//! The wizard never reads the storage medium directly; it consumes the
//! registry's configured-provider snapshot at guard time.

mod entry;
mod file_backed;
mod registry;
mod vault;

pub use entry::CloudCredentialEntry;
pub use file_backed::FileBackedVault;
pub use registry::CredentialRegistry;
pub use vault::{CredentialVault, MemoryVault};
