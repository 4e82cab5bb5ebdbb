//! [`CloudCredentialEntry`] — stored credentials for one provider.

use crate::types::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One configured provider credential set.
///
/// The registry maintains at most one entry per provider; saving a new
/// entry replaces the prior one atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCredentialEntry {
    /// Unique id, `{provider}-{unix_millis}-{random}` at creation.
    pub id: String,
    pub provider: Provider,
    /// Display label, e.g. "Google Cloud Platform Configuration".
    pub display_name: String,
    /// Field key to entered value, ordered for stable serialization.
    pub field_values: BTreeMap<String, String>,
    /// Unix timestamp (seconds) of the save that created this entry.
    pub configured_at: u64,
}
