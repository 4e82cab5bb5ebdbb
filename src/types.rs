//! Minimal domain types shared across the wizard, registry, store, and engine.
//!
//! These are the types the workflow needs. Nothing more.

use serde::{Deserialize, Serialize};

/// A supported cloud platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gcp,
    Aws,
    Azure,
}

impl Provider {
    /// All supported providers, in catalog order.
    pub const ALL: [Provider; 3] = [Provider::Gcp, Provider::Aws, Provider::Azure];

    /// Stable lowercase identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Gcp => "gcp",
            Provider::Aws => "aws",
            Provider::Azure => "azure",
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gcp => "Google Cloud Platform",
            Provider::Aws => "Amazon Web Services",
            Provider::Azure => "Microsoft Azure",
        }
    }

    /// Parse a provider id, case-insensitive. Returns `None` for unknown ids.
    pub fn parse(s: &str) -> Option<Provider> {
        match s.to_ascii_lowercase().as_str() {
            "gcp" => Some(Provider::Gcp),
            "aws" => Some(Provider::Aws),
            "azure" => Some(Provider::Azure),
            _ => None,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Processing status of a persisted deployment record.
///
/// The wizard only ever creates records as `Pending`; the external
/// processing system advances the status from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl RecordStatus {
    pub fn name(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Running => "running",
            RecordStatus::Completed => "completed",
            RecordStatus::Failed => "failed",
        }
    }
}

/// The current session identity, supplied by an external collaborator.
///
/// Record ownership is bound to `uid`; a blank uid is a hard precondition
/// failure for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

pub(crate) fn current_unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub(crate) fn current_unix_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
