//! Error types for the provisioning wizard and resolution engine.
//!
//! No `anyhow` leakage. Explicit, typed errors. Validation failures are a
//! separate enum because the wizard surfaces them inline at the step that
//! produced them; they never cross the resolution boundary.

use crate::types::Provider;

/// A recoverable input problem, surfaced at the wizard step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("no cloud provider selected")]
    NoProviderSelected,

    #[error("provider {0} has no configured credentials")]
    ProviderNotConfigured(Provider),

    #[error("no service selected")]
    NoServiceSelected,

    #[error("service '{service}' is not in the {provider} catalog")]
    UnknownService { provider: Provider, service: String },

    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("custom config is not valid JSON: {0}")]
    InvalidCustomConfig(String),
}

/// Top-level error for registry, store, and engine operations.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No provider is configured at all — blocks the wizard until the user
    /// configures one through the credential surface.
    #[error("no cloud providers are configured")]
    NoProvidersConfigured,

    /// The caller has no resolved identity; record ownership cannot be bound.
    #[error("no signed-in identity available")]
    MissingIdentity,

    #[error("invalid wizard state: {0}")]
    InvalidState(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ProvisionError {
    /// Whether re-invoking the failed operation could succeed without
    /// any input changing. Only storage failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProvisionError::Storage(_))
    }
}
