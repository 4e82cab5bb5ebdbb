//! The deployment request accumulator.
//!
//! The request is the complete snapshot of what the user has entered so far.
//! It's serializable and additive: stepping back and forward through the
//! wizard never drops a field, values only change when the user changes
//! them. The wizard's guards decide whether the accumulated state is good
//! enough to advance; the request itself accepts anything.

use crate::catalog::VariableSpec;
use crate::types::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the user describes across the four wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    /// User-chosen project name, tag for every synthesized resource.
    pub project_name: String,
    /// Target platform. `None` until step one completes.
    pub provider: Option<Provider>,
    /// Catalog service id. Only meaningful relative to `provider`.
    pub service: Option<String>,
    /// Variable name to value, ordered for deterministic output.
    pub variables: BTreeMap<String, String>,
    /// Free-form JSON text merged with the variables at resolution time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_config: Option<String>,
    /// Preview instead of submit.
    pub dry_run: bool,
}

impl DeploymentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Select the target provider.
    ///
    /// A previously selected service is kept as-is even if it belongs to
    /// another provider's catalog; the service step guard rejects it on the
    /// next forward transition rather than silently dropping user input.
    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = Some(provider);
    }

    pub fn set_service(&mut self, service_id: impl Into<String>) {
        self.service = Some(service_id.into());
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn set_custom_config(&mut self, json_text: impl Into<String>) {
        self.custom_config = Some(json_text.into());
    }

    pub fn clear_custom_config(&mut self) {
        self.custom_config = None;
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// Fill in schema defaults for variables the user has not supplied.
    /// Never overwrites a user-entered value, blank or not.
    pub fn apply_defaults(&mut self, schema: &[VariableSpec]) {
        for spec in schema {
            if let Some(default) = spec.default {
                self.variables
                    .entry(spec.name.to_string())
                    .or_insert_with(|| default.to_string());
            }
        }
    }

    /// Value of a variable, if entered.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}
