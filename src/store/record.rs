//! [`DeploymentRecord`] — the persisted outcome of a submission.

use crate::request::DeploymentRequest;
use crate::types::{current_unix_time, Provider, RecordStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A submitted deployment, as stored.
///
/// Created once by the resolution engine with [`RecordStatus::Pending`];
/// the external processing system owns every status change after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub id: String,
    /// Identity uid of the submitting user.
    pub owner_id: String,
    pub project_name: String,
    pub provider: Provider,
    pub service: String,
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_config: Option<String>,
    pub status: RecordStatus,
    /// Unix timestamp (seconds) of creation.
    pub created_at: u64,
    /// Unix timestamp of last status change.
    pub updated_at: u64,
}

impl DeploymentRecord {
    /// Build a pending record from a finished request.
    ///
    /// The request must have passed the wizard's guards; a request without
    /// provider or service cannot reach this point through the engine.
    pub fn from_request(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        request: &DeploymentRequest,
        provider: Provider,
        service: impl Into<String>,
    ) -> Self {
        let now = current_unix_time();
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            project_name: request.project_name.clone(),
            provider,
            service: service.into(),
            variables: request.variables.clone(),
            custom_config: request.custom_config.clone(),
            status: RecordStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
