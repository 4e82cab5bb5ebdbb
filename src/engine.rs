//! Request resolution: submit for processing, or synthesize a dry-run
//! preview.
//!
//! The engine never lets an error escape its boundary — every failure is
//! captured into [`ResolutionOutcome::Failed`]. The simulated settle delays
//! stand in for a real asynchronous processing pipeline; the caller can
//! abandon the returned future at any point and the record write has
//! either fully completed or never happened.

use crate::error::ProvisionError;
use crate::preview::{self, DryRunPreview};
use crate::request::DeploymentRequest;
use crate::store::{DeploymentRecord, RecordStore};
use crate::types::{current_unix_millis, Identity};
use std::time::Duration;

/// What resolving a request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// Preview of what would be created. Nothing was persisted.
    DryRun(DryRunPreview),
    /// The request was persisted as a pending record and handed off.
    Submitted { deployment_id: String },
    /// Resolution failed; re-invoking `resolve` is the retry.
    Failed { reason: String },
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Simulated plan-analysis time before a dry-run preview is returned.
    pub dry_run_delay: Duration,
    /// Simulated hand-off time before a submission is acknowledged.
    pub submit_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dry_run_delay: Duration::from_secs(2),
            submit_delay: Duration::from_secs(5),
        }
    }
}

impl EngineConfig {
    /// No simulated delays. Tests use this instead of assuming durations.
    pub fn immediate() -> Self {
        Self {
            dry_run_delay: Duration::ZERO,
            submit_delay: Duration::ZERO,
        }
    }
}

/// The request resolution engine.
///
/// Parameterized by the record store — you provide the implementation.
pub struct ResolutionEngine<S: RecordStore> {
    store: S,
    config: EngineConfig,
}

impl<S: RecordStore> ResolutionEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve a finished request on behalf of `identity`.
    ///
    /// Dry runs synthesize a deterministic preview and persist nothing.
    /// Submissions write one pending record owned by `identity.uid` and
    /// return its generated id; the actual provisioning belongs to the
    /// external processing system.
    pub async fn resolve(
        &mut self,
        request: &DeploymentRequest,
        identity: &Identity,
    ) -> ResolutionOutcome {
        match self.try_resolve(request, identity).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "resolution failed");
                ResolutionOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn try_resolve(
        &mut self,
        request: &DeploymentRequest,
        identity: &Identity,
    ) -> Result<ResolutionOutcome, ProvisionError> {
        if identity.uid.trim().is_empty() {
            return Err(ProvisionError::MissingIdentity);
        }

        let provider = request.provider.ok_or_else(|| {
            ProvisionError::InvalidState("request has no provider selected".into())
        })?;

        if request.dry_run {
            tokio::time::sleep(self.config.dry_run_delay).await;
            let preview = preview::synthesize_preview(provider, &request.project_name);
            tracing::info!(
                provider = provider.id(),
                project = %request.project_name,
                resources = preview.resources.len(),
                "dry run synthesized"
            );
            return Ok(ResolutionOutcome::DryRun(preview));
        }

        let service = request
            .service
            .clone()
            .ok_or_else(|| ProvisionError::InvalidState("request has no service selected".into()))?;

        let record = DeploymentRecord::from_request(
            generate_deployment_id(),
            &identity.uid,
            request,
            provider,
            service,
        );

        // The single atomic write. If the caller abandons us after this
        // point the record is already fully pending; before it, nothing
        // exists.
        let deployment_id = self.store.create(&record).await?;

        tracing::info!(
            deployment_id = %deployment_id,
            provider = provider.id(),
            owner = %identity.uid,
            "deployment submitted"
        );

        tokio::time::sleep(self.config.submit_delay).await;
        Ok(ResolutionOutcome::Submitted { deployment_id })
    }
}

fn generate_deployment_id() -> String {
    format!("dep-{}-{:08x}", current_unix_millis(), rand::random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionError;
    use crate::store::MemoryRecordStore;
    use crate::types::{Provider, RecordStatus};
    use async_trait::async_trait;

    fn finished_request(dry_run: bool) -> DeploymentRequest {
        let mut request = DeploymentRequest::new();
        request.set_project_name("demo");
        request.set_provider(Provider::Gcp);
        request.set_service("compute-engine");
        request.set_variable("instance_name", "x");
        request.set_dry_run(dry_run);
        request
    }

    fn identity() -> Identity {
        Identity::new("uid-1").with_email("dev@example.com")
    }

    #[tokio::test]
    async fn test_dry_run_persists_nothing() {
        let store = MemoryRecordStore::new();
        let mut engine = ResolutionEngine::with_config(store, EngineConfig::immediate());

        let outcome = engine.resolve(&finished_request(true), &identity()).await;
        match outcome {
            ResolutionOutcome::DryRun(preview) => {
                assert_eq!(preview.resources.len(), 3);
                let sum: u64 = preview.resources.iter().map(|r| r.monthly_cost_cents).sum();
                assert_eq!(preview.total_monthly_cost_cents, sum);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(engine.store().is_empty(), "dry run must not create records");
    }

    #[tokio::test]
    async fn test_dry_run_is_deterministic() {
        let mut engine =
            ResolutionEngine::with_config(MemoryRecordStore::new(), EngineConfig::immediate());
        let request = finished_request(true);

        let first = engine.resolve(&request, &identity()).await;
        let second = engine.resolve(&request, &identity()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_submit_creates_pending_record() {
        let mut engine =
            ResolutionEngine::with_config(MemoryRecordStore::new(), EngineConfig::immediate());

        let outcome = engine.resolve(&finished_request(false), &identity()).await;
        let deployment_id = match outcome {
            ResolutionOutcome::Submitted { deployment_id } => deployment_id,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert!(deployment_id.starts_with("dep-"));

        let record = engine
            .store()
            .load(&deployment_id)
            .await
            .unwrap()
            .expect("record should exist");
        assert_eq!(record.status, RecordStatus::Pending);
        assert_eq!(record.owner_id, "uid-1");
        assert_eq!(record.provider, Provider::Gcp);
        assert_eq!(record.service, "compute-engine");
    }

    #[tokio::test]
    async fn test_missing_identity_fails() {
        let mut engine =
            ResolutionEngine::with_config(MemoryRecordStore::new(), EngineConfig::immediate());

        let outcome = engine
            .resolve(&finished_request(false), &Identity::new("  "))
            .await;
        match outcome {
            ResolutionOutcome::Failed { reason } => {
                assert!(reason.contains("identity"), "{reason}");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(engine.store().is_empty());
    }

    struct FailingStore;

    #[async_trait]
    impl RecordStore for FailingStore {
        async fn create(&mut self, _: &DeploymentRecord) -> Result<String, ProvisionError> {
            Err(ProvisionError::Storage("backend unavailable".into()))
        }

        async fn load(&self, _: &str) -> Result<Option<DeploymentRecord>, ProvisionError> {
            Ok(None)
        }

        async fn query_by_owner(
            &self,
            _: &str,
        ) -> Result<Vec<DeploymentRecord>, ProvisionError> {
            Ok(Vec::new())
        }

        async fn delete(&mut self, _: &str) -> Result<(), ProvisionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_captured() {
        let mut engine = ResolutionEngine::with_config(FailingStore, EngineConfig::immediate());

        let outcome = engine.resolve(&finished_request(false), &identity()).await;
        match outcome {
            ResolutionOutcome::Failed { reason } => {
                assert!(reason.contains("backend unavailable"), "{reason}");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_delay_elapses_without_real_time() {
        // Paused clock: the default delays advance virtually, so no test
        // depends on wall-clock durations.
        let mut engine = ResolutionEngine::new(MemoryRecordStore::new());
        let outcome = engine.resolve(&finished_request(true), &identity()).await;
        assert!(matches!(outcome, ResolutionOutcome::DryRun(_)));
    }
}
