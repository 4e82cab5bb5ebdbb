//! Cloud Provisioning Wizard Library
//!
//! Standalone, trait-based provisioning wizard and request resolution
//! engine for describing cloud deployments.
//!
//! # Design
//!
//! This library provides the wizard state machine and resolution logic
//! without coupling to any specific storage or identity implementation.
//! You implement the [`CredentialVault`] and [`RecordStore`] traits with
//! your infrastructure; the wizard and engine handle the workflow. File
//! and in-memory implementations of both traits ship with the crate.
//!
//! # Usage
//!
//! ```ignore
//! use infra_wizard_rs::{
//!     CredentialRegistry, EngineConfig, Identity, MemoryRecordStore, MemoryVault,
//!     Provider, ResolutionEngine, ResolutionOutcome, Wizard,
//! };
//!
//! // Configure a provider so the wizard's first gate opens
//! let mut registry = CredentialRegistry::new(MemoryVault::new());
//! registry.save(Provider::Gcp, fields).await?;
//! let configured = registry.configured_providers().await?;
//!
//! // Walk the wizard
//! let mut wizard = Wizard::new();
//! wizard.request_mut().set_project_name("demo");
//! wizard.request_mut().set_provider(Provider::Gcp);
//! wizard.advance(&configured)?;
//! wizard.request_mut().set_service("compute-engine");
//! wizard.advance(&configured)?;
//! wizard.request_mut().set_variable("instance_name", "x");
//! wizard.advance(&configured)?;
//! let request = wizard.finish()?;
//!
//! // Resolve: submit, or preview when request.dry_run is set
//! let mut engine = ResolutionEngine::new(MemoryRecordStore::new());
//! match engine.resolve(&request, &Identity::new("uid-1")).await {
//!     ResolutionOutcome::Submitted { deployment_id } => println!("{deployment_id}"),
//!     ResolutionOutcome::DryRun(preview) => println!("{}", preview.display_total_cost()),
//!     ResolutionOutcome::Failed { reason } => eprintln!("{reason}"),
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod preview;
pub mod registry;
pub mod request;
pub mod store;
pub mod types;
pub mod wizard;

// Re-export the main types at crate root for convenience
pub use catalog::{
    CatalogEntry, CredentialFieldSpec, InputKind, ServiceCategory, VariableSpec,
};
pub use engine::{EngineConfig, ResolutionEngine, ResolutionOutcome};
pub use error::{ProvisionError, ValidationError};
pub use preview::{synthesize_preview, DryRunPreview, ResourcePreview};
pub use registry::{
    CloudCredentialEntry, CredentialRegistry, CredentialVault, FileBackedVault, MemoryVault,
};
pub use request::DeploymentRequest;
pub use store::{DeploymentRecord, FileRecordStore, MemoryRecordStore, RecordStore};
pub use types::{Identity, Provider, RecordStatus};
pub use wizard::{ConfigPane, Step, Wizard};
