//! The provisioning wizard state machine.
//!
//! Four ordered steps, linear, no skipping. Forward transitions are guarded;
//! backward transitions are not and never lose data. The machine is pure
//! logic: the caller supplies the configured-provider snapshot at guard time,
//! so the wizard never touches the credential storage medium itself.
//!
//! Each guard is also exposed as a free function so its error messages can
//! be tested independently of the machine.

use crate::catalog;
use crate::error::{ProvisionError, ValidationError};
use crate::request::DeploymentRequest;
use crate::types::Provider;
use serde::{Deserialize, Serialize};

/// Wizard steps — the state machine's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Name the project and pick a configured provider.
    Provider,
    /// Pick a service from the provider's catalog.
    Service,
    /// Fill variables, optional custom config, and options.
    Configuration,
    /// Review and deploy or preview. Terminal.
    Review,
}

impl Step {
    /// Stable step name for logging/display.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Provider => "provider",
            Step::Service => "service",
            Step::Configuration => "configuration",
            Step::Review => "review",
        }
    }

    /// Header title shown for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Provider => "Cloud Provider",
            Step::Service => "Service Selection",
            Step::Configuration => "Configuration",
            Step::Review => "Review & Deploy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Provider => "Select your cloud platform",
            Step::Service => "Choose infrastructure services",
            Step::Configuration => "Set variables and options",
            Step::Review => "Review and deploy infrastructure",
        }
    }

    /// One-based position, out of [`Step::COUNT`].
    pub fn index(&self) -> u8 {
        match self {
            Step::Provider => 1,
            Step::Service => 2,
            Step::Configuration => 3,
            Step::Review => 4,
        }
    }

    pub const COUNT: u8 = 4;

    /// Completion percentage for the progress header.
    pub fn progress_percent(&self) -> u8 {
        // Widen before multiplying; index * 100 does not fit in u8
        (u32::from(self.index()) * 100 / u32::from(Step::COUNT)) as u8
    }

    fn previous(&self) -> Step {
        match self {
            Step::Provider | Step::Service => Step::Provider,
            Step::Configuration => Step::Service,
            Step::Review => Step::Configuration,
        }
    }
}

/// Which configuration sub-view is active. The wizard switches this to the
/// offending pane when the configuration guard fails, so the error surfaces
/// where the user can fix it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigPane {
    Variables,
    CustomConfig,
    Options,
}

/// The wizard: one in-flight request, one active step.
///
/// Transitions are `(state, event) -> state | error` where the events are
/// [`Wizard::advance`] and [`Wizard::back`]. A finished request exits the
/// machine through [`Wizard::finish`]; starting over takes a fresh instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wizard {
    step: Step,
    pane: ConfigPane,
    request: DeploymentRequest,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Provider,
            pane: ConfigPane::Variables,
            request: DeploymentRequest::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn active_pane(&self) -> ConfigPane {
        self.pane
    }

    pub fn set_active_pane(&mut self, pane: ConfigPane) {
        self.pane = pane;
    }

    pub fn request(&self) -> &DeploymentRequest {
        &self.request
    }

    /// Mutable access for the active step's input handling.
    pub fn request_mut(&mut self) -> &mut DeploymentRequest {
        &mut self.request
    }

    /// Attempt the forward transition from the current step.
    ///
    /// `configured_providers` is the credential registry's current snapshot;
    /// only the first guard consults it. Returns the new step on success.
    /// At [`Step::Review`] this is a no-op — the machine exits through
    /// [`Wizard::finish`], not another advance.
    pub fn advance(&mut self, configured_providers: &[Provider]) -> Result<Step, ProvisionError> {
        match self.step {
            Step::Provider => {
                validate_provider_step(&self.request, configured_providers)?;
                self.step = Step::Service;
            }
            Step::Service => {
                validate_service_step(&self.request)?;
                // Entering Configuration: pre-populate schema defaults for
                // anything the user hasn't typed yet.
                if let Some(service) = self.request.service.clone() {
                    self.request
                        .apply_defaults(catalog::variable_schema_for(&service));
                }
                self.pane = ConfigPane::Variables;
                self.step = Step::Configuration;
            }
            Step::Configuration => {
                if let Err(err) = validate_configuration_step(&self.request) {
                    self.pane = match err {
                        ValidationError::InvalidCustomConfig(_) => ConfigPane::CustomConfig,
                        _ => ConfigPane::Variables,
                    };
                    return Err(err.into());
                }
                self.step = Step::Review;
            }
            Step::Review => {}
        }
        Ok(self.step)
    }

    /// Step back. No guard, nothing entered so far is lost.
    pub fn back(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Exit the machine with the finished request. Only valid at
    /// [`Step::Review`]; the request is immutable from here on.
    pub fn finish(self) -> Result<DeploymentRequest, ProvisionError> {
        if self.step != Step::Review {
            return Err(ProvisionError::InvalidState(format!(
                "cannot finish from step '{}'",
                self.step.name()
            )));
        }
        Ok(self.request)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for Provider -> Service.
pub fn validate_provider_step(
    request: &DeploymentRequest,
    configured_providers: &[Provider],
) -> Result<(), ProvisionError> {
    if request.project_name.trim().is_empty() {
        return Err(ValidationError::EmptyProjectName.into());
    }
    if configured_providers.is_empty() {
        return Err(ProvisionError::NoProvidersConfigured);
    }
    let provider = request
        .provider
        .ok_or(ValidationError::NoProviderSelected)?;
    if !configured_providers.contains(&provider) {
        return Err(ValidationError::ProviderNotConfigured(provider).into());
    }
    Ok(())
}

/// Guard for Service -> Configuration. Rejects a service id that does not
/// belong to the currently selected provider, so a stale choice from a
/// previous provider never carries over.
pub fn validate_service_step(request: &DeploymentRequest) -> Result<(), ValidationError> {
    let provider = request
        .provider
        .ok_or(ValidationError::NoProviderSelected)?;
    let service = match request.service.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(ValidationError::NoServiceSelected),
    };
    if catalog::find_service(provider, service).is_none() {
        return Err(ValidationError::UnknownService {
            provider,
            service: service.to_string(),
        });
    }
    Ok(())
}

/// Guard for Configuration -> Review. Missing variables are reported by
/// their display labels, in schema order; the custom config is checked
/// only after the variables pass.
pub fn validate_configuration_step(request: &DeploymentRequest) -> Result<(), ValidationError> {
    let service = request
        .service
        .as_deref()
        .ok_or(ValidationError::NoServiceSelected)?;

    let missing: Vec<String> = catalog::variable_schema_for(service)
        .iter()
        .filter(|spec| {
            spec.required
                && request
                    .variable(spec.name)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
        })
        .map(|spec| spec.label.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    if let Some(config) = request.custom_config.as_deref() {
        if let Err(err) = serde_json::from_str::<serde_json::Value>(config) {
            return Err(ValidationError::InvalidCustomConfig(err.to_string()));
        }
    }

    Ok(())
}
