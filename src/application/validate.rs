//! Validate Use Case
//!
//! Loads and validates a configuration without deriving anything.

use crate::application::ConfigSource;
use crate::config::{ConfigWarning, DeploymentConfig};
use crate::error::IotSimResult;

/// Result of a validate operation
#[derive(Debug, Clone)]
pub struct ValidateResult {
    pub config: DeploymentConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl ValidateResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateUseCase;

impl ValidateUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, source: &ConfigSource) -> IotSimResult<ValidateResult> {
        let (config, warnings) = source.load()?;
        Ok(ValidateResult { config, warnings })
    }
}
