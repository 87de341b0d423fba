//! Loading a validated configuration for a use case
//!
//! Precedence, lowest to highest: defaults, config file, `IOTSIM_*`
//! environment, `--variant` flag.

use std::path::PathBuf;

use crate::config::{ConfigWarning, DeploymentConfig, DeploymentSettings};
use crate::domain::value_objects::Variant;
use crate::error::IotSimResult;

/// Where a use case gets its configuration from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// TOML config file
    pub path: PathBuf,
    /// Variant forced on the command line
    pub variant: Option<Variant>,
    /// Whether `IOTSIM_*` variables are applied
    pub use_env: bool,
}

impl ConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            variant: None,
            use_env: true,
        }
    }

    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load, layer and validate
    pub fn load(&self) -> IotSimResult<(DeploymentConfig, Vec<ConfigWarning>)> {
        let (mut settings, mut warnings) = DeploymentSettings::load_with_warnings(&self.path)?;
        if self.use_env {
            settings = settings.with_env_overrides()?;
        }

        let (config, validation_warnings) = settings.with_variant(self.variant).validate()?;
        warnings.extend(validation_warnings);
        Ok((config, warnings))
    }
}
