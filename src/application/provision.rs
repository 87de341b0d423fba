//! Provision Use Case
//!
//! Issues the device identity for a configuration's thing name and publishes
//! it to the parameter store, ahead of any deployment.

use tracing::info;

use crate::application::ConfigSource;
use crate::config::ConfigWarning;
use crate::domain::ports::IdentityProvisioner;
use crate::domain::value_objects::{CredentialPaths, ThingName};
use crate::error::IotSimResult;

/// Result of a provision operation
#[derive(Debug, Clone)]
pub struct ProvisionResult {
    pub thing_name: ThingName,
    pub paths: CredentialPaths,
    pub warnings: Vec<ConfigWarning>,
}

pub struct ProvisionUseCase<P: IdentityProvisioner> {
    provisioner: P,
}

impl<P: IdentityProvisioner> ProvisionUseCase<P> {
    pub fn new(provisioner: P) -> Self {
        Self { provisioner }
    }

    pub fn execute(&self, source: &ConfigSource) -> IotSimResult<ProvisionResult> {
        let (config, warnings) = source.load()?;
        let thing_name = config.iot().thing_name.clone();

        let paths = self.provisioner.provision(&thing_name)?;
        info!(thing = %thing_name, cert_path = paths.cert_path(), "identity provisioned");

        Ok(ProvisionResult {
            thing_name,
            paths,
            warnings,
        })
    }
}
