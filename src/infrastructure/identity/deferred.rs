//! Deferred identity provisioning
//!
//! Nothing is issued up front. The emitted graph carries a device-identity
//! resource and the provisioning engine issues it before any task starts.

use tracing::debug;

use crate::domain::entities::IdentityMode;
use crate::domain::ports::IdentityProvisioner;
use crate::domain::value_objects::{CredentialPaths, ThingName};
use crate::error::ProvisioningFailure;

#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredIdentityProvisioner;

impl DeferredIdentityProvisioner {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvisioner for DeferredIdentityProvisioner {
    fn provision(&self, thing: &ThingName) -> Result<CredentialPaths, ProvisioningFailure> {
        let paths = CredentialPaths::for_thing(thing);
        debug!(step = "identity", thing = %thing, "identity issuance deferred to the engine");
        Ok(paths)
    }

    fn mode(&self) -> IdentityMode {
        IdentityMode::Deferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_without_issuing() {
        let thing = ThingName::parse("sim-thing").unwrap();
        let paths = DeferredIdentityProvisioner::new().provision(&thing).unwrap();
        assert_eq!(paths, CredentialPaths::for_thing(&thing));
        assert_eq!(DeferredIdentityProvisioner.mode(), IdentityMode::Deferred);
    }
}
