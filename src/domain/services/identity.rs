//! Identity provisioning through a parameter store

use tracing::{debug, info, warn};

use crate::domain::ports::{IdentityIssuer, IdentityProvisioner, ParameterStore};
use crate::domain::value_objects::{CredentialPaths, ThingName};
use crate::error::ProvisioningFailure;

/// Issues an identity and publishes it under the derived credential paths
///
/// An identity already present at the certificate path is a name collision,
/// not something to overwrite.
pub struct ParameterStoreProvisioner<I, S>
where
    I: IdentityIssuer,
    S: ParameterStore,
{
    issuer: I,
    store: S,
}

impl<I, S> ParameterStoreProvisioner<I, S>
where
    I: IdentityIssuer,
    S: ParameterStore,
{
    pub fn new(issuer: I, store: S) -> Self {
        Self { issuer, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<I, S> IdentityProvisioner for ParameterStoreProvisioner<I, S>
where
    I: IdentityIssuer,
    S: ParameterStore,
{
    fn provision(&self, thing: &ThingName) -> Result<CredentialPaths, ProvisioningFailure> {
        let paths = CredentialPaths::for_thing(thing);

        if self.store.contains(paths.cert_path())? {
            return Err(ProvisioningFailure::IdentityExists {
                thing_name: thing.to_string(),
                cert_path: paths.cert_path().to_string(),
            });
        }

        let identity = self.issuer.issue(thing)?;
        debug!(thing = %thing, ?identity, "issued device identity");

        self.store.put(paths.cert_path(), identity.certificate_pem())?;
        if let Err(err) = self.store.put(paths.key_path(), identity.private_key()) {
            // A lone certificate would turn every retry into a collision.
            if let Err(cleanup) = self.store.delete(paths.cert_path()) {
                warn!(
                    thing = %thing,
                    cert_path = paths.cert_path(),
                    error = %cleanup,
                    "could not remove certificate after key write failed"
                );
            }
            return Err(err);
        }

        info!(
            step = "identity",
            thing = %thing,
            cert_path = paths.cert_path(),
            "published device identity"
        );
        Ok(paths)
    }
}
