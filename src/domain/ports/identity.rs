//! Identity ports - device identity issuance and provisioning
//!
//! Two seams:
//! - [`IdentityIssuer`] creates the certificate and key.
//! - [`IdentityProvisioner`] is what the assembler calls: issue (or defer
//!   issuing) and report where the credentials live.

use std::fmt;

use crate::domain::entities::IdentityMode;
use crate::domain::value_objects::{CredentialPaths, ThingName};
use crate::error::ProvisioningFailure;

/// Certificate and private key of a device
///
/// `Debug` never prints the private key.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    certificate_pem: String,
    private_key: String,
}

impl DeviceIdentity {
    pub fn new(certificate_pem: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            certificate_pem: certificate_pem.into(),
            private_key: private_key.into(),
        }
    }

    pub fn certificate_pem(&self) -> &str {
        &self.certificate_pem
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceIdentity")
            .field("certificate_pem", &format!("<{} bytes>", self.certificate_pem.len()))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Creates device identities
pub trait IdentityIssuer {
    fn issue(&self, thing: &ThingName) -> Result<DeviceIdentity, ProvisioningFailure>;
}

/// Makes a device identity available under its [`CredentialPaths`]
///
/// Failure is fatal to the whole derivation; callers never retry.
pub trait IdentityProvisioner {
    fn provision(&self, thing: &ThingName) -> Result<CredentialPaths, ProvisioningFailure>;

    /// Whether the identity exists once `provision` returns
    fn mode(&self) -> IdentityMode {
        IdentityMode::Issued
    }
}

impl<T: IdentityProvisioner + ?Sized> IdentityProvisioner for &T {
    fn provision(&self, thing: &ThingName) -> Result<CredentialPaths, ProvisioningFailure> {
        (**self).provision(thing)
    }

    fn mode(&self) -> IdentityMode {
        (**self).mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_private_key() {
        let identity = DeviceIdentity::new("-----BEGIN CERTIFICATE-----", "super-secret-key");
        let debug = format!("{:?}", identity);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
