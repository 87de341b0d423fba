//! Identity issuer reading pre-issued PEM files
//!
//! Layout: `<root>/<thing-name>/cert.pem` and `<root>/<thing-name>/private.key`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{DeviceIdentity, IdentityIssuer};
use crate::domain::value_objects::ThingName;
use crate::error::ProvisioningFailure;

pub const CERTIFICATE_FILE: &str = "cert.pem";
pub const PRIVATE_KEY_FILE: &str = "private.key";

const PEM_MARKER: &str = "-----BEGIN ";

pub struct PemDirectoryIssuer {
    root: PathBuf,
}

impl PemDirectoryIssuer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_pem(&self, thing: &ThingName, file: &str) -> Result<String, ProvisioningFailure> {
        let path = self.root.join(thing.as_str()).join(file);
        let content =
            std::fs::read_to_string(&path).map_err(|e| ProvisioningFailure::IssuanceFailed {
                thing_name: thing.to_string(),
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;

        if !content.trim_start().starts_with(PEM_MARKER) {
            return Err(ProvisioningFailure::IssuanceFailed {
                thing_name: thing.to_string(),
                reason: format!("{} is not PEM encoded", path.display()),
            });
        }
        Ok(content)
    }
}

impl IdentityIssuer for PemDirectoryIssuer {
    fn issue(&self, thing: &ThingName) -> Result<DeviceIdentity, ProvisioningFailure> {
        let certificate = self.read_pem(thing, CERTIFICATE_FILE)?;
        let private_key = self.read_pem(thing, PRIVATE_KEY_FILE)?;
        debug!(thing = %thing, root = %self.root.display(), "loaded device identity");
        Ok(DeviceIdentity::new(certificate, private_key))
    }
}
