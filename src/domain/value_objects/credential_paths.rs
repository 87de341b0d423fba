//! Credential paths - where a device identity lives in the parameter store
//!
//! The paths are a pure function of the thing name. Nothing else in the crate
//! formats them; every consumer goes through [`CredentialPaths::for_thing`].

use serde::{Deserialize, Serialize};

use super::ThingName;

/// Parameter-store prefix every identity is published under
pub const PARAM_PREFIX: &str = "/iot-simulator-with-fault-injection";

const CERT_LEAF: &str = "certPem";
const KEY_LEAF: &str = "privKey";

/// Parameter-store locations of a device certificate and private key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialPaths {
    cert_path: String,
    key_path: String,
}

impl CredentialPaths {
    /// Derive the paths for a thing under the default prefix
    pub fn for_thing(thing: &ThingName) -> Self {
        Self::with_prefix(PARAM_PREFIX, thing)
    }

    /// Derive the paths under an explicit prefix
    pub fn with_prefix(prefix: &str, thing: &ThingName) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            cert_path: format!("{}/{}/{}", prefix, thing, CERT_LEAF),
            key_path: format!("{}/{}/{}", prefix, thing, KEY_LEAF),
        }
    }

    pub fn cert_path(&self) -> &str {
        &self.cert_path
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }
}
