//! ParameterStore port - key-path secret storage used for credential handoff

use crate::error::ProvisioningFailure;

/// Simple path-addressed secret store
///
/// Containers read these paths at start; the composer only writes them
/// when it issues an identity itself.
pub trait ParameterStore {
    fn get(&self, path: &str) -> Result<Option<String>, ProvisioningFailure>;

    fn put(&self, path: &str, value: &str) -> Result<(), ProvisioningFailure>;

    /// Remove `path`; absent paths are not an error
    fn delete(&self, path: &str) -> Result<(), ProvisioningFailure>;

    fn contains(&self, path: &str) -> Result<bool, ProvisioningFailure> {
        Ok(self.get(path)?.is_some())
    }
}
