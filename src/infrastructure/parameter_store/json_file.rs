//! Parameter store persisted as a JSON object on disk
//!
//! The file maps parameter path to value:
//!
//! ```json
//! {
//!   "/iot-simulator-with-fault-injection/thing/certPem": "-----BEGIN CERTIFICATE-----..."
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::ParameterStore;
use crate::error::ProvisioningFailure;
use crate::infrastructure::fs::atomic_write;

pub struct JsonFileParameterStore {
    path: PathBuf,
}

impl JsonFileParameterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, key: &str) -> Result<BTreeMap<String, String>, ProvisioningFailure> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(failed(key, e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| failed(key, e))
    }

    fn save(&self, key: &str, values: &BTreeMap<String, String>) -> Result<(), ProvisioningFailure> {
        let mut content = serde_json::to_string_pretty(values).map_err(|e| failed(key, e))?;
        content.push('\n');
        atomic_write(&self.path, content.as_bytes()).map_err(|e| failed(key, e))
    }
}

fn failed(path: &str, reason: impl std::fmt::Display) -> ProvisioningFailure {
    ProvisioningFailure::StoreFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

impl ParameterStore for JsonFileParameterStore {
    fn get(&self, path: &str) -> Result<Option<String>, ProvisioningFailure> {
        Ok(self.load(path)?.remove(path))
    }

    fn put(&self, path: &str, value: &str) -> Result<(), ProvisioningFailure> {
        let mut values = self.load(path)?;
        values.insert(path.to_string(), value.to_string());
        self.save(path, &values)
    }

    fn delete(&self, path: &str) -> Result<(), ProvisioningFailure> {
        let mut values = self.load(path)?;
        if values.remove(path).is_some() {
            self.save(path, &values)?;
        }
        Ok(())
    }
}
