//! In-memory parameter store

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::ports::ParameterStore;
use crate::error::ProvisioningFailure;

/// Parameter store backed by a map, for tests and dry runs
#[derive(Debug, Default)]
pub struct InMemoryParameterStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `(path, value)` pairs
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Stored paths, sorted
    pub fn paths(&self) -> Result<Vec<String>, ProvisioningFailure> {
        let values = self.values.lock().map_err(|_| poisoned("*"))?;
        Ok(values.keys().cloned().collect())
    }
}

fn poisoned(path: &str) -> ProvisioningFailure {
    ProvisioningFailure::StoreFailed {
        path: path.to_string(),
        reason: "parameter store lock poisoned".to_string(),
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn get(&self, path: &str) -> Result<Option<String>, ProvisioningFailure> {
        let values = self.values.lock().map_err(|_| poisoned(path))?;
        Ok(values.get(path).cloned())
    }

    fn put(&self, path: &str, value: &str) -> Result<(), ProvisioningFailure> {
        let mut values = self.values.lock().map_err(|_| poisoned(path))?;
        values.insert(path.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), ProvisioningFailure> {
        let mut values = self.values.lock().map_err(|_| poisoned(path))?;
        values.remove(path);
        Ok(())
    }
}
