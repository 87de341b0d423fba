//! Identifiers - logical resource ids and read-only service references
//!
//! Components never hold each other. Cross-component wiring goes through
//! these names, which the provisioning engine resolves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical id of a resource in the emitted graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicalId(String);

impl LogicalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reference token for an attribute only known after provisioning
    ///
    /// Rendered as `${<id>.<Attribute>}`.
    pub fn attr(&self, attribute: &str) -> String {
        format!("${{{}.{}}}", self.0, attribute)
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LogicalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&LogicalId> for LogicalId {
    fn from(id: &LogicalId) -> Self {
        id.clone()
    }
}

/// Read-only reference to a network-addressable component by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRef(String);

impl ServiceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The graph resource this reference resolves to
    pub fn logical_id(&self) -> LogicalId {
        LogicalId::new(self.0.clone())
    }
}

impl fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
