//! Error types for iotsim
//!
//! Uses `thiserror` for library errors. The three families mirror the
//! lifecycle of a derivation:
//!
//! - [`ConfigValidationError`] - the deployment configuration is malformed or
//!   contradictory. Raised before any component is derived.
//! - [`ProvisioningFailure`] - issuing the device identity (or persisting it)
//!   failed. Fatal for the whole topology.
//! - [`DerivationInvariantViolation`] - the composer produced something it
//!   must never produce (duplicate rule, dangling dependency, ...). A bug,
//!   not a recoverable condition.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{LogicalId, Variant};

/// Result type alias for iotsim operations
pub type IotSimResult<T> = Result<T, IotSimError>;

/// Rejected deployment configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// No deployment variant was chosen (config, env or CLI)
    #[error("no deployment variant selected - set `variant` to 'fault-injection' or 'load-testing'")]
    MissingVariant,

    /// Unrecognised variant name
    #[error("unknown deployment variant '{0}' - expected 'fault-injection' or 'load-testing'")]
    UnknownVariant(String),

    /// Only one of `web_username` / `web_password` was set
    #[error("'{present}' is set but '{missing}' is not - web authentication needs both")]
    UnpairedWebAuth {
        present: &'static str,
        missing: &'static str,
    },

    /// A required field is absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A field is present but empty
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// CIDR block could not be parsed
    #[error("invalid CIDR '{cidr}': {reason}")]
    InvalidCidr { cidr: String, reason: String },

    /// MQTT QoS outside {0, 1, 2}
    #[error("invalid MQTT QoS {0} - must be 0, 1 or 2")]
    InvalidQos(u8),

    /// MQTT publish interval of zero
    #[error("mqtt.wait_time must be greater than zero")]
    ZeroWaitTime,

    /// Thing name contains characters the identity service rejects
    #[error("invalid thing name '{name}': {reason}")]
    InvalidThingName { name: String, reason: String },

    /// Load-testing needs an explicit replica count
    #[error("worker_desired_count is required for the load-testing variant")]
    WorkerCountRequired,

    /// Replica count set for a variant that fixes it
    #[error("worker_desired_count is not allowed for the {0} variant (replica count is fixed at 1)")]
    WorkerCountNotAllowed(Variant),

    /// Replica count of zero
    #[error("worker_desired_count must be greater than zero")]
    ZeroWorkerCount,

    /// Availability zone count out of range
    #[error("max_azs must be between 1 and 3, got {0}")]
    InvalidAzCount(u8),

    /// An `IOTSIM_*` override could not be parsed
    #[error("invalid value '{value}' for environment variable {var}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Identity issuance or persistence failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningFailure {
    /// The identity already exists (name collision)
    #[error("device identity '{thing_name}' already exists at {cert_path}")]
    IdentityExists {
        thing_name: String,
        cert_path: String,
    },

    /// The identity service refused to issue an identity
    #[error("identity service failed to issue '{thing_name}': {reason}")]
    IssuanceFailed { thing_name: String, reason: String },

    /// Writing a credential to the parameter store failed
    #[error("failed to store credential at {path}: {reason}")]
    StoreFailed { path: String, reason: String },
}

/// The composer broke one of its own contracts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationInvariantViolation {
    /// Same (source, destination, port) derived twice
    #[error("connectivity rule {origin} -> {destination}:{port} derived twice")]
    DuplicateRule {
        origin: String,
        destination: String,
        port: u16,
    },

    /// Fault-injection worker asked for more than one replica
    #[error("fault-injection worker must run exactly 1 replica, got {0}")]
    FaultInjectionReplicaCount(u32),

    /// Load-testing worker derived from a config without a replica count
    #[error("load-testing worker derived without a replica count")]
    MissingReplicaCount,

    /// Two resources share a logical id
    #[error("resource '{0}' emitted twice")]
    DuplicateResource(LogicalId),

    /// A resource depends on one that was never emitted
    #[error("resource '{resource}' depends on unknown resource '{dependency}'")]
    UnknownDependency {
        resource: LogicalId,
        dependency: LogicalId,
    },

    /// The dependency graph is not a DAG
    #[error("dependency cycle detected among: {}", .0.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", "))]
    DependencyCycle(Vec<LogicalId>),
}

/// Main error type for iotsim operations
#[derive(Error, Debug)]
pub enum IotSimError {
    #[error(transparent)]
    Config(#[from] ConfigValidationError),

    #[error(transparent)]
    Provisioning(#[from] ProvisioningFailure),

    #[error(transparent)]
    Invariant(#[from] DerivationInvariantViolation),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfigFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
