//! iotsim - topology composer for an IoT load-testing and fault-injection platform
//!
//! One deployment configuration in, one fully wired topology out: network
//! boundary, compute cluster, a master coordinator, a worker fleet in one of
//! two variants, and the connectivity rules between them. The topology is
//! emitted as a declarative resource graph for a provisioning engine.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::{DeploymentConfig, DeploymentSettings};
pub use domain::entities::{PlanDocument, PlanFormat, ResourceGraph, Topology};
pub use domain::services::{emit, StackAssembler};
pub use domain::value_objects::Variant;
pub use error::{
    ConfigValidationError, DerivationInvariantViolation, IotSimError, IotSimResult,
    ProvisioningFailure,
};
