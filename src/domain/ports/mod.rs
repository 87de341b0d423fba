//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod identity;
pub mod parameter_store;
pub mod plan_writer;

pub use identity::{DeviceIdentity, IdentityIssuer, IdentityProvisioner};
pub use parameter_store::ParameterStore;
pub use plan_writer::PlanWriter;
