//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PlanUseCase` - load, provision, assemble, emit, render, write
//! - `ValidateUseCase` - load and validate only
//! - `ProvisionUseCase` - issue and publish the device identity
//! - `DiffUseCase` - compare a derived plan with a written one

mod config_source;
pub mod diff_plan;
pub mod plan;
pub mod provision;
pub mod validate;

pub use config_source::ConfigSource;
pub use diff_plan::{DiffResult, DiffStats, DiffUseCase};
pub use plan::{PlanOptions, PlanResult, PlanUseCase};
pub use provision::{ProvisionResult, ProvisionUseCase};
pub use validate::{ValidateResult, ValidateUseCase};
