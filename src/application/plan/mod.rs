//! Plan Use Case
//!
//! Derives the full topology for one configuration and renders it:
//! - Loading and validating the configuration
//! - Provisioning (or deferring) the device identity
//! - Assembling the topology and emitting the resource graph
//! - Rendering the plan and optionally writing it

mod options;
mod result;
mod use_case;

pub use options::PlanOptions;
pub use result::PlanResult;
pub use use_case::PlanUseCase;
