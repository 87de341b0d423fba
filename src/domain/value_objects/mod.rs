//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cidr;
mod config_warning;
mod credential_paths;
mod identifiers;
mod plan_digest;
mod protocol;
mod thing_name;
mod variant;

pub use cidr::Cidr;
pub use config_warning::{ConfigWarning, WarningKind};
pub use credential_paths::{CredentialPaths, PARAM_PREFIX};
pub use identifiers::{LogicalId, ServiceRef};
pub use plan_digest::PlanDigest;
pub use protocol::{FrontDoorProtocol, Transport};
pub use thing_name::{ThingName, MAX_THING_NAME_LEN};
pub use variant::Variant;
