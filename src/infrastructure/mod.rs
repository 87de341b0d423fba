//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic file writes and the plan writer
//! - `identity/` - PEM-directory issuer and deferred provisioner
//! - `parameter_store/` - In-memory and JSON-file parameter stores

pub mod fs;
pub mod identity;
pub mod parameter_store;

pub use fs::FsPlanWriter;
pub use identity::{DeferredIdentityProvisioner, PemDirectoryIssuer};
pub use parameter_store::{InMemoryParameterStore, JsonFileParameterStore};
