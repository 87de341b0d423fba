//! Domain Services
//!
//! Pure derivation logic. Nothing here touches the file system or network;
//! identity issuance goes through the ports.

mod assembler;
mod cluster_builder;
mod connectivity;
mod emitter;
mod identity;
mod master_builder;
mod network_builder;
mod worker_builder;

pub use assembler::{BuildStep, StackAssembler};
pub use emitter::emit;
pub use identity::ParameterStoreProvisioner;
pub use worker_builder::worker_environment;
