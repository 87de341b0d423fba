//! Domain Layer
//!
//! The core of iotsim - topology derivation without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Cidr, ThingName, Variant, PlanDigest)
//! - `entities/` - Topology components and the resource graph
//! - `services/` - Builders, connectivity composer, assembler, emitter
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Deterministic** - Same configuration in, same topology out
//! 3. **Ports & Adapters** - Identity issuance and persistence go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
