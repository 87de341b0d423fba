//! File system adapters

mod plan_writer;

pub use plan_writer::{atomic_write, FsPlanWriter};
