//! Parameter store adapters

mod json_file;
mod memory;

pub use json_file::JsonFileParameterStore;
pub use memory::InMemoryParameterStore;
