//! Diff Use Case
//!
//! Compares a freshly derived plan with one written earlier. Both sides are
//! compared in canonical JSON form.

mod result;
mod use_case;

pub use result::{DiffResult, DiffStats};
pub use use_case::DiffUseCase;
