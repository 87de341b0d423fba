//! PlanWriter port - persistence of rendered plans

use std::path::Path;

use crate::error::IotSimResult;

/// Reads and writes rendered plan documents
pub trait PlanWriter {
    /// Write `content` to `path`, replacing it atomically
    fn write(&self, path: &Path, content: &str) -> IotSimResult<()>;

    /// Read a previously written plan
    fn read(&self, path: &Path) -> IotSimResult<String>;
}
