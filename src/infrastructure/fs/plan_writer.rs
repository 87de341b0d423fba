//! Plan writer on the local file system

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::PlanWriter;
use crate::error::IotSimResult;

/// Write `content` next to `path` and rename it into place
///
/// Readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> IotSimResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Writes rendered plans to disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPlanWriter;

impl FsPlanWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PlanWriter for FsPlanWriter {
    fn write(&self, path: &Path, content: &str) -> IotSimResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn read(&self, path: &Path) -> IotSimResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}
