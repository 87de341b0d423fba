//! Plan Options

use std::path::PathBuf;

use crate::application::ConfigSource;
use crate::domain::entities::PlanFormat;

/// Options for the plan use case
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub source: ConfigSource,
    pub format: PlanFormat,
    /// Write the rendered plan here instead of only returning it
    pub out: Option<PathBuf>,
}

impl PlanOptions {
    pub fn new(source: ConfigSource) -> Self {
        Self {
            source,
            format: PlanFormat::default(),
            out: None,
        }
    }

    pub fn with_format(mut self, format: PlanFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_out(mut self, out: Option<PathBuf>) -> Self {
        self.out = out;
        self
    }
}
