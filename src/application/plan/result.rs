//! Plan Result

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{ConfigWarning, DeploymentConfig};
use crate::domain::entities::{PlanDocument, Topology};

/// Result of a plan operation
#[derive(Debug, Clone)]
pub struct PlanResult {
    pub config: DeploymentConfig,
    pub topology: Topology,
    pub plan: PlanDocument,
    /// The plan in the requested format
    pub rendered: String,
    /// Where the plan was written, if it was
    pub written: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl PlanResult {
    pub fn outputs(&self) -> &BTreeMap<String, String> {
        self.plan.graph.outputs()
    }

    pub fn resource_count(&self) -> usize {
        self.plan.graph.len()
    }
}
