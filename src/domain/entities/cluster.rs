//! Compute cluster and its optional host pool

use serde::Serialize;

use crate::domain::value_objects::LogicalId;

/// Discovery namespace every service in a deployment registers under
pub const DISCOVERY_NAMESPACE: &str = "iot-simulator";

/// One IAM-style permission grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyStatement {
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}

impl PolicyStatement {
    pub fn allow(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            actions: vec![action.into()],
            resources: vec![resource.into()],
        }
    }
}

/// Fixed-size instance pool for host-networked workloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstancePool {
    pub id: LogicalId,
    pub instance_type: String,
    pub machine_image: &'static str,
    pub desired_capacity: u32,
    /// Permissions added to the instance role on top of the cluster defaults
    pub extra_policy: Vec<PolicyStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputeCluster {
    pub id: LogicalId,
    pub network: LogicalId,
    pub namespace: &'static str,
    pub container_insights: bool,
    /// Present only when workers share the host network namespace
    pub instance_pool: Option<InstancePool>,
}

impl ComputeCluster {
    /// `<name>.<namespace>`, the textual address siblings resolve
    pub fn discovery_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.namespace)
    }
}
