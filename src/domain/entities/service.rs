//! Service specification - a scheduled group of identical tasks

use serde::Serialize;

use crate::domain::value_objects::ServiceRef;

use super::cluster::PolicyStatement;
use super::container::{ContainerSpec, HostVolume};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Each task gets its own network interface
    Isolated,
    /// Tasks share the host's network namespace
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchType {
    /// Serverless capacity
    Elastic,
    /// The cluster's instance pool
    HostPool,
}

/// Weighted share of a capacity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityStrategy {
    pub provider: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentPolicy {
    pub min_healthy_percent: Option<u32>,
    /// Roll back automatically when a deployment fails to stabilise
    pub circuit_breaker_rollback: bool,
}

/// Role assumed by a task's containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRole {
    pub principal: &'static str,
    pub policy: Vec<PolicyStatement>,
}

/// Task size for serverless launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskSize {
    pub cpu: u32,
    pub memory_mib: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    pub name: ServiceRef,
    /// Containers in start order
    pub containers: Vec<ContainerSpec>,
    pub replica_count: u32,
    pub network_mode: NetworkMode,
    pub launch_type: LaunchType,
    pub task_size: Option<TaskSize>,
    pub volumes: Vec<HostVolume>,
    pub task_role: Option<TaskRole>,
    pub capacity: Vec<CapacityStrategy>,
    pub deployment: DeploymentPolicy,
    pub discovery_name: Option<String>,
}

impl ServiceSpec {
    pub fn container(&self, name: &str) -> Option<&ContainerSpec> {
        self.containers.iter().find(|c| c.name == name)
    }
}
