//! Topology - the assembled deployment, produced once and never mutated

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{CredentialPaths, ThingName, Variant};

use super::cluster::ComputeCluster;
use super::connectivity::RuleSet;
use super::load_balancer::PublicLoadBalancer;
use super::master::MasterService;
use super::network::NetworkBoundary;
use super::worker::WorkerService;

/// Who issues the device identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    /// Already issued and stored before assembly
    Issued,
    /// Issued by the provisioning engine from an emitted resource
    Deferred,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityBinding {
    pub thing_name: ThingName,
    pub paths: CredentialPaths,
    pub mode: IdentityMode,
}

/// Externally visible values, keyed by output name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackOutputs {
    pub worker_service_name: String,
    pub coordinator_discovery_name: String,
    pub coordinator_url: String,
    pub cluster_identifier: String,
    pub traffic_control_url: Option<String>,
}

impl StackOutputs {
    /// Outputs under their published names, in stable order
    pub fn named(&self) -> BTreeMap<&'static str, &str> {
        let mut named = BTreeMap::new();
        named.insert("WorkerServiceName", self.worker_service_name.as_str());
        named.insert(
            "CoordinatorDiscoveryName",
            self.coordinator_discovery_name.as_str(),
        );
        named.insert("CoordinatorURL", self.coordinator_url.as_str());
        named.insert("EcsClusterArn", self.cluster_identifier.as_str());
        if let Some(url) = &self.traffic_control_url {
            named.insert("TrafficControlURL", url.as_str());
        }
        named
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub(crate) variant: Variant,
    pub(crate) stack_name: String,
    pub(crate) region: String,
    pub(crate) identity: IdentityBinding,
    pub(crate) network: NetworkBoundary,
    pub(crate) cluster: ComputeCluster,
    pub(crate) master: MasterService,
    pub(crate) worker: WorkerService,
    pub(crate) traffic_control: Option<PublicLoadBalancer>,
    pub(crate) rules: RuleSet,
    pub(crate) outputs: StackOutputs,
}

impl Topology {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn identity(&self) -> &IdentityBinding {
        &self.identity
    }

    pub fn network(&self) -> &NetworkBoundary {
        &self.network
    }

    pub fn cluster(&self) -> &ComputeCluster {
        &self.cluster
    }

    pub fn master(&self) -> &MasterService {
        &self.master
    }

    pub fn worker(&self) -> &WorkerService {
        &self.worker
    }

    /// Present only for the fault-injection variant
    pub fn traffic_control(&self) -> Option<&PublicLoadBalancer> {
        self.traffic_control.as_ref()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn outputs(&self) -> &StackOutputs {
        &self.outputs
    }
}
