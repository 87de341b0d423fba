//! Stack assembler - derives a whole topology from one configuration
//!
//! Steps run in a fixed order (see [`BuildStep::ORDER`]). Later steps see
//! earlier results only by reference or by name; nothing is mutated after it
//! is built. A failed identity step aborts the derivation; nothing is retried.

use std::fmt;

use tracing::{debug, info};

use crate::config::DeploymentConfig;
use crate::domain::entities::{
    ids, HealthCheck, IdentityBinding, LoadBalancerTarget, NetworkBoundary, PublicLoadBalancer,
    StackOutputs, StatusCodes, Topology, WorkerService, TRAFFIC_CONTROL_CONTAINER,
};
use crate::domain::ports::IdentityProvisioner;
use crate::domain::value_objects::{FrontDoorProtocol, LogicalId};
use crate::error::IotSimResult;

use super::{cluster_builder, connectivity, master_builder, network_builder, worker_builder};

/// Health path of the traffic-control API
const TRAFFIC_CONTROL_HEALTH_PATH: &str = "/docker-tc";

/// One stage of assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Identity,
    Network,
    Cluster,
    Master,
    Worker,
    Connectivity,
    Outputs,
}

impl BuildStep {
    pub const ORDER: [BuildStep; 7] = [
        BuildStep::Identity,
        BuildStep::Network,
        BuildStep::Cluster,
        BuildStep::Master,
        BuildStep::Worker,
        BuildStep::Connectivity,
        BuildStep::Outputs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStep::Identity => "identity",
            BuildStep::Network => "network",
            BuildStep::Cluster => "cluster",
            BuildStep::Master => "master",
            BuildStep::Worker => "worker",
            BuildStep::Connectivity => "connectivity",
            BuildStep::Outputs => "outputs",
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the identity provisioner and constructs every component
pub struct StackAssembler<P: IdentityProvisioner> {
    provisioner: P,
}

impl<P: IdentityProvisioner> StackAssembler<P> {
    pub fn new(provisioner: P) -> Self {
        Self { provisioner }
    }

    pub fn assemble(&self, config: &DeploymentConfig) -> IotSimResult<Topology> {
        info!(
            variant = %config.variant(),
            stack = config.stack_name(),
            "assembling topology"
        );

        step(BuildStep::Identity);
        let thing_name = config.iot().thing_name.clone();
        let paths = self.provisioner.provision(&thing_name)?;
        let identity = IdentityBinding {
            thing_name,
            paths,
            mode: self.provisioner.mode(),
        };

        step(BuildStep::Network);
        let network = network_builder::build(config);

        step(BuildStep::Cluster);
        let cluster = cluster_builder::build(&network, config);

        step(BuildStep::Master);
        let master = master_builder::build(&cluster, config, &identity.paths);

        step(BuildStep::Worker);
        let worker = worker_builder::build(&cluster, config, &identity.paths, &master.discovery_endpoint)?;
        let traffic_control = wire_traffic_control(&network, &worker, config);

        step(BuildStep::Connectivity);
        let rules = connectivity::derive(config, &master, &worker, traffic_control.as_ref())?;

        step(BuildStep::Outputs);
        let outputs = StackOutputs {
            worker_service_name: LogicalId::new(ids::WORKER_SERVICE).attr("Name"),
            coordinator_discovery_name: master.discovery_endpoint.clone(),
            coordinator_url: master.public_url(),
            cluster_identifier: cluster.id.attr("Arn"),
            traffic_control_url: traffic_control.as_ref().map(PublicLoadBalancer::url),
        };

        info!(
            variant = %config.variant(),
            workers = worker.replica_count(),
            rules = rules.len(),
            "topology assembled"
        );

        Ok(Topology {
            variant: config.variant(),
            stack_name: config.stack_name().to_string(),
            region: config.region().to_string(),
            identity,
            network,
            cluster,
            master,
            worker,
            traffic_control,
            rules,
            outputs,
        })
    }
}

fn step(step: BuildStep) {
    debug!(step = %step, "build step");
}

/// Public balancer in front of the worker's control port, if it has one
fn wire_traffic_control(
    network: &NetworkBoundary,
    worker: &WorkerService,
    config: &DeploymentConfig,
) -> Option<PublicLoadBalancer> {
    let port = worker.control_port()?;

    Some(PublicLoadBalancer {
        id: LogicalId::new(ids::TRAFFIC_CONTROL_LB),
        network: network.id.clone(),
        listener_protocol: FrontDoorProtocol::Http,
        listener_port: port,
        allowed_cidrs: config.allowed_cidrs().iter().copied().collect(),
        target: LoadBalancerTarget {
            service: worker.service().name.clone(),
            container: TRAFFIC_CONTROL_CONTAINER,
            container_port: port,
        },
        // The control API answers some healthy states with 4xx.
        health_check: HealthCheck {
            path: Some(TRAFFIC_CONTROL_HEALTH_PATH),
            interval_seconds: None,
            healthy_threshold: None,
            healthy_codes: StatusCodes::range(200, 499),
        },
    })
}
