//! Connectivity composer - security rules from declared intents
//!
//! Rules are derived, never hand-authored:
//! - worker -> master on the coordination port
//! - each allowed CIDR -> master front door on its public port
//! - each allowed CIDR -> traffic-control balancer (fault-injection only)

use tracing::info;

use crate::config::DeploymentConfig;
use crate::domain::entities::{
    ConnectivityRule, MasterService, Peer, PublicLoadBalancer, RuleSet, WorkerService,
    COORDINATION_PORT,
};
use crate::domain::value_objects::ServiceRef;
use crate::error::DerivationInvariantViolation;

pub fn derive(
    config: &DeploymentConfig,
    master: &MasterService,
    worker: &WorkerService,
    traffic_control: Option<&PublicLoadBalancer>,
) -> Result<RuleSet, DerivationInvariantViolation> {
    let mut rules = RuleSet::new();

    rules.insert(ConnectivityRule::tcp(
        Peer::Service(worker.service().name.clone()),
        master.service.name.clone(),
        COORDINATION_PORT,
    ))?;

    let front_door = ServiceRef::new(master.front_door.id.as_str());
    for cidr in config.allowed_cidrs() {
        rules.insert(ConnectivityRule::tcp(
            Peer::Cidr(*cidr),
            front_door.clone(),
            master.front_door.port,
        ))?;
    }

    if let Some(balancer) = traffic_control {
        let destination = ServiceRef::new(balancer.id.as_str());
        for cidr in &balancer.allowed_cidrs {
            rules.insert(ConnectivityRule::tcp(
                Peer::Cidr(*cidr),
                destination.clone(),
                balancer.listener_port,
            ))?;
        }
    }

    info!(step = "connectivity", rules = rules.len(), "derived connectivity rules");

    Ok(rules)
}
