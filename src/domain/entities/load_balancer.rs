//! Internet-facing balancer for the traffic-control API

use serde::Serialize;

use crate::domain::value_objects::{Cidr, FrontDoorProtocol, LogicalId, ServiceRef};

use super::health_check::HealthCheck;

/// Container port a balancer forwards to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerTarget {
    pub service: ServiceRef,
    pub container: &'static str,
    pub container_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicLoadBalancer {
    pub id: LogicalId,
    pub network: LogicalId,
    pub listener_protocol: FrontDoorProtocol,
    pub listener_port: u16,
    pub allowed_cidrs: Vec<Cidr>,
    pub target: LoadBalancerTarget,
    pub health_check: HealthCheck,
}

impl PublicLoadBalancer {
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.listener_protocol.scheme(),
            self.id.attr("DnsName"),
            self.listener_port
        )
    }
}
