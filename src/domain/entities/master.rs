//! Coordinator service and its public front door

use serde::Serialize;

use crate::domain::value_objects::{Cidr, FrontDoorProtocol, LogicalId};

use super::health_check::HealthCheck;
use super::service::ServiceSpec;

/// Internal rendezvous port workers connect to
pub const COORDINATION_PORT: u16 = 5557;

/// Port the coordinator UI listens on inside its container
pub const MASTER_UI_PORT: u16 = 8089;

/// Public load balancer in front of the coordinator UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontDoor {
    pub id: LogicalId,
    pub protocol: FrontDoorProtocol,
    pub port: u16,
    pub certificate_arn: Option<String>,
    /// Set only when serving HTTPS
    pub tls_policy: Option<&'static str>,
    pub target_protocol: FrontDoorProtocol,
    pub target_port: u16,
    /// Ingress is granted per allowed network, never to everyone by default
    pub open_listener: bool,
    pub allowed_cidrs: Vec<Cidr>,
    pub health_check: HealthCheck,
    pub health_check_grace_seconds: u32,
    pub deregistration_delay_seconds: u32,
    pub access_log_store: LogicalId,
    pub access_log_prefix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterService {
    pub service: ServiceSpec,
    pub front_door: FrontDoor,
    /// `master.<namespace>`
    pub discovery_endpoint: String,
}

impl MasterService {
    /// Whether the front door treats `status` as healthy
    pub fn health_accepts(&self, status: u16) -> bool {
        self.front_door.health_check.healthy_codes.accepts(status)
    }

    /// URL of the coordinator UI, with the DNS name left as a reference token
    pub fn public_url(&self) -> String {
        format!(
            "{}://{}",
            self.front_door.protocol.scheme(),
            self.front_door.id.attr("DnsName")
        )
    }
}
