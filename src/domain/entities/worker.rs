//! Worker fleet - one type over the two execution modes

use serde::Serialize;

use crate::error::DerivationInvariantViolation;

use super::service::ServiceSpec;

/// Control-plane port of the traffic-control sidecar
pub const TRAFFIC_CONTROL_PORT: u16 = 4080;

/// Name of the traffic-control sidecar container
pub const TRAFFIC_CONTROL_CONTAINER: &str = "docker-tc";

/// How the worker fleet executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerMode {
    /// One host-networked replica plus a traffic-control sidecar
    FaultInjection,
    /// N isolated replicas on spot-preferred capacity
    LoadTesting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerService {
    mode: WorkerMode,
    service: ServiceSpec,
}

impl WorkerService {
    /// Pair a mode with its service, enforcing the per-mode replica contract
    pub fn new(mode: WorkerMode, service: ServiceSpec) -> Result<Self, DerivationInvariantViolation> {
        if mode == WorkerMode::FaultInjection && service.replica_count != 1 {
            return Err(DerivationInvariantViolation::FaultInjectionReplicaCount(
                service.replica_count,
            ));
        }
        Ok(Self { mode, service })
    }

    pub fn mode(&self) -> WorkerMode {
        self.mode
    }

    pub fn service(&self) -> &ServiceSpec {
        &self.service
    }

    pub fn replica_count(&self) -> u32 {
        self.service.replica_count
    }

    /// Port exposed by the control-plane sidecar, if this mode has one
    pub fn control_port(&self) -> Option<u16> {
        match self.mode {
            WorkerMode::FaultInjection => Some(TRAFFIC_CONTROL_PORT),
            WorkerMode::LoadTesting => None,
        }
    }
}
