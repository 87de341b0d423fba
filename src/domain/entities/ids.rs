//! Logical ids of the fixed resources in a topology
//!
//! Builders and the emitter agree on these names; nothing else should spell
//! them out.

pub const VPC: &str = "vpc";
pub const NAT_GATEWAY: &str = "nat-gateway";
pub const AUDIT_STORE: &str = "audit-store";
pub const FLOW_LOG: &str = "flow-log";
pub const DEVICE_IDENTITY: &str = "device-identity";
pub const CLUSTER: &str = "cluster";
pub const DISCOVERY_NAMESPACE: &str = "discovery-namespace";
pub const HOST_POOL: &str = "host-pool";
pub const MASTER_TASK: &str = "master-task";
pub const MASTER_SERVICE: &str = "master-service";
pub const MASTER_FRONT_DOOR: &str = "master-front-door";
pub const WORKER_TASK: &str = "worker-task";
pub const WORKER_TASK_ROLE: &str = "worker-task-role";
pub const WORKER_SERVICE: &str = "worker-service";
pub const TRAFFIC_CONTROL_LB: &str = "traffic-control-lb";

pub fn public_subnet(index: usize) -> String {
    format!("public-subnet-{}", index + 1)
}

pub fn private_subnet(index: usize) -> String {
    format!("private-subnet-{}", index + 1)
}

pub fn ingress_rule(index: usize) -> String {
    format!("ingress-rule-{}", index + 1)
}
