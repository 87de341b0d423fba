//! Network boundary - the isolated network every component lives in

use serde::Serialize;

use crate::domain::value_objects::{Cidr, LogicalId};

/// Whether a subnet routes through the internet gateway or the NAT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubnetKind {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subnet {
    pub id: LogicalId,
    pub kind: SubnetKind,
    pub cidr: Cidr,
    pub availability_zone: String,
}

/// Private bucket receiving flow logs and front-door access logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditStore {
    pub id: LogicalId,
    pub encryption: &'static str,
    pub block_public_access: bool,
    /// Objects are deleted when the stack is torn down
    pub auto_delete_objects: bool,
}

/// Flow-log capture into the audit store
///
/// Must not be enabled before the audit store exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLog {
    pub id: LogicalId,
    pub network: LogicalId,
    pub destination: LogicalId,
    pub prefix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkBoundary {
    pub id: LogicalId,
    pub cidr: Cidr,
    pub subnets: Vec<Subnet>,
    /// Always 1: a single shared NAT egress path
    pub nat_gateways: u8,
    pub audit_store: AuditStore,
    pub flow_log: FlowLog,
}

impl NetworkBoundary {
    pub fn public_subnets(&self) -> impl Iterator<Item = &Subnet> {
        self.subnets.iter().filter(|s| s.kind == SubnetKind::Public)
    }

    pub fn private_subnets(&self) -> impl Iterator<Item = &Subnet> {
        self.subnets.iter().filter(|s| s.kind == SubnetKind::Private)
    }
}
