//! Network boundary derivation

use tracing::debug;

use crate::config::DeploymentConfig;
use crate::domain::entities::{ids, AuditStore, FlowLog, NetworkBoundary, Subnet, SubnetKind};
use crate::domain::value_objects::{Cidr, LogicalId};

const VPC_CIDR: Cidr = Cidr::allocated(10, 0, 0, 0, 16);

/// Offset of the private subnet range inside the VPC block
const PRIVATE_SUBNET_OFFSET: u8 = 128;

const FLOW_LOG_PREFIX: &str = "vpcFlowLog";

/// Build the isolated network: one public and one private subnet per AZ,
/// a single NAT gateway, and flow logs into a private audit store.
pub fn build(config: &DeploymentConfig) -> NetworkBoundary {
    let mut subnets = Vec::with_capacity(usize::from(config.max_azs()) * 2);

    for index in 0..config.max_azs() {
        let zone = availability_zone(config.region(), index);
        subnets.push(Subnet {
            id: LogicalId::new(ids::public_subnet(index.into())),
            kind: SubnetKind::Public,
            cidr: Cidr::allocated(10, 0, index, 0, 24),
            availability_zone: zone.clone(),
        });
        subnets.push(Subnet {
            id: LogicalId::new(ids::private_subnet(index.into())),
            kind: SubnetKind::Private,
            cidr: Cidr::allocated(10, 0, PRIVATE_SUBNET_OFFSET + index, 0, 24),
            availability_zone: zone,
        });
    }

    let audit_store = AuditStore {
        id: LogicalId::new(ids::AUDIT_STORE),
        encryption: "S3_MANAGED",
        block_public_access: true,
        auto_delete_objects: true,
    };

    let flow_log = FlowLog {
        id: LogicalId::new(ids::FLOW_LOG),
        network: LogicalId::new(ids::VPC),
        destination: audit_store.id.clone(),
        prefix: FLOW_LOG_PREFIX,
    };

    debug!(
        step = "network",
        variant = %config.variant(),
        subnets = subnets.len(),
        "derived network boundary"
    );

    NetworkBoundary {
        id: LogicalId::new(ids::VPC),
        cidr: VPC_CIDR,
        subnets,
        nat_gateways: 1,
        audit_store,
        flow_log,
    }
}

/// `{region}a`, `{region}b`, ...
fn availability_zone(region: &str, index: u8) -> String {
    format!("{}{}", region, char::from(b'a' + index))
}
