//! Compute cluster derivation

use tracing::debug;

use crate::config::DeploymentConfig;
use crate::domain::entities::{
    ids, ComputeCluster, InstancePool, NetworkBoundary, PolicyStatement, DISCOVERY_NAMESPACE,
};
use crate::domain::value_objects::LogicalId;

/// The only extra permission host-pool instances get
const PARAMETER_READ_ACTION: &str = "ssm:GetParameter";

pub fn build(boundary: &NetworkBoundary, config: &DeploymentConfig) -> ComputeCluster {
    let instance_pool = config.variant().needs_host_network().then(|| InstancePool {
        id: LogicalId::new(ids::HOST_POOL),
        instance_type: config.instance_type().to_string(),
        machine_image: "ecs-optimized-amazon-linux",
        desired_capacity: 1,
        extra_policy: vec![PolicyStatement::allow(PARAMETER_READ_ACTION, "*")],
    });

    debug!(
        step = "cluster",
        variant = %config.variant(),
        host_pool = instance_pool.is_some(),
        "derived compute cluster"
    );

    ComputeCluster {
        id: LogicalId::new(ids::CLUSTER),
        network: boundary.id.clone(),
        namespace: DISCOVERY_NAMESPACE,
        container_insights: true,
        instance_pool,
    }
}
