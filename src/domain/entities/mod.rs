//! Domain Entities
//!
//! Values that make up a derived topology:
//! - `NetworkBoundary`, `ComputeCluster` - where services run
//! - `MasterService`, `WorkerService`, `PublicLoadBalancer` - what runs
//! - `RuleSet` - who may talk to whom
//! - `Topology` - the assembled whole
//! - `ResourceGraph` - the declarative form handed to the provisioning engine

mod cluster;
mod connectivity;
mod container;
mod health_check;
pub mod ids;
mod load_balancer;
mod master;
mod network;
mod resource_graph;
mod service;
mod topology;
mod worker;

pub use cluster::{ComputeCluster, InstancePool, PolicyStatement, DISCOVERY_NAMESPACE};
pub use connectivity::{ConnectivityRule, Peer, RuleSet};
pub use container::{
    ContainerSpec, HostVolume, ImageRef, LogConfig, MountPoint, PortMapping, ResourceLimits,
    Ulimit,
};
pub use health_check::{HealthCheck, StatusCodes};
pub use load_balancer::{LoadBalancerTarget, PublicLoadBalancer};
pub use master::{FrontDoor, MasterService, COORDINATION_PORT, MASTER_UI_PORT};
pub use network::{AuditStore, FlowLog, NetworkBoundary, Subnet, SubnetKind};
pub use resource_graph::{PlanDocument, PlanFormat, Resource, ResourceGraph, ResourceKind};
pub use service::{
    CapacityStrategy, DeploymentPolicy, LaunchType, NetworkMode, ServiceSpec, TaskRole, TaskSize,
};
pub use topology::{IdentityBinding, IdentityMode, StackOutputs, Topology};
pub use worker::{WorkerMode, WorkerService, TRAFFIC_CONTROL_CONTAINER, TRAFFIC_CONTROL_PORT};
