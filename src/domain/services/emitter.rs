//! Resource graph emitter - topology in, declarative graph out
//!
//! Dependency edges follow value references, plus one edge the provisioning
//! engine cannot infer: the flow log waits for the audit store.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::entities::{
    ids, IdentityMode, Peer, Resource, ResourceGraph, ResourceKind, ServiceSpec, Topology,
};
use crate::domain::value_objects::{LogicalId, PARAM_PREFIX};
use crate::error::IotSimResult;

pub fn emit(topology: &Topology) -> IotSimResult<ResourceGraph> {
    let mut graph = ResourceGraph::new(
        topology.stack_name(),
        topology.variant(),
        topology.region(),
    );

    emit_network(topology, &mut graph)?;
    let identity = emit_identity(topology, &mut graph)?;
    emit_cluster(topology, &mut graph)?;
    emit_master(topology, identity.as_ref(), &mut graph)?;
    emit_worker(topology, identity.as_ref(), &mut graph)?;
    emit_rules(topology, &mut graph)?;

    for (name, value) in topology.outputs().named() {
        graph.set_output(name, value);
    }

    graph.check_dependencies()?;
    debug!(resources = graph.len(), "emitted resource graph");
    Ok(graph)
}

fn props<T: Serialize>(value: &T) -> IotSimResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn emit_network(topology: &Topology, graph: &mut ResourceGraph) -> IotSimResult<()> {
    let network = topology.network();

    graph.insert(
        &network.id,
        Resource::new(
            ResourceKind::Vpc,
            json!({
                "cidr": network.cidr.to_string(),
                "nat_gateways": network.nat_gateways,
            }),
        ),
    )?;

    for subnet in &network.subnets {
        graph.insert(
            &subnet.id,
            Resource::new(ResourceKind::Subnet, props(subnet)?).depends_on(&network.id),
        )?;
    }

    let mut nat = Resource::new(ResourceKind::NatGateway, json!({ "count": network.nat_gateways }))
        .depends_on(&network.id);
    if let Some(first_public) = network.public_subnets().next() {
        nat = nat.depends_on(&first_public.id);
    }
    graph.insert(ids::NAT_GATEWAY, nat)?;

    let store = &network.audit_store;
    graph.insert(&store.id, Resource::new(ResourceKind::Bucket, props(store)?))?;

    let flow_log = &network.flow_log;
    graph.insert(
        &flow_log.id,
        Resource::new(ResourceKind::FlowLog, props(flow_log)?)
            .depends_on(&flow_log.network)
            .depends_on(&flow_log.destination),
    )?;

    Ok(())
}

/// Emits the identity resource when issuance is left to the engine
fn emit_identity(topology: &Topology, graph: &mut ResourceGraph) -> IotSimResult<Option<LogicalId>> {
    let identity = topology.identity();
    if identity.mode != IdentityMode::Deferred {
        return Ok(None);
    }

    let id = LogicalId::new(ids::DEVICE_IDENTITY);
    graph.insert(
        &id,
        Resource::new(
            ResourceKind::DeviceIdentity,
            json!({
                "thing_name": identity.thing_name.as_str(),
                "param_prefix": PARAM_PREFIX,
                "cert_path": identity.paths.cert_path(),
                "key_path": identity.paths.key_path(),
            }),
        ),
    )?;
    Ok(Some(id))
}

fn emit_cluster(topology: &Topology, graph: &mut ResourceGraph) -> IotSimResult<()> {
    let cluster = topology.cluster();

    graph.insert(
        ids::DISCOVERY_NAMESPACE,
        Resource::new(
            ResourceKind::DiscoveryNamespace,
            json!({ "name": cluster.namespace }),
        )
        .depends_on(&cluster.network),
    )?;

    graph.insert(
        &cluster.id,
        Resource::new(
            ResourceKind::Cluster,
            json!({ "container_insights": cluster.container_insights }),
        )
        .depends_on(&cluster.network)
        .depends_on(ids::DISCOVERY_NAMESPACE),
    )?;

    if let Some(pool) = &cluster.instance_pool {
        let mut resource =
            Resource::new(ResourceKind::AutoScalingGroup, props(pool)?).depends_on(&cluster.id);
        for subnet in topology.network().private_subnets() {
            resource = resource.depends_on(&subnet.id);
        }
        graph.insert(&pool.id, resource)?;
    }

    Ok(())
}

fn task_definition(service: &ServiceSpec, identity: Option<&LogicalId>) -> IotSimResult<Resource> {
    let mut resource = Resource::new(
        ResourceKind::TaskDefinition,
        json!({
            "network_mode": props(&service.network_mode)?,
            "size": props(&service.task_size)?,
            "volumes": props(&service.volumes)?,
            "containers": props(&service.containers)?,
        }),
    );
    if let Some(identity) = identity {
        resource = resource.depends_on(identity);
    }
    Ok(resource)
}

fn service_resource(
    service: &ServiceSpec,
    cluster: &LogicalId,
    task: &str,
) -> IotSimResult<Resource> {
    Ok(Resource::new(
        ResourceKind::Service,
        json!({
            "name": service.name.as_str(),
            "replica_count": service.replica_count,
            "launch_type": props(&service.launch_type)?,
            "capacity": props(&service.capacity)?,
            "deployment": props(&service.deployment)?,
            "discovery_name": service.discovery_name,
        }),
    )
    .depends_on(cluster)
    .depends_on(task))
}

fn emit_master(
    topology: &Topology,
    identity: Option<&LogicalId>,
    graph: &mut ResourceGraph,
) -> IotSimResult<()> {
    let master = topology.master();
    let door = &master.front_door;

    graph.insert(ids::MASTER_TASK, task_definition(&master.service, identity)?)?;

    let mut front_door = Resource::new(ResourceKind::LoadBalancer, props(door)?)
        .depends_on(&door.access_log_store);
    for subnet in topology.network().public_subnets() {
        front_door = front_door.depends_on(&subnet.id);
    }
    graph.insert(&door.id, front_door)?;

    graph.insert(
        master.service.name.logical_id(),
        service_resource(&master.service, &topology.cluster().id, ids::MASTER_TASK)?
            .depends_on(&door.id)
            .depends_on(ids::DISCOVERY_NAMESPACE),
    )?;

    Ok(())
}

fn emit_worker(
    topology: &Topology,
    identity: Option<&LogicalId>,
    graph: &mut ResourceGraph,
) -> IotSimResult<()> {
    let worker = topology.worker().service();
    let cluster = topology.cluster();

    let mut task = task_definition(worker, identity)?;
    if let Some(role) = &worker.task_role {
        graph.insert(ids::WORKER_TASK_ROLE, Resource::new(ResourceKind::Role, props(role)?))?;
        task = task.depends_on(ids::WORKER_TASK_ROLE);
    }
    graph.insert(ids::WORKER_TASK, task)?;

    let mut service = service_resource(worker, &cluster.id, ids::WORKER_TASK)?;
    if let Some(pool) = &cluster.instance_pool {
        service = service.depends_on(&pool.id);
    }
    graph.insert(worker.name.logical_id(), service)?;

    if let Some(balancer) = topology.traffic_control() {
        let mut resource = Resource::new(ResourceKind::LoadBalancer, props(balancer)?)
            .depends_on(&balancer.network)
            .depends_on(balancer.target.service.logical_id());
        for subnet in topology.network().public_subnets() {
            resource = resource.depends_on(&subnet.id);
        }
        graph.insert(&balancer.id, resource)?;
    }

    Ok(())
}

fn emit_rules(topology: &Topology, graph: &mut ResourceGraph) -> IotSimResult<()> {
    for (index, rule) in topology.rules().iter().enumerate() {
        let mut resource = Resource::new(ResourceKind::IngressRule, props(rule)?)
            .depends_on(rule.destination.logical_id());
        if let Peer::Service(source) = &rule.source {
            resource = resource.depends_on(source.logical_id());
        }
        graph.insert(ids::ingress_rule(index), resource)?;
    }
    Ok(())
}
