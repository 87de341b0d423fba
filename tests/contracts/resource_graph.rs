//! Contract: the emitted resource graph is complete, acyclic and stable.

use iotsim::domain::entities::ids;
use iotsim::domain::value_objects::LogicalId;

use crate::common::*;

fn position(order: &[LogicalId], id: &str) -> usize {
    order
        .iter()
        .position(|x| x.as_str() == id)
        .unwrap_or_else(|| panic!("{} missing from build order", id))
}

/// CONTRACT: every dependency precedes its dependent in the build order
#[test]
fn contract_build_order_respects_every_edge() {
    for variant in ["load-testing", "fault-injection"] {
        let graph = derive_graph(&config(settings(variant)));
        let order = graph.build_order().unwrap();
        assert_eq!(order.len(), graph.len());

        for (id, resource) in graph.resources() {
            for dependency in &resource.depends_on {
                assert!(
                    position(&order, dependency.as_str()) < position(&order, id.as_str()),
                    "{} must precede {}",
                    dependency,
                    id
                );
            }
        }
    }
}

/// CONTRACT: the audit store exists before flow logging is enabled
#[test]
fn contract_audit_store_before_flow_log() {
    let graph = derive_graph(&config(settings("load-testing")));
    let order = graph.build_order().unwrap();
    assert!(position(&order, ids::AUDIT_STORE) < position(&order, ids::FLOW_LOG));
}

/// CONTRACT: the identity is ready before any task definition
#[test]
fn contract_identity_before_tasks() {
    let graph = derive_graph(&config(settings("fault-injection")));
    let order = graph.build_order().unwrap();
    let identity = position(&order, ids::DEVICE_IDENTITY);
    assert!(identity < position(&order, ids::MASTER_TASK));
    assert!(identity < position(&order, ids::WORKER_TASK));
}

/// CONTRACT: the same config always yields the same digest
#[test]
fn contract_digest_is_stable() {
    let config = config(settings("load-testing"));
    let a = derive_graph(&config).into_plan().unwrap();
    let b = derive_graph(&config).into_plan().unwrap();
    assert_eq!(a.digest, b.digest);
    assert!(a.digest.as_str().starts_with("sha256:"));
}

/// CONTRACT: outputs are present for both variants
#[test]
fn contract_outputs_present() {
    let load = derive_graph(&config(settings("load-testing")));
    let names: Vec<&str> = load.outputs().keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "CoordinatorDiscoveryName",
            "CoordinatorURL",
            "EcsClusterArn",
            "WorkerServiceName"
        ]
    );

    let fault = derive_graph(&config(settings("fault-injection")));
    assert!(fault.outputs().contains_key("TrafficControlURL"));
}
