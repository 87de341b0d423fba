//! Scenario: load test with a hundred workers
//!
//! Journey: an operator wants to hammer the IoT endpoint from 100 workers,
//! with the coordinator UI reachable from the corporate network only.
//!
//! Steps:
//! 1. Writes a config: one CIDR, 100 workers, no certificate, no web auth
//! 2. Plans the deployment to a file
//! 3. Re-plans and diffs against the written plan
//!
//! Success Criteria:
//! - HTTP front door on port 80
//! - One master replica, 100 worker replicas
//! - One worker -> master rule on the coordination port
//! - One CIDR -> front door rule on port 80
//! - No traffic-control rules or resources

use iotsim::application::{ConfigSource, DiffUseCase, PlanOptions, PlanUseCase};
use iotsim::domain::entities::{ids, Peer, COORDINATION_PORT, TRAFFIC_CONTROL_PORT};
use iotsim::domain::value_objects::{Cidr, FrontDoorProtocol};
use iotsim::infrastructure::{DeferredIdentityProvisioner, FsPlanWriter};

use crate::common::*;

#[test]
fn scenario_load_test_with_hundred_workers() {
    // Step 1: config on disk
    let env = TestEnv::new();
    let config_path = env.write("iotsim.toml", LOAD_TESTING_TOML);
    let plan_path = env.path("plans/plan.json");

    // Step 2: plan to file
    let use_case = PlanUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new());
    let options = PlanOptions::new(ConfigSource::new(&config_path).without_env())
        .with_out(Some(plan_path.clone()));
    let result = use_case.execute(&options).unwrap();

    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(std::fs::read_to_string(&plan_path).unwrap(), result.rendered);

    let topology = &result.topology;
    let door = &topology.master().front_door;
    assert_eq!(door.protocol, FrontDoorProtocol::Http);
    assert_eq!(door.port, 80);
    assert_eq!(topology.master().service.replica_count, 1);
    assert_eq!(topology.worker().replica_count(), 100);

    let rules: Vec<_> = topology.rules().iter().collect();
    assert_eq!(rules.len(), 2);

    let coordination: Vec<_> = rules
        .iter()
        .filter(|r| matches!(r.source, Peer::Service(_)))
        .collect();
    assert_eq!(coordination.len(), 1);
    assert_eq!(coordination[0].port, COORDINATION_PORT);
    assert_eq!(coordination[0].destination, topology.master().service.name);

    let ingress: Vec<_> = rules
        .iter()
        .filter(|r| matches!(r.source, Peer::Cidr(_)))
        .collect();
    assert_eq!(ingress.len(), 1);
    assert_eq!(ingress[0].source, Peer::Cidr("10.0.0.0/8".parse::<Cidr>().unwrap()));
    assert_eq!(ingress[0].port, 80);

    assert!(rules.iter().all(|r| r.port != TRAFFIC_CONTROL_PORT));
    assert!(topology.traffic_control().is_none());
    assert!(result.plan.graph.get(ids::TRAFFIC_CONTROL_LB).is_none());
    assert!(result.plan.graph.get(ids::HOST_POOL).is_none());

    // Step 3: re-plan and diff against what was written
    let diff = DiffUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new())
        .execute(&ConfigSource::new(&config_path).without_env(), &plan_path)
        .unwrap();
    assert!(!diff.has_changes(), "{}", diff.unified);
    assert_eq!(diff.current_digest, result.plan.digest);
    assert_eq!(
        diff.previous_digest.as_deref(),
        Some(result.plan.digest.as_str())
    );
}

#[test]
fn scenario_scaling_workers_shows_up_in_diff() {
    let env = TestEnv::new();
    let config_path = env.write("iotsim.toml", LOAD_TESTING_TOML);
    let plan_path = env.path("plan.json");

    PlanUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new())
        .execute(
            &PlanOptions::new(ConfigSource::new(&config_path).without_env())
                .with_out(Some(plan_path.clone())),
        )
        .unwrap();

    env.write(
        "iotsim.toml",
        &LOAD_TESTING_TOML.replace("worker_desired_count = 100", "worker_desired_count = 150"),
    );

    let diff = DiffUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new())
        .execute(&ConfigSource::new(&config_path).without_env(), &plan_path)
        .unwrap();

    assert!(diff.has_changes());
    assert!(diff.unified.contains("-") && diff.unified.contains("\"replica_count\": 100"));
    assert!(diff.unified.contains("\"replica_count\": 150"));
    assert_ne!(
        diff.previous_digest.as_deref(),
        Some(diff.current_digest.as_str())
    );
}
