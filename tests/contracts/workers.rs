//! Contract: replica counts follow the variant.

use iotsim::domain::entities::{HostVolume, NetworkMode, WorkerMode};

use crate::common::*;

/// CONTRACT: fault-injection runs exactly one worker
#[test]
fn contract_fault_injection_has_one_worker() {
    let topology = derive(&config(settings("fault-injection")));
    assert_eq!(topology.worker().mode(), WorkerMode::FaultInjection);
    assert_eq!(topology.worker().replica_count(), 1);
    assert_eq!(topology.worker().service().network_mode, NetworkMode::Host);
}

/// CONTRACT: load-testing runs the configured number of workers
#[test]
fn contract_load_testing_uses_configured_count() {
    for count in [1, 7, 100] {
        let mut s = settings("load-testing");
        s.worker_desired_count = Some(count);
        let topology = derive(&config(s));
        assert_eq!(topology.worker().mode(), WorkerMode::LoadTesting);
        assert_eq!(topology.worker().replica_count(), count);
        assert_eq!(topology.worker().service().network_mode, NetworkMode::Isolated);
    }
}

/// CONTRACT: there is always exactly one master replica
#[test]
fn contract_single_master() {
    for variant in ["load-testing", "fault-injection"] {
        let topology = derive(&config(settings(variant)));
        assert_eq!(topology.master().service.replica_count, 1);
    }
}

/// CONTRACT: both fault-injection containers share the host execution socket
#[test]
fn contract_fault_injection_containers_share_socket() {
    let topology = derive(&config(settings("fault-injection")));
    let containers = &topology.worker().service().containers;
    assert_eq!(containers.len(), 2);
    for container in containers {
        assert!(
            container.mounts_volume(&HostVolume::DOCKER_SOCKET),
            "{} lacks the socket mount",
            container.name
        );
    }
}

/// CONTRACT: worker containers carry identical IoT environment across variants
#[test]
fn contract_shared_worker_environment() {
    let load = derive(&config(settings("load-testing")));
    let fault = derive(&config(settings("fault-injection")));

    let load_env = &load.worker().service().containers[0].env;
    let fault_env = &fault.worker().service().containers[0].env;

    for key in [
        "IOT_CORE_ENDPOINT",
        "IOT_CORE_MQTT_TOPIC",
        "MQTT_WAIT_TIME",
        "MQTT_QOS",
        "MQTT_MESSAGE",
        "PARAM_STORE_CERT_PATH",
        "PARAM_STORE_PRIV_PATH",
    ] {
        assert_eq!(load_env.get(key), fault_env.get(key), "{} differs", key);
    }
    assert_eq!(load_env.get("IS_LOAD_TEST").map(String::as_str), Some("true"));
    assert_eq!(fault_env.get("IS_LOAD_TEST"), None);
}
