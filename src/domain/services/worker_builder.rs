//! Worker service derivation
//!
//! Both modes share one container contract, built by [`worker_environment`]:
//! device endpoint, credential paths, MQTT parameters and region as env, plus
//! the raised open-file limit. They differ in how the fleet executes.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::DeploymentConfig;
use crate::domain::entities::{
    ids, CapacityStrategy, ComputeCluster, ContainerSpec, DeploymentPolicy, HostVolume, ImageRef,
    LaunchType, LogConfig, NetworkMode, PolicyStatement, PortMapping, ResourceLimits, ServiceSpec,
    TaskRole, TaskSize, Ulimit, WorkerMode, WorkerService, TRAFFIC_CONTROL_CONTAINER,
    TRAFFIC_CONTROL_PORT,
};
use crate::domain::value_objects::{CredentialPaths, ServiceRef, Variant};
use crate::error::DerivationInvariantViolation;

const WORKER_CONTAINER: &str = "locust-worker";
const FAULT_INJECTION_DOCKERFILE: &str = "docker/worker.Dockerfile";
const LOAD_TESTING_DOCKERFILE: &str = "docker/normal.Dockerfile";

const FAULT_INJECTION_WORKER_SCRIPT: &str = "python3 get_certificate.py && \
     cp -R . /mnt/locust && \
     docker-compose -f worker.compose.yaml up";
const TRAFFIC_CONTROL_SCRIPT: &str = "cd docker-tc && HTTP_BIND=0.0.0.0 docker-compose up";

const SHORT_LOG_RETENTION_DAYS: u32 = 7;
const LONG_LOG_RETENTION_DAYS: u32 = 180;

const HOST_CONTAINER_MEMORY: ResourceLimits = ResourceLimits {
    memory_reservation_mib: Some(1250),
    memory_limit_mib: Some(2500),
};

/// Environment every worker container receives
///
/// Values name where secrets live; the secrets themselves are fetched by the
/// container at start.
pub fn worker_environment(
    config: &DeploymentConfig,
    paths: &CredentialPaths,
    mode: WorkerMode,
) -> BTreeMap<String, String> {
    let mqtt = config.mqtt();
    let iot = config.iot();

    let mut env = BTreeMap::from([
        ("AWS_DEFAULT_REGION".to_string(), config.region().to_string()),
        ("MQTT_WAIT_TIME".to_string(), mqtt.wait_time_seconds.to_string()),
        ("MQTT_QOS".to_string(), mqtt.qos.as_u8().to_string()),
        ("MQTT_MESSAGE".to_string(), mqtt.message.clone()),
        ("IOT_CORE_ENDPOINT".to_string(), iot.endpoint.clone()),
        ("IOT_CORE_MQTT_TOPIC".to_string(), iot.topic.clone()),
        ("PARAM_STORE_CERT_PATH".to_string(), paths.cert_path().to_string()),
        ("PARAM_STORE_PRIV_PATH".to_string(), paths.key_path().to_string()),
    ]);

    if mode == WorkerMode::LoadTesting {
        env.insert("IS_LOAD_TEST".to_string(), "true".to_string());
    }

    env
}

/// Derive the worker fleet for the configured variant
///
/// `master_endpoint` is the coordinator's discovery name; workers only ever
/// know the master by that name.
pub fn build(
    cluster: &ComputeCluster,
    config: &DeploymentConfig,
    paths: &CredentialPaths,
    master_endpoint: &str,
) -> Result<WorkerService, DerivationInvariantViolation> {
    let worker = match config.variant() {
        Variant::FaultInjection => fault_injection(cluster, config, paths)?,
        Variant::LoadTesting => {
            let replicas = config
                .worker_desired_count()
                .ok_or(DerivationInvariantViolation::MissingReplicaCount)?;
            load_testing(config, paths, master_endpoint, replicas)?
        }
    };

    info!(
        step = "worker",
        mode = ?worker.mode(),
        replicas = worker.replica_count(),
        containers = worker.service().containers.len(),
        "derived worker service"
    );

    Ok(worker)
}

fn fault_injection(
    cluster: &ComputeCluster,
    config: &DeploymentConfig,
    paths: &CredentialPaths,
) -> Result<WorkerService, DerivationInvariantViolation> {
    let image = ImageRef {
        context: config.image_context().to_string(),
        dockerfile: FAULT_INJECTION_DOCKERFILE,
    };

    let worker = ContainerSpec::new(
        WORKER_CONTAINER,
        image.clone(),
        LogConfig {
            stream_prefix: WORKER_CONTAINER,
            retention_days: SHORT_LOG_RETENTION_DAYS,
        },
    )
    .command(["/bin/sh", "-c", FAULT_INJECTION_WORKER_SCRIPT])
    .env(worker_environment(config, paths, WorkerMode::FaultInjection))
    .limits(HOST_CONTAINER_MEMORY)
    .ulimit(Ulimit::NOFILE)
    .mount(&HostVolume::DOCKER_SOCKET)
    .mount(&HostVolume::SHARED_WORKDIR);

    let traffic_control = ContainerSpec::new(
        TRAFFIC_CONTROL_CONTAINER,
        image,
        LogConfig {
            stream_prefix: "locust-tc-worker",
            retention_days: SHORT_LOG_RETENTION_DAYS,
        },
    )
    .command(["/bin/sh", "-c", TRAFFIC_CONTROL_SCRIPT])
    .limits(HOST_CONTAINER_MEMORY)
    .ulimit(Ulimit::NOFILE)
    .mount(&HostVolume::DOCKER_SOCKET)
    .mount(&HostVolume::TRAFFIC_CONTROL_STATE)
    .port(PortMapping::host(TRAFFIC_CONTROL_PORT));

    let launch_type = if cluster.instance_pool.is_some() {
        LaunchType::HostPool
    } else {
        LaunchType::Elastic
    };

    let service = ServiceSpec {
        name: ServiceRef::new(ids::WORKER_SERVICE),
        containers: vec![worker, traffic_control],
        replica_count: 1,
        network_mode: NetworkMode::Host,
        launch_type,
        task_size: None,
        volumes: vec![
            HostVolume::DOCKER_SOCKET,
            HostVolume::TRAFFIC_CONTROL_STATE,
            HostVolume::SHARED_WORKDIR,
        ],
        task_role: Some(parameter_read_role()),
        capacity: Vec::new(),
        // Host networking on a single host leaves no room for overlap.
        deployment: DeploymentPolicy {
            min_healthy_percent: Some(0),
            circuit_breaker_rollback: false,
        },
        discovery_name: None,
    };

    WorkerService::new(WorkerMode::FaultInjection, service)
}

fn load_testing(
    config: &DeploymentConfig,
    paths: &CredentialPaths,
    master_endpoint: &str,
    replicas: u32,
) -> Result<WorkerService, DerivationInvariantViolation> {
    let worker = ContainerSpec::new(
        WORKER_CONTAINER,
        ImageRef {
            context: config.image_context().to_string(),
            dockerfile: LOAD_TESTING_DOCKERFILE,
        },
        LogConfig {
            stream_prefix: WORKER_CONTAINER,
            retention_days: LONG_LOG_RETENTION_DAYS,
        },
    )
    .command(["--worker", "--master-host", master_endpoint])
    .env(worker_environment(config, paths, WorkerMode::LoadTesting))
    .ulimit(Ulimit::NOFILE);

    let service = ServiceSpec {
        name: ServiceRef::new(ids::WORKER_SERVICE),
        containers: vec![worker],
        replica_count: replicas,
        network_mode: NetworkMode::Isolated,
        launch_type: LaunchType::Elastic,
        task_size: Some(TaskSize {
            cpu: 1024,
            memory_mib: 2048,
        }),
        volumes: Vec::new(),
        task_role: Some(parameter_read_role()),
        capacity: vec![
            CapacityStrategy {
                provider: "FARGATE_SPOT",
                weight: 1,
            },
            CapacityStrategy {
                provider: "FARGATE",
                weight: 0,
            },
        ],
        deployment: DeploymentPolicy {
            min_healthy_percent: Some(0),
            circuit_breaker_rollback: false,
        },
        discovery_name: None,
    };

    WorkerService::new(WorkerMode::LoadTesting, service)
}

/// Read-only parameter-store access for fetching credentials at start
fn parameter_read_role() -> TaskRole {
    TaskRole {
        principal: "ecs-tasks.amazonaws.com",
        policy: vec![PolicyStatement {
            actions: vec![
                "ssm:DescribeParameters".to_string(),
                "ssm:GetParameter".to_string(),
                "ssm:GetParameters".to_string(),
                "ssm:GetParametersByPath".to_string(),
            ],
            resources: vec!["*".to_string()],
        }],
    }
}
