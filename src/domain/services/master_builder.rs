//! Coordinator service derivation
//!
//! One replica, one container, a front door whose protocol follows the
//! certificate, and health checks that tolerate basic-auth challenges.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::DeploymentConfig;
use crate::domain::entities::{
    ids, ComputeCluster, ContainerSpec, DeploymentPolicy, FrontDoor, HealthCheck, ImageRef,
    LaunchType, LogConfig, MasterService, NetworkMode, PortMapping, ServiceSpec, StatusCodes,
    TaskSize, MASTER_UI_PORT,
};
use crate::domain::value_objects::{CredentialPaths, FrontDoorProtocol, LogicalId, ServiceRef};

const MASTER_NAME: &str = "master";
const MASTER_CONTAINER: &str = "locust-master";
const MASTER_DOCKERFILE: &str = "docker/master.Dockerfile";
const TLS_POLICY: &str = "RECOMMENDED";
const ACCESS_LOG_PREFIX: &str = "locustAlbAccessLog";

const HEALTH_INTERVAL_SECONDS: u32 = 15;
const HEALTHY_THRESHOLD: u32 = 2;
const HEALTH_GRACE_SECONDS: u32 = 20;
const DEREGISTRATION_DELAY_SECONDS: u32 = 10;
const LOG_RETENTION_DAYS: u32 = 7;

pub fn build(
    cluster: &ComputeCluster,
    config: &DeploymentConfig,
    paths: &CredentialPaths,
) -> MasterService {
    let protocol = FrontDoorProtocol::for_certificate(config.certificate_arn());

    let mut command = vec!["--master".to_string()];
    if let Some(auth) = config.web_auth() {
        command.push("--web-auth".to_string());
        command.push(auth.credential_pair());
    }

    let container = ContainerSpec::new(
        MASTER_CONTAINER,
        ImageRef {
            context: config.image_context().to_string(),
            dockerfile: MASTER_DOCKERFILE,
        },
        LogConfig {
            stream_prefix: MASTER_CONTAINER,
            retention_days: LOG_RETENTION_DAYS,
        },
    )
    .command(command)
    .env(master_environment(config, paths))
    .port(PortMapping::container(MASTER_UI_PORT));

    let discovery_endpoint = cluster.discovery_name(MASTER_NAME);

    let service = ServiceSpec {
        name: ServiceRef::new(ids::MASTER_SERVICE),
        containers: vec![container],
        replica_count: 1,
        network_mode: NetworkMode::Isolated,
        launch_type: LaunchType::Elastic,
        task_size: Some(TaskSize {
            cpu: 1024,
            memory_mib: 2048,
        }),
        volumes: Vec::new(),
        task_role: None,
        capacity: Vec::new(),
        deployment: DeploymentPolicy {
            min_healthy_percent: None,
            circuit_breaker_rollback: true,
        },
        discovery_name: Some(MASTER_NAME.to_string()),
    };

    // Probes carry no credentials, so a 401 means the UI is up.
    let healthy_codes = if config.web_auth().is_some() {
        StatusCodes::single(200).and(401)
    } else {
        StatusCodes::single(200)
    };

    let front_door = FrontDoor {
        id: LogicalId::new(ids::MASTER_FRONT_DOOR),
        protocol,
        port: protocol.port(),
        certificate_arn: config.certificate_arn().map(str::to_string),
        tls_policy: (protocol == FrontDoorProtocol::Https).then_some(TLS_POLICY),
        target_protocol: FrontDoorProtocol::Http,
        target_port: MASTER_UI_PORT,
        open_listener: false,
        allowed_cidrs: config.allowed_cidrs().iter().copied().collect(),
        health_check: HealthCheck {
            path: None,
            interval_seconds: Some(HEALTH_INTERVAL_SECONDS),
            healthy_threshold: Some(HEALTHY_THRESHOLD),
            healthy_codes,
        },
        health_check_grace_seconds: HEALTH_GRACE_SECONDS,
        deregistration_delay_seconds: DEREGISTRATION_DELAY_SECONDS,
        access_log_store: LogicalId::new(ids::AUDIT_STORE),
        access_log_prefix: ACCESS_LOG_PREFIX,
    };

    debug!(
        step = "master",
        health_codes = %front_door.health_check.healthy_codes,
        "derived coordinator front door"
    );
    info!(
        step = "master",
        protocol = %protocol,
        port = front_door.port,
        web_auth = config.web_auth().is_some(),
        "derived master service"
    );

    MasterService {
        service,
        front_door,
        discovery_endpoint,
    }
}

/// The coordinator only needs the device endpoint and where credentials live
fn master_environment(config: &DeploymentConfig, paths: &CredentialPaths) -> BTreeMap<String, String> {
    let iot = config.iot();
    BTreeMap::from([
        ("IOT_CORE_ENDPOINT".to_string(), iot.endpoint.clone()),
        ("IOT_CORE_MQTT_TOPIC".to_string(), iot.topic.clone()),
        ("PARAM_STORE_CERT_PATH".to_string(), paths.cert_path().to_string()),
        ("PARAM_STORE_PRIV_PATH".to_string(), paths.key_path().to_string()),
    ])
}
