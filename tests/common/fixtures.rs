//! Test fixtures - reusable configs and derivation helpers.

use iotsim::config::{DeploymentConfig, DeploymentSettings, IotSection};
use iotsim::domain::entities::{ResourceGraph, Topology};
use iotsim::domain::services::{emit, StackAssembler};
use iotsim::infrastructure::DeferredIdentityProvisioner;

/// Load-testing config from the end-to-end scenario
pub const LOAD_TESTING_TOML: &str = r#"
variant = "load-testing"
allowed_cidrs = ["10.0.0.0/8"]
worker_desired_count = 100

[mqtt]
wait_time = 1
qos = 0
message = "Test Message payload"

[iot]
endpoint = "example-ats.iot.ap-northeast-2.amazonaws.com"
topic = "iot-simulator-load-testing-topic"
thing_name = "iot-simulator-load-testing-thing"
"#;

/// Fault-injection config with HTTPS and web auth
pub const FAULT_INJECTION_TOML: &str = r#"
variant = "fault-injection"
allowed_cidrs = ["10.0.0.0/8", "192.168.0.0/16"]
certificate_arn = "arn:aws:acm:ap-northeast-2:123456789012:certificate/abc"
web_username = "admin"
web_password = "s3cret-pass"

[iot]
endpoint = "example-ats.iot.ap-northeast-2.amazonaws.com"
topic = "iot-simulator-fault-injection-topic"
thing_name = "iot-simulator-fault-injection-thing"
"#;

/// Minimal valid settings for `variant`
pub fn settings(variant: &str) -> DeploymentSettings {
    DeploymentSettings {
        variant: Some(variant.to_string()),
        worker_desired_count: (variant == "load-testing").then_some(100),
        allowed_cidrs: vec!["10.0.0.0/8".to_string()],
        iot: IotSection {
            endpoint: Some("example-ats.iot.ap-northeast-2.amazonaws.com".to_string()),
            topic: Some("sim-topic".to_string()),
            thing_name: Some("sim-thing".to_string()),
        },
        ..Default::default()
    }
}

pub fn config(settings: DeploymentSettings) -> DeploymentConfig {
    settings.validate().expect("fixture settings validate").0
}

pub fn derive(config: &DeploymentConfig) -> Topology {
    StackAssembler::new(DeferredIdentityProvisioner::new())
        .assemble(config)
        .expect("derivation succeeds")
}

pub fn derive_graph(config: &DeploymentConfig) -> ResourceGraph {
    emit(&derive(config)).expect("emission succeeds")
}
