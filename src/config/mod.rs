//! Deployment configuration
//!
//! Resolution order (highest wins):
//! 1. CLI flags (`--variant`)
//! 2. Environment variables (`IOTSIM_*`)
//! 3. The TOML deployment file
//! 4. Built-in defaults
//!
//! Validation turns the merged [`DeploymentSettings`] into an immutable
//! [`DeploymentConfig`]; nothing downstream sees unvalidated input.

mod loader;
mod template;
mod types;
mod validate;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    parse_with_warnings, with_env_overrides, ENV_CERTIFICATE_ARN, ENV_REGION, ENV_VARIANT,
    ENV_WEB_PASSWORD, ENV_WEB_USERNAME, ENV_WORKER_DESIRED_COUNT,
};
pub use template::render_template;
pub use types::{
    DeploymentConfig, DeploymentSettings, IotParams, IotSection, MqttParams, MqttSection, Qos,
    WebAuth, DEFAULT_REGION,
};
