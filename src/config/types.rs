//! Configuration type definitions
//!
//! Two layers:
//! - [`DeploymentSettings`] mirrors the TOML file. Every field is optional so
//!   that env overrides and CLI flags can fill gaps before validation.
//! - [`DeploymentConfig`] is the validated, immutable value the composer
//!   consumes. Only [`DeploymentSettings::validate`] produces one.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Cidr, ConfigWarning, ThingName, Variant};
use crate::error::{ConfigValidationError, IotSimResult};

use super::loader;

pub const DEFAULT_REGION: &str = "ap-northeast-2";
pub(crate) const DEFAULT_INSTANCE_TYPE: &str = "t2.2xlarge";
pub(crate) const DEFAULT_IMAGE_CONTEXT: &str = "app";
pub(crate) const DEFAULT_MAX_AZS: u8 = 2;
pub(crate) const DEFAULT_MQTT_WAIT_TIME: u32 = 1;
pub(crate) const DEFAULT_MQTT_MESSAGE: &str = "Test Message payload";

/// `[mqtt]` section as written in the file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MqttSection {
    #[serde(default)]
    pub wait_time: Option<u32>,

    #[serde(default)]
    pub qos: Option<u8>,

    #[serde(default)]
    pub message: Option<String>,
}

/// `[iot]` section as written in the file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IotSection {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub thing_name: Option<String>,
}

/// Raw deployment settings, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentSettings {
    #[serde(default)]
    pub variant: Option<String>,

    #[serde(default)]
    pub stack_name: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub allowed_cidrs: Vec<String>,

    #[serde(default)]
    pub worker_desired_count: Option<u32>,

    #[serde(default)]
    pub certificate_arn: Option<String>,

    #[serde(default)]
    pub web_username: Option<String>,

    #[serde(default)]
    pub web_password: Option<String>,

    #[serde(default)]
    pub instance_type: Option<String>,

    #[serde(default)]
    pub max_azs: Option<u8>,

    #[serde(default)]
    pub image_context: Option<String>,

    #[serde(default)]
    pub mqtt: MqttSection,

    #[serde(default)]
    pub iot: IotSection,
}

impl DeploymentSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> IotSimResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IotSimResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `IOTSIM_*` environment overrides from the process environment
    pub fn with_env_overrides(self) -> IotSimResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Force a variant, as the `--variant` flag does
    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        if let Some(variant) = variant {
            self.variant = Some(variant.as_str().to_string());
        }
        self
    }

    /// Validate into an immutable [`DeploymentConfig`]
    pub fn validate(
        self,
    ) -> Result<(DeploymentConfig, Vec<ConfigWarning>), ConfigValidationError> {
        super::validate::validate(self)
    }
}

/// MQTT quality of service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Qos {
    AtMostOnce,
    AtLeastOnce,
    ExactlyOnce,
}

impl Qos {
    pub fn as_u8(&self) -> u8 {
        match self {
            Qos::AtMostOnce => 0,
            Qos::AtLeastOnce => 1,
            Qos::ExactlyOnce => 2,
        }
    }
}

impl TryFrom<u8> for Qos {
    type Error = ConfigValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Qos::AtMostOnce),
            1 => Ok(Qos::AtLeastOnce),
            2 => Ok(Qos::ExactlyOnce),
            other => Err(ConfigValidationError::InvalidQos(other)),
        }
    }
}

impl From<Qos> for u8 {
    fn from(qos: Qos) -> Self {
        qos.as_u8()
    }
}

/// Validated MQTT publishing parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MqttParams {
    pub wait_time_seconds: u32,
    pub qos: Qos,
    pub message: String,
}

/// Validated device-management endpoint parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IotParams {
    pub endpoint: String,
    pub topic: String,
    pub thing_name: ThingName,
}

/// Basic-auth credentials for the coordinator UI
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct WebAuth {
    username: String,
    password: String,
}

impl WebAuth {
    pub(crate) fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `user:password`, the form the coordinator's `--web-auth` flag takes
    pub fn credential_pair(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl fmt::Debug for WebAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated deployment configuration
///
/// Immutable. Changing a deployment means producing a new one and re-deriving
/// the whole topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub(crate) variant: Variant,
    pub(crate) stack_name: String,
    pub(crate) region: String,
    pub(crate) allowed_cidrs: BTreeSet<Cidr>,
    pub(crate) mqtt: MqttParams,
    pub(crate) iot: IotParams,
    pub(crate) web_auth: Option<WebAuth>,
    pub(crate) certificate_arn: Option<String>,
    pub(crate) worker_desired_count: Option<u32>,
    pub(crate) instance_type: String,
    pub(crate) max_azs: u8,
    pub(crate) image_context: String,
}

impl DeploymentConfig {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn allowed_cidrs(&self) -> &BTreeSet<Cidr> {
        &self.allowed_cidrs
    }

    pub fn mqtt(&self) -> &MqttParams {
        &self.mqtt
    }

    pub fn iot(&self) -> &IotParams {
        &self.iot
    }

    pub fn web_auth(&self) -> Option<&WebAuth> {
        self.web_auth.as_ref()
    }

    pub fn certificate_arn(&self) -> Option<&str> {
        self.certificate_arn.as_deref()
    }

    /// Present only for the load-testing variant
    pub fn worker_desired_count(&self) -> Option<u32> {
        self.worker_desired_count
    }

    /// Instance type of the fault-injection host pool
    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }

    pub fn max_azs(&self) -> u8 {
        self.max_azs
    }

    pub fn image_context(&self) -> &str {
        &self.image_context
    }
}
