//! Variant value object - which deployment topology to compose

use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;

/// Deployment variant
///
/// Both variants share the master/worker contract and differ only in how the
/// worker fleet executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// One host-networked worker with a traffic-control sidecar
    FaultInjection,
    /// N isolated workers on spot-preferred serverless capacity
    LoadTesting,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::FaultInjection, Variant::LoadTesting];

    /// Stable identifier used in config files and env vars
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::FaultInjection => "fault-injection",
            Variant::LoadTesting => "load-testing",
        }
    }

    /// Stack name used when the config does not set one
    pub fn default_stack_name(&self) -> &'static str {
        match self {
            Variant::FaultInjection => "IoTFaultInjectionSimulatorStack",
            Variant::LoadTesting => "IoTLoadTestingSimulatorStack",
        }
    }

    /// Whether workers need direct access to the host network namespace
    pub fn needs_host_network(&self) -> bool {
        matches!(self, Variant::FaultInjection)
    }

    /// Whether the worker replica count comes from configuration
    pub fn takes_worker_count(&self) -> bool {
        matches!(self, Variant::LoadTesting)
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fault-injection" | "fault_injection" | "faultinjection" => Ok(Variant::FaultInjection),
            "load-testing" | "load_testing" | "loadtesting" => Ok(Variant::LoadTesting),
            other => Err(ConfigValidationError::UnknownVariant(other.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
