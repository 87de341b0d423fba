//! Deployment configuration validation
//!
//! Turns raw [`DeploymentSettings`] into a [`DeploymentConfig`]. Every
//! contradiction is rejected here, before any component is derived.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::value_objects::{Cidr, ConfigWarning, ThingName, Variant};
use crate::error::ConfigValidationError;

use super::types::{
    DeploymentConfig, DeploymentSettings, IotParams, MqttParams, Qos, WebAuth,
    DEFAULT_IMAGE_CONTEXT, DEFAULT_INSTANCE_TYPE, DEFAULT_MAX_AZS, DEFAULT_MQTT_MESSAGE,
    DEFAULT_MQTT_WAIT_TIME, DEFAULT_REGION,
};

pub(super) fn validate(
    settings: DeploymentSettings,
) -> Result<(DeploymentConfig, Vec<ConfigWarning>), ConfigValidationError> {
    let mut warnings = Vec::new();

    let variant: Variant = settings
        .variant
        .as_deref()
        .ok_or(ConfigValidationError::MissingVariant)?
        .parse()?;

    let web_auth = validate_web_auth(settings.web_username, settings.web_password)?;

    let worker_desired_count = match (variant.takes_worker_count(), settings.worker_desired_count)
    {
        (true, None) => return Err(ConfigValidationError::WorkerCountRequired),
        (true, Some(0)) => return Err(ConfigValidationError::ZeroWorkerCount),
        (true, Some(count)) => Some(count),
        (false, Some(_)) => return Err(ConfigValidationError::WorkerCountNotAllowed(variant)),
        (false, None) => None,
    };

    let mut allowed_cidrs = BTreeSet::new();
    for raw in &settings.allowed_cidrs {
        let cidr: Cidr = raw.parse()?;
        if !allowed_cidrs.insert(cidr) {
            warn!(cidr = %cidr, "duplicate allowed CIDR collapsed");
            warnings.push(ConfigWarning::duplicate_cidr(cidr.to_string()));
        }
    }
    if web_auth.is_none() && allowed_cidrs.iter().any(Cidr::is_any) {
        warnings.push(ConfigWarning::open_ingress_without_auth());
    }

    let wait_time_seconds = settings.mqtt.wait_time.unwrap_or(DEFAULT_MQTT_WAIT_TIME);
    if wait_time_seconds == 0 {
        return Err(ConfigValidationError::ZeroWaitTime);
    }
    let qos = Qos::try_from(settings.mqtt.qos.unwrap_or(0))?;
    let message = settings
        .mqtt
        .message
        .unwrap_or_else(|| DEFAULT_MQTT_MESSAGE.to_string());

    let endpoint = required(settings.iot.endpoint, "iot.endpoint")?;
    let topic = required(settings.iot.topic, "iot.topic")?;
    let thing_name = ThingName::parse(required(settings.iot.thing_name, "iot.thing_name")?)?;

    let certificate_arn = match settings.certificate_arn {
        Some(arn) if arn.trim().is_empty() => {
            return Err(ConfigValidationError::EmptyField("certificate_arn"))
        }
        other => other,
    };

    let max_azs = settings.max_azs.unwrap_or(DEFAULT_MAX_AZS);
    if !(1..=3).contains(&max_azs) {
        return Err(ConfigValidationError::InvalidAzCount(max_azs));
    }

    let stack_name = non_empty_or(settings.stack_name, "stack_name", variant.default_stack_name())?;
    let region = non_empty_or(settings.region, "region", DEFAULT_REGION)?;
    let instance_type = non_empty_or(settings.instance_type, "instance_type", DEFAULT_INSTANCE_TYPE)?;
    let image_context = non_empty_or(settings.image_context, "image_context", DEFAULT_IMAGE_CONTEXT)?;

    let config = DeploymentConfig {
        variant,
        stack_name,
        region,
        allowed_cidrs,
        mqtt: MqttParams {
            wait_time_seconds,
            qos,
            message,
        },
        iot: IotParams {
            endpoint,
            topic,
            thing_name,
        },
        web_auth,
        certificate_arn,
        worker_desired_count,
        instance_type,
        max_azs,
        image_context,
    };

    debug!(
        variant = %config.variant,
        cidrs = config.allowed_cidrs.len(),
        warnings = warnings.len(),
        "validated deployment configuration"
    );

    Ok((config, warnings))
}

fn validate_web_auth(
    username: Option<String>,
    password: Option<String>,
) -> Result<Option<WebAuth>, ConfigValidationError> {
    match (username, password) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigValidationError::UnpairedWebAuth {
            present: "web_username",
            missing: "web_password",
        }),
        (None, Some(_)) => Err(ConfigValidationError::UnpairedWebAuth {
            present: "web_password",
            missing: "web_username",
        }),
        (Some(username), Some(password)) => {
            if username.is_empty() {
                return Err(ConfigValidationError::EmptyField("web_username"));
            }
            if password.is_empty() {
                return Err(ConfigValidationError::EmptyField("web_password"));
            }
            Ok(Some(WebAuth::new(username, password)))
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigValidationError> {
    match value {
        None => Err(ConfigValidationError::MissingField(field)),
        Some(v) if v.trim().is_empty() => Err(ConfigValidationError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}

fn non_empty_or(
    value: Option<String>,
    field: &'static str,
    default: &str,
) -> Result<String, ConfigValidationError> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if v.trim().is_empty() => Err(ConfigValidationError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}
