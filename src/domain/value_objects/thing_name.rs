//! Thing name value object - the device identity the workers publish as

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;

/// Maximum length accepted by the device-identity service
pub const MAX_THING_NAME_LEN: usize = 128;

/// A validated device (thing) name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThingName(String);

impl ThingName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ConfigValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ConfigValidationError::EmptyField("iot.thing_name"));
        }
        if raw.len() > MAX_THING_NAME_LEN {
            return Err(ConfigValidationError::InvalidThingName {
                name: raw,
                reason: format!("longer than {} characters", MAX_THING_NAME_LEN),
            });
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-')))
        {
            return Err(ConfigValidationError::InvalidThingName {
                reason: format!("character '{}' is not allowed", bad),
                name: raw,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ThingName {
    type Error = ConfigValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ThingName> for String {
    fn from(name: ThingName) -> Self {
        name.0
    }
}

impl fmt::Display for ThingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
