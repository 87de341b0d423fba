//! Front-door protocol - HTTPS when a certificate is supplied, HTTP otherwise

use serde::{Deserialize, Serialize};

/// Protocol of a public listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FrontDoorProtocol {
    Http,
    Https,
}

impl FrontDoorProtocol {
    /// Select the protocol from the presence of a certificate identifier
    pub fn for_certificate(certificate_arn: Option<&str>) -> Self {
        if certificate_arn.is_some() {
            FrontDoorProtocol::Https
        } else {
            FrontDoorProtocol::Http
        }
    }

    /// Public port the listener binds
    pub fn port(&self) -> u16 {
        match self {
            FrontDoorProtocol::Http => 80,
            FrontDoorProtocol::Https => 443,
        }
    }

    /// URL scheme
    pub fn scheme(&self) -> &'static str {
        match self {
            FrontDoorProtocol::Http => "http",
            FrontDoorProtocol::Https => "https",
        }
    }
}

impl std::fmt::Display for FrontDoorProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontDoorProtocol::Http => write!(f, "HTTP"),
            FrontDoorProtocol::Https => write!(f, "HTTPS"),
        }
    }
}

/// Transport protocol of a connectivity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Tcp,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tcp")
    }
}
