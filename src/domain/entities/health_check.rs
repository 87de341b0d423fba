//! Load-balancer health checks

use std::fmt;

use serde::{Serialize, Serializer};

/// HTTP status codes a health check treats as healthy
///
/// Rendered the way load balancers take them: `200,401` or `200-499`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodes(Vec<(u16, u16)>);

impl StatusCodes {
    pub fn single(code: u16) -> Self {
        Self(vec![(code, code)])
    }

    pub fn range(low: u16, high: u16) -> Self {
        Self(vec![(low, high)])
    }

    /// Add one more accepted code
    pub fn and(mut self, code: u16) -> Self {
        self.0.push((code, code));
        self
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.0.iter().any(|(low, high)| (*low..=*high).contains(&status))
    }
}

impl fmt::Display for StatusCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (low, high)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if low == high {
                write!(f, "{}", low)?;
            } else {
                write!(f, "{}-{}", low, high)?;
            }
        }
        Ok(())
    }
}

impl Serialize for StatusCodes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub path: Option<&'static str>,
    pub interval_seconds: Option<u32>,
    pub healthy_threshold: Option<u32>,
    pub healthy_codes: StatusCodes,
}
