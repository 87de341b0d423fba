//! CIDR value object - an IPv4 network a client may connect from

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigValidationError;

/// A validated IPv4 CIDR block (`a.b.c.d/n`)
///
/// Host bits are cleared on construction, so `10.1.2.3/8` and `10.0.0.0/8`
/// are the same network. Ordering is by address then prefix length, which keeps derived rule sets
/// stable regardless of the order networks were declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    /// The "anywhere" block
    pub const ANY: Cidr = Cidr {
        addr: Ipv4Addr::UNSPECIFIED,
        prefix: 0,
    };

    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, ConfigValidationError> {
        if prefix > 32 {
            return Err(ConfigValidationError::InvalidCidr {
                cidr: format!("{}/{}", addr, prefix),
                reason: "prefix length must be 0-32".to_string(),
            });
        }
        Ok(Self::network(addr, prefix))
    }

    fn network(addr: Ipv4Addr, prefix: u8) -> Self {
        let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
        Self {
            addr: Ipv4Addr::from(u32::from(addr) & mask),
            prefix,
        }
    }

    /// A block the composer allocates itself; `prefix` is a literal <= 32
    pub(crate) const fn allocated(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Self {
        Self {
            addr: Ipv4Addr::new(a, b, c, d),
            prefix,
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// True for `0.0.0.0/0`
    pub fn is_any(&self) -> bool {
        self.prefix == 0
    }
}

impl FromStr for Cidr {
    type Err = ConfigValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigValidationError::InvalidCidr {
            cidr: s.to_string(),
            reason: reason.to_string(),
        };

        let (addr, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected a.b.c.d/n"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| invalid("address is not a valid IPv4 address"))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| invalid("prefix length is not a number"))?;
        if prefix > 32 {
            return Err(invalid("prefix length must be 0-32"));
        }
        Ok(Self::network(addr, prefix))
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
