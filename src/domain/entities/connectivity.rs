//! Connectivity rules - derived ingress permissions
//!
//! A [`RuleSet`] is keyed by (source, destination, port). Inserting the same
//! key twice is a derivation bug and is reported, never silently merged.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{Cidr, ServiceRef, Transport};
use crate::error::DerivationInvariantViolation;

/// Where traffic comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Peer {
    Service(ServiceRef),
    Cidr(Cidr),
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Peer::Service(service) => write!(f, "{}", service),
            Peer::Cidr(cidr) => write!(f, "{}", cidr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConnectivityRule {
    pub source: Peer,
    pub destination: ServiceRef,
    pub port: u16,
    pub protocol: Transport,
}

impl ConnectivityRule {
    pub fn tcp(source: Peer, destination: ServiceRef, port: u16) -> Self {
        Self {
            source,
            destination,
            port,
            protocol: Transport::Tcp,
        }
    }

    fn key(&self) -> RuleKey {
        (self.source.clone(), self.destination.clone(), self.port)
    }
}

impl fmt::Display for ConnectivityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}:{}/{}",
            self.source, self.destination, self.port, self.protocol
        )
    }
}

type RuleKey = (Peer, ServiceRef, u16);

/// Deduplicated, ordered set of connectivity rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<RuleKey, ConnectivityRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; fails if its (source, destination, port) is already taken
    pub fn insert(&mut self, rule: ConnectivityRule) -> Result<(), DerivationInvariantViolation> {
        let key = rule.key();
        if self.rules.contains_key(&key) {
            return Err(DerivationInvariantViolation::DuplicateRule {
                origin: rule.source.to_string(),
                destination: rule.destination.to_string(),
                port: rule.port,
            });
        }
        self.rules.insert(key, rule);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectivityRule> {
        self.rules.values()
    }

    /// Rules whose destination is `destination`
    pub fn to(&self, destination: &ServiceRef) -> impl Iterator<Item = &ConnectivityRule> + '_ {
        let destination = destination.clone();
        self.rules
            .values()
            .filter(move |rule| rule.destination == destination)
    }
}

impl Serialize for RuleSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rules.values())
    }
}
