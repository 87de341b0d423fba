//! Resource graph - the declarative form handed to the provisioning engine
//!
//! Resources are keyed by [`LogicalId`] in a `BTreeMap`, so serialization is
//! canonical: the same topology always renders to the same bytes and digest.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{LogicalId, PlanDigest, Variant};
use crate::error::{DerivationInvariantViolation, IotSimResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    Vpc,
    Subnet,
    NatGateway,
    Bucket,
    FlowLog,
    DeviceIdentity,
    Cluster,
    DiscoveryNamespace,
    AutoScalingGroup,
    Role,
    TaskDefinition,
    Service,
    LoadBalancer,
    IngressRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub properties: serde_json::Value,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub depends_on: BTreeSet<LogicalId>,
}

impl Resource {
    pub fn new(kind: ResourceKind, properties: serde_json::Value) -> Self {
        Self {
            kind,
            properties,
            depends_on: BTreeSet::new(),
        }
    }

    pub fn depends_on(mut self, id: impl Into<LogicalId>) -> Self {
        self.depends_on.insert(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceGraph {
    stack_name: String,
    variant: Variant,
    region: String,
    resources: BTreeMap<LogicalId, Resource>,
    outputs: BTreeMap<String, String>,
}

impl ResourceGraph {
    pub fn new(stack_name: impl Into<String>, variant: Variant, region: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            variant,
            region: region.into(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        id: impl Into<LogicalId>,
        resource: Resource,
    ) -> Result<(), DerivationInvariantViolation> {
        let id = id.into();
        if self.resources.contains_key(&id) {
            return Err(DerivationInvariantViolation::DuplicateResource(id));
        }
        self.resources.insert(id, resource);
        Ok(())
    }

    pub fn set_output(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.outputs.insert(name.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(&LogicalId::new(id))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = (&LogicalId, &Resource)> {
        self.resources.iter()
    }

    pub fn outputs(&self) -> &BTreeMap<String, String> {
        &self.outputs
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    /// Every dependency must name an emitted resource
    pub fn check_dependencies(&self) -> Result<(), DerivationInvariantViolation> {
        for (id, resource) in &self.resources {
            for dependency in &resource.depends_on {
                if !self.resources.contains_key(dependency) {
                    return Err(DerivationInvariantViolation::UnknownDependency {
                        resource: id.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Deterministic creation order: dependencies first, ties broken by id
    pub fn build_order(&self) -> Result<Vec<LogicalId>, DerivationInvariantViolation> {
        self.check_dependencies()?;

        let mut remaining: BTreeMap<&LogicalId, usize> = self
            .resources
            .iter()
            .map(|(id, resource)| (id, resource.depends_on.len()))
            .collect();

        let mut dependents: BTreeMap<&LogicalId, Vec<&LogicalId>> = BTreeMap::new();
        for (id, resource) in &self.resources {
            for dependency in &resource.depends_on {
                dependents.entry(dependency).or_default().push(id);
            }
        }

        let mut ready: BTreeSet<&LogicalId> = remaining
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| *id)
            .collect();

        let mut order = Vec::with_capacity(self.resources.len());
        while let Some(id) = ready.pop_first() {
            remaining.remove(id);
            order.push(id.clone());

            for dependent in dependents.get(id).into_iter().flatten() {
                if let Some(count) = remaining.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(*dependent);
                    }
                }
            }
        }

        if !remaining.is_empty() {
            let cycle = remaining.keys().map(|id| (*id).clone()).collect();
            return Err(DerivationInvariantViolation::DependencyCycle(cycle));
        }

        Ok(order)
    }

    /// Digest of the canonical JSON form
    pub fn digest(&self) -> IotSimResult<PlanDigest> {
        let bytes = serde_json::to_vec(self)?;
        Ok(PlanDigest::from_bytes(&bytes))
    }

    /// Freeze into the document written to disk
    pub fn into_plan(self) -> IotSimResult<PlanDocument> {
        let build_order = self.build_order()?;
        let digest = self.digest()?;
        Ok(PlanDocument {
            digest,
            build_order,
            graph: self,
        })
    }
}

/// Output format of a rendered plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlanFormat {
    #[default]
    Json,
    Yaml,
}

impl PlanFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFormat::Json => "json",
            PlanFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource graph with its digest and creation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDocument {
    pub digest: PlanDigest,
    pub build_order: Vec<LogicalId>,
    pub graph: ResourceGraph,
}

impl PlanDocument {
    pub fn render(&self, format: PlanFormat) -> IotSimResult<String> {
        match format {
            PlanFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
            PlanFormat::Yaml => Ok(serde_yaml_ng::to_string(self)?),
        }
    }
}
