//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{DiffUseCase, PlanUseCase, ProvisionUseCase, ValidateUseCase};
use crate::domain::services::ParameterStoreProvisioner;
use crate::infrastructure::{
    DeferredIdentityProvisioner, FsPlanWriter, JsonFileParameterStore, PemDirectoryIssuer,
};

/// Plan use case: identity issuance is left to the provisioning engine
pub type ConcretePlanUseCase = PlanUseCase<DeferredIdentityProvisioner, FsPlanWriter>;

/// Diff use case over plans on disk
pub type ConcreteDiffUseCase = DiffUseCase<DeferredIdentityProvisioner, FsPlanWriter>;

/// Identity provisioner publishing pre-issued PEM files to a JSON store
pub type FileIdentityProvisioner = ParameterStoreProvisioner<PemDirectoryIssuer, JsonFileParameterStore>;

pub type ConcreteProvisionUseCase = ProvisionUseCase<FileIdentityProvisioner>;

pub fn create_plan_use_case() -> ConcretePlanUseCase {
    PlanUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new())
}

pub fn create_diff_use_case() -> ConcreteDiffUseCase {
    DiffUseCase::new(DeferredIdentityProvisioner::new(), FsPlanWriter::new())
}

pub fn create_validate_use_case() -> ValidateUseCase {
    ValidateUseCase::new()
}

pub fn create_provision_use_case(
    identity_dir: impl Into<PathBuf>,
    store: impl Into<PathBuf>,
) -> ConcreteProvisionUseCase {
    let issuer = PemDirectoryIssuer::new(identity_dir);
    let store = JsonFileParameterStore::new(store);
    ProvisionUseCase::new(ParameterStoreProvisioner::new(issuer, store))
}
