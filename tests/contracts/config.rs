//! Contract: invalid configuration is rejected before any derivation step.

use std::cell::Cell;

use iotsim::application::{ConfigSource, PlanOptions, PlanUseCase};
use iotsim::domain::ports::IdentityProvisioner;
use iotsim::domain::value_objects::{CredentialPaths, ThingName};
use iotsim::infrastructure::FsPlanWriter;
use iotsim::{ConfigValidationError, IotSimError, ProvisioningFailure};

use crate::common::*;

struct CountingProvisioner {
    calls: Cell<u32>,
}

impl IdentityProvisioner for CountingProvisioner {
    fn provision(&self, thing: &ThingName) -> Result<CredentialPaths, ProvisioningFailure> {
        self.calls.set(self.calls.get() + 1);
        Ok(CredentialPaths::for_thing(thing))
    }
}

/// CONTRACT: one half of web auth fails validation and nothing is provisioned
#[test]
fn contract_unpaired_web_auth_never_reaches_provisioning() {
    let env = TestEnv::new();
    let content = LOAD_TESTING_TOML.replacen(
        "variant = \"load-testing\"",
        "variant = \"load-testing\"\nweb_username = \"admin\"",
        1,
    );
    let path = env.write("iotsim.toml", &content);

    let provisioner = CountingProvisioner {
        calls: Cell::new(0),
    };
    let use_case = PlanUseCase::new(&provisioner, FsPlanWriter::new());
    let err = use_case
        .execute(&PlanOptions::new(ConfigSource::new(&path).without_env()))
        .unwrap_err();

    assert!(matches!(
        err,
        IotSimError::Config(ConfigValidationError::UnpairedWebAuth {
            present: "web_username",
            missing: "web_password",
        })
    ));
    assert_eq!(provisioner.calls.get(), 0);
}

/// CONTRACT: both halves missing is fine; both present is fine
#[test]
fn contract_web_auth_all_or_nothing() {
    let mut s = settings("load-testing");
    assert!(s.clone().validate().is_ok());

    s.web_username = Some("admin".into());
    s.web_password = Some("pw".into());
    assert!(s.clone().validate().is_ok());

    s.web_username = None;
    assert!(matches!(
        s.validate().unwrap_err(),
        ConfigValidationError::UnpairedWebAuth {
            present: "web_password",
            ..
        }
    ));
}

/// CONTRACT: worker count is required for load-testing and forbidden for fault-injection
#[test]
fn contract_worker_count_matches_variant() {
    let mut load = settings("load-testing");
    load.worker_desired_count = None;
    assert_eq!(
        load.validate().unwrap_err(),
        ConfigValidationError::WorkerCountRequired
    );

    let mut fault = settings("fault-injection");
    fault.worker_desired_count = Some(2);
    assert!(matches!(
        fault.validate().unwrap_err(),
        ConfigValidationError::WorkerCountNotAllowed(_)
    ));
}
