//! Contract: credential paths are a pure function of the thing name.

use iotsim::domain::value_objects::{CredentialPaths, ThingName, PARAM_PREFIX};

use crate::common::*;

/// CONTRACT: paths are `<prefix>/<thing>/certPem` and `<prefix>/<thing>/privKey`
#[test]
fn contract_credential_paths_have_fixed_shape() {
    let thing = ThingName::parse("iot-simulator-load-testing-thing").unwrap();
    let paths = CredentialPaths::for_thing(&thing);

    assert_eq!(
        paths.cert_path(),
        "/iot-simulator-with-fault-injection/iot-simulator-load-testing-thing/certPem"
    );
    assert_eq!(
        paths.key_path(),
        "/iot-simulator-with-fault-injection/iot-simulator-load-testing-thing/privKey"
    );
    assert!(paths.cert_path().starts_with(PARAM_PREFIX));
}

/// CONTRACT: master and worker read the same paths the identity step produced
#[test]
fn contract_containers_receive_derived_paths() {
    for variant in ["load-testing", "fault-injection"] {
        let topology = derive(&config(settings(variant)));
        let paths = &topology.identity().paths;

        let master = &topology.master().service.containers[0];
        assert_eq!(master.env["PARAM_STORE_CERT_PATH"], paths.cert_path());
        assert_eq!(master.env["PARAM_STORE_PRIV_PATH"], paths.key_path());

        let worker = &topology.worker().service().containers[0];
        assert_eq!(worker.env["PARAM_STORE_CERT_PATH"], paths.cert_path());
        assert_eq!(worker.env["PARAM_STORE_PRIV_PATH"], paths.key_path());
    }
}

/// CONTRACT: no secret material ever lands in container environments
#[test]
fn contract_environments_name_paths_not_secrets() {
    let topology = derive(&config(settings("load-testing")));
    for container in &topology.worker().service().containers {
        for value in container.env.values() {
            assert!(!value.contains("BEGIN"), "secret leaked into env: {}", value);
        }
    }
}
