//! Contract: front-door protocol and health acceptance.

use iotsim::domain::value_objects::FrontDoorProtocol;

use crate::common::*;

/// CONTRACT: no certificate means HTTP on 80
#[test]
fn contract_http_without_certificate() {
    let topology = derive(&config(settings("load-testing")));
    let door = &topology.master().front_door;
    assert_eq!(door.protocol, FrontDoorProtocol::Http);
    assert_eq!(door.port, 80);
    assert_eq!(door.tls_policy, None);
    assert!(topology.outputs().coordinator_url.starts_with("http://"));
}

/// CONTRACT: a certificate means HTTPS on 443
#[test]
fn contract_https_with_certificate() {
    let mut s = settings("load-testing");
    s.certificate_arn = Some("arn:aws:acm:region:acct:certificate/x".into());
    let topology = derive(&config(s));
    let door = &topology.master().front_door;
    assert_eq!(door.protocol, FrontDoorProtocol::Https);
    assert_eq!(door.port, 443);
    assert!(door.tls_policy.is_some());
    assert!(topology.outputs().coordinator_url.starts_with("https://"));
}

/// CONTRACT: 401 is healthy exactly when basic auth is configured
#[test]
fn contract_health_accepts_401_iff_auth() {
    let open = derive(&config(settings("load-testing")));
    assert!(open.master().health_accepts(200));
    assert!(!open.master().health_accepts(401));

    let mut s = settings("load-testing");
    s.web_username = Some("admin".into());
    s.web_password = Some("pw".into());
    let guarded = derive(&config(s));
    assert!(guarded.master().health_accepts(200));
    assert!(guarded.master().health_accepts(401));
    assert!(!guarded.master().health_accepts(403));
}

/// CONTRACT: the front door is never open to everyone by default
#[test]
fn contract_listener_not_open_by_default() {
    let topology = derive(&config(settings("fault-injection")));
    assert!(!topology.master().front_door.open_listener);
}
