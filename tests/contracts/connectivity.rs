//! Contract: connectivity rules are derived, deterministic and minimal.

use iotsim::domain::entities::{Peer, COORDINATION_PORT, TRAFFIC_CONTROL_PORT};
use iotsim::domain::value_objects::ServiceRef;

use crate::common::*;

/// CONTRACT: re-deriving from the same config yields the same rule set
#[test]
fn contract_rules_are_idempotent() {
    for variant in ["load-testing", "fault-injection"] {
        let config = config(settings(variant));
        assert_eq!(derive(&config).rules(), derive(&config).rules());
    }
}

/// CONTRACT: exactly one worker -> master rule, on the coordination port
#[test]
fn contract_single_coordination_rule() {
    for variant in ["load-testing", "fault-injection"] {
        let topology = derive(&config(settings(variant)));
        let master = &topology.master().service.name;
        let rules: Vec<_> = topology
            .rules()
            .iter()
            .filter(|r| matches!(r.source, Peer::Service(_)))
            .collect();

        assert_eq!(rules.len(), 1);
        assert_eq!(&rules[0].destination, master);
        assert_eq!(rules[0].port, COORDINATION_PORT);
    }
}

/// CONTRACT: one front-door rule per allowed CIDR
#[test]
fn contract_front_door_rule_per_cidr() {
    let mut s = settings("load-testing");
    s.allowed_cidrs = vec![
        "10.0.0.0/8".into(),
        "172.16.0.0/12".into(),
        "10.0.0.0/8".into(),
    ];
    let topology = derive(&config(s));
    let door = ServiceRef::new(topology.master().front_door.id.as_str());

    assert_eq!(topology.rules().to(&door).count(), 2);
    assert!(topology.rules().to(&door).all(|r| r.port == 80));
}

/// CONTRACT: traffic-control rules exist only for fault-injection
#[test]
fn contract_traffic_control_rules_only_for_fault_injection() {
    let load = derive(&config(settings("load-testing")));
    assert!(load
        .rules()
        .iter()
        .all(|r| r.port != TRAFFIC_CONTROL_PORT));

    let fault = derive(&config(settings("fault-injection")));
    let lb = ServiceRef::new("traffic-control-lb");
    let rules: Vec<_> = fault.rules().to(&lb).collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].port, TRAFFIC_CONTROL_PORT);
}

/// CONTRACT: an empty CIDR list still derives the internal rule only
#[test]
fn contract_empty_cidrs_leave_only_internal_rule() {
    let mut s = settings("load-testing");
    s.allowed_cidrs.clear();
    let topology = derive(&config(s));
    assert_eq!(topology.rules().len(), 1);
}

/// CONTRACT: the same network written two ways yields one front-door rule
#[test]
fn contract_equivalent_cidrs_collapse_to_one_rule() {
    let mut s = settings("load-testing");
    s.allowed_cidrs = vec!["10.0.0.0/8".into(), "10.1.2.3/8".into()];
    let (config, warnings) = s.validate().unwrap();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().contains("10.0.0.0/8"));

    let topology = derive(&config);
    let door = ServiceRef::new(topology.master().front_door.id.as_str());
    let rules: Vec<_> = topology.rules().to(&door).collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].source.to_string(), "10.0.0.0/8");
    assert_eq!(topology.rules().len(), 2);
}
