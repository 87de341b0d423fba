//! Property tests for connectivity rule derivation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use iotsim::domain::value_objects::{Cidr, ServiceRef};

use crate::common::*;

fn cidr() -> impl Strategy<Value = String> {
    (any::<[u8; 4]>(), 0u8..=32)
        .prop_map(|([a, b, c, d], prefix)| format!("{}.{}.{}.{}/{}", a, b, c, d, prefix))
}

fn cidrs() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(cidr(), 0..6)
}

fn variant() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("load-testing"), Just("fault-injection")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: deriving twice yields identical rule sets
    #[test]
    fn property_rules_idempotent(variant in variant(), cidrs in cidrs()) {
        let mut s = settings(variant);
        s.allowed_cidrs = cidrs;
        let config = config(s);

        let first = derive(&config);
        let second = derive(&config);
        prop_assert_eq!(first.rules(), second.rules());
    }

    /// PROPERTY: one front-door rule per distinct network, however it is written
    #[test]
    fn property_front_door_rules_match_distinct_networks(variant in variant(), cidrs in cidrs()) {
        let distinct: BTreeSet<Cidr> = cidrs.iter().map(|c| c.parse().unwrap()).collect();
        let expected = distinct.len();

        let mut s = settings(variant);
        s.allowed_cidrs = cidrs.clone();
        let topology = derive(&config(s));

        let door = ServiceRef::new(topology.master().front_door.id.as_str());
        prop_assert_eq!(topology.rules().to(&door).count(), expected);

        let internal = 1;
        let traffic_control = if variant == "fault-injection" { expected } else { 0 };
        prop_assert_eq!(topology.rules().len(), internal + expected + traffic_control);
    }
}
