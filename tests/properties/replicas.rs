//! Property tests for worker replica counts.

use proptest::prelude::*;

use iotsim::domain::entities::WorkerMode;

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: load-testing replica count equals the configured count
    #[test]
    fn property_load_testing_replicas_follow_config(count in 1u32..=1000) {
        let mut s = settings("load-testing");
        s.worker_desired_count = Some(count);
        let topology = derive(&config(s));

        prop_assert_eq!(topology.worker().mode(), WorkerMode::LoadTesting);
        prop_assert_eq!(topology.worker().replica_count(), count);
        prop_assert_eq!(topology.master().service.replica_count, 1);
    }

    /// PROPERTY: fault-injection never accepts a configured count
    #[test]
    fn property_fault_injection_rejects_any_count(count in 0u32..=1000) {
        let mut s = settings("fault-injection");
        s.worker_desired_count = Some(count);
        prop_assert!(s.validate().is_err());
    }
}
