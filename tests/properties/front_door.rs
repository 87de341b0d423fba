//! Property tests for front-door protocol selection.

use proptest::prelude::*;

use iotsim::domain::value_objects::FrontDoorProtocol;

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: certificate present -> HTTPS:443, absent -> HTTP:80, nothing else
    #[test]
    fn property_protocol_follows_certificate(
        certificate in proptest::option::of("arn:aws:acm:[a-z0-9-]{1,16}:[0-9]{12}:certificate/[a-f0-9-]{1,36}")
    ) {
        let mut s = settings("load-testing");
        s.certificate_arn = certificate.clone();
        let topology = derive(&config(s));
        let door = &topology.master().front_door;

        match certificate {
            Some(arn) => {
                prop_assert_eq!(door.protocol, FrontDoorProtocol::Https);
                prop_assert_eq!(door.port, 443);
                prop_assert_eq!(door.certificate_arn.as_deref(), Some(arn.as_str()));
            }
            None => {
                prop_assert_eq!(door.protocol, FrontDoorProtocol::Http);
                prop_assert_eq!(door.port, 80);
                prop_assert_eq!(door.certificate_arn.as_deref(), None);
            }
        }
    }
}
