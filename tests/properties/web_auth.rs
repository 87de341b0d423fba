//! Property tests for web-auth pairing.

use proptest::prelude::*;

use iotsim::ConfigValidationError;

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation passes iff both or neither credential is set
    #[test]
    fn property_web_auth_pairing(
        username in proptest::option::of("[a-z][a-z0-9]{0,11}"),
        password in proptest::option::of("[A-Za-z0-9!@#]{1,16}"),
    ) {
        let mut s = settings("load-testing");
        s.web_username = username.clone();
        s.web_password = password.clone();
        let result = s.validate();

        match (username.is_some(), password.is_some()) {
            (true, true) | (false, false) => prop_assert!(result.is_ok()),
            _ => prop_assert!(
                matches!(result, Err(ConfigValidationError::UnpairedWebAuth { .. })),
                "expected unpaired web auth error, got {:?}",
                result.map(|_| ())
            ),
        }
    }

    /// PROPERTY: 401 is a healthy status exactly when auth is on
    #[test]
    fn property_401_tracks_auth(auth in any::<bool>()) {
        let mut s = settings("load-testing");
        if auth {
            s.web_username = Some("admin".into());
            s.web_password = Some("pw".into());
        }
        let topology = derive(&config(s));
        prop_assert_eq!(topology.master().health_accepts(401), auth);
    }
}
