//! Property tests for credential path derivation.

use proptest::prelude::*;

use iotsim::domain::value_objects::{CredentialPaths, ThingName, PARAM_PREFIX};

fn thing_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9:_-]{1,128}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: paths are exactly `<prefix>/<thing>/certPem|privKey`
    #[test]
    fn property_paths_are_prefix_thing_leaf(raw in thing_name()) {
        let thing = ThingName::parse(raw.clone()).unwrap();
        let paths = CredentialPaths::for_thing(&thing);

        prop_assert_eq!(paths.cert_path(), format!("{}/{}/certPem", PARAM_PREFIX, raw));
        prop_assert_eq!(paths.key_path(), format!("{}/{}/privKey", PARAM_PREFIX, raw));
        prop_assert_eq!(CredentialPaths::for_thing(&thing), paths);
    }

    /// PROPERTY: names with a character outside `[A-Za-z0-9:_-]` never parse
    #[test]
    fn property_invalid_characters_rejected(
        prefix in "[a-z]{0,8}",
        bad in "[ /.@#]",
        suffix in "[a-z]{0,8}",
    ) {
        let raw = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(ThingName::parse(raw).is_err());
    }
}
