//! `iotsim diff`

mod common;

use common::*;

#[test]
fn no_changes_against_fresh_plan() {
    let env = TestEnv::new();
    env.write("iotsim.toml", LOAD_TESTING_TOML);
    assert!(env.run(&["plan", "--out", "plan.json"]).success);

    let result = env.run(&["diff", "--against", "plan.json"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with("✓ No changes against plan.json"));
}

#[test]
fn yaml_plans_compare_too() {
    let env = TestEnv::new();
    env.write("iotsim.toml", LOAD_TESTING_TOML);
    assert!(env.run(&["plan", "--format", "yaml", "--out", "plan.yaml"]).success);

    let result = env.run(&["diff", "--against", "plan.yaml", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.json()["changed"], false);
}

#[test]
fn changed_certificate_shows_unified_diff() {
    let env = TestEnv::new();
    env.write("iotsim.toml", LOAD_TESTING_TOML);
    assert!(env.run(&["plan", "--out", "plan.json"]).success);

    let result = env.run_with_env(
        &["diff", "--against", "plan.json"],
        &[
            ("IOTSIM_LOG", "off"),
            ("IOTSIM_CERTIFICATE_ARN", "arn:aws:acm:ap-northeast-2:1:certificate/x"),
        ],
    );
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("--- plan.json"));
    assert!(result.stdout.contains("+++ derived"));
    assert!(result.stdout.lines().any(|l| l.starts_with('+') && l.contains("443")));
    assert!(result.stdout.contains("insertion(s)"));
}

#[test]
fn missing_plan_is_an_error() {
    let env = TestEnv::new();
    env.write("iotsim.toml", LOAD_TESTING_TOML);

    let result = env.run(&["diff", "--against", "nope.json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("cannot diff against nope.json"));
}
