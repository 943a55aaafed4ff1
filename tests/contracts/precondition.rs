//! Precondition contracts (PRE-001, PRE-002)
//!
//! The must-exist path gates the whole run.

use crate::assert_error_kinds;
use crate::common::*;

use fpsync::ResolverOptions;

const CONFIG: &str = r#"
must_exist = "~/.ssh"

[[task]]
items = ["a/b"]
"#;

/// CONTRACT PRE-001: an absent precondition yields zero tasks and exactly one error
#[test]
fn contract_absent_precondition_short_circuits() {
    let env = TestEnv::builder().with_config(CONFIG).build();

    let failure = env.resolve().unwrap_err();

    assert_error_kinds!(failure, [Precondition]);
    assert!(failure.usable.is_empty());
    assert_eq!(failure.errors[0].field(), "must_exist");
    assert!(failure.errors[0].task().is_none());
}

/// CONTRACT PRE-001 holds in both modes
#[test]
fn contract_absent_precondition_short_circuits_in_strict_mode() {
    let env = TestEnv::builder().with_config(CONFIG).build();

    let failure = env.resolve_with(&ResolverOptions::new().strict()).unwrap_err();

    assert_error_kinds!(failure, [Precondition]);
}

/// CONTRACT PRE-002: a present precondition lets validation run
#[test]
fn contract_present_precondition_continues_to_validation() {
    let env = TestEnv::builder()
        .with_home_dir(".ssh")
        .with_config(CONFIG)
        .build();

    let failure = env.resolve().unwrap_err();

    assert_error_kinds!(failure, [NestedItem]);
}

#[test]
fn contract_precondition_may_be_overridden_per_call() {
    let env = TestEnv::builder()
        .with_home_dir("mnt")
        .with_config(CONFIG)
        .build();

    let failure = env
        .resolve_with(&ResolverOptions::new().with_must_exist("~/mnt"))
        .unwrap_err();

    assert_error_kinds!(failure, [NestedItem]);
}
