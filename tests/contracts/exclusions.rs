//! Exclusion-file contracts (EXCL-001 through EXCL-003)

use crate::assert_error_kinds;
use crate::common::*;

use fpsync::{ConfigWarning, ResolverOptions};

const CONFIG: &str = r#"
[[task]]
name = "home"
items = [".cache", "code"]
"#;

/// CONTRACT EXCL-001: a missing exclusion file is a warning in permissive mode
#[test]
fn contract_missing_exclude_file_warns_when_permissive() {
    let env = TestEnv::builder().with_config(CONFIG).build();

    let resolution = env.resolve().unwrap();

    assert_eq!(resolution.tasks.len(), 1);
    assert!(matches!(
        resolution.warnings.as_slice(),
        [ConfigWarning::MissingExcludeFile { .. }]
    ));
}

/// CONTRACT EXCL-002: a missing exclusion file is fatal in strict mode
#[test]
fn contract_missing_exclude_file_fails_when_strict() {
    let env = TestEnv::builder().with_config(CONFIG).build();

    let failure = env.resolve_with(&ResolverOptions::new().strict()).unwrap_err();

    assert_error_kinds!(failure, [MissingExcludeFile]);
    assert_eq!(failure.errors[0].field(), "exclude_from");
    assert!(failure.usable.is_empty());
}

/// CONTRACT EXCL-003: items the exclusion file would drop are flagged, not rejected
#[test]
fn contract_excluded_item_is_flagged() {
    let env = TestEnv::builder()
        .with_home_file(".rsync-excludes", RSYNC_EXCLUDES)
        .with_config(CONFIG)
        .build();

    let resolution = env.resolve_with(&ResolverOptions::new().strict()).unwrap();

    match resolution.warnings.as_slice() {
        [ConfigWarning::ItemExcluded { item, .. }] => assert_eq!(item, ".cache"),
        other => panic!("expected one ItemExcluded warning, got {:?}", other),
    }
}

#[test]
fn contract_task_may_opt_out_of_exclusions() {
    let env = TestEnv::builder()
        .with_config(
            r#"
[[task]]
items = ["code"]
exclude_from = ""
"#,
        )
        .build();

    let resolution = env.resolve_with(&ResolverOptions::new().strict()).unwrap();

    assert_eq!(resolution.tasks.tasks()[0].exclude_from, None);
    assert!(resolution.warnings.is_empty());
}
