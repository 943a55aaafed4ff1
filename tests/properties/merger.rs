//! Property tests for merging and item validation.

use proptest::prelude::*;

use fpsync::domain::entities::{PlatformExtra, SyncPlan, SyncTaskSpec, TaskBase, TaskFragment};
use fpsync::domain::policies::ValidationPolicy;
use fpsync::domain::services::{augment_for_platform, merge_plan, ConfigValidator};
use fpsync::domain::value_objects::{ErrorKind, PlatformFamily, ValidationMode};
use fpsync::infrastructure::MemoryFs;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,9}").unwrap()
}

fn platform() -> impl Strategy<Value = PlatformFamily> {
    proptest::sample::select(PlatformFamily::ALL.to_vec())
}

fn task(name: &str, items: Vec<String>) -> SyncTaskSpec {
    SyncTaskSpec {
        name: Some(name.to_string()),
        source_root: "/home/me".to_string(),
        target_root: "server:.".to_string(),
        items,
        exclude_from: None,
    }
}

fn error_kinds(items: Vec<String>) -> Vec<ErrorKind> {
    let fs = MemoryFs::new();
    let validator = ConfigValidator::new(&fs, ValidationPolicy::new(ValidationMode::Permissive));
    let report = validator.validate(&[task("t", items)], None);
    report.errors.iter().map(|e| e.kind()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a bulk entry yields one task per name, in order.
    #[test]
    fn property_bulk_yields_one_task_per_name(
        names in proptest::collection::vec(name(), 1..8)
    ) {
        let base = TaskBase::new("~", "server:.");
        let plan = SyncPlan::new().bulk(&base, names.clone());

        let outcome = merge_plan(&plan, PlatformFamily::Linux, false);

        prop_assert!(outcome.errors.is_empty());
        prop_assert_eq!(outcome.tasks.len(), names.len());
        for (i, (merged, name)) in outcome.tasks.iter().zip(&names).enumerate() {
            prop_assert_eq!(merged.task_ref.index, i);
            prop_assert_eq!(&merged.spec.items, &vec![name.clone()]);
            prop_assert_eq!(merged.spec.name.as_deref(), Some(name.as_str()));
        }
    }

    /// PROPERTY: merged tasks keep the fragment's items verbatim.
    #[test]
    fn property_fragment_items_survive_merge(
        items in proptest::collection::vec(name(), 1..6)
    ) {
        let base = TaskBase::new("~", "server:.").with_exclude_from("~/.excludes");
        let plan = SyncPlan::new().task(&base, TaskFragment::new(items.clone()));

        let outcome = merge_plan(&plan, PlatformFamily::MacOs, true);

        prop_assert_eq!(outcome.tasks.len(), 1);
        prop_assert_eq!(&outcome.tasks[0].spec.items, &items);
        prop_assert_eq!(outcome.tasks[0].spec.exclude_from.as_deref(), Some("~/.excludes"));
    }

    /// PROPERTY: platform augmentation is idempotent.
    #[test]
    fn property_augmentation_is_idempotent(
        items in proptest::collection::vec(name(), 1..4),
        extra_items in proptest::collection::vec(name(), 0..4),
        extra_platform in platform(),
        current in platform(),
    ) {
        let tasks = vec![task("home", items), task("other", vec!["x".to_string()])];
        let extras: Vec<PlatformExtra> = extra_items
            .iter()
            .map(|item| PlatformExtra {
                platform: extra_platform,
                task: "home".to_string(),
                item: item.clone(),
            })
            .collect();

        let once = augment_for_platform(&tasks, current, &extras);
        let twice = augment_for_platform(&once, current, &extras);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once[1], &tasks[1]);
        if extra_platform != current {
            prop_assert_eq!(&once, &tasks);
        }
    }

    /// PROPERTY: an item with an inner separator is always rejected as nested.
    #[test]
    fn property_inner_separator_is_nested(
        parent in name(),
        child in name(),
        trailing in any::<bool>(),
    ) {
        let item = if trailing {
            format!("{}/{}/", parent, child)
        } else {
            format!("{}/{}", parent, child)
        };

        let kinds = error_kinds(vec![item]);

        prop_assert!(kinds.contains(&ErrorKind::NestedItem));
        prop_assert_eq!(kinds.contains(&ErrorKind::TrailingSeparator), trailing);
    }

    /// PROPERTY: plain leaf names pass validation.
    #[test]
    fn property_leaf_names_are_valid(
        items in proptest::collection::vec(name(), 1..6)
    ) {
        prop_assert!(error_kinds(items).is_empty());
    }
}
