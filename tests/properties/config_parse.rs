//! Property tests for configuration parsing.

use std::path::Path;

use proptest::prelude::*;

use fpsync::config::parse_with_warnings;
use fpsync::SyncDefaults;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing and planning never panic on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        content in "(?s).{0,256}"
    ) {
        if let Ok((config, _)) = parse_with_warnings(&content, Path::new("fpsyncrc.toml")) {
            let _ = config.plan(&SyncDefaults::new("server", "/home/me"));
        }
    }

    /// PROPERTY: the string form of `items` splits on any whitespace.
    #[test]
    fn property_item_string_splits_on_whitespace(
        items in proptest::collection::vec("[a-z.][a-z0-9._-]{0,8}", 1..6),
        separator in prop_oneof![Just(" "), Just("  "), Just("\t"), Just("\n    ")],
    ) {
        let toml = format!("[[task]]\nitems = \"\"\"\n{}\n\"\"\"\n", items.join(separator));

        let (config, warnings) = parse_with_warnings(&toml, Path::new("fpsyncrc.toml")).unwrap();

        prop_assert!(warnings.is_empty());
        prop_assert_eq!(config.tasks[0].items.as_ref().map(|i| &i.0), Some(&items));
    }
}
