//! Property-based tests for configuration resolution.

use super::flags::split_assignees;
use super::merger::ConfigMerger;
use super::schema::{Config, ConfigLayer, DEFAULTS};
use crate::deploy::DEPLOY_CATALOG;
use proptest::prelude::*;

fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Joining names with commas (and stray whitespace) splits back to the same names
    #[test]
    fn split_recovers_joined_names(
        names in prop::collection::vec(username_strategy(), 1..8),
        pad in "[ \t]{0,3}"
    ) {
        let joined = names
            .iter()
            .map(|name| format!("{pad}{name}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(split_assignees(&joined), names);
    }

    // Split output never contains empty or padded names
    #[test]
    fn split_output_is_clean(input in "[a-z, \t]{0,40}") {
        for name in split_assignees(&input) {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(!name.contains(','));
        }
    }

    // Any name other than test/prod derives the test branches
    #[test]
    fn unknown_deploy_type_falls_back(name in "[a-zA-Z]{0,10}") {
        prop_assume!(name != "test" && name != "prod");
        let pair = DEPLOY_CATALOG.branches(Some(&name));
        prop_assert_eq!((pair.source, pair.target), ("dev", "test"));
    }

    // A supplied version always wins, whatever the base held
    #[test]
    fn merge_layer_value_wins(
        base_version in "[0-9.]{0,8}",
        layer_version in prop::option::of("[0-9.]{0,8}")
    ) {
        let mut config = Config::from_defaults(&DEFAULTS, "01-01-2024".to_string());
        config.version.clone_from(&base_version);

        let layer = ConfigLayer {
            version: layer_version.clone(),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut config, layer);

        prop_assert_eq!(config.version, layer_version.unwrap_or(base_version));
    }
}
