//! Configuration merging.
//!
//! Merging is a shallow "assign over": every field a layer supplies replaces
//! the target field verbatim. Sequences are never combined, so a `projects`
//! list in the config file replaces the built-in list entirely.

use crate::config::schema::{Config, ConfigLayer};

/// Merges configuration layers onto a resolved configuration.
///
/// # Examples
///
/// ```
/// use cvpr::config::{Config, ConfigLayer, ConfigMerger, DEFAULTS};
///
/// let mut config = Config::from_defaults(&DEFAULTS, "04-23-2024".to_string());
/// let layer = ConfigLayer {
///     owner: Some("acme".to_string()),
///     projects: Some(Vec::new()),
///     ..Default::default()
/// };
///
/// ConfigMerger::merge_into(&mut config, layer);
/// assert_eq!(config.owner, "acme");
/// assert!(config.projects.is_empty());
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers in order, lowest precedence first.
    #[must_use]
    pub fn merge(base: Config, layers: impl IntoIterator<Item = ConfigLayer>) -> Config {
        let mut result = base;
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge one layer into the target (layer overwrites target).
    pub fn merge_into(target: &mut Config, source: ConfigLayer) {
        let ConfigLayer {
            version,
            owner,
            user_agent,
            timezone,
            token,
            projects,
            assignees,
            deploy_type,
            source: source_env,
            target: target_env,
            automatic,
            date,
            debug,
            extra,
        } = source;

        if let Some(version) = version {
            target.version = version;
        }
        if let Some(owner) = owner {
            target.owner = owner;
        }
        if let Some(user_agent) = user_agent {
            target.user_agent = user_agent;
        }
        if let Some(timezone) = timezone {
            target.timezone = timezone;
        }
        if let Some(token) = token {
            target.token = token;
        }

        // Sequences are replaced, never appended
        if let Some(projects) = projects {
            target.projects = projects;
        }
        if let Some(assignees) = assignees {
            target.assignees = assignees;
        }

        if deploy_type.is_some() {
            target.deploy_type = deploy_type;
        }
        if source_env.is_some() {
            target.source = source_env;
        }
        if target_env.is_some() {
            target.target = target_env;
        }
        if let Some(automatic) = automatic {
            target.automatic = automatic;
        }
        if let Some(date) = date {
            target.date = date;
        }
        if let Some(debug) = debug {
            target.debug = debug;
        }

        target.extra.extend(extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULTS;
    use crate::project::ProjectSpec;

    fn base() -> Config {
        Config::from_defaults(&DEFAULTS, "04-23-2024".to_string())
    }

    #[test]
    fn test_empty_layer_is_identity() {
        let mut config = base();
        ConfigMerger::merge_into(&mut config, ConfigLayer::default());
        assert_eq!(config, base());
    }

    #[test]
    fn test_projects_replaced_wholesale() {
        let mut config = base();
        let only = ProjectSpec::new("Tools", "tools", "t_{source}_{version}", "t_{target}_{version}");
        ConfigMerger::merge_into(
            &mut config,
            ConfigLayer {
                projects: Some(vec![only.clone()]),
                ..Default::default()
            },
        );
        assert_eq!(config.projects, vec![only]);
    }

    #[test]
    fn test_assignees_replaced_not_appended() {
        let mut config = base();
        config.assignees = vec!["alice".to_string(), "bob".to_string()];
        ConfigMerger::merge_into(
            &mut config,
            ConfigLayer {
                assignees: Some(vec!["carol".to_string()]),
                ..Default::default()
            },
        );
        assert_eq!(config.assignees, vec!["carol".to_string()]);
    }

    #[test]
    fn test_empty_string_overrides() {
        let mut config = base();
        config.token = "secret".to_string();
        ConfigMerger::merge_into(
            &mut config,
            ConfigLayer {
                token: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_later_layers_win() {
        let low = ConfigLayer {
            version: Some("1.0".to_string()),
            deploy_type: Some("prod".to_string()),
            ..Default::default()
        };
        let high = ConfigLayer {
            version: Some("2.0".to_string()),
            ..Default::default()
        };

        let config = ConfigMerger::merge(base(), [low, high]);
        assert_eq!(config.version, "2.0");
        assert_eq!(config.deploy_type.as_deref(), Some("prod"));
    }

    #[test]
    fn test_extra_keys_assign_over() {
        let mut config = base();
        config
            .extra
            .insert("labels".to_string(), serde_yaml::Value::from("old"));

        let mut layer = ConfigLayer::default();
        layer
            .extra
            .insert("labels".to_string(), serde_yaml::Value::from("new"));
        layer
            .extra
            .insert("milestone".to_string(), serde_yaml::Value::from(7));
        ConfigMerger::merge_into(&mut config, layer);

        assert_eq!(config.extra["labels"], serde_yaml::Value::from("new"));
        assert_eq!(config.extra["milestone"], serde_yaml::Value::from(7));
    }
}
