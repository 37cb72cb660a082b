//! Configuration schema definitions.
//!
//! [`Config`] is the fully resolved settings object handed to the pull
//! request step. [`ConfigLayer`] is a partial configuration: every field is
//! optional, and a present field replaces the corresponding [`Config`]
//! field wholesale when the layer is merged. The config file and the
//! command-line flags are both read into layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::flags::split_assignees;
use crate::project::{ProjectSpec, DEFAULT_PROJECTS};

/// Keys the config file may carry that this crate does not model.
///
/// They are kept, sorted by key, and written back on save.
pub type ExtraKeys = BTreeMap<String, serde_yaml::Value>;

/// Built-in default values for the fields a fresh configuration starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// GitHub organization that owns every project.
    pub owner: &'static str,
    /// User agent sent with API requests.
    pub user_agent: &'static str,
    /// IANA zone name used when stamping release dates.
    pub timezone: &'static str,
    /// Repositories released together.
    pub projects: &'static [ProjectSpec],
}

/// The built-in defaults.
pub const DEFAULTS: Defaults = Defaults {
    owner: "HRG-Technologies-LLC",
    user_agent: "HRG GitHub Utilities",
    timezone: "Pacific/Honolulu",
    projects: DEFAULT_PROJECTS,
};

impl Default for Defaults {
    fn default() -> Self {
        DEFAULTS
    }
}

/// The resolved configuration.
///
/// `source` and `target` are derived from `deploy_type` by the resolver and
/// are never set on their own. `date` and `debug` are computed per run and
/// are skipped when the configuration is serialized.
///
/// # Examples
///
/// ```
/// use cvpr::config::{Config, DEFAULTS};
///
/// let config = Config::from_defaults(&DEFAULTS, "04-23-2024".to_string());
/// assert_eq!(config.owner, "HRG-Technologies-LLC");
/// assert_eq!(config.projects.len(), 8);
/// assert!(config.version.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Release identifier.
    pub version: String,

    /// GitHub organization that owns every project.
    pub owner: String,

    /// User agent sent with API requests.
    pub user_agent: String,

    /// IANA zone name.
    pub timezone: String,

    /// GitHub API token.
    pub token: String,

    /// Repositories to open pull requests in.
    pub projects: Vec<ProjectSpec>,

    /// Pull request assignees, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,

    /// Deploy type name, normally `test` or `prod`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_type: Option<String>,

    /// Environment the head branches come from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Environment the base branches belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Whether the run was non-interactive.
    pub automatic: bool,

    /// Current date, `MM-dd-yyyy`.
    #[serde(skip_serializing)]
    pub date: String,

    /// Debug mode.
    #[serde(skip_serializing)]
    pub debug: bool,

    /// Unmodeled keys carried over from the config file.
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl Config {
    /// Builds a configuration from built-in defaults and a formatted date.
    #[must_use]
    pub fn from_defaults(defaults: &Defaults, date: String) -> Self {
        Self {
            version: String::new(),
            owner: defaults.owner.to_string(),
            user_agent: defaults.user_agent.to_string(),
            timezone: defaults.timezone.to_string(),
            token: String::new(),
            projects: defaults.projects.to_vec(),
            assignees: Vec::new(),
            deploy_type: None,
            source: None,
            target: None,
            automatic: false,
            date,
            debug: false,
            extra: ExtraKeys::new(),
        }
    }
}

/// A partial configuration.
///
/// Deserialized from the config file, or built from command-line flags and
/// prompt answers. `None` means "not supplied by this source".
///
/// # Examples
///
/// ```
/// use cvpr::config::ConfigLayer;
///
/// let layer: ConfigLayer = serde_yaml::from_str("version: 2.4.1\nassignees: alice, bob\n").unwrap();
/// assert_eq!(layer.version.as_deref(), Some("2.4.1"));
/// assert_eq!(layer.assignees, Some(vec!["alice".to_string(), "bob".to_string()]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    /// Release identifier. Integers are accepted and kept as text; a
    /// decimal such as `1.10` is rejected because its text cannot be kept.
    #[serde(default, deserialize_with = "deserialize_scalar_text")]
    pub version: Option<String>,

    /// GitHub organization.
    pub owner: Option<String>,

    /// User agent.
    pub user_agent: Option<String>,

    /// IANA zone name.
    pub timezone: Option<String>,

    /// GitHub API token.
    #[serde(default, deserialize_with = "deserialize_scalar_text")]
    pub token: Option<String>,

    /// Replacement project list.
    pub projects: Option<Vec<ProjectSpec>>,

    /// Assignees, as a list or one comma-separated string.
    #[serde(default, deserialize_with = "deserialize_assignees")]
    pub assignees: Option<Vec<String>>,

    /// Deploy type name.
    pub deploy_type: Option<String>,

    /// Source environment.
    pub source: Option<String>,

    /// Target environment.
    pub target: Option<String>,

    /// Non-interactive flag.
    pub automatic: Option<bool>,

    /// Date override.
    pub date: Option<String>,

    /// Debug mode.
    pub debug: Option<bool>,

    /// Any other keys.
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl ConfigLayer {
    /// Returns true if the layer supplies nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Accepts a string, integer or boolean scalar and keeps its text.
///
/// YAML decimals are parsed as floats, which drops trailing zeros
/// (`1.10` becomes `1.1`), so they must be quoted.
fn deserialize_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) if n.is_f64() => Err(D::Error::custom(format!(
            "decimal value {n} must be quoted to keep its exact text"
        ))),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a scalar value, found {other:?}"
        ))),
    }
}

/// Accepts either a list of names or a single comma-separated string.
fn deserialize_assignees<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        List(Vec<String>),
        Joined(String),
    }

    Ok(Option::<Helper>::deserialize(deserializer)?.map(|helper| match helper {
        Helper::List(names) => names
            .iter()
            .flat_map(|name| split_assignees(name))
            .collect(),
        Helper::Joined(joined) => split_assignees(&joined),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Config {
        Config::from_defaults(&DEFAULTS, "01-02-2025".to_string())
    }

    #[test]
    fn test_defaults() {
        let config = defaults();
        assert_eq!(config.owner, "HRG-Technologies-LLC");
        assert_eq!(config.user_agent, "HRG GitHub Utilities");
        assert_eq!(config.timezone, "Pacific/Honolulu");
        assert_eq!(config.projects, DEFAULT_PROJECTS);
        assert!(config.token.is_empty());
        assert!(config.assignees.is_empty());
        assert_eq!(config.deploy_type, None);
        assert_eq!(config.date, "01-02-2025");
    }

    #[test]
    fn test_serialize_skips_date_and_debug() {
        let mut config = defaults();
        config.debug = true;
        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(!yaml.contains("date"));
        assert!(!yaml.contains("debug"));
        assert!(yaml.contains("userAgent: HRG GitHub Utilities"));
    }

    #[test]
    fn test_serialize_flattens_extra_keys() {
        let mut config = defaults();
        config.extra.insert(
            "reviewers".to_string(),
            serde_yaml::Value::String("qa-team".to_string()),
        );
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("reviewers: qa-team"));
    }

    #[test]
    fn test_layer_camel_case_keys() {
        let layer: ConfigLayer =
            serde_yaml::from_str("userAgent: bot\ndeployType: prod\n").unwrap();
        assert_eq!(layer.user_agent.as_deref(), Some("bot"));
        assert_eq!(layer.deploy_type.as_deref(), Some("prod"));
        assert!(layer.extra.is_empty());
    }

    #[test]
    fn test_layer_numeric_version() {
        let layer: ConfigLayer = serde_yaml::from_str("version: 12\n").unwrap();
        assert_eq!(layer.version.as_deref(), Some("12"));

        let layer: ConfigLayer = serde_yaml::from_str("version: \"1.10\"\n").unwrap();
        assert_eq!(layer.version.as_deref(), Some("1.10"));
    }

    #[test]
    fn test_layer_unquoted_decimal_version_rejected() {
        let err = serde_yaml::from_str::<ConfigLayer>("version: 1.10\n").unwrap_err();
        assert!(err.to_string().contains("must be quoted"));

        assert!(serde_yaml::from_str::<ConfigLayer>("token: 3.5\n").is_err());
    }

    #[test]
    fn test_layer_null_version_is_absent() {
        let layer: ConfigLayer = serde_yaml::from_str("version: ~\nowner: acme\n").unwrap();
        assert_eq!(layer.version, None);
        assert_eq!(layer.owner.as_deref(), Some("acme"));
    }

    #[test]
    fn test_layer_rejects_mapping_version() {
        let result: Result<ConfigLayer, _> = serde_yaml::from_str("version:\n  major: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_layer_assignee_list() {
        let layer: ConfigLayer =
            serde_yaml::from_str("assignees:\n  - alice\n  - ' bob '\n").unwrap();
        assert_eq!(
            layer.assignees,
            Some(vec!["alice".to_string(), "bob".to_string()])
        );
    }

    #[test]
    fn test_layer_keeps_unknown_keys() {
        let layer: ConfigLayer = serde_yaml::from_str("labels: [release]\n").unwrap();
        assert!(layer.extra.contains_key("labels"));
    }

    #[test]
    fn test_layer_is_empty() {
        assert!(ConfigLayer::default().is_empty());
        let layer = ConfigLayer {
            automatic: Some(false),
            ..Default::default()
        };
        assert!(!layer.is_empty());
    }
}
