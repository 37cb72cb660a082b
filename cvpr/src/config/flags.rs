//! Values supplied on the command line.
//!
//! The CLI crate parses arguments with clap and hands the resolver a
//! [`FlagValues`]. Keeping this type free of clap lets the resolver be
//! driven directly from tests.

use crate::config::schema::ConfigLayer;

/// Command-line values that feed configuration resolution.
///
/// `--configFile` and `--saveConfig` are not included: they select where
/// the resolver reads and writes, not what it resolves.
///
/// # Examples
///
/// ```
/// use cvpr::config::FlagValues;
///
/// let flags = FlagValues::default()
///     .with_version("2.0.1")
///     .with_assignees("alice, bob")
///     .automatic(true);
/// assert_eq!(flags.assignees, Some(vec!["alice".to_string(), "bob".to_string()]));
/// assert!(flags.automatic);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagValues {
    /// `--version`
    pub version: Option<String>,
    /// `--assignees`, already split.
    pub assignees: Option<Vec<String>>,
    /// `--token`
    pub token: Option<String>,
    /// `--deployType`
    pub deploy_type: Option<String>,
    /// `--automatic`
    pub automatic: bool,
    /// `--debug`
    pub debug: bool,
}

impl FlagValues {
    /// Set the release version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the assignees from a comma-separated string.
    #[must_use]
    pub fn with_assignees(mut self, joined: &str) -> Self {
        self.assignees = Some(split_assignees(joined));
        self
    }

    /// Set the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the deploy type name.
    #[must_use]
    pub fn with_deploy_type(mut self, deploy_type: impl Into<String>) -> Self {
        self.deploy_type = Some(deploy_type.into());
        self
    }

    /// Set automatic (non-interactive) mode.
    #[must_use]
    pub fn automatic(mut self, automatic: bool) -> Self {
        self.automatic = automatic;
        self
    }

    /// Set debug mode.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The flags that take part in the automatic-mode merge, as a layer.
    #[must_use]
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            version: self.version.clone(),
            assignees: self.assignees.clone(),
            token: self.token.clone(),
            deploy_type: self.deploy_type.clone(),
            automatic: Some(self.automatic),
            debug: Some(self.debug),
            ..Default::default()
        }
    }
}

/// Split a comma-separated list of usernames.
///
/// Names are trimmed and empty entries dropped; order is preserved.
///
/// # Examples
///
/// ```
/// use cvpr::config::split_assignees;
///
/// assert_eq!(split_assignees("alice,bob,carol"), vec!["alice", "bob", "carol"]);
/// assert_eq!(split_assignees(" alice , ,bob,"), vec!["alice", "bob"]);
/// assert!(split_assignees(" , ").is_empty());
/// ```
#[must_use]
pub fn split_assignees(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
