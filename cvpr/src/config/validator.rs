//! Required-field validation for automatic mode.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Fields that must be supplied before a non-interactive run can proceed,
/// named as they appear on the command line.
pub const REQUIRED_FIELDS: &[&str] = &["version", "assignees", "token", "deployType"];

/// Validates a resolved configuration.
///
/// # Examples
///
/// ```
/// use cvpr::config::{Config, ConfigValidator, DEFAULTS};
///
/// let config = Config::from_defaults(&DEFAULTS, "04-23-2024".to_string());
/// assert_eq!(
///     ConfigValidator::missing_fields(&config),
///     vec!["assignees", "deployType", "token", "version"]
/// );
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Returns the sorted names of required fields that are absent or empty.
    #[must_use]
    pub fn missing_fields(config: &Config) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !Self::is_present(config, field))
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredFields`] listing every missing field.
    pub fn validate_required(config: &Config) -> Result<()> {
        let missing = Self::missing_fields(config);
        if missing.is_empty() {
            return Ok(());
        }

        Err(Error::MissingRequiredFields {
            fields: missing.into_iter().map(String::from).collect(),
        })
    }

    fn is_present(config: &Config, field: &str) -> bool {
        match field {
            "version" => !config.version.is_empty(),
            "assignees" => !config.assignees.is_empty(),
            "token" => !config.token.is_empty(),
            "deployType" => config
                .deploy_type
                .as_deref()
                .is_some_and(|deploy_type| !deploy_type.is_empty()),
            _ => true,
        }
    }
}
