//! Configuration system for cv-pull-request.
//!
//! The release configuration is assembled from several sources. From lowest
//! to highest precedence:
//!
//! 1. Built-in defaults (owner, user agent, timezone, the default projects)
//! 2. The YAML config file (`./cv-pull-request.yaml` unless overridden)
//! 3. Command-line flags
//! 4. Interactive answers
//!
//! Every merge is a shallow overwrite: a source that supplies a field
//! replaces it wholesale, lists included.
//!
//! # Examples
//!
//! Non-interactive resolution with every required value on the command
//! line:
//!
//! ```no_run
//! use cvpr::config::{ConfigResolver, FlagValues};
//! use cvpr::prompt::ScriptedPrompter;
//!
//! let flags = FlagValues::default()
//!     .with_version("4.2.0")
//!     .with_assignees("alice,bob")
//!     .with_token("ghp_example")
//!     .with_deploy_type("prod")
//!     .automatic(true);
//!
//! let resolver = ConfigResolver::new("./cv-pull-request.yaml");
//! let config = resolver.resolve(&flags, &mut ScriptedPrompter::default()).unwrap();
//! assert_eq!(config.assignees, vec!["alice", "bob"]);
//! ```
//!
//! Merging a layer by hand:
//!
//! ```
//! use cvpr::config::{Config, ConfigLayer, ConfigMerger, DEFAULTS};
//!
//! let mut config = Config::from_defaults(&DEFAULTS, "04-23-2024".to_string());
//! ConfigMerger::merge_into(&mut config, ConfigLayer {
//!     timezone: Some("America/Denver".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(config.timezone, "America/Denver");
//! ```

pub mod flags;
pub mod loader;
pub mod merger;
pub mod resolver;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use flags::{split_assignees, FlagValues};
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use resolver::{format_date, ConfigResolver, DATE_FORMAT};
pub use schema::{Config, ConfigLayer, Defaults, ExtraKeys, DEFAULTS};
pub use validator::{ConfigValidator, REQUIRED_FIELDS};
