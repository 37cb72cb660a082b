#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cvpr
//!
//! Configuration resolution for the `cv-pull-request` release tool.
//!
//! A release opens pull requests across a fixed set of repositories. This
//! library gathers the parameters such a release needs (version, deploy
//! type, assignees, API token) from built-in defaults, a YAML config file,
//! command-line flags and interactive prompts, and saves them back for the
//! next run.
//!
//! ## Core Types
//!
//! - [`Config`] and [`ConfigLayer`]: resolved and partial configuration
//! - [`ConfigResolver`]: the merge pipeline and persistence
//! - [`DeployType`] and [`DeployCatalog`]: release stages and their branches
//! - [`ProjectSpec`]: target repositories
//! - [`Prompter`]: the seam between the resolver and the terminal
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cvpr::DEPLOY_CATALOG;
//!
//! let branches = DEPLOY_CATALOG.branches(Some("prod"));
//! assert_eq!(branches.source, "test");
//! assert_eq!(branches.target, "prod");
//! ```

pub mod config;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod path;
pub mod project;
pub mod prompt;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLayer, ConfigResolver, FlagValues};
pub use deploy::{BranchPair, DeployCatalog, DeployType, DEPLOY_CATALOG};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use project::{ProjectSpec, DEFAULT_PROJECTS};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
