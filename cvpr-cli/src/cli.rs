//! CLI structure and flag definitions.
//!
//! Flag names keep the camelCase spelling existing release scripts use
//! (`--deployType`, `--configFile`, `--saveConfig`); kebab-case aliases are
//! accepted as well.

use clap::{ArgAction, Parser};
use cvpr::path::DEFAULT_CONFIG_FILE;
use cvpr::FlagValues;
use std::path::PathBuf;

/// Prepare release pull requests across the CV repositories.
#[derive(Parser, Debug)]
#[command(name = "cv-pull-request")]
#[command(
    about = "Prepare release pull requests across the CV repositories",
    long_about = None,
    disable_version_flag = true,
    after_help = "Note: If the 'REQUIRED' options are not supplied, the application will ask for the values at runtime"
)]
pub struct Cli {
    /// [REQUIRED] CV release version
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// [REQUIRED] Assignees (comma-separated list)
    #[arg(short = 'a', long = "assignees", value_name = "NAMES")]
    pub assignees: Option<String>,

    /// [REQUIRED] GitHub API token
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// [REQUIRED] Type of deploy being done, can be either "test" or "prod"
    #[arg(
        short = 'b',
        long = "deployType",
        alias = "deploy-type",
        value_name = "TYPE"
    )]
    pub deploy_type: Option<String>,

    /// Automatic mode; disable interactive prompts. Fails if any required field is missing
    #[arg(short = 'y', long = "automatic")]
    pub automatic: bool,

    /// YAML configuration file
    #[arg(
        short = 'c',
        long = "configFile",
        alias = "config-file",
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config_file: PathBuf,

    /// Save the configuration values to the config file
    #[arg(
        short = 's',
        long = "saveConfig",
        alias = "save-config",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub save_config: bool,

    /// Do not save the configuration values
    #[arg(long = "no-saveConfig", alias = "no-save-config", overrides_with = "save_config")]
    pub no_save_config: bool,

    /// Run in debug mode
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// The flag values the resolver consumes.
    ///
    /// The assignees flag is split into individual names here.
    pub fn flag_values(&self) -> FlagValues {
        let mut flags = FlagValues::default()
            .automatic(self.automatic)
            .debug(self.debug);
        flags.version.clone_from(&self.version);
        flags.token.clone_from(&self.token);
        flags.deploy_type.clone_from(&self.deploy_type);
        if let Some(ref joined) = self.assignees {
            flags = flags.with_assignees(joined);
        }
        flags
    }

    /// Whether the resolved configuration should be written back.
    pub fn should_save(&self) -> bool {
        self.save_config && !self.no_save_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cv-pull-request").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.config_file, PathBuf::from("./cv-pull-request.yaml"));
        assert!(cli.should_save());
        assert!(!cli.automatic);
        assert!(!cli.debug);
        assert_eq!(cli.flag_values(), FlagValues::default());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "-v", "1.2.3", "-a", "alice,bob,carol", "-t", "tok", "-b", "prod", "-y", "-d",
        ]);
        let flags = cli.flag_values();

        assert_eq!(flags.version.as_deref(), Some("1.2.3"));
        assert_eq!(
            flags.assignees,
            Some(vec![
                "alice".to_string(),
                "bob".to_string(),
                "carol".to_string()
            ])
        );
        assert_eq!(flags.token.as_deref(), Some("tok"));
        assert_eq!(flags.deploy_type.as_deref(), Some("prod"));
        assert!(flags.automatic);
        assert!(flags.debug);
    }

    #[test]
    fn test_camel_case_and_kebab_aliases() {
        let camel = parse(&["--deployType", "test", "--configFile", "a.yaml"]);
        let kebab = parse(&["--deploy-type", "test", "--config-file", "a.yaml"]);

        assert_eq!(camel.deploy_type, kebab.deploy_type);
        assert_eq!(camel.config_file, kebab.config_file);
    }

    #[test]
    fn test_save_config_values() {
        assert!(parse(&["-s"]).should_save());
        assert!(parse(&["--saveConfig", "true"]).should_save());
        assert!(!parse(&["--saveConfig", "false"]).should_save());
        assert!(!parse(&["-s", "false"]).should_save());
        assert!(!parse(&["--no-saveConfig"]).should_save());
    }

    #[test]
    fn test_version_is_not_clap_version_flag() {
        let cli = parse(&["--version", "5.0"]);
        assert_eq!(cli.version.as_deref(), Some("5.0"));
    }
}
