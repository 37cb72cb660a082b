//! The single action the binary performs: resolve, save, report.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{format_summary, redacted_yaml};
use cvpr::path::expand_tilde;
use cvpr::{Config, ConfigResolver, Logger, Prompter};

/// Resolve the release configuration and save it if requested.
///
/// Prints the summary on success. The prompter is a parameter so callers can
/// run the whole flow without a terminal.
pub fn execute(cli: &Cli, logger: Logger, prompter: &mut dyn Prompter) -> Result<Config, CliError> {
    let config_path = expand_tilde(&cli.config_file)?;
    let resolver = ConfigResolver::new(config_path).with_logger(logger);

    let config = resolver.resolve(&cli.flag_values(), prompter)?;
    resolver.persist(&config, cli.should_save());

    if logger.is_verbose() {
        match redacted_yaml(&config) {
            Ok(yaml) => logger.debug(&format!("Resolved configuration:\n{yaml}")),
            Err(e) => logger.debug(&format!("Could not render configuration: {e}")),
        }
    }

    logger.status(&format_summary(&config));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cvpr::prompt::ScriptedInput;
    use cvpr::{LogLevel, ScriptedPrompter};
    use tempfile::TempDir;

    fn cli(dir: &TempDir, args: &[&str]) -> Cli {
        let path = dir.path().join("cv-pull-request.yaml");
        let mut argv = vec![
            "cv-pull-request".to_string(),
            "--configFile".to_string(),
            path.display().to_string(),
        ];
        argv.extend(args.iter().map(|s| (*s).to_string()));
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_execute_interactive_saves_answers() {
        let dir = TempDir::new().unwrap();
        let cli = cli(&dir, &["-t", "tok"]);
        let mut prompter = ScriptedPrompter::new(["3.1.0", "prod", "alice, bob"]);

        let config = execute(&cli, Logger::new(LogLevel::Quiet), &mut prompter).unwrap();

        assert_eq!(config.version, "3.1.0");
        assert_eq!(config.source.as_deref(), Some("test"));
        assert_eq!(config.target.as_deref(), Some("prod"));
        assert_eq!(prompter.asked(), vec!["version", "deployType", "assignees"]);

        let saved = std::fs::read_to_string(dir.path().join("cv-pull-request.yaml")).unwrap();
        assert!(saved.contains("version: 3.1.0"));
        assert!(!saved.contains("date:"));
    }

    #[test]
    fn test_execute_cancel_maps_to_cancelled() {
        let dir = TempDir::new().unwrap();
        let cli = cli(&dir, &["--no-saveConfig"]);
        let mut prompter = ScriptedPrompter::from_script(vec![ScriptedInput::Cancel]);

        let err = execute(&cli, Logger::new(LogLevel::Quiet), &mut prompter).unwrap_err();

        assert!(matches!(err, CliError::Cancelled));
        assert!(!dir.path().join("cv-pull-request.yaml").exists());
    }

    #[test]
    fn test_execute_automatic_missing_fields() {
        let dir = TempDir::new().unwrap();
        let cli = cli(&dir, &["-y", "-v", "1.0.0", "-b", "test"]);
        let mut prompter = ScriptedPrompter::default();

        let err = execute(&cli, Logger::new(LogLevel::Quiet), &mut prompter).unwrap_err();

        match err {
            CliError::MissingFields(fields) => assert_eq!(fields, vec!["assignees", "token"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
