//! Configuration resolution.
//!
//! The resolver merges, lowest precedence first:
//!
//! 1. Built-in defaults plus today's date
//! 2. The YAML config file
//! 3. Command-line flags
//! 4. Interactive answers
//!
//! In automatic mode step 4 is skipped and every required field must be
//! supplied by steps 2 and 3. In interactive mode flags pre-answer their
//! questions instead of being merged directly, and `source`/`target` are
//! derived from the chosen deploy type.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::config::flags::{split_assignees, FlagValues};
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, ConfigLayer, Defaults, DEFAULTS};
use crate::config::validator::ConfigValidator;
use crate::deploy::{BranchPair, DeployCatalog, DEPLOY_CATALOG};
use crate::error::Result;
use crate::logging::Logger;
use crate::path::DEFAULT_CONFIG_FILE;
use crate::prompt::{Answer, Choice, Prompter, Question, QuestionKind};

/// Format used for [`Config::date`].
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Format a date as `MM-dd-yyyy`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cvpr::config::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 4, 23).unwrap();
/// assert_eq!(format_date(date), "04-23-2024");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolves and persists the release configuration.
///
/// The default tables and the date are injected through the builder
/// methods; the resolver never mutates them.
///
/// # Examples
///
/// ```no_run
/// use cvpr::config::{ConfigResolver, FlagValues};
/// use cvpr::prompt::TerminalPrompter;
///
/// let resolver = ConfigResolver::new("./cv-pull-request.yaml");
/// let config = resolver
///     .resolve(&FlagValues::default(), &mut TerminalPrompter::new())
///     .unwrap();
/// resolver.persist(&config, true);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config_path: PathBuf,
    defaults: Defaults,
    catalog: DeployCatalog,
    today: NaiveDate,
    logger: Logger,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigResolver {
    /// Create a resolver reading and writing the given config file.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            defaults: DEFAULTS,
            catalog: DEPLOY_CATALOG,
            today: Local::now().date_naive(),
            logger: Logger::default(),
        }
    }

    /// Replace the built-in defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the deploy-type catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: DeployCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fix the date stamped on the configuration.
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Set the logger used for progress lines and warnings.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The config file this resolver reads and writes.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Produce the resolved configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRequiredFields`](crate::Error::MissingRequiredFields)
    ///   in automatic mode when a required field is absent
    /// - [`Error::Cancelled`](crate::Error::Cancelled) when the user cancels a prompt
    /// - [`Error::Prompt`](crate::Error::Prompt) when the prompter cannot run
    pub fn resolve(&self, flags: &FlagValues, prompter: &mut dyn Prompter) -> Result<Config> {
        let mut config = Config::from_defaults(&self.defaults, format_date(self.today));

        let stored = ConfigLoader::load_or_empty(&self.config_path, &self.logger);
        ConfigMerger::merge_into(&mut config, stored);
        config.automatic = flags.automatic;

        if flags.automatic {
            ConfigMerger::merge_into(&mut config, flags.to_layer());
            ConfigValidator::validate_required(&config)?;
            if let Some(expected) = self.stale_branches(&config) {
                self.logger.debug(&format!(
                    "stored branches {} -> {} do not match deploy type {} ({} -> {}); kept as stored",
                    config.source.as_deref().unwrap_or("-"),
                    config.target.as_deref().unwrap_or("-"),
                    config.deploy_type.as_deref().unwrap_or("-"),
                    expected.source,
                    expected.target,
                ));
            }
            log::debug!("automatic mode: resolved without prompting");
            return Ok(config);
        }

        config.debug = flags.debug;
        let answers = self.ask_questions(&config, flags, prompter)?;
        ConfigMerger::merge_into(&mut config, answers);
        Ok(config)
    }

    /// Save the configuration if requested.
    ///
    /// Returns true if the file was written. Failures are reported as a
    /// warning and never propagate.
    pub fn persist(&self, config: &Config, should_save: bool) -> bool {
        if !should_save {
            return false;
        }

        let path = self.config_path.display();
        self.logger.status(&format!("Writing config file {path}..."));

        match ConfigLoader::save(&self.config_path, config) {
            Ok(()) => true,
            Err(e) => {
                self.logger.warn(&format!("Couldn't save file {path} {e}"));
                false
            }
        }
    }

    /// The catalog branches for `config.deploy_type`, if the stored
    /// `source`/`target` disagree with them.
    ///
    /// Automatic runs keep stored branches as they are, so a file saved by an
    /// interactive `test` run still carries `dev -> test` into a later
    /// `--deployType prod` run.
    #[must_use]
    pub fn stale_branches(&self, config: &Config) -> Option<BranchPair> {
        if config.source.is_none() && config.target.is_none() {
            return None;
        }

        let expected = self.catalog.branches(config.deploy_type.as_deref());
        let matches = config.source.as_deref() == Some(expected.source)
            && config.target.as_deref() == Some(expected.target);
        (!matches).then_some(expected)
    }

    /// The interactive questions, pre-filled from `config`.
    #[must_use]
    pub fn questions(&self, config: &Config) -> Vec<Question> {
        let choices = self
            .catalog
            .entries()
            .iter()
            .map(|entry| Choice {
                value: entry.value.as_str(),
                title: entry.title,
                description: entry.description,
            })
            .collect();

        vec![
            Question {
                name: "version",
                message: "What CV version are you building?",
                kind: QuestionKind::Text {
                    initial: config.version.clone(),
                    validate: require_version,
                },
            },
            Question {
                name: "deployType",
                message: "What kind of deployment are you doing?",
                kind: QuestionKind::Select {
                    choices,
                    initial: self.catalog.index_of(config.deploy_type.as_deref()),
                },
            },
            Question {
                name: "assignees",
                message: "Who are the issue assignees? (separate multiple assignees with a comma)",
                kind: QuestionKind::List {
                    initial: config.assignees.join(","),
                    validate: require_assignees,
                },
            },
            Question {
                name: "token",
                message: "What GitHub API token should we use?",
                kind: QuestionKind::Text {
                    initial: config.token.clone(),
                    validate: require_token,
                },
            },
        ]
    }

    /// Ask every question in order and collect the answers as a layer,
    /// including the derived `source` and `target`.
    fn ask_questions(
        &self,
        config: &Config,
        flags: &FlagValues,
        prompter: &mut dyn Prompter,
    ) -> Result<ConfigLayer> {
        let mut answers = ConfigLayer::default();

        for question in self.questions(config) {
            let answer = match self.pre_answer(&question, flags) {
                Some(answer) => answer,
                None => prompter.ask(&question)?,
            };
            self.record(&mut answers, &question, answer);
        }

        let branches = self.catalog.branches(answers.deploy_type.as_deref());
        answers.source = Some(branches.source.to_string());
        answers.target = Some(branches.target.to_string());
        Ok(answers)
    }

    /// Answer a question from its flag, if the flag was given and valid.
    fn pre_answer(&self, question: &Question, flags: &FlagValues) -> Option<Answer> {
        let preset: Cow<'_, str> = match question.name {
            "version" => Cow::Borrowed(flags.version.as_deref()?),
            "deployType" => Cow::Borrowed(flags.deploy_type.as_deref()?),
            "assignees" => Cow::Owned(flags.assignees.as_ref()?.join(",")),
            "token" => Cow::Borrowed(flags.token.as_deref()?),
            _ => return None,
        };

        match question.accept(&preset) {
            Ok(answer) => {
                log::debug!("'{}' answered from the command line", question.name);
                Some(answer)
            }
            Err(message) => {
                self.logger.warn(&format!(
                    "Ignoring --{} from the command line: {message}",
                    question.name
                ));
                None
            }
        }
    }

    fn record(&self, answers: &mut ConfigLayer, question: &Question, answer: Answer) {
        match (question.name, answer) {
            ("version", Answer::Text(version)) => answers.version = Some(version),
            ("token", Answer::Text(token)) => answers.token = Some(token),
            ("assignees", Answer::List(assignees)) => answers.assignees = Some(assignees),
            ("deployType", Answer::Select(index)) => {
                let entries = self.catalog.entries();
                let entry = entries
                    .get(index)
                    .unwrap_or_else(|| self.catalog.resolve(None));
                answers.deploy_type = Some(entry.value.as_str().to_string());
            }
            (name, answer) => log::debug!("unexpected answer {answer:?} for '{name}'"),
        }
    }
}

fn require_version(raw: &str) -> std::result::Result<(), &'static str> {
    if raw.trim().is_empty() {
        Err("Please enter a version")
    } else {
        Ok(())
    }
}

fn require_assignees(raw: &str) -> std::result::Result<(), &'static str> {
    if split_assignees(raw).is_empty() {
        Err("Please enter at least one assignee")
    } else {
        Ok(())
    }
}

fn require_token(raw: &str) -> std::result::Result<(), &'static str> {
    if raw.trim().is_empty() {
        Err("Please enter a GitHub API token")
    } else {
        Ok(())
    }
}
