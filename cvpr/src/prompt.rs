//! Interactive questions and the prompters that answer them.
//!
//! A [`Question`] carries its own validation, so every [`Prompter`] accepts
//! exactly the same answers. [`TerminalPrompter`] asks on the terminal;
//! [`ScriptedPrompter`] replays canned input and is used for scripting and
//! tests.

use std::collections::VecDeque;
use std::fmt;

use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};

use crate::config::split_assignees;
use crate::error::Error;

/// Checks raw input, returning the message to show when it is rejected.
pub type Validator = fn(&str) -> Result<(), &'static str>;

/// One entry of a single-select question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Value recorded when this entry is chosen.
    pub value: &'static str,
    /// Menu title.
    pub title: &'static str,
    /// Menu description.
    pub description: &'static str,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.description)
    }
}

/// The input style of a question.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Free text.
    Text {
        /// Pre-filled input.
        initial: String,
        /// Input check.
        validate: Validator,
    },
    /// Comma-separated free text, answered as a list.
    List {
        /// Pre-filled input.
        initial: String,
        /// Input check, applied to the raw text.
        validate: Validator,
    },
    /// Pick one entry from a fixed menu.
    Select {
        /// Menu entries.
        choices: Vec<Choice>,
        /// Initially highlighted entry.
        initial: usize,
    },
}

/// A single interactive question.
#[derive(Debug, Clone)]
pub struct Question {
    /// Field the answer fills in.
    pub name: &'static str,
    /// Text shown to the user.
    pub message: &'static str,
    /// Input style, initial value and validation.
    pub kind: QuestionKind,
}

/// An accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to a text question, trimmed.
    Text(String),
    /// Answer to a list question, split and trimmed.
    List(Vec<String>),
    /// Index of the chosen menu entry.
    Select(usize),
}

impl Question {
    /// Validate raw input and turn it into an answer.
    ///
    /// Select questions take the choice value (e.g. `prod`) as input.
    ///
    /// # Errors
    ///
    /// Returns the message to show the user when the input is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvpr::prompt::{Answer, Question, QuestionKind};
    ///
    /// let question = Question {
    ///     name: "assignees",
    ///     message: "Who?",
    ///     kind: QuestionKind::List {
    ///         initial: String::new(),
    ///         validate: |raw| if raw.trim().is_empty() { Err("Please enter at least one assignee") } else { Ok(()) },
    ///     },
    /// };
    /// assert_eq!(
    ///     question.accept("alice, bob"),
    ///     Ok(Answer::List(vec!["alice".to_string(), "bob".to_string()]))
    /// );
    /// assert!(question.accept("").is_err());
    /// ```
    pub fn accept(&self, input: &str) -> Result<Answer, &'static str> {
        match &self.kind {
            QuestionKind::Text { validate, .. } => {
                validate(input)?;
                Ok(Answer::Text(input.trim().to_string()))
            }
            QuestionKind::List { validate, .. } => {
                validate(input)?;
                Ok(Answer::List(split_assignees(input)))
            }
            QuestionKind::Select { choices, .. } => choices
                .iter()
                .position(|choice| choice.value == input)
                .map(Answer::Select)
                .ok_or("Please choose one of the listed options"),
        }
    }
}

/// Why a prompt did not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The user cancelled (Esc or Ctrl-C).
    Cancelled,
    /// The prompt could not run, e.g. no terminal is attached.
    Failed(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::Failed(message) => write!(f, "{message}"),
        }
    }
}

impl From<PromptError> for Error {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::Cancelled => Error::Cancelled,
            PromptError::Failed(message) => Error::Prompt { message },
        }
    }
}

/// Something that can answer questions.
///
/// Implementations must re-ask a question until its input is accepted,
/// and report cancellation as [`PromptError::Cancelled`].
pub trait Prompter {
    /// Ask one question and wait for an accepted answer.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Cancelled`] if the user cancels, or
    /// [`PromptError::Failed`] if the prompt cannot be shown.
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError>;
}

/// Asks questions on the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Creates a terminal prompter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        match &question.kind {
            QuestionKind::Text { initial, validate } | QuestionKind::List { initial, validate } => {
                let validate = *validate;
                let input = Text::new(question.message)
                    .with_initial_value(initial)
                    .with_validator(move |input: &str| {
                        Ok::<_, CustomUserError>(match validate(input) {
                            Ok(()) => Validation::Valid,
                            Err(message) => Validation::Invalid(message.into()),
                        })
                    })
                    .prompt()
                    .map_err(map_inquire_error)?;
                question.accept(&input).map_err(|m| PromptError::Failed(m.to_string()))
            }
            QuestionKind::Select { choices, initial } => {
                let picked = Select::new(question.message, choices.clone())
                    .with_starting_cursor(*initial)
                    .raw_prompt()
                    .map_err(map_inquire_error)?;
                Ok(Answer::Select(picked.index))
            }
        }
    }
}

fn map_inquire_error(e: InquireError) -> PromptError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Failed(other.to_string()),
    }
}

/// One scripted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// Typed input (for select questions, the choice value).
    Input(String),
    /// The user cancels.
    Cancel,
}

/// Replays canned input instead of reading the terminal.
///
/// Rejected input is recorded and the same question is asked again with
/// the next scripted input.
///
/// # Examples
///
/// ```
/// use cvpr::prompt::{Answer, Prompter, Question, QuestionKind, ScriptedPrompter};
///
/// let question = Question {
///     name: "version",
///     message: "Version?",
///     kind: QuestionKind::Text {
///         initial: String::new(),
///         validate: |raw| if raw.is_empty() { Err("Please enter a version") } else { Ok(()) },
///     },
/// };
///
/// let mut prompter = ScriptedPrompter::new(["", "3.1"]);
/// assert_eq!(prompter.ask(&question), Ok(Answer::Text("3.1".to_string())));
/// assert_eq!(prompter.rejections(), ["Please enter a version"]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<ScriptedInput>,
    asked: Vec<&'static str>,
    rejections: Vec<&'static str>,
}

impl ScriptedPrompter {
    /// Creates a prompter that types each string in turn.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_script(inputs.into_iter().map(|s| ScriptedInput::Input(s.into())))
    }

    /// Creates a prompter from a full script, including cancellations.
    pub fn from_script(script: impl IntoIterator<Item = ScriptedInput>) -> Self {
        Self {
            inputs: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Names of the questions asked, in order (re-asks not repeated).
    #[must_use]
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    /// Messages shown for rejected input, in order.
    #[must_use]
    pub fn rejections(&self) -> &[&'static str] {
        &self.rejections
    }

    /// Scripted inputs not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        self.asked.push(question.name);

        loop {
            match self.inputs.pop_front() {
                None => {
                    return Err(PromptError::Failed(format!(
                        "no scripted input left for '{}'",
                        question.name
                    )))
                }
                Some(ScriptedInput::Cancel) => return Err(PromptError::Cancelled),
                Some(ScriptedInput::Input(input)) => match question.accept(&input) {
                    Ok(answer) => return Ok(answer),
                    Err(message) => self.rejections.push(message),
                },
            }
        }
    }
}
