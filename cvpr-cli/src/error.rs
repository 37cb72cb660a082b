//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps each outcome to the exit code
//! release scripts rely on.

use cvpr::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// The user cancelled a prompt. Not a failure.
    Cancelled,

    /// Automatic mode is missing required fields.
    MissingFields(Vec<String>),

    /// Any other library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Cancelled by the user
    /// - 1: Missing required fields, or any other failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Cancelled => 0,
            CliError::MissingFields(_) | CliError::Library(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Cancelled => write!(f, "Cancelled"),
            CliError::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Cancelled => CliError::Cancelled,
            LibError::MissingRequiredFields { fields } => CliError::MissingFields(fields),
            other => CliError::Library(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_exits_zero() {
        let err = CliError::from(LibError::Cancelled);
        assert!(matches!(err, CliError::Cancelled));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_fields_exit_one() {
        let err = CliError::from(LibError::MissingRequiredFields {
            fields: vec!["token".to_string()],
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Missing required fields: token");
    }

    #[test]
    fn test_prompt_failure_exit_one() {
        let err = CliError::from(LibError::Prompt {
            message: "not a terminal".to_string(),
        });
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("not a terminal"));
    }
}
