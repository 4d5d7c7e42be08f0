use crate::models::Screen;
use std::fmt;
use std::io;

/// Errors raised by the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The operation is not allowed from the current screen.
    InvalidTransition {
        operation: &'static str,
        screen: Screen,
    },
    PreconditionNotMet {
        operation: &'static str,
        reason: String,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTransition { operation, screen } => {
                write!(f, "'{}' is not allowed on the {} screen", operation, screen)
            }
            SessionError::PreconditionNotMet { operation, reason } => {
                write!(f, "'{}' cannot run: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Errors raised while loading a question bank.
#[derive(Debug)]
pub enum BankError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// A record failed validation; `index` is its position in the file.
    Invalid { index: usize, reason: String },
    Empty,
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Io(e) => write!(f, "Failed to read question file: {}", e),
            BankError::Parse(e) => write!(f, "Failed to parse question file: {}", e),
            BankError::Invalid { index, reason } => {
                write!(f, "Invalid question #{}: {}", index + 1, reason)
            }
            BankError::Empty => write!(f, "Question file contains no questions"),
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Io(e) => Some(e),
            BankError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BankError {
    fn from(err: io::Error) -> Self {
        BankError::Io(err)
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Parse(err)
    }
}
