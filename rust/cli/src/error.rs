//! Error types for the CLI application.
//!
//! Engine rejections are values, not failures: interactive play shows them
//! and re-prompts. `CliError` covers what actually ends a command.

use std::fmt;

use ratongato_engine::errors::JoinError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (files, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input, command-line arguments or move log contents
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation
    Config(String),

    /// The engine refused to set up a game
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<JoinError> for CliError {
    fn from(error: JoinError) -> Self {
        CliError::Engine(error.to_string())
    }
}

/// One problem found while checking a batch of items (e.g. lines of a move log).
///
/// ```rust
/// use ratongato_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "line 3".to_string(),
///     message: "move rejected".to_string(),
/// };
/// assert_eq!(error.to_string(), "line 3: move rejected");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Identifies the item that failed
    pub item_context: T,
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
