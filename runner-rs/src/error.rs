use std::fmt::{self, Display};
use std::io;

use sir::SirError;

/// Everything that can go wrong between reading the run document and
/// writing the last output table.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum RunnerError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    TomlError(toml::de::Error),
    CSVError(csv::Error),
    SimulationError(SirError),
    LoggingError(String),
    RunnerError(String),
}

impl From<io::Error> for RunnerError {
    fn from(error: io::Error) -> Self {
        RunnerError::IoError(error)
    }
}

impl From<serde_json::Error> for RunnerError {
    fn from(error: serde_json::Error) -> Self {
        RunnerError::JsonError(error)
    }
}

impl From<toml::de::Error> for RunnerError {
    fn from(error: toml::de::Error) -> Self {
        RunnerError::TomlError(error)
    }
}

impl From<csv::Error> for RunnerError {
    fn from(error: csv::Error) -> Self {
        RunnerError::CSVError(error)
    }
}

impl From<SirError> for RunnerError {
    fn from(error: SirError) -> Self {
        RunnerError::SimulationError(error)
    }
}

impl From<String> for RunnerError {
    fn from(error: String) -> Self {
        RunnerError::RunnerError(error)
    }
}

impl From<&str> for RunnerError {
    fn from(error: &str) -> Self {
        RunnerError::RunnerError(error.to_string())
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunnerError::IoError(e) => Some(e),
            RunnerError::JsonError(e) => Some(e),
            RunnerError::TomlError(e) => Some(e),
            RunnerError::CSVError(e) => Some(e),
            RunnerError::SimulationError(e) => Some(e),
            RunnerError::LoggingError(_) | RunnerError::RunnerError(_) => None,
        }
    }
}

impl Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunnerError::IoError(e) => write!(f, "I/O error: {e}"),
            RunnerError::JsonError(e) => write!(f, "invalid JSON: {e}"),
            RunnerError::TomlError(e) => write!(f, "invalid TOML: {e}"),
            RunnerError::CSVError(e) => write!(f, "CSV error: {e}"),
            RunnerError::SimulationError(e) => write!(f, "simulation failed: {e}"),
            RunnerError::LoggingError(message) => write!(f, "logging setup failed: {message}"),
            RunnerError::RunnerError(message) => write!(f, "{message}"),
        }
    }
}
