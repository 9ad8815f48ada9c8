use std::fmt::{self, Display};

/// Errors returned by the simulator before any computation takes place.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum SirError {
    InvalidParameter(String),
}

impl SirError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SirError::InvalidParameter(message.into())
    }
}

impl std::error::Error for SirError {}

impl Display for SirError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SirError::InvalidParameter(message) => write!(f, "invalid parameter: {message}"),
        }
    }
}
