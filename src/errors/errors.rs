use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownByte { .. } => "UnknownByte",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedPattern { .. } => "MalformedPattern",
            ErrorImpl::TooManyStates { .. } => "TooManyStates",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownByte { byte } => {
                ErrorTip::Suggestion(format!("Unknown character: {:x}", byte))
            }
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::MalformedPattern { rule, reason } => {
                ErrorTip::Suggestion(format!("Rule {} is malformed: {}", rule, reason))
            }
            ErrorImpl::TooManyStates { rule, limit } => ErrorTip::Suggestion(format!(
                "Rule {} needs more than the {} states a recipe can hold",
                rule, limit
            )),
        }
    }
}

pub enum ErrorTip {
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown byte: {byte:#04x}")]
    UnknownByte { byte: u8 },
    #[error("unexpected token: expected {expected:?}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("malformed pattern in rule {rule}: {reason}")]
    MalformedPattern { rule: usize, reason: String },
    #[error("rule {rule} exceeds the {limit} state limit")]
    TooManyStates { rule: usize, limit: usize },
}
