//! Error types for the submission pipeline

use std::fmt;

use thiserror::Error;

use crate::messages::MessageKey;

/// Load case selection fields that can be left unselected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    TimeHistoryLoadCase,
    StaticLoadCase,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionField::TimeHistoryLoadCase => "time history",
            SelectionField::StaticLoadCase => "static",
        })
    }
}

/// Rejection reasons produced by the validator, one per rule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("no {0} load case selected")]
    MissingSelection(SelectionField),

    #[error("scale factor must be a number greater than zero")]
    InvalidScaleFactor,

    #[error("angle table has no rows")]
    NoAngleRows,

    #[error("angle {0} appears in more than one row")]
    DuplicateAngle(f64),
}

impl ValidationError {
    /// Catalog key for the user-facing message of this rejection
    pub fn message_key(&self) -> MessageKey {
        match self {
            ValidationError::MissingSelection(SelectionField::TimeHistoryLoadCase) => {
                MessageKey::TimeHistoryCaseNotSelected
            }
            ValidationError::MissingSelection(SelectionField::StaticLoadCase) => {
                MessageKey::StaticCaseNotSelected
            }
            ValidationError::InvalidScaleFactor => MessageKey::ScaleFactorInvalid,
            ValidationError::NoAngleRows => MessageKey::AngleRowsEmpty,
            ValidationError::DuplicateAngle(_) => MessageKey::AngleDuplicated,
        }
    }
}

/// Failure raised by the engine entry point itself
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine call failed: {0}")]
    CallFailed(String),
}

/// Unexpected failures of a dispatched submission. These are the fatal
/// class: the outer submit handler logs them without notifying the user.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to encode request: {0}")]
    Encode(serde_json::Error),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("malformed engine response: {0}")]
    MalformedResponse(serde_json::Error),
}
