//! Error Types for Portfolio Advisor

use dialog_core::DialogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Unknown risk level: {0:?}")]
    UnknownRiskLevel(String),

    #[error("Invalid value for slot {slot}: {value:?}")]
    InvalidSlotValue { slot: String, value: String },

    #[error("Value for slot {slot} is out of range: {value:?}")]
    SlotValueOutOfRange { slot: String, value: String },

    #[error("Required slot missing: {0}")]
    MissingSlot(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AdvisorError> for DialogError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::MissingSlot(slot) => Self::MissingSlot(slot),
            other => Self::Handler(other.to_string()),
        }
    }
}
