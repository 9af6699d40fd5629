//! Error types for the portfolio advisor bot

use crate::models::slot_names::RISK_LEVEL;
use thiserror::Error;

/// Result type alias for handler operations
pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Error, Debug)]
pub enum BotError {

    // =============================
    // Dispatch Errors
    // =============================

    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    // =============================
    // Domain Lookup Errors
    // =============================

    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    #[error("Missing slot: {0}")]
    MissingSlot(String),

    #[error("Invalid value for slot {slot}: {value:?} is not a whole number")]
    InvalidSlotValue { slot: String, value: String },

    // =============================
    // Host Errors
    // =============================

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BotError {
    /// Errors caused by slot contents the dialog can answer with a Close/Failed turn.
    pub fn is_domain_lookup(&self) -> bool {
        matches!(
            self,
            BotError::UnknownRiskLevel(_)
                | BotError::MissingSlot(_)
                | BotError::InvalidSlotValue { .. }
        )
    }

    /// Slot the error refers to, if any.
    pub fn slot(&self) -> Option<&str> {
        match self {
            BotError::UnknownRiskLevel(_) => Some(RISK_LEVEL),
            BotError::MissingSlot(slot) => Some(slot.as_str()),
            BotError::InvalidSlotValue { slot, .. } => Some(slot.as_str()),
            _ => None,
        }
    }
}
