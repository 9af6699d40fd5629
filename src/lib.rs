//! Portfolio Advisor Bot
//!
//! Fulfillment handler for a conversational portfolio advisor:
//! - Validates age and investment amount slots mid-dialog
//! - Re-elicits a rejected slot, or delegates slot filling back to the platform
//! - Closes the dialog with a risk-based bond/equity recommendation
//!
//! EVENT → DECODE → DISPATCH → (ELICIT | DELEGATE | CLOSE)

pub mod api;
pub mod config;
pub mod dialog;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod models;
pub mod recommendation;
pub mod responses;
pub mod validation;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use dispatch::{IntentDispatcher, IntentHandler};
pub use handler::{handle_event, InvocationContext};
