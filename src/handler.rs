//! Invocation entry point
//!
//! Decodes the raw platform event and hands it to the dispatcher unchanged.

use crate::dispatch::{create_default_dispatcher, IntentDispatcher};
use crate::error::BotError;
use crate::models::{DialogResponse, IntentRequest};
use crate::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info_span;
use uuid::Uuid;

/// Per-invocation metadata supplied by the host
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Route the incoming event based on intent.
pub fn handle_event(event: Value, context: &InvocationContext) -> Result<DialogResponse> {
    handle_event_with(&create_default_dispatcher(), event, context)
}

/// Same as [`handle_event`] against a caller-owned dispatcher.
pub fn handle_event_with(
    dispatcher: &IntentDispatcher,
    event: Value,
    context: &InvocationContext,
) -> Result<DialogResponse> {
    let request: IntentRequest =
        serde_json::from_value(event).map_err(|e| BotError::MalformedEvent(e.to_string()))?;

    let span = info_span!(
        "invocation",
        request_id = %context.request_id,
        received_at = %context.received_at.to_rfc3339(),
        user_id = request.user_id.as_deref().unwrap_or_default(),
    );
    let _guard = span.enter();

    dispatcher.dispatch(&request)
}
