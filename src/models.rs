//! Core data models for the bot's invocation events and dialog responses

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque state the calling platform persists between turns.
pub type SessionAttributes = HashMap<String, String>;

/// Slot name → value, `None` while the slot is unfilled.
pub type Slots = HashMap<String, Option<String>>;

/// Slot names of the RecommendedPortfolio intent
pub mod slot_names {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
}

//
// ================= Request =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    pub invocation_source: InvocationSource,

    // Platform metadata, only used for logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl IntentRequest {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Value of a filled slot. Absent keys and `null` values both read as `None`.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|v| v.as_deref())
    }
}

//
// ================= Validation =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(slot: &str, content: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(slot.to_string()),
            message: Some(Message::plain_text(content)),
        }
    }
}

//
// ================= Response =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    Delegate {
        slots: Slots,
    },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    pub fn kind(&self) -> &'static str {
        match self {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

impl fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvocationSource::DialogCodeHook => "DialogCodeHook",
            InvocationSource::FulfillmentCodeHook => "FulfillmentCodeHook",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for FulfillmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FulfillmentState::Fulfilled => "Fulfilled",
            FulfillmentState::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_platform_event() {
        let event = json!({
            "messageVersion": "1.0",
            "invocationSource": "DialogCodeHook",
            "userId": "user-1",
            "sessionAttributes": { "visits": "2" },
            "requestAttributes": null,
            "bot": { "name": "RoboAdvisor", "alias": "$LATEST", "version": "$LATEST" },
            "outputDialogMode": "Text",
            "currentIntent": {
                "name": "RecommendedPortfolio",
                "slots": { "firstName": "Ana", "age": null },
                "confirmationStatus": "None"
            },
            "inputTranscript": "I want a portfolio"
        });

        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.intent_name(), "RecommendedPortfolio");
        assert_eq!(request.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(request.slot("firstName"), Some("Ana"));
        assert_eq!(request.slot("age"), None);
        assert_eq!(request.slot("riskLevel"), None);
        assert_eq!(
            request.session_attributes.as_ref().and_then(|s| s.get("visits")),
            Some(&"2".to_string())
        );
        assert_eq!(request.bot.unwrap().name, "RoboAdvisor");
    }

    #[test]
    fn test_null_session_attributes() {
        let event = json!({
            "invocationSource": "FulfillmentCodeHook",
            "sessionAttributes": null,
            "currentIntent": { "name": "RecommendedPortfolio", "slots": {} }
        });

        let request: IntentRequest = serde_json::from_value(event).unwrap();
        assert!(request.session_attributes.is_none());
    }

    #[test]
    fn test_dialog_action_wire_shape() {
        let response = DialogResponse {
            session_attributes: None,
            dialog_action: DialogAction::Close {
                fulfillment_state: FulfillmentState::Failed,
                message: Message::plain_text("bye"),
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "sessionAttributes": null,
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Failed",
                    "message": { "contentType": "PlainText", "content": "bye" }
                }
            })
        );
    }

    #[test]
    fn test_valid_result_omits_message() {
        let value = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(value, json!({ "isValid": true, "violatedSlot": null }));
    }
}
