//! Dialog response builders
//!
//! Pure constructors. Session attributes and slots are passed through untouched.

use crate::models::{
    DialogAction, DialogResponse, FulfillmentState, Message, SessionAttributes, Slots,
};

/// Ask the user again for `slot_to_elicit`.
pub fn elicit_slot(
    session_attributes: Option<SessionAttributes>,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Hand slot filling back to the platform.
pub fn delegate(session_attributes: Option<SessionAttributes>, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// End the conversation.
pub fn close(
    session_attributes: Option<SessionAttributes>,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> Option<SessionAttributes> {
        Some(SessionAttributes::from([("k".to_string(), "v".to_string())]))
    }

    #[test]
    fn test_elicit_slot_shape() {
        let slots = Slots::from([
            ("age".to_string(), None),
            ("firstName".to_string(), Some("Ana".to_string())),
        ]);

        let response = elicit_slot(
            session(),
            "RecommendedPortfolio",
            slots,
            "age",
            Message::plain_text("again"),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": { "k": "v" },
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "RecommendedPortfolio",
                    "slots": { "age": null, "firstName": "Ana" },
                    "slotToElicit": "age",
                    "message": { "contentType": "PlainText", "content": "again" }
                }
            })
        );
    }

    #[test]
    fn test_delegate_shape() {
        let slots = Slots::from([("age".to_string(), Some("40".to_string()))]);
        let response = delegate(session(), slots.clone());

        assert_eq!(response.session_attributes, session());
        assert_eq!(response.dialog_action, DialogAction::Delegate { slots });
        assert_eq!(
            serde_json::to_value(&response).unwrap()["dialogAction"]["type"],
            "Delegate"
        );
    }

    #[test]
    fn test_close_shape() {
        let response = close(None, FulfillmentState::Fulfilled, Message::plain_text("done"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": null,
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Fulfilled",
                    "message": { "contentType": "PlainText", "content": "done" }
                }
            })
        );
    }
}
