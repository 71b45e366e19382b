//! Dialog Responses
//!
//! The three dialog actions a fulfillment hook may hand back to the platform.

use serde::{Deserialize, Serialize};

use crate::request::{SessionAttributes, SlotMap};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

/// A message shown (or spoken) to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// What the platform should do next
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Ask the user for a specific slot again
    ElicitSlot {
        intent_name: String,
        slots: SlotMap,
        slot_to_elicit: String,
        message: Message,
    },
    /// Let the platform pick the next step with the current slots
    Delegate { slots: SlotMap },
    /// End the conversation for this intent
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    /// Short name used in logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ElicitSlot { .. } => "ElicitSlot",
            Self::Delegate { .. } => "Delegate",
            Self::Close { .. } => "Close",
        }
    }
}

/// Complete hook response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

/// Re-prompt for `slot_to_elicit` with an explanation
pub fn elicit_slot(
    session_attributes: Option<SessionAttributes>,
    intent_name: impl Into<String>,
    slots: SlotMap,
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

pub fn delegate(session_attributes: Option<SessionAttributes>, slots: SlotMap) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

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

    #[test]
    fn test_elicit_slot_shape() {
        let mut slots = SlotMap::new();
        slots.insert("age".into(), None);

        let response = elicit_slot(
            None,
            "RecommendPortfolio",
            slots,
            "age",
            Message::plain_text("How old are you?"),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": null,
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "RecommendPortfolio",
                    "slots": {"age": null},
                    "slotToElicit": "age",
                    "message": {"contentType": "PlainText", "content": "How old are you?"}
                }
            })
        );
    }

    #[test]
    fn test_delegate_shape() {
        let mut attrs = SessionAttributes::new();
        attrs.insert("k".into(), json!("v"));

        let response = delegate(Some(attrs), SlotMap::new());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"k": "v"},
                "dialogAction": {"type": "Delegate", "slots": {}}
            })
        );
    }

    #[test]
    fn test_close_shape() {
        let response = close(
            Some(SessionAttributes::new()),
            FulfillmentState::Fulfilled,
            Message::plain_text("Done"),
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["dialogAction"]["type"], "Close");
        assert_eq!(value["dialogAction"]["fulfillmentState"], "Fulfilled");
        assert_eq!(value["dialogAction"]["message"]["contentType"], "PlainText");
        assert_eq!(response.dialog_action.kind(), "Close");
    }
}
