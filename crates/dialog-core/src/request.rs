//! Intent Requests
//!
//! The event the bot platform sends to a fulfillment hook, modelled as a typed
//! structure. Required fields fail deserialization when missing; everything the
//! handlers never read is optional.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Slot name to collected value. `None` means the platform has not filled it.
pub type SlotMap = HashMap<String, Option<String>>;

/// Opaque attributes the platform carries between turns.
pub type SessionAttributes = serde_json::Map<String, serde_json::Value>;

/// Which phase of the conversation triggered the hook
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Mid-dialog: slots are still being collected
    DialogCodeHook,
    /// All required slots are filled and the intent should be fulfilled
    FulfillmentCodeHook,
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DialogCodeHook => write!(f, "DialogCodeHook"),
            Self::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
        }
    }
}

/// Whether the user confirmed the intent, when the bot asks for confirmation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputDialogMode {
    Text,
    Voice,
}

/// Bot that produced the event
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BotDescriptor {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// The intent the user is currently working through
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,

    #[serde(default)]
    pub slots: SlotMap,

    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

impl CurrentIntent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: SlotMap::new(),
            confirmation_status: ConfirmationStatus::None,
        }
    }

    /// Value of a slot, treating an absent key the same as an unfilled slot
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(Option::as_deref)
    }
}

/// A single fulfillment-hook invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub invocation_source: InvocationSource,

    pub current_intent: CurrentIntent,

    /// Passed back unchanged in every response
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<OutputDialogMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<HashMap<String, String>>,
}

impl IntentRequest {
    /// Create a minimal request for the given phase and intent
    pub fn new(invocation_source: InvocationSource, intent_name: impl Into<String>) -> Self {
        Self {
            invocation_source,
            current_intent: CurrentIntent::new(intent_name),
            session_attributes: None,
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
            request_attributes: None,
        }
    }

    /// Builder: set a slot value
    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.current_intent
            .slots
            .insert(name.into(), value.map(str::to_string));
        self
    }

    /// Builder: set session attributes
    #[must_use]
    pub fn with_session_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent.slot(name)
    }

    /// Parse a raw platform event
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        serde_json::from_value(value).map_err(|e| crate::DialogError::InvalidRequest(e.to_string()))
    }
}
