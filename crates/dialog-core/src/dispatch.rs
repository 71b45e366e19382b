//! Intent Dispatch
//!
//! Handlers register under the intent name they serve. An event naming any
//! other intent is a fatal error for the caller, never a re-prompt.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialogError, Result};
use crate::request::IntentRequest;
use crate::response::DialogResponse;

/// A handler for one intent.
///
/// Handlers are synchronous: one request in, one response out, no shared
/// mutable state.
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler serves (e.g. "RecommendPortfolio")
    fn intent_name(&self) -> &str;

    /// Produce the dialog response for a request
    fn handle(&self, request: IntentRequest) -> Result<DialogResponse>;
}

/// Registry of intent handlers
#[derive(Default, Clone)]
pub struct IntentRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its intent name, replacing any previous one
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        let name = handler.intent_name().to_string();
        self.handlers.insert(name, Arc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered intent names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route a request to the handler for its intent
    pub fn dispatch(&self, request: IntentRequest) -> Result<DialogResponse> {
        let intent_name = request.intent_name().to_string();

        let handler = self.get(&intent_name).ok_or_else(|| {
            tracing::error!(intent = %intent_name, "No handler registered for intent");
            DialogError::UnsupportedIntent(intent_name.clone())
        })?;

        tracing::debug!(
            intent = %intent_name,
            source = %request.invocation_source,
            "Dispatching intent request"
        );

        let response = handler.handle(request)?;
        tracing::debug!(
            intent = %intent_name,
            action = response.dialog_action.kind(),
            "Intent handled"
        );
        Ok(response)
    }
}

/// Entry point for a raw platform event.
///
/// Validates the event into an [`IntentRequest`], dispatches it and serializes
/// the response back to JSON.
pub fn handle_event(
    registry: &IntentRegistry,
    event: serde_json::Value,
) -> Result<serde_json::Value> {
    let request = IntentRequest::from_value(event)?;
    let response = registry.dispatch(request)?;
    Ok(serde_json::to_value(response)?)
}
