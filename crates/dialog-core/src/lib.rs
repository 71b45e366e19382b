//! # dialog-core
//!
//! Typed model of the conversational-bot fulfillment hook and the plumbing that
//! routes an incoming event to the handler registered for its intent.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     handle_event(json)                       │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌────────────────┐  │
//! │  │IntentRequest│──│  IntentRegistry  │──│ DialogResponse │  │
//! │  │  (typed)    │  │ name → handler   │  │ Elicit/Delegate│  │
//! │  └─────────────┘  └──────────────────┘  │     /Close     │  │
//! │                                         └────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hosting platform owns the dialog state machine and session storage.
//! Handlers only see one request and return one response.

pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;

pub use dispatch::{IntentHandler, IntentRegistry, handle_event};
pub use error::{DialogError, Result};
pub use request::{CurrentIntent, IntentRequest, InvocationSource, SessionAttributes, SlotMap};
pub use response::{
    ContentType, DialogAction, DialogResponse, FulfillmentState, Message, close, delegate,
    elicit_slot,
};
