//! # portfolio-advisor
//!
//! `RecommendPortfolio` intent for a conversational robo-advisor bot.
//!
//! The bot collects four slots: first name, age, investment amount and risk
//! level. While collecting, age and amount are checked against the service's
//! eligibility rules. At fulfillment the risk level picks one row of a fixed
//! bond/equity table:
//!
//! ```text
//! ┌─────────────┬──────────────────────────────────────────────┐
//! │ Risk level  │ Allocation                                   │
//! ├─────────────┼──────────────────────────────────────────────┤
//! │ None        │ 100% bonds (AGG)  ████████████████████       │
//! │ Very Low    │  80% bonds (AGG)  ████████████████░░░░       │
//! │ Low         │  60% bonds (AGG)  ████████████░░░░░░░░       │
//! │ Medium      │  40% bonds (AGG)  ████████░░░░░░░░░░░░       │
//! │ High        │  20% bonds (AGG)  ████░░░░░░░░░░░░░░░░       │
//! │ Very High   │   0% bonds (AGG)  ░░░░░░░░░░░░░░░░░░░░       │
//! └─────────────┴──────────────────────────────────────────────┘
//!                                   █ bonds (AGG)  ░ equities (SPY)
//! ```
//!
//! This is a lookup gated by two range checks, not a financial model.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod recommendation;
pub mod validation;

use dialog_core::{DialogResponse, IntentRegistry, IntentRequest};

pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use handler::RecommendPortfolioHandler;
pub use model::{Allocation, RECOMMEND_PORTFOLIO, RiskLevel};
pub use validation::{SlotValidator, ValidationResult};

/// Registry with every intent this bot serves
pub fn registry(config: AdvisorConfig) -> IntentRegistry {
    let mut registry = IntentRegistry::new();
    registry.register(RecommendPortfolioHandler::new(config));
    registry
}

/// Dispatch a request with the default configuration
pub fn dispatch(request: IntentRequest) -> dialog_core::Result<DialogResponse> {
    registry(AdvisorConfig::default()).dispatch(request)
}
