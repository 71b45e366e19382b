//! RecommendPortfolio Intent Handler
//!
//! Two phases, chosen by the invocation source:
//!
//! - `DialogCodeHook`: validate what has been collected so far. The first
//!   violation clears its slot and asks for it again; otherwise the platform
//!   keeps driving the dialog.
//! - `FulfillmentCodeHook`: look up the allocation for the chosen risk level
//!   and close the intent with the recommendation.

use dialog_core::{
    DialogResponse, FulfillmentState, IntentHandler, IntentRequest, InvocationSource, Message,
    Result as DialogResult, close, delegate, elicit_slot,
};

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result};
use crate::model::{Allocation, RECOMMEND_PORTFOLIO, slots};
use crate::recommendation::recommend;
use crate::validation::SlotValidator;

pub struct RecommendPortfolioHandler {
    validator: SlotValidator,
}

impl RecommendPortfolioHandler {
    pub const fn new(config: AdvisorConfig) -> Self {
        Self {
            validator: SlotValidator::new(config),
        }
    }

    fn collect(&self, request: IntentRequest) -> DialogResponse {
        let result = self.validator.validate(
            request.slot(slots::AGE),
            request.slot(slots::INVESTMENT_AMOUNT),
        );

        let IntentRequest {
            session_attributes,
            current_intent,
            ..
        } = request;
        let mut slots = current_intent.slots;

        match (result.violated_slot, result.message) {
            (Some(violated), Some(message)) if !result.valid => {
                tracing::warn!(
                    slot = %violated,
                    reason = %message.content,
                    "Slot failed validation, eliciting again"
                );
                slots.insert(violated.clone(), None);
                elicit_slot(session_attributes, current_intent.name, slots, violated, message)
            }
            _ => {
                tracing::debug!("Slots valid, delegating to platform");
                delegate(session_attributes, slots)
            }
        }
    }

    fn fulfill(&self, request: IntentRequest) -> Result<DialogResponse> {
        let first_name = required_slot(&request, slots::FIRST_NAME)?;
        let risk_level = required_slot(&request, slots::RISK_LEVEL)?;

        let allocation = recommend(risk_level)?;
        tracing::info!(risk_level, %allocation, "Portfolio recommended");

        let content = recommendation_message(first_name, &allocation);
        Ok(close(
            request.session_attributes,
            FulfillmentState::Fulfilled,
            Message::plain_text(content),
        ))
    }
}

impl Default for RecommendPortfolioHandler {
    fn default() -> Self {
        Self::new(AdvisorConfig::default())
    }
}

impl IntentHandler for RecommendPortfolioHandler {
    fn intent_name(&self) -> &str {
        RECOMMEND_PORTFOLIO
    }

    fn handle(&self, request: IntentRequest) -> DialogResult<DialogResponse> {
        match request.invocation_source {
            InvocationSource::DialogCodeHook => Ok(self.collect(request)),
            InvocationSource::FulfillmentCodeHook => Ok(self.fulfill(request)?),
        }
    }
}

fn required_slot<'a>(request: &'a IntentRequest, name: &str) -> Result<&'a str> {
    request
        .slot(name)
        .ok_or_else(|| AdvisorError::MissingSlot(name.to_string()))
}

/// Closing message for a fulfilled recommendation
pub fn recommendation_message(first_name: &str, allocation: &Allocation) -> String {
    format!(
        "{first_name} thank you for your information; based on the risk level you defined, \
         my recommendation is to choose an investment portfolio with {allocation}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialog_core::{DialogAction, DialogError, SessionAttributes};
    use serde_json::json;

    fn handler() -> RecommendPortfolioHandler {
        RecommendPortfolioHandler::default()
    }

    fn dialog_request(age: Option<&str>, amount: Option<&str>) -> IntentRequest {
        IntentRequest::new(InvocationSource::DialogCodeHook, RECOMMEND_PORTFOLIO)
            .with_slot(slots::FIRST_NAME, Some("Sam"))
            .with_slot(slots::AGE, age)
            .with_slot(slots::INVESTMENT_AMOUNT, amount)
            .with_slot(slots::RISK_LEVEL, None)
    }

    #[test]
    fn test_underage_elicits_age() {
        let response = handler().handle(dialog_request(Some("17"), None)).unwrap();

        match response.dialog_action {
            DialogAction::ElicitSlot {
                intent_name,
                slots,
                slot_to_elicit,
                message,
            } => {
                assert_eq!(intent_name, RECOMMEND_PORTFOLIO);
                assert_eq!(slot_to_elicit, "age");
                assert_eq!(message.content, AdvisorConfig::default().too_young_message());
                assert_eq!(slots.get("age"), Some(&None));
                assert_eq!(slots.get("firstName"), Some(&Some("Sam".to_string())));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_low_amount_elicits_investment_amount() {
        let response = handler()
            .handle(dialog_request(Some("30"), Some("1000")))
            .unwrap();

        match response.dialog_action {
            DialogAction::ElicitSlot {
                slots,
                slot_to_elicit,
                ..
            } => {
                assert_eq!(slot_to_elicit, "investmentAmount");
                assert_eq!(slots.get("investmentAmount"), Some(&None));
                assert_eq!(slots.get("age"), Some(&Some("30".to_string())));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_slots_delegate() {
        let mut attrs = SessionAttributes::new();
        attrs.insert("returning".into(), json!("true"));
        let request =
            dialog_request(Some("30"), Some("10000")).with_session_attributes(attrs.clone());

        let response = handler().handle(request).unwrap();
        assert_eq!(response.session_attributes, Some(attrs));
        match response.dialog_action {
            DialogAction::Delegate { slots } => {
                assert_eq!(slots.get("age"), Some(&Some("30".to_string())));
                assert_eq!(slots.get("investmentAmount"), Some(&Some("10000".to_string())));
            }
            other => panic!("expected Delegate, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dialog_delegates() {
        let response = handler().handle(dialog_request(None, None)).unwrap();
        assert!(matches!(response.dialog_action, DialogAction::Delegate { .. }));
    }

    #[test]
    fn test_fulfillment_closes_with_recommendation() {
        let request = IntentRequest::new(InvocationSource::FulfillmentCodeHook, RECOMMEND_PORTFOLIO)
            .with_slot(slots::FIRST_NAME, Some("Sam"))
            .with_slot(slots::AGE, Some("30"))
            .with_slot(slots::INVESTMENT_AMOUNT, Some("10000"))
            .with_slot(slots::RISK_LEVEL, Some("Medium"));

        let response = handler().handle(request).unwrap();
        match response.dialog_action {
            DialogAction::Close {
                fulfillment_state,
                message,
            } => {
                assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
                assert!(message.content.starts_with("Sam thank you"));
                assert!(message.content.contains("40% bonds (AGG) and 60% equities (SPY)"));
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn test_fulfillment_unknown_risk_level_errors() {
        let request = IntentRequest::new(InvocationSource::FulfillmentCodeHook, RECOMMEND_PORTFOLIO)
            .with_slot(slots::FIRST_NAME, Some("Sam"))
            .with_slot(slots::RISK_LEVEL, Some("Reckless"));

        let err = handler().handle(request).unwrap_err();
        assert!(matches!(err, DialogError::Handler(ref msg) if msg.contains("Reckless")));
    }

    #[test]
    fn test_fulfillment_missing_slot_errors() {
        let request = IntentRequest::new(InvocationSource::FulfillmentCodeHook, RECOMMEND_PORTFOLIO)
            .with_slot(slots::FIRST_NAME, Some("Sam"));

        let err = handler().handle(request).unwrap_err();
        assert!(matches!(err, DialogError::MissingSlot(ref slot) if slot == "riskLevel"));
    }
}
