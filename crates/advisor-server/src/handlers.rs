//! HTTP Handlers

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use dialog_core::{DialogError, handle_event};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub request_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state.registry.names().into_iter().map(String::from).collect(),
    })
}

/// Fulfillment hook: one platform event in, one dialog response out
///
/// The body is parsed here rather than by the `Json` extractor so that every
/// rejection, including non-JSON bodies, gets an `ErrorResponse`.
pub async fn fulfill(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("fulfill", request_id = %request_id);

    span.in_scope(|| {
        let event = serde_json::from_slice(&body)
            .map_err(|e| DialogError::InvalidRequest(format!("body is not valid JSON: {e}")))?;
        handle_event(&state.registry, event)
    })
    .map(Json)
    .map_err(|e| {
        let _guard = span.enter();
        error_response(&e, request_id)
    })
}

fn error_response(err: &DialogError, request_id: String) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        DialogError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        DialogError::UnsupportedIntent(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "UNSUPPORTED_INTENT")
        }
        DialogError::MissingSlot(_) => (StatusCode::INTERNAL_SERVER_ERROR, "MISSING_SLOT"),
        DialogError::Handler(_) => (StatusCode::INTERNAL_SERVER_ERROR, "HANDLER_ERROR"),
        DialogError::Json(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR"),
    };

    if err.is_client_error() {
        tracing::warn!(code, "Rejected event: {}", err);
    } else {
        tracing::error!(code, "Fulfillment failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
            request_id,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_advisor::{AdvisorConfig, registry};
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(registry(AdvisorConfig::default()))
    }

    fn event_body(event: &serde_json::Value) -> Bytes {
        Bytes::from(event.to_string())
    }

    #[tokio::test]
    async fn test_health_lists_intents() {
        let Json(health) = health_check(State(state())).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.intents, vec!["RecommendPortfolio".to_string()]);
    }

    #[tokio::test]
    async fn test_fulfill_delegates_valid_slots() {
        let event = json!({
            "invocationSource": "DialogCodeHook",
            "sessionAttributes": null,
            "currentIntent": {
                "name": "RecommendPortfolio",
                "slots": {
                    "firstName": "Sam",
                    "age": "40",
                    "investmentAmount": "20000",
                    "riskLevel": null
                }
            }
        });

        let Json(response) = fulfill(State(state()), event_body(&event)).await.unwrap();
        assert_eq!(response["dialogAction"]["type"], "Delegate");
        assert_eq!(response["sessionAttributes"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_fulfill_unsupported_intent() {
        let event = json!({
            "invocationSource": "DialogCodeHook",
            "currentIntent": {"name": "OrderPizza", "slots": {}}
        });

        let (status, Json(body)) = fulfill(State(state()), event_body(&event)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "UNSUPPORTED_INTENT");
        assert_eq!(body.error, "Sorry, I can't help with 'OrderPizza' yet.");
        assert!(!body.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_malformed_event() {
        let (status, Json(body)) = fulfill(State(state()), event_body(&json!({"hello": "world"})))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_REQUEST");
        assert_eq!(body.error, "The request could not be understood.");
    }

    #[tokio::test]
    async fn test_fulfill_non_json_body() {
        let (status, Json(body)) = fulfill(State(state()), Bytes::from_static(b"age=17"))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_REQUEST");
        assert!(!body.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_fulfill_handler_error_hides_internals() {
        let event = json!({
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {
                "name": "RecommendPortfolio",
                "slots": {"firstName": "Sam", "riskLevel": "Reckless"}
            }
        });

        let (status, Json(body)) = fulfill(State(state()), event_body(&event)).await.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "HANDLER_ERROR");
        assert_eq!(body.error, "An unexpected error occurred.");
        assert!(!body.error.contains("Reckless"));
    }
}
