//! Webhook routes.

use crate::AppState;
use crate::error::ApiError;
use axum::{Json, extract::State};
use factdeck_core::{ConversationId, TurnId};
use factdeck_dialog::{Intent, Reply};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;

/// One turn as sent by the hosting platform.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// Conversation the turn belongs to. A new id is assigned when absent.
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    /// Resolved intent name.
    pub intent: String,
    /// Intent parameters.
    #[serde(default)]
    pub parameters: Map<String, JsonValue>,
    /// Conversation data kept by the platform for this session.
    #[serde(default)]
    pub conversation_data: Map<String, JsonValue>,
}

/// The answer to one turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub conversation_id: ConversationId,
    pub reply: Reply,
    /// Conversation data to store for the next turn.
    pub conversation_data: Map<String, JsonValue>,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Answers one conversational turn.
pub async fn webhook(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, ApiError> {
    answer(&state, request).map(Json)
}

fn answer(state: &AppState, request: WebhookRequest) -> Result<WebhookResponse, ApiError> {
    let conversation_id = request.conversation_id.unwrap_or_default();
    let span = tracing::info_span!(
        "turn",
        conversation = %conversation_id,
        turn = %TurnId::new(),
        intent = %request.intent,
    );
    let _entered = span.enter();

    let intent =
        Intent::decode(&request.intent, &request.parameters).map_err(ApiError::BadRequest)?;

    let mut conversation_data = request.conversation_data;
    let reply = state
        .dialog
        .handle(&intent, &mut conversation_data, &mut rand::thread_rng())
        .map_err(ApiError::InvalidSession)?;

    tracing::info!(
        end_conversation = reply.end_conversation,
        "Answered turn"
    );

    Ok(WebhookResponse {
        conversation_id,
        reply,
        conversation_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use factdeck_dialog::{Dialog, RenderConfig};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        router(Arc::new(AppState::new(Dialog::new(RenderConfig::default()))))
    }

    async fn post_webhook(body: JsonValue) -> (StatusCode, JsonValue) {
        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request");

        let response = app().oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn first_turn_returns_seeded_conversation_data() {
        let (status, body) = post_webhook(json!({
            "intent": "choose_fact",
            "parameters": {"category": "history"}
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["conversation_id"].is_string());
        assert_eq!(body["reply"]["responses"][0]["speech"]["key"], "history");
        assert_eq!(body["conversation_data"]["history"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["conversation_data"]["cats"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn conversation_id_is_echoed() {
        let id = ConversationId::new();

        let (status, body) = post_webhook(json!({
            "conversation_id": id,
            "intent": "tell_cat_fact"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        let echoed: ConversationId =
            serde_json::from_value(body["conversation_id"].clone()).expect("id");
        assert_eq!(echoed, id);
    }

    #[tokio::test]
    async fn exhausted_conversation_ends() {
        let (status, body) = post_webhook(json!({
            "intent": "tell_fact",
            "parameters": {"category": "headquarters"},
            "conversation_data": {"history": [], "headquarters": [], "cats": ["cat_fact_1"]}
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["end_conversation"], true);
        assert_eq!(body["reply"]["responses"][0]["speech"]["key"], "heardItAll");
    }

    #[tokio::test]
    async fn unknown_intent_is_bad_request() {
        let (status, body) = post_webhook(json!({ "intent": "order_pizza" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "no handler for intent 'order_pizza'");
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let (status, body) = post_webhook(json!({
            "intent": "choose_fact",
            "parameters": {"category": "weather"}
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("weather")));
    }

    #[tokio::test]
    async fn malformed_conversation_data_is_unprocessable() {
        let (status, body) = post_webhook(json!({
            "intent": "choose_cats",
            "conversation_data": {"history": [], "headquarters": [], "cats": "cat_fact_1"}
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }
}
