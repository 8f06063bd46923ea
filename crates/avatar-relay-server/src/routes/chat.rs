//! Chat Routes - RAG chat passthrough
//!
//! POST /chat - Forward a message (and optional conversation id) to the RAG provider

use avatar_relay::{ChatRequest, Operation};
use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};

use super::relayed::Relayed;
use crate::models::ErrorBody;
use crate::AppState;

/// Send a chat message
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Upstream chat response, verbatim"),
        (status = 400, description = "Message is required", body = ErrorBody),
        (status = 504, description = "RAG provider timed out", body = ErrorBody),
        (status = 500, description = "Transport failure", body = ErrorBody)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Relayed, (StatusCode, Json<ErrorBody>)> {
    // An absent body is treated like a request without a message
    let request: ChatRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ChatRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(format!("Invalid JSON body: {}", e))),
            )
        })?
    };

    let result = state.gateway.chat(request).await.map_err(|e| {
        tracing::debug!("Rejected chat request: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(e.client_message())),
        )
    })?;

    Ok(result.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route(Operation::Chat.route(), post(chat))
}

#[cfg(test)]
mod tests {
    use crate::testing::{app_with, send, MockTransport};
    use avatar_relay::TransportError;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_or_empty_message_is_400_without_call() {
        for body in [Some(r#"{"message": ""}"#), Some("{}"), Some(r#"{"conversation_id": "abc"}"#), None] {
            let transport = Arc::new(MockTransport::replying(200, "{}"));
            let (status, response) = send(app_with(transport.clone()), "POST", "/chat", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({"error": "Message is required"}));
            assert_eq!(transport.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_400_without_call() {
        let transport = Arc::new(MockTransport::replying(200, "{}"));
        let (status, response) = send(app_with(transport.clone()), "POST", "/chat", Some("not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().unwrap().starts_with("Invalid JSON body"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_forwards_conversation_id() {
        let transport = Arc::new(MockTransport::replying(200, r#"{"response":"hello","conversation_id":"abc"}"#));
        let (status, response) = send(
            app_with(transport.clone()),
            "POST",
            "/chat",
            Some(r#"{"message": "hi", "conversation_id": "abc"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({"response": "hello", "conversation_id": "abc"}));
        assert_eq!(
            transport.single_call().body,
            Some(json!({"message": "hi", "conversation_id": "abc"}))
        );
    }

    #[tokio::test]
    async fn test_omits_absent_conversation_id() {
        let transport = Arc::new(MockTransport::replying(200, "{}"));
        send(app_with(transport.clone()), "POST", "/chat", Some(r#"{"message": "hi"}"#)).await;

        assert_eq!(transport.single_call().body, Some(json!({"message": "hi"})));
    }

    #[tokio::test]
    async fn test_chat_timeout_mentions_rag() {
        let transport = Arc::new(MockTransport::failing(TransportError::Timeout(
            "operation timed out".into(),
        )));
        let (status, response) =
            send(app_with(transport), "POST", "/chat", Some(r#"{"message": "hi"}"#)).await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        let error = response["error"].as_str().unwrap();
        assert!(error.contains("timeout"));
        assert!(error.contains("RAG API is taking too long to respond"));
    }

    #[tokio::test]
    async fn test_chat_upstream_errors() {
        let transport = Arc::new(MockTransport::replying(500, r#"{"code": 42}"#));
        let (status, response) =
            send(app_with(transport), "POST", "/chat", Some(r#"{"message": "hi"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({"code": 42}));

        let transport = Arc::new(MockTransport::replying(502, ""));
        let (status, response) =
            send(app_with(transport), "POST", "/chat", Some(r#"{"message": "hi"}"#)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(response, json!({"error": ""}));

        let transport = Arc::new(MockTransport::replying(404, "Not Found"));
        let (status, response) =
            send(app_with(transport), "POST", "/chat", Some(r#"{"message": "hi"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response, json!({"error": "Not Found"}));
    }
}
