//! Forwarding Gateway (Use Case)
//!
//! Translates each inbound operation into one outbound call and the
//! outcome back into a [`NormalizedResult`].

use std::sync::Arc;

use avatar_relay::{
    normalize, ChatRequest, DomainError, NormalizedResult, Operation, OutboundCall,
    TransportError, Upstream, UpstreamTransport,
};

use crate::config::GatewayConfig;

/// Application service behind every relayed route
pub struct ForwardingGateway {
    transport: Arc<dyn UpstreamTransport>,
    config: GatewayConfig,
}

impl ForwardingGateway {
    pub fn new(transport: Arc<dyn UpstreamTransport>, config: GatewayConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Create a streaming session token
    pub async fn issue_streaming_token(&self) -> NormalizedResult {
        let call = self
            .avatar_call(Operation::IssueStreamingToken)
            .with_header("Content-Type", "application/json");
        let result = self.forward(call).await;

        if let NormalizedResult::Success { body } = &result {
            let keys: Vec<&str> = body
                .as_object()
                .map(|obj| obj.keys().map(String::as_str).collect())
                .unwrap_or_default();
            tracing::debug!("Token response structure: {:?}", keys);
        }

        result
    }

    /// Full avatar catalog
    pub async fn list_all_avatars(&self) -> NormalizedResult {
        self.forward(self.avatar_call(Operation::ListAllAvatars)).await
    }

    /// Avatars usable for live streaming sessions
    pub async fn list_interactive_avatars(&self) -> NormalizedResult {
        self.forward(self.avatar_call(Operation::ListInteractiveAvatars))
            .await
    }

    pub async fn list_voices(&self) -> NormalizedResult {
        self.forward(self.avatar_call(Operation::ListVoices)).await
    }

    /// Forward a chat message to the RAG provider.
    ///
    /// Validation failures return `Err` without any outbound call.
    pub async fn chat(&self, request: ChatRequest) -> Result<NormalizedResult, DomainError> {
        let payload = request.into_payload()?;
        let body = serde_json::to_value(&payload)
            .map_err(|e| DomainError::validation(format!("Invalid chat payload: {}", e)))?;

        let call = OutboundCall::post(Operation::Chat, self.config.chat_url.clone())
            .with_header("Content-Type", "application/json")
            .with_json(body)
            .with_timeout(self.config.timeout_for(Upstream::Chat));

        Ok(self.forward(call).await)
    }

    fn avatar_call(&self, operation: Operation) -> OutboundCall {
        let path = operation.avatar_path().unwrap_or_default();
        let url = self.config.avatar_url(path);

        let call = if operation == Operation::IssueStreamingToken {
            OutboundCall::post(operation, url)
        } else {
            OutboundCall::get(operation, url)
        };

        call.with_header("X-Api-Key", self.config.api_key.clone())
            .with_timeout(self.config.timeout_for(Upstream::Avatar))
    }

    async fn forward(&self, call: OutboundCall) -> NormalizedResult {
        let operation = call.operation;
        tracing::debug!("{} -> {} {}", operation, call.method, call.target_url);

        let outcome = self.transport.execute(&call).await;

        match &outcome {
            Ok(response) if !response.is_success() => {
                tracing::warn!(
                    "Upstream error for {} ({}): {}",
                    operation,
                    response.status,
                    response.body
                );
            }
            Ok(_) => {}
            Err(TransportError::Timeout(detail)) => {
                let timeout = operation
                    .upstream()
                    .map(|upstream| (upstream, self.config.timeout_for(upstream)));
                if let Some((upstream, limit)) = timeout {
                    tracing::warn!(
                        "{} provider exceeded {:?} for {}: {}",
                        upstream,
                        limit,
                        operation,
                        detail
                    );
                }
            }
            Err(err) => {
                tracing::error!("Transport failure for {}: {}", operation, err.diagnostic());
            }
        }

        let answered = outcome.is_ok();
        let result = normalize(operation, outcome, self.config.diagnostics);

        // A 2xx that still failed normalization carried an unparsable body
        if let (true, NormalizedResult::TransportFailure { message, .. }) = (answered, &result) {
            tracing::error!("Malformed response for {}: {}", operation, message);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use avatar_relay::{DiagnosticPolicy, HttpMethod, UpstreamResponse, MESSAGE_REQUIRED};
    use serde_json::json;
    use std::time::Duration;

    fn gateway(transport: Arc<MockTransport>) -> ForwardingGateway {
        let config = GatewayConfig::new("test-key")
            .with_avatar_base_url("http://avatar.test/")
            .with_chat_url("http://rag.test/chat/");
        ForwardingGateway::new(transport, config)
    }

    #[tokio::test]
    async fn test_streaming_token_call_shape() {
        let transport = Arc::new(MockTransport::replying(200, r#"{"data":{"token":"t"}}"#));
        let result = gateway(transport.clone()).issue_streaming_token().await;

        assert_eq!(result.into_body(), json!({"data": {"token": "t"}}));
        let call = transport.single_call();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.target_url, "http://avatar.test/v1/streaming.create_token");
        assert_eq!(call.header("X-Api-Key"), Some("test-key"));
        assert_eq!(call.header("Content-Type"), Some("application/json"));
        assert_eq!(call.timeout, Duration::from_secs(60));
        assert_eq!(call.body, None);
    }

    #[tokio::test]
    async fn test_avatar_listings_hit_distinct_paths() {
        let transport = Arc::new(MockTransport::replying(200, "{}"));
        let gw = gateway(transport.clone());

        gw.list_all_avatars().await;
        gw.list_interactive_avatars().await;
        gw.list_voices().await;

        let urls: Vec<_> = transport
            .calls()
            .into_iter()
            .map(|call| {
                assert_eq!(call.method, HttpMethod::Get);
                assert_eq!(call.header("X-Api-Key"), Some("test-key"));
                call.target_url
            })
            .collect();
        assert_eq!(
            urls,
            vec![
                "http://avatar.test/v2/avatars",
                "http://avatar.test/v1/streaming/avatar.list",
                "http://avatar.test/v2/voices",
            ]
        );
    }

    #[tokio::test]
    async fn test_chat_call_shape() {
        let transport = Arc::new(MockTransport::replying(200, r#"{"response":"hello"}"#));
        let request = ChatRequest {
            message: Some("hi".into()),
            conversation_id: Some("abc".into()),
        };
        let result = gateway(transport.clone()).chat(request).await.unwrap();

        assert!(result.is_success());
        let call = transport.single_call();
        assert_eq!(call.target_url, "http://rag.test/chat/");
        assert_eq!(call.header("X-Api-Key"), None);
        assert_eq!(call.header("Content-Type"), Some("application/json"));
        assert_eq!(call.timeout, Duration::from_secs(120));
        assert_eq!(call.body, Some(json!({"message": "hi", "conversation_id": "abc"})));
    }

    #[tokio::test]
    async fn test_chat_validation_makes_no_call() {
        let transport = Arc::new(MockTransport::replying(200, "{}"));
        let err = gateway(transport.clone())
            .chat(ChatRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.client_message(), MESSAGE_REQUIRED);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_diagnostics_follow_config() {
        let failure = TransportError::Failure {
            message: "error sending request".into(),
            chain: vec!["error sending request".into(), "connection refused".into()],
        };
        let transport = Arc::new(MockTransport::failing(failure));
        let gw = ForwardingGateway::new(
            transport,
            GatewayConfig::new("k").with_diagnostics(DiagnosticPolicy::Legacy),
        );

        let body = gw.list_all_avatars().await.into_body();
        assert!(body.get("traceback").is_some());

        let body = gw.list_interactive_avatars().await.into_body();
        assert_eq!(body, json!({"error": "error sending request"}));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_independent() {
        let transport = Arc::new(MockTransport::sequence(vec![
            Ok(UpstreamResponse::new(200, r#"{"n":1}"#)),
            Ok(UpstreamResponse::new(200, r#"{"n":2}"#)),
        ]));
        let gw = gateway(transport.clone());

        assert_eq!(gw.list_voices().await.into_body(), json!({"n": 1}));
        assert_eq!(gw.list_voices().await.into_body(), json!({"n": 2}));
        assert_eq!(transport.call_count(), 2);
    }
}
