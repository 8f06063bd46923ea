//! In-memory transport for route and gateway tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use avatar_relay::{OutboundCall, TransportError, UpstreamResponse, UpstreamTransport};

type Outcome = Result<UpstreamResponse, TransportError>;

/// Records every call and answers from a script.
///
/// Once a scripted sequence runs out, the last outcome is repeated.
pub struct MockTransport {
    script: Mutex<VecDeque<Outcome>>,
    fallback: Outcome,
    calls: Mutex<Vec<OutboundCall>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::sequence(vec![Ok(UpstreamResponse::new(status, body))])
    }

    pub fn failing(err: TransportError) -> Self {
        Self::sequence(vec![Err(err)])
    }

    pub fn sequence(outcomes: Vec<Outcome>) -> Self {
        let fallback = outcomes
            .last()
            .cloned()
            .unwrap_or_else(|| Err(TransportError::failure("no scripted response")));

        Self {
            script: Mutex::new(outcomes.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<OutboundCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The only recorded call; panics if there were zero or several
    pub fn single_call(&self) -> OutboundCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one outbound call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl UpstreamTransport for MockTransport {
    async fn execute(&self, call: &OutboundCall) -> Result<UpstreamResponse, TransportError> {
        self.calls.lock().unwrap().push(call.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Router wired to `transport` with test endpoints and default timeouts
pub fn app_with(transport: std::sync::Arc<MockTransport>) -> axum::Router {
    let config = crate::config::GatewayConfig::new("test-key")
        .with_avatar_base_url("http://avatar.test")
        .with_chat_url("http://rag.test/chat/");
    let gateway = crate::application::ForwardingGateway::new(transport, config);
    crate::build_router(crate::AppState::new(gateway))
}

/// Send one request through the router and decode the JSON response
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
