//! OutboundCall - One request to an upstream provider
//!
//! Built fresh for every inbound request and consumed by an
//! [`UpstreamTransport`](crate::ports::UpstreamTransport).

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::value_objects::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request the relay sends to an upstream
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundCall {
    /// Inbound operation this call serves
    pub operation: Operation,
    pub method: HttpMethod,
    pub target_url: String,
    pub headers: BTreeMap<String, String>,
    /// JSON body, sent only for POSTs that carry one
    pub body: Option<serde_json::Value>,
    /// Upper bound for the whole exchange, body read included
    pub timeout: Duration,
}

impl OutboundCall {
    /// Create a call with no headers, no body and the operation's default timeout
    pub fn new(operation: Operation, method: HttpMethod, target_url: impl Into<String>) -> Self {
        let timeout = operation
            .upstream()
            .map(|upstream| upstream.default_timeout())
            .unwrap_or(Duration::from_secs(60));

        Self {
            operation,
            method,
            target_url: target_url.into(),
            headers: BTreeMap::new(),
            body: None,
            timeout,
        }
    }

    pub fn get(operation: Operation, target_url: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Get, target_url)
    }

    pub fn post(operation: Operation, target_url: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Post, target_url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
