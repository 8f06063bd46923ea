//! HTTP Transport Implementation
//!
//! Performs outbound calls to the upstream providers using reqwest.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::error::Error as _;

use avatar_relay::{HttpMethod, OutboundCall, TransportError, UpstreamResponse, UpstreamTransport};

/// reqwest implementation of UpstreamTransport
///
/// The client keeps no idle connections, so every connection lives exactly
/// as long as the call that opened it. Redirects are not followed: a 3xx is
/// an upstream answer like any other, and the API key stays with the host it
/// was configured for.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(Policy::none())
            .user_agent(concat!("avatar-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn execute(&self, call: &OutboundCall) -> Result<UpstreamResponse, TransportError> {
        let mut request = match call.method {
            HttpMethod::Get => self.client.get(&call.target_url),
            HttpMethod::Post => self.client.post(&call.target_url),
        }
        .timeout(call.timeout);

        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        Ok(UpstreamResponse::new(status, body))
    }
}

/// Split reqwest errors into timeouts and everything else
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }

    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }

    TransportError::Failure {
        message: err.to_string(),
        chain,
    }
}
