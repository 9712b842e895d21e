//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `DataClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; a `Transport` is responsible for executing
//! the actual I/O. Keeping the request shape as data lets the wire protocol
//! be tested with vectors and lets tests swap the transport out entirely.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP method for a request. The data service is only ever read from or
/// appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL including any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one `HttpRequest`. Non-2xx statuses are returned as data; only
/// failures that leave no response behind are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a blocking `ureq` agent.
///
/// Each request runs on tokio's blocking pool so the caller's event loop is
/// never stalled.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (request.method, request.body) {
        (HttpMethod::Get, _) => {
            let mut builder = agent.get(&request.path);
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            builder.call()
        }
        (HttpMethod::Post, body) => {
            let mut builder = agent.post(&request.path);
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
