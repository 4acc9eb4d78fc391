//! Blocking HTTP execution of `HttpRequest` values via ureq.
//!
//! ureq's default behavior turns 4xx/5xx statuses into `Err`; the agent built
//! here disables that so non-2xx responses come back as data and the parse
//! layer decides what they mean. Only I/O-level failures become
//! `ApiError::Transport`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Agent configured for the booking client: statuses are never transport
/// errors, everything else is ureq defaults (no retries, default timeouts).
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute one request synchronously and capture status plus body.
pub fn send(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let sent = match (&request.method, request.body.as_deref()) {
        (HttpMethod::Get, _) => with_headers(agent.get(&request.url), request).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&request.url), request).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&request.url), request).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&request.url), request).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            with_headers(agent.put(&request.url), request).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => with_headers(agent.put(&request.url), request).send_empty(),
    };

    let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
