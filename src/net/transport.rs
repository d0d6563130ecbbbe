//! HTTP transport seam between the typed API client and the browser.
//!
//! Client-side (csr): real requests via `gloo-net`, cookies included, aborted
//! after the configured timeout.
//! Native builds: `BrowserTransport` answers `AppError::Unavailable`, which
//! keeps the crate buildable and testable off the browser.

#![allow(clippy::unused_async)]

use std::future::Future;

use super::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A fully resolved request: absolute-or-rooted URL plus optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Only network-level failures are errors here; HTTP error statuses come back
/// as responses and are classified by `ApiClient`.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, AppError>>;
}

/// `fetch`-backed transport used by the running application.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    timeout_ms: u32,
}

impl BrowserTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(request, self.timeout_ms).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout_ms);
            Err(AppError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_with_timeout(request: ApiRequest, timeout_ms: u32) -> Result<ApiResponse, AppError> {
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("failed to initialize request timeout".to_owned()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
    }
    .credentials(RequestCredentials::Include)
    .abort_signal(Some(&signal));

    let built = match request.body {
        Some(body) => builder.header("Content-Type", "application/json").body(body),
        None => builder.build(),
    }
    .map_err(|err| AppError::Serialization(format!("failed to build request: {err}")))?;

    let response = built.send().await.map_err(map_request_error)?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Parse(format!("failed to read response: {err}")))?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout
    } else {
        AppError::Network(message)
    }
}
