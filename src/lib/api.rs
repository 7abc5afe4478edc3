//! HTTP helpers for the backend's JSON API. Feature clients use these helpers to
//! avoid duplicating request setup and error-body handling. No timeout is
//! applied: a request that never settles leaves its caller pending.
//!
//! The helpers do not store secrets or tokens; request bodies may carry a
//! password and must never be logged.

use super::errors::{server_message, AppError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One backend call. The path is kept as raw segments so identifiers are
/// percent-encoded exactly once, when the URL is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|segment| (*segment).to_string()).collect(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Unencoded path, for logs and assertions.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Appends the encoded segments to `base_url`, keeping any path prefix it has.
    pub fn url(&self, base_url: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(base_url.trim())
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| AppError::Config("API base URL cannot carry a path.".to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and reports the raw status and body. Implementations
/// map only transport-level failures to errors; HTTP statuses are left to the
/// helpers below.
pub(crate) trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

/// Fetches and decodes JSON.
pub async fn get_json<T: DeserializeOwned>(
    transport: &impl Transport,
    segments: &[&str],
) -> Result<T, AppError> {
    let response = transport
        .send(ApiRequest::new(Method::Get, segments))
        .await?;
    handle_json_response(response)
}

/// Posts JSON and ignores the response body on success.
pub async fn post_json<B: Serialize>(
    transport: &impl Transport,
    segments: &[&str],
    body: &B,
) -> Result<(), AppError> {
    let request = ApiRequest::new(Method::Post, segments).with_body(encode(body)?);
    let response = transport.send(request).await?;
    handle_empty_response(response)
}

/// Posts JSON and decodes a JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    transport: &impl Transport,
    segments: &[&str],
    body: &B,
) -> Result<T, AppError> {
    let request = ApiRequest::new(Method::Post, segments).with_body(encode(body)?);
    let response = transport.send(request).await?;
    handle_json_response(response)
}

/// Puts JSON and ignores the response body on success.
pub async fn put_json<B: Serialize>(
    transport: &impl Transport,
    segments: &[&str],
    body: &B,
) -> Result<(), AppError> {
    let request = ApiRequest::new(Method::Put, segments).with_body(encode(body)?);
    let response = transport.send(request).await?;
    handle_empty_response(response)
}

/// Issues a DELETE and ignores the response body on success.
pub async fn delete(transport: &impl Transport, segments: &[&str]) -> Result<(), AppError> {
    let response = transport
        .send(ApiRequest::new(Method::Delete, segments))
        .await?;
    handle_empty_response(response)
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Turns non-2xx responses into `AppError::Http`, keeping the backend's message.
fn check_status(response: ApiResponse) -> Result<ApiResponse, AppError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(AppError::Http {
            status: response.status,
            message: server_message(&response.body),
        })
    }
}

fn handle_json_response<T: DeserializeOwned>(response: ApiResponse) -> Result<T, AppError> {
    let response = check_status(response)?;
    serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

fn handle_empty_response(response: ApiResponse) -> Result<(), AppError> {
    check_status(response).map(|_| ())
}

/// Browser transport backed by `fetch`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct FetchTransport {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl FetchTransport {
    pub fn from_config(config: &super::config::AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        use gloo_net::http::Request;

        let url = request.url(&self.base_url)?;
        tracing::debug!(method = request.method.as_str(), path = %request.path(), "sending request");
        let builder = match request.method {
            Method::Get => Request::get(url.as_str()),
            Method::Post => Request::post(url.as_str()),
            Method::Put => Request::put(url.as_str()),
            Method::Delete => Request::delete(url.as_str()),
        };
        let built = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

        let response = built
            .send()
            .await
            .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;

        Ok(ApiResponse { status, body })
    }
}

/// Host transport backed by `reqwest`, so the HTTP helpers can be exercised
/// against a real socket.
#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let url = request.url(&self.base_url)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;

        Ok(ApiResponse { status, body })
    }
}
