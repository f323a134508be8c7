//! # HTTP Service
//!
//! Remote client capability used by the controllers, plus the reqwest-backed
//! implementation that talks to the panel API.

use crate::panel::services::credentials::CredentialProvider;
use reqwest::{header, Client, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Failures of a remote call
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    MissingField(String),
}

impl RemoteError {
    /// Message with the whole cause chain, for logs
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(&format!("\n  Caused by: {cause}"));
            source = cause.source();
        }
        message
    }
}

/// HTTP request/response capability consumed by the workflow controllers
pub trait RemoteClient: Send + Sync {
    /// POST a JSON body to `path` (relative to the API base)
    fn post_json<B>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<Value, RemoteError>> + Send
    where
        B: Serialize + Sync;

    /// GET `path` (relative to the API base) and decode the JSON body
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, RemoteError>> + Send;
}

/// reqwest-backed client for the panel API
#[derive(Clone)]
pub struct PanelClient {
    http: Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl PanelClient {
    pub fn new(
        base_url: &str,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, RemoteError> {
        tracing::debug!("Creating PanelClient for '{}'", base_url);
        let base_url = Url::parse(base_url).map_err(|e| RemoteError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> Result<Url, RemoteError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| RemoteError::InvalidUrl {
            reason: e.to_string(),
            url: joined,
        })
    }

    fn authorization(&self) -> String {
        let token = self.credentials.bearer_token().unwrap_or_else(|| {
            tracing::warn!("No API token available, sending empty bearer credential");
            String::new()
        });
        format!("Bearer {token}")
    }

    /// Send a request and return the body of a 2xx response as text
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<String, RemoteError> {
        let url = self.endpoint_url(path)?;
        let start_time = std::time::Instant::now();
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(header::AUTHORIZATION, self.authorization())
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;
        tracing::debug!(
            "{} {} -> {} in {}ms",
            method,
            url,
            status.as_u16(),
            duration_ms
        );

        if !status.is_success() {
            return Err(RemoteError::Status { status, body: text });
        }
        Ok(text)
    }
}

/// Join `prefix` and one path segment, percent-encoding the segment so that
/// `/`, `?` and `#` inside it cannot change the request target
pub fn segment_path(prefix: &str, segment: &str) -> Result<String, RemoteError> {
    let invalid = |reason: &str| RemoteError::InvalidUrl {
        url: format!("{prefix}/{segment}"),
        reason: reason.to_string(),
    };
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(invalid("not a valid path segment"));
    }

    let mut url = Url::parse("http://localhost/").map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("base cannot hold path segments"))?
        .clear()
        .extend(prefix.split('/').filter(|part| !part.is_empty()))
        .push(segment);
    Ok(url.path().trim_start_matches('/').to_string())
}

fn decode_body(text: &str) -> Result<Value, RemoteError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

impl RemoteClient for PanelClient {
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, RemoteError>
    where
        B: Serialize + Sync,
    {
        let body = serde_json::to_value(body)?;
        let text = self.send(Method::POST, path, Some(body)).await?;
        // Non-JSON 2xx bodies are kept as text
        Ok(decode_body(&text).unwrap_or_else(|_| {
            tracing::debug!("POST {} answered with a non-JSON body", path);
            Value::String(text)
        }))
    }

    async fn get_json(&self, path: &str) -> Result<Value, RemoteError> {
        let text = self.send(Method::GET, path, None).await?;
        decode_body(&text)
    }
}
