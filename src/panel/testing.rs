//! # Test Doubles
//!
//! In-memory implementations of the service traits for exercising the
//! workflows without a network or a UI.

use crate::panel::events::NoticeLevel;
use crate::panel::services::{Notifier, RemoteClient, RemoteError};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A request seen by `MockRemoteClient`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted reply for the next call
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    Json(Value),
    Status(u16, String),
    /// Never resolves, like a server that stopped answering
    Pending,
}

#[derive(Debug, Default)]
struct MockState {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<MockResponse>,
}

/// Remote client that records calls and replays scripted responses
///
/// With nothing scripted, every call succeeds with `{"code": 200}`.
#[derive(Debug, Clone, Default)]
pub struct MockRemoteClient {
    state: Arc<Mutex<MockState>>,
}

impl MockRemoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: MockResponse) {
        self.lock().responses.push_back(response);
    }

    pub fn push_json(&self, value: Value) {
        self.push_response(MockResponse::Json(value));
    }

    pub fn push_status(&self, status: u16, body: impl Into<String>) {
        self.push_response(MockResponse::Status(status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn respond(&self, request: RecordedRequest) -> Result<Value, RemoteError> {
        let next = {
            let mut state = self.lock();
            state.requests.push(request);
            state.responses.pop_front()
        };
        match next {
            None => Ok(json!({ "code": 200 })),
            Some(MockResponse::Json(value)) => Ok(value),
            Some(MockResponse::Status(code, body)) => Err(RemoteError::Status {
                status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            }),
            Some(MockResponse::Pending) => std::future::pending().await,
        }
    }
}

impl RemoteClient for MockRemoteClient {
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, RemoteError>
    where
        B: Serialize + Sync,
    {
        let body = serde_json::to_value(body)?;
        self.respond(RecordedRequest {
            method: Method::POST,
            path: path.to_string(),
            body: Some(body),
        })
        .await
    }

    async fn get_json(&self, path: &str) -> Result<Value, RemoteError> {
        self.respond(RecordedRequest {
            method: Method::GET,
            path: path.to_string(),
            body: None,
        })
        .await
    }
}

/// Notifier that keeps every message
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<(NoticeLevel, String)> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(NoticeLevel, String)>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.lock().push((NoticeLevel::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lock().push((NoticeLevel::Error, message.to_string()));
    }
}
