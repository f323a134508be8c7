//! Shared helpers for the wire-level tests.

#![allow(dead_code)]

use panelform::services::StaticCredential;
use panelform::{HistoryRouter, NoticeLevel, Notifier, PanelClient};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-123";

/// Client pointed at `<mock server>/api` with a fixed bearer token
pub fn client_for(server: &MockServer) -> PanelClient {
    PanelClient::new(
        &format!("{}/api", server.uri()),
        Arc::new(StaticCredential::new(TEST_TOKEN)),
    )
    .expect("mock server uri is a valid base url")
}

/// Notifier that keeps every message it is shown
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(NoticeLevel, String)> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((NoticeLevel::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((NoticeLevel::Error, message.to_string()));
    }
}

pub fn collaborators() -> (RecordingNotifier, Arc<HistoryRouter>) {
    (RecordingNotifier::default(), Arc::new(HistoryRouter::new()))
}
