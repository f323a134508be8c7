//! # Detail Controller
//!
//! One-shot read of a directory record for the detail/print view. A missing
//! identifier short-circuits to a placeholder without touching the network.

use crate::panel::models::DirectoryRecord;
use crate::panel::services::{segment_path, Notifier, RemoteClient, RemoteError};

/// Endpoint prefix; the identifier is appended as the last path segment
pub const FETCH_BY_ID_ENDPOINT: &str = "panel-fetch-by-id";

/// Shown to the user when the record cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user data";

/// What the detail view currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    NotLoaded,
    MissingId,
    Loaded(Box<DirectoryRecord>),
    Failed(String),
}

pub struct DetailController<C, N> {
    client: C,
    notifier: N,
    state: DetailState,
}

impl<C, N> DetailController<C, N>
where
    C: RemoteClient,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: DetailState::NotLoaded,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Fetch the record for `id` once; blank ids count as missing
    pub async fn load(&mut self, id: Option<&str>) -> &DetailState {
        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                tracing::debug!("No identifier given, skipping fetch");
                self.state = DetailState::MissingId;
                return &self.state;
            }
        };

        self.state = match self.fetch(id).await {
            Ok(record) => {
                tracing::info!("Loaded directory record {}", id);
                DetailState::Loaded(Box::new(record))
            }
            Err(e) => {
                let message = e.chain_message();
                tracing::error!("Failed to fetch user {}: {}", id, message);
                self.notifier.error(LOAD_FAILED_MESSAGE);
                DetailState::Failed(message)
            }
        };
        &self.state
    }

    async fn fetch(&self, id: &str) -> Result<DirectoryRecord, RemoteError> {
        let path = segment_path(FETCH_BY_ID_ENDPOINT, id)?;
        let response = self.client.get_json(&path).await?;
        let user = response
            .get("user")
            .filter(|user| !user.is_null())
            .cloned()
            .ok_or_else(|| RemoteError::MissingField("User data is missing".to_string()))?;
        Ok(serde_json::from_value(user)?)
    }
}
