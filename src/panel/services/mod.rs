//! # Services Layer
//!
//! External collaborators of the form workflows, each behind a small trait:
//! the remote API, the credential source, notifications and navigation.

pub mod credentials;
pub mod http;
pub mod notifier;
pub mod router;

pub use credentials::{
    ChainedCredential, CredentialProvider, EnvCredential, StaticCredential, TOKEN_ENV_VAR,
};
pub use http::{segment_path, PanelClient, RemoteClient, RemoteError};
pub use notifier::{ConsoleNotifier, Notifier};
pub use router::{HistoryRouter, Router};
