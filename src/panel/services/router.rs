//! # Router
//!
//! Imperative page navigation. Front ends decide what a route means; the
//! workflow only asks to go there.

use std::sync::{Mutex, PoisonError};

pub trait Router: Send + Sync {
    fn navigate(&self, path: &str);
}

impl<T: Router + ?Sized> Router for std::sync::Arc<T> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// Keeps the visited routes in memory
#[derive(Debug, Default)]
pub struct HistoryRouter {
    history: Mutex<Vec<String>>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the router currently points at
    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Router for HistoryRouter {
    fn navigate(&self, path: &str) {
        tracing::info!("Navigating to {}", path);
        self.lock().push(path.to_string());
    }
}
