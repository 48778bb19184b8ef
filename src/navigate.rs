//! Navigation boundary between the client core and whatever hosts the views.

use std::sync::Mutex;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

pub trait Navigator: Send + Sync {
    /// Full reload at `path`, dropping all in-app state.
    fn hard_redirect(&self, path: &str);

    /// In-app route change without a reload.
    fn redirect(&self, path: &str);
}

/// A navigation request observed by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Hard(String),
    Router(String),
}

/// Navigator for hosts without views: logs the request and stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn hard_redirect(&self, path: &str) {
        tracing::info!(path, "hard redirect requested");
    }

    fn redirect(&self, path: &str) {
        tracing::info!(path, "redirect requested");
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visits(&self) -> Vec<Navigation> {
        self.visits.lock().map(|visits| visits.clone()).unwrap_or_default()
    }

    fn push(&self, visit: Navigation) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(visit);
        }
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.push(Navigation::Hard(path.to_owned()));
    }

    fn redirect(&self, path: &str) {
        self.push(Navigation::Router(path.to_owned()));
    }
}
