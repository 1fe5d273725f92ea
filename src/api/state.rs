//! Application state for the Demurrage Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Tariff;
use crate::models::DayPolicy;

/// Default directory for the index page and static assets.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Shared application state.
///
/// The tariff is immutable after startup and shared by every request
/// without locking.
#[derive(Clone)]
pub struct AppState {
    tariff: Arc<Tariff>,
    day_policy: DayPolicy,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates application state for the given tariff.
    pub fn new(tariff: Tariff) -> Self {
        Self {
            tariff: Arc::new(tariff),
            day_policy: DayPolicy::default(),
            static_dir: Arc::new(PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }

    /// Sets which day counts requests may carry.
    pub fn with_day_policy(mut self, day_policy: DayPolicy) -> Self {
        self.day_policy = day_policy;
        self
    }

    /// Sets the directory holding `index.html` and static assets.
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Arc::new(static_dir.into());
        self
    }

    /// Returns the tariff.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Returns the day count policy.
    pub fn day_policy(&self) -> DayPolicy {
        self.day_policy
    }

    /// Returns the static file directory.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Tariff::standard().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_builder_settings() {
        let state = AppState::default()
            .with_day_policy(DayPolicy::RequirePositive)
            .with_static_dir("public");

        assert_eq!(state.day_policy(), DayPolicy::RequirePositive);
        assert_eq!(state.static_dir(), Path::new("public"));
        assert_eq!(state.tariff(), Tariff::standard());
    }
}
