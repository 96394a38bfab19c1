//! Application state for the vacation planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ConfigLoader;
use crate::error::PlannerResult;
use crate::session::PlannerSession;

/// Shared application state.
///
/// Holds the loaded configuration and the single planner session. Handlers
/// take the lock for one synchronous session operation at a time.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    session: Arc<RwLock<PlannerSession>>,
}

impl AppState {
    /// Creates application state with a session for the configured default year.
    pub fn new(config: ConfigLoader) -> PlannerResult<Self> {
        let session = PlannerSession::new(&config, config.settings().default_year)?;
        Ok(Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Locks the session for reading.
    pub fn session(&self) -> RwLockReadGuard<'_, PlannerSession> {
        // Session operations never leave it half-updated, so a poisoned lock
        // still guards consistent state.
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the session for writing.
    pub fn session_mut(&self) -> RwLockWriteGuard<'_, PlannerSession> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the session with a fresh one.
    pub fn reset_session(&self, session: PlannerSession) {
        *self.session_mut() = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_session() {
        let config = ConfigLoader::load("./config/ro").expect("Failed to load config");
        let state = AppState::new(config).unwrap();
        let other = state.clone();

        state.session_mut().set_total_pto(30).unwrap();
        assert_eq!(other.session().total_pto(), 30);
    }
}
