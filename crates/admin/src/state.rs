//! Application state shared across handlers.

use std::sync::Arc;

use purple_shop_core::admin::AdminStore;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Holds only immutable data. Each session works on its own copy of the
/// seed store (see [`crate::middleware::Workspace`]), so nothing here needs
/// a lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    seed: AdminStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, seed: AdminStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, seed }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The records every new session starts from.
    #[must_use]
    pub fn seed(&self) -> &AdminStore {
        &self.inner.seed
    }
}
