//! Per-session admin workspace extractor.
//!
//! Every admin session edits its own copy of the records. The copy is
//! loaded from the session on each request (falling back to the seed data
//! for a new session) and written back by [`Workspace::save`].

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use purple_shop_core::admin::AdminStore;

use crate::error::AppError;
use crate::models::{Flash, session_keys};
use crate::state::AppState;

/// The current session's admin records plus flash helpers.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut workspace: Workspace) -> Result<Redirect> {
///     workspace.store_mut().toggle_inquiry_status(id)?;
///     workspace.save().await?;
///     Ok(Redirect::to("/inquiries"))
/// }
/// ```
pub struct Workspace {
    session: Session,
    store: AdminStore,
}

impl FromRequestParts<AppState> for Workspace {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let store = match session.get::<AdminStore>(session_keys::STORE).await? {
            Some(store) => store,
            None => state.seed().clone(),
        };

        Ok(Self { session, store })
    }
}

impl Workspace {
    #[must_use]
    pub const fn store(&self) -> &AdminStore {
        &self.store
    }

    /// Mutable access to the records. Changes are kept only after [`Self::save`].
    pub const fn store_mut(&mut self) -> &mut AdminStore {
        &mut self.store
    }

    /// Persist the records back into the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn save(&self) -> Result<(), AppError> {
        self.session
            .insert(session_keys::STORE, &self.store)
            .await?;
        Ok(())
    }

    /// Queue a flash message for the next rendered page.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_flash(&self, flash: Flash) -> Result<(), AppError> {
        self.session.insert(session_keys::FLASH, flash).await?;
        Ok(())
    }

    /// Remove and return the pending flash message, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn take_flash(&self) -> Result<Option<Flash>, AppError> {
        Ok(self.session.remove::<Flash>(session_keys::FLASH).await?)
    }

    /// Discard the session and everything edited in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot delete the session.
    pub async fn reset(self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
