//! Per-visitor session state extractor.
//!
//! Wraps the tower-sessions [`Session`] with typed accessors for the flash
//! message and the liked-products list.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use purple_shop_core::ProductId;

use crate::error::AppError;
use crate::models::{Flash, session_keys};

/// The current visitor's session.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(visitor: Visitor) -> Result<impl IntoResponse> {
///     let flash = visitor.take_flash().await?;
///     // ...
/// }
/// ```
#[derive(Clone)]
pub struct Visitor {
    session: Session,
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        Ok(Self { session })
    }
}

impl Visitor {
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

    /// Products this visitor has liked.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn liked_products(&self) -> Result<Vec<ProductId>, AppError> {
        Ok(self
            .session
            .get::<Vec<ProductId>>(session_keys::LIKED_PRODUCTS)
            .await?
            .unwrap_or_default())
    }

    /// Whether this visitor has liked `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn likes(&self, id: ProductId) -> Result<bool, AppError> {
        Ok(self.liked_products().await?.contains(&id))
    }

    /// Flip the liked flag for `id`, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or written.
    pub async fn toggle_like(&self, id: ProductId) -> Result<bool, AppError> {
        let mut liked = self.liked_products().await?;
        let now_liked = if let Some(index) = liked.iter().position(|p| *p == id) {
            liked.remove(index);
            false
        } else {
            liked.push(id);
            true
        };

        self.session
            .insert(session_keys::LIKED_PRODUCTS, liked)
            .await?;
        Ok(now_liked)
    }
}
