//! Session-related types.
//!
//! Types stored in the visitor's session.

use serde::{Deserialize, Serialize};

/// Flash message tone, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    pub message: Option<String>,
}

impl Flash {
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            title: title.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            title: title.into(),
            message: None,
        }
    }

    /// Attach a second line of detail.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// CSS modifier class for the template.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for the pending flash message.
    pub const FLASH: &str = "flash";

    /// Key for the list of liked product IDs.
    pub const LIKED_PRODUCTS: &str = "liked_products";
}
