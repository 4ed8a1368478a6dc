//! CLI subcommand implementations.

pub mod admin;
pub mod catalog;

use thiserror::Error;

use purple_shop_core::admin::ProductFormError;

/// Errors that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The product form did not validate.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductFormError),
}
