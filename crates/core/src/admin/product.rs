//! Admin products and the add/edit product form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId, ProductStatus};

/// A product managed from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub stock: u32,
    /// Number of customer inquiries received for this product.
    pub inquiries: u32,
    pub description: String,
    pub created_at: NaiveDate,
}

impl Product {
    /// Availability, derived from stock on every call.
    #[must_use]
    pub const fn status(&self) -> ProductStatus {
        ProductStatus::from_stock(self.stock)
    }

    pub(crate) fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.price = draft.price;
        self.stock = draft.stock;
        self.description = draft.description;
    }
}

/// Validation failures for [`ProductForm`], reported in this order.
///
/// The `Display` strings are shown to the admin as-is.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFormError {
    #[error("Product name is required")]
    MissingName,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please enter a valid price")]
    InvalidPrice,
    #[error("Please enter a valid stock quantity")]
    InvalidStock,
    #[error("Product description is required")]
    MissingDescription,
}

/// Raw add/edit product input, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

/// A validated [`ProductForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub stock: u32,
    pub description: String,
}

impl ProductForm {
    /// Pre-fill the form from an existing product (edit page).
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.as_str().to_string(),
            price: product.price.input_value(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }

    /// Validate the form, stopping at the first failing field.
    ///
    /// Name and description are trimmed. Price must parse to a positive
    /// amount and stock to a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductFormError`] in field order.
    pub fn validate(&self) -> Result<ProductDraft, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::MissingName);
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| ProductFormError::MissingCategory)?;

        let price =
            Price::parse_positive(&self.price).map_err(|_| ProductFormError::InvalidPrice)?;

        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| ProductFormError::InvalidStock)?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ProductFormError::MissingDescription);
        }

        Ok(ProductDraft {
            name: name.to_string(),
            category,
            price,
            stock,
            description: description.to_string(),
        })
    }
}
