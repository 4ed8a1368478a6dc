//! Admin record store: products and customer inquiries.
//!
//! [`AdminStore`] owns both lists and is the only way to change them. Every
//! operation validates before it mutates, so a rejected call leaves the
//! store exactly as it was.
//!
//! Two invariants hold for every store reachable through this API:
//! - a product's status is derived from its stock and is never stored;
//! - every inquiry references a product that exists (deleting a product
//!   deletes its inquiries with it).

pub mod inquiry;
pub mod product;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{InquiryId, InquiryStatus, ProductId, ProductStatus};

pub use inquiry::{Inquiry, InquiryDraft, InquiryForm, InquiryFormError};
pub use product::{Product, ProductDraft, ProductForm, ProductFormError};

/// Errors returned by [`AdminStore`] operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ProductFormError),

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("inquiry {0} not found")]
    InquiryNotFound(InquiryId),
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_inquiries: usize,
    pub pending_inquiries: usize,
    pub active_products: usize,
}

/// Result of deleting a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedProduct {
    pub product: Product,
    /// How many inquiries were removed along with it.
    pub removed_inquiries: usize,
}

/// Ordered product and inquiry lists with create/update/delete operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStore {
    products: Vec<Product>,
    inquiries: Vec<Inquiry>,
}

impl AdminStore {
    /// Build a store from existing records.
    ///
    /// Inquiries referencing a product that is not in `products` are dropped.
    #[must_use]
    pub fn new(products: Vec<Product>, inquiries: Vec<Inquiry>) -> Self {
        let inquiries = inquiries
            .into_iter()
            .filter(|inquiry| products.iter().any(|p| p.id == inquiry.product_id))
            .collect();

        Self {
            products,
            inquiries,
        }
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All inquiries in insertion order.
    #[must_use]
    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn inquiry(&self, id: InquiryId) -> Option<&Inquiry> {
        self.inquiries.iter().find(|i| i.id == id)
    }

    /// Name of the product an inquiry refers to.
    #[must_use]
    pub fn product_name(&self, id: ProductId) -> Option<&str> {
        self.product(id).map(|p| p.name.as_str())
    }

    fn next_product_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .map_or(ProductId::new(1), |max| ProductId::new(max + 1))
    }

    fn next_inquiry_id(&self) -> InquiryId {
        self.inquiries
            .iter()
            .map(|i| i.id.as_i32())
            .max()
            .map_or(InquiryId::new(1), |max| InquiryId::new(max + 1))
    }

    /// Validate `form` and append a new product created on `today`.
    ///
    /// The new ID is one more than the current maximum (1 for an empty
    /// store) and the inquiry count starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] if the form is invalid.
    pub fn create_product(
        &mut self,
        form: &ProductForm,
        today: NaiveDate,
    ) -> Result<&Product, AdminError> {
        let draft = form.validate()?;
        let id = self.next_product_id();

        self.products.push(Product {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            inquiries: 0,
            description: draft.description,
            created_at: today,
        });

        self.product(id).ok_or(AdminError::ProductNotFound(id))
    }

    /// Validate `form` and replace the editable fields of product `id`.
    ///
    /// ID, inquiry count and creation date are preserved.
    ///
    /// # Errors
    ///
    /// [`AdminError::ProductNotFound`] for an unknown ID, otherwise
    /// [`AdminError::Validation`] if the form is invalid.
    pub fn update_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<&Product, AdminError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(AdminError::ProductNotFound(id))?;
        let draft = form.validate()?;

        let product = self
            .products
            .get_mut(index)
            .ok_or(AdminError::ProductNotFound(id))?;
        product.apply(draft);
        Ok(product)
    }

    /// Remove product `id` together with every inquiry about it.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] for an unknown ID.
    pub fn delete_product(&mut self, id: ProductId) -> Result<DeletedProduct, AdminError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(AdminError::ProductNotFound(id))?;
        let product = self.products.remove(index);

        let before = self.inquiries.len();
        self.inquiries.retain(|inquiry| inquiry.product_id != id);

        Ok(DeletedProduct {
            product,
            removed_inquiries: before - self.inquiries.len(),
        })
    }

    /// Record a new pending inquiry about `product_id`, dated `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] if the product does not exist.
    pub fn insert_inquiry(
        &mut self,
        product_id: ProductId,
        draft: InquiryDraft,
        date: NaiveDate,
    ) -> Result<&Inquiry, AdminError> {
        if self.product(product_id).is_none() {
            return Err(AdminError::ProductNotFound(product_id));
        }

        let id = self.next_inquiry_id();
        self.inquiries.push(Inquiry {
            id,
            product_id,
            customer_name: draft.customer_name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            date,
            status: InquiryStatus::Pending,
        });

        self.inquiry(id).ok_or(AdminError::InquiryNotFound(id))
    }

    /// Set the status of inquiry `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InquiryNotFound`] for an unknown ID.
    pub fn set_inquiry_status(
        &mut self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> Result<&Inquiry, AdminError> {
        let inquiry = self
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(AdminError::InquiryNotFound(id))?;
        inquiry.status = status;
        Ok(inquiry)
    }

    /// Flip inquiry `id` between pending and responded.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InquiryNotFound`] for an unknown ID.
    pub fn toggle_inquiry_status(&mut self, id: InquiryId) -> Result<&Inquiry, AdminError> {
        let current = self
            .inquiry(id)
            .ok_or(AdminError::InquiryNotFound(id))?
            .status;
        self.set_inquiry_status(id, current.toggled())
    }

    /// Remove inquiry `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InquiryNotFound`] for an unknown ID.
    pub fn delete_inquiry(&mut self, id: InquiryId) -> Result<Inquiry, AdminError> {
        let index = self
            .inquiries
            .iter()
            .position(|i| i.id == id)
            .ok_or(AdminError::InquiryNotFound(id))?;
        Ok(self.inquiries.remove(index))
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_products: self.products.len(),
            total_inquiries: self.inquiries.len(),
            pending_inquiries: self
                .inquiries
                .iter()
                .filter(|i| i.status == InquiryStatus::Pending)
                .count(),
            active_products: self
                .products
                .iter()
                .filter(|p| p.status() == ProductStatus::Active)
                .count(),
        }
    }

    /// The first `count` inquiries in store order.
    #[must_use]
    pub fn recent_inquiries(&self, count: usize) -> Vec<&Inquiry> {
        self.inquiries.iter().take(count).collect()
    }

    /// Up to `count` products with the most inquiries. Ties keep store order
    /// and the store itself is not reordered.
    #[must_use]
    pub fn top_products_by_inquiries(&self, count: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| b.inquiries.cmp(&a.inquiries));
        ranked.truncate(count);
        ranked
    }

    /// Products whose name contains `term` (case-insensitive), optionally
    /// restricted to one status.
    #[must_use]
    pub fn search_products(&self, term: &str, status: Option<ProductStatus>) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter(|p| status.is_none_or(|wanted| p.status() == wanted))
            .collect()
    }

    /// Inquiries whose customer name, product name or email contains `term`
    /// (case-insensitive), optionally restricted to one status.
    #[must_use]
    pub fn search_inquiries(&self, term: &str, status: Option<InquiryStatus>) -> Vec<&Inquiry> {
        let needle = term.to_lowercase();
        self.inquiries
            .iter()
            .filter(|i| {
                let product_name = self.product_name(i.product_id).unwrap_or_default();
                i.customer_name.to_lowercase().contains(&needle)
                    || product_name.to_lowercase().contains(&needle)
                    || i.email.as_str().to_lowercase().contains(&needle)
            })
            .filter(|i| status.is_none_or(|wanted| i.status == wanted))
            .collect()
    }
}
