//! Customer inquiries and the storefront inquiry form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError, InquiryId, InquiryStatus, ProductId};

/// A customer question about a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub product_id: ProductId,
    pub customer_name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
    pub date: NaiveDate,
    pub status: InquiryStatus,
}

/// Validation failures for [`InquiryForm`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InquiryFormError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail(#[source] EmailError),
}

/// Raw inquiry input from the product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A validated [`InquiryForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryDraft {
    pub customer_name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
}

impl InquiryForm {
    /// Validate the form. Every field is required; the email must also parse.
    ///
    /// # Errors
    ///
    /// [`InquiryFormError::MissingFields`] if any trimmed field is empty,
    /// otherwise [`InquiryFormError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<InquiryDraft, InquiryFormError> {
        let fields = [&self.name, &self.email, &self.phone, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(InquiryFormError::MissingFields);
        }

        let email = Email::parse(&self.email).map_err(InquiryFormError::InvalidEmail)?;

        Ok(InquiryDraft {
            customer_name: self.name.trim().to_string(),
            email,
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 234 567 8901".to_string(),
            message: "Is it waterproof?".to_string(),
        }
    }

    #[test]
    fn test_valid_inquiry() {
        let draft = form().validate().unwrap();
        assert_eq!(draft.customer_name, "Jane Smith");
        assert_eq!(draft.email.as_str(), "jane@example.com");
    }

    #[test]
    fn test_every_field_required() {
        let blank_phone = InquiryForm {
            phone: "  ".to_string(),
            ..form()
        };
        assert_eq!(blank_phone.validate(), Err(InquiryFormError::MissingFields));
        assert_eq!(
            InquiryFormError::MissingFields.to_string(),
            "All fields are required"
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        let bad = InquiryForm {
            email: "jane.example.com".to_string(),
            ..form()
        };
        assert!(matches!(
            bad.validate(),
            Err(InquiryFormError::InvalidEmail(EmailError::AtSymbolCount))
        ));
    }
}
