//! Customer inquiry route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use purple_shop_core::admin::{AdminError, AdminStore, Inquiry};
use purple_shop_core::{InquiryId, InquiryStatus};

use crate::{
    components::data_table::{DataTableConfig, inquiries_table_config},
    error::{AppError, Result, add_breadcrumb},
    filters,
    middleware::Workspace,
    models::{Flash, Layout, Section},
    state::AppState,
};

use super::{ConfirmTemplate, ListParams, parse_id, render};

/// Characters of the message shown in list rows.
const EXCERPT_CHARS: usize = 60;

/// Inquiry view for templates.
#[derive(Debug, Clone)]
pub struct InquiryView {
    pub id: i32,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub product_name: String,
    pub message: String,
    pub excerpt: String,
    pub date: String,
    pub status: &'static str,
    pub status_class: &'static str,
    /// Status the toggle button switches to.
    pub next_status: &'static str,
    pub toggle_label: &'static str,
}

impl InquiryView {
    #[must_use]
    pub fn new(inquiry: &Inquiry, store: &AdminStore) -> Self {
        let (status_class, toggle_label) = match inquiry.status {
            InquiryStatus::Pending => ("status status-yellow", "Mark Responded"),
            InquiryStatus::Responded => ("status status-green", "Mark Pending"),
        };

        Self {
            id: inquiry.id.as_i32(),
            customer_name: inquiry.customer_name.clone(),
            email: inquiry.email.to_string(),
            phone: inquiry.phone.clone(),
            product_name: store
                .product_name(inquiry.product_id)
                .unwrap_or("Unknown product")
                .to_string(),
            message: inquiry.message.clone(),
            excerpt: excerpt(&inquiry.message, EXCERPT_CHARS),
            date: inquiry.date.to_string(),
            status: inquiry.status.as_str(),
            status_class,
            next_status: inquiry.status.toggled().as_str(),
            toggle_label,
        }
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with "...".
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

// =============================================================================
// Inquiry List
// =============================================================================

/// Inquiries list page template.
#[derive(Template)]
#[template(path = "inquiries/index.html")]
pub struct InquiriesIndexTemplate {
    pub layout: Layout,
    pub table: DataTableConfig,
    pub inquiries: Vec<InquiryView>,
    pub total: usize,
}

/// Inquiries list page handler.
#[instrument(skip(state, workspace))]
pub async fn index(
    State(state): State<AppState>,
    workspace: Workspace,
    Query(params): Query<ListParams>,
) -> Result<Html<String>> {
    let search = params.search();
    let status = params.status.as_deref().and_then(|s| s.parse::<InquiryStatus>().ok());

    let store = workspace.store();
    let inquiries: Vec<InquiryView> = store
        .search_inquiries(search, status)
        .into_iter()
        .map(|inquiry| InquiryView::new(inquiry, store))
        .collect();

    let table = inquiries_table_config().with_values(
        search,
        &[("status", status.map_or("all", InquiryStatus::as_str))],
    );

    let template = InquiriesIndexTemplate {
        layout: Layout::new(
            "Customer Inquiries",
            Section::Inquiries,
            &state.config().storefront_url,
        )
        .with_flash(workspace.take_flash().await?),
        table,
        inquiries,
        total: store.inquiries().len(),
    };

    Ok(render(&template))
}

// =============================================================================
// Status
// =============================================================================

/// Status change form. Without `status` the current value is toggled.
#[derive(Debug, Default, Deserialize)]
pub struct StatusForm {
    pub status: Option<String>,
    /// Page to return to; only local paths are honored.
    pub return_to: Option<String>,
}

impl StatusForm {
    /// Browsers read `//host` and `/\host` as another origin, so after the
    /// leading slash neither `/` nor `\` may follow.
    fn return_path(&self) -> &str {
        match self.return_to.as_deref() {
            Some(path)
                if path
                    .strip_prefix('/')
                    .is_some_and(|rest| !rest.starts_with(['/', '\\'])) =>
            {
                path
            }
            _ => "/inquiries",
        }
    }
}

/// Set or toggle an inquiry's status.
///
/// # Errors
///
/// Returns 400 for an unrecognized status and 404 for an unknown inquiry.
#[instrument(skip(workspace, form))]
pub async fn update_status(
    mut workspace: Workspace,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect> {
    let id: InquiryId = parse_id(&id, "inquiry")?;

    let requested = match form.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<InquiryStatus>().map_err(AppError::BadRequest)?),
    };

    let store = workspace.store_mut();
    let status = match requested {
        Some(status) => store.set_inquiry_status(id, status)?.status,
        None => store.toggle_inquiry_status(id)?.status,
    };
    workspace.save().await?;

    tracing::info!(inquiry_id = %id, status = %status, "Inquiry status changed");
    let inquiry_id = id.to_string();
    add_breadcrumb(
        "inquiries",
        "Changed inquiry status",
        Some(&[("inquiry_id", inquiry_id.as_str()), ("status", status.as_str())]),
    );
    workspace
        .set_flash(Flash::success(format!("Inquiry marked as {status}")))
        .await?;

    Ok(Redirect::to(form.return_path()))
}

// =============================================================================
// Delete
// =============================================================================

/// Delete confirmation page.
#[instrument(skip(state, workspace))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    workspace: Workspace,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let id: InquiryId = parse_id(&id, "inquiry")?;
    let inquiry = workspace
        .store()
        .inquiry(id)
        .ok_or(AdminError::InquiryNotFound(id))?;

    Ok(render(&ConfirmTemplate {
        layout: Layout::new("Delete Inquiry", Section::Inquiries, &state.config().storefront_url),
        heading: "Delete Inquiry",
        message: format!(
            "Are you sure you want to delete the inquiry from {}?",
            inquiry.customer_name
        ),
        action: format!("/inquiries/{id}/delete"),
        cancel_href: "/inquiries",
    }))
}

/// Delete an inquiry.
#[instrument(skip(workspace))]
pub async fn delete(mut workspace: Workspace, Path(id): Path<String>) -> Result<Redirect> {
    let id: InquiryId = parse_id(&id, "inquiry")?;
    workspace.store_mut().delete_inquiry(id)?;
    workspace.save().await?;

    tracing::info!(inquiry_id = %id, "Inquiry deleted");
    let inquiry_id = id.to_string();
    add_breadcrumb(
        "inquiries",
        "Deleted inquiry",
        Some(&[("inquiry_id", inquiry_id.as_str())]),
    );
    workspace
        .set_flash(Flash::success("Inquiry deleted successfully"))
        .await?;
    Ok(Redirect::to("/inquiries"))
}
