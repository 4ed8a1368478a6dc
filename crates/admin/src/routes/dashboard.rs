//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use purple_shop_core::admin::DashboardStats;

use crate::{
    error::Result,
    filters,
    middleware::Workspace,
    models::{Layout, Section},
    state::AppState,
};

use super::{inquiries::InquiryView, products::ProductView, render};

/// Rows shown in each overview panel.
const PANEL_ROWS: usize = 5;

/// One headline number on the overview.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: &'static str,
    pub value: usize,
    pub href: &'static str,
}

fn stat_cards(stats: DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Products",
            value: stats.total_products,
            href: "/products",
        },
        StatCard {
            label: "Product Inquiries",
            value: stats.total_inquiries,
            href: "/inquiries",
        },
        StatCard {
            label: "Pending Inquiries",
            value: stats.pending_inquiries,
            href: "/inquiries?status=pending",
        },
        StatCard {
            label: "Active Products",
            value: stats.active_products,
            href: "/products?status=active",
        },
    ]
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub layout: Layout,
    pub stats: Vec<StatCard>,
    pub recent_inquiries: Vec<InquiryView>,
    pub top_products: Vec<ProductView>,
}

/// Dashboard page handler.
#[instrument(skip(state, workspace))]
pub async fn dashboard(
    State(state): State<AppState>,
    workspace: Workspace,
) -> Result<Html<String>> {
    let store = workspace.store();

    let template = DashboardTemplate {
        layout: Layout::new("Admin Dashboard", Section::Overview, &state.config().storefront_url)
            .with_flash(workspace.take_flash().await?),
        stats: stat_cards(store.stats()),
        recent_inquiries: store
            .recent_inquiries(PANEL_ROWS)
            .into_iter()
            .map(|inquiry| InquiryView::new(inquiry, store))
            .collect(),
        top_products: store
            .top_products_by_inquiries(PANEL_ROWS)
            .into_iter()
            .map(ProductView::from)
            .collect(),
    };

    Ok(render(&template))
}
