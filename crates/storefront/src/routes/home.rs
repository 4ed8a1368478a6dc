//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use purple_shop_core::Category;

use crate::error::Result;
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{Layout, NavPage};
use crate::routes::products::{CategoryLink, ProductCardView};
use crate::state::AppState;

/// Number of catalog products shown under "Featured Products".
const FEATURED_COUNT: usize = 6;

/// A selling point shown below the hero.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Fast Delivery",
        description: "Quick and reliable shipping",
    },
    Feature {
        icon: "🛡",
        title: "Secure Shopping",
        description: "Your data is protected",
    },
    Feature {
        icon: "🚚",
        title: "Free Returns",
        description: "30-day return policy",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub features: &'static [Feature],
    pub categories: Vec<CategoryLink>,
    pub products: Vec<ProductCardView>,
}

/// Display the home page.
#[instrument(skip(state, visitor))]
pub async fn home(State(state): State<AppState>, visitor: Visitor) -> Result<impl IntoResponse> {
    let layout = Layout::new("PurpleShop", NavPage::Home, &state.config().admin_url)
        .with_flash(visitor.take_flash().await?);

    let products = state
        .catalog()
        .featured(FEATURED_COUNT)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    Ok(HomeTemplate {
        layout,
        features: &FEATURES,
        categories: Category::ALL.into_iter().map(CategoryLink::from).collect(),
        products,
    })
}
