//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{Layout, NavPage};
use crate::state::AppState;

/// A titled blurb (value, company value).
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

/// A team member card.
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

impl TeamMember {
    /// Initials shown in place of a portrait.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

const REASONS: [Blurb; 6] = [
    Blurb {
        title: "Trusted Quality",
        description: "We carefully curate every product to ensure the highest quality standards for our customers.",
    },
    Blurb {
        title: "Fast Delivery",
        description: "Quick and reliable shipping to get your products to you as soon as possible.",
    },
    Blurb {
        title: "Customer First",
        description: "Your satisfaction is our priority. We're here to help with any questions or concerns.",
    },
    Blurb {
        title: "Expert Team",
        description: "Our knowledgeable team is always ready to provide product recommendations and support.",
    },
    Blurb {
        title: "Best Prices",
        description: "Competitive pricing without compromising on quality. Great value for your money.",
    },
    Blurb {
        title: "Global Reach",
        description: "Serving customers worldwide with a commitment to excellence and reliability.",
    },
];

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Sarah Johnson",
        role: "Founder & CEO",
        description: "Passionate about bringing quality products to customers worldwide.",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Head of Operations",
        description: "Ensures smooth operations and exceptional customer service.",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Product Manager",
        description: "Curates our product selection to meet customer needs and trends.",
    },
];

const VALUES: [Blurb; 3] = [
    Blurb {
        title: "Integrity",
        description: "We conduct business with honesty, transparency, and ethical practices in everything we do.",
    },
    Blurb {
        title: "Innovation",
        description: "We continuously improve our platform and services to provide the best shopping experience.",
    },
    Blurb {
        title: "Excellence",
        description: "We strive for excellence in every aspect of our business, from products to customer service.",
    },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub reasons: &'static [Blurb],
    pub team: &'static [TeamMember],
    pub values: &'static [Blurb],
}

/// Display the About page.
#[instrument(skip(state, visitor))]
pub async fn about(State(state): State<AppState>, visitor: Visitor) -> Result<impl IntoResponse> {
    let layout = Layout::new("About PurpleShop", NavPage::About, &state.config().admin_url)
        .with_flash(visitor.take_flash().await?);

    Ok(AboutTemplate {
        layout,
        reasons: &REASONS,
        team: &TEAM,
        values: &VALUES,
    })
}
