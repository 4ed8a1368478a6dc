//! Data shared by every page rendered through `base.html`.

use crate::models::Flash;

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Products,
    Inquiries,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar, header and flash data for the base template.
#[derive(Debug, Clone)]
pub struct Layout {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub flash: Option<Flash>,
    pub storefront_url: String,
}

impl Layout {
    #[must_use]
    pub fn new(title: impl Into<String>, active: Section, storefront_url: &str) -> Self {
        let link = |href, label, section| NavLink {
            href,
            label,
            active: section == active,
        };

        Self {
            title: title.into(),
            nav: vec![
                link("/", "Overview", Section::Overview),
                link("/products", "Products", Section::Products),
                link("/inquiries", "Inquiries", Section::Inquiries),
            ],
            flash: None,
            storefront_url: storefront_url.to_string(),
        }
    }

    #[must_use]
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }
}
