//! Data shared by every page rendered through `base.html`.

use crate::models::Flash;

/// Top-level navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Products,
    About,
}

/// One header navigation link.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Header, footer and flash data for the base template.
#[derive(Debug, Clone)]
pub struct Layout {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub flash: Option<Flash>,
    /// Current value of the header search box.
    pub search: String,
    pub admin_url: String,
}

impl Layout {
    #[must_use]
    pub fn new(title: impl Into<String>, active: NavPage, admin_url: &str) -> Self {
        let link = |href, label, page| NavLink {
            href,
            label,
            active: page == active,
        };

        Self {
            title: title.into(),
            nav: vec![
                link("/", "Home", NavPage::Home),
                link("/products", "Products", NavPage::Products),
                link("/about", "About", NavPage::About),
            ],
            flash: None,
            search: String::new(),
            admin_url: admin_url.to_string(),
        }
    }

    #[must_use]
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_link() {
        let layout = Layout::new("About", NavPage::About, "http://localhost:3001");
        let active: Vec<_> = layout.nav.iter().filter(|l| l.active).map(|l| l.label).collect();
        assert_eq!(active, vec!["About"]);
    }
}
