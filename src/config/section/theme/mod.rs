//! `[theme]` section configuration.
//!
//! Navigation bar, sidebar and social links rendered by the default theme.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "User Guide"
//! collapsed = false
//! items = [{ text = "Getting Started", link = "/user-guide/getting-started/introduction" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/arttet/dotfiles"
//! ```

mod nav;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use sidebar::SidebarSection;
pub use social::SocialLink;

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Text of the entry prepended to a derived navigation bar.
const HOME_TEXT: &str = "Home";

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Top navigation bar, left to right.
    /// Derived from the sidebar when empty.
    #[config(hidden)]
    pub nav: Vec<NavItem>,

    /// Sidebar sections, top to bottom.
    #[config(hidden)]
    pub sidebar: Vec<SidebarSection>,

    /// Social links shown in the navigation bar.
    #[config(hidden)]
    pub social_links: Vec<SocialLink>,
}

impl ThemeSectionConfig {
    /// Validate every nav entry, sidebar section and social link.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav = Self::FIELDS.nav;
        let mut seen = FxHashSet::default();
        for (i, item) in self.nav.iter().enumerate() {
            let at = nav.index(i);
            item.validate(&at, diag);
            if !item.link.is_empty() && !seen.insert(item.link.as_str()) {
                diag.warn(
                    at.join("link"),
                    format!("'{}' already appears earlier in the navigation bar", item.link),
                );
            }
        }

        let sidebar = Self::FIELDS.sidebar;
        for (i, section) in self.sidebar.iter().enumerate() {
            section.validate(&sidebar.index(i), diag);
        }

        let social_links = Self::FIELDS.social_links;
        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&social_links.index(i), diag);
        }
    }

    /// Navigation bar derived from the sidebar: `Home` pointing at `/`,
    /// then one entry per section pointing at its first item.
    pub fn derived_nav(&self) -> Vec<NavItem> {
        std::iter::once(NavItem::new(HOME_TEXT, "/"))
            .chain(self.sidebar.iter().filter_map(|section| {
                section
                    .first_link()
                    .map(|link| NavItem::new(section.text.clone(), link))
            }))
            .collect()
    }

    /// Fill in the navigation bar if none was declared.
    pub fn ensure_nav(&mut self) {
        if self.nav.is_empty() {
            self.nav = self.derived_nav();
        }
    }
}
