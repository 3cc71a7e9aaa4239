//! `[[theme.sidebar]]` sections.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "User Guide"
//! collapsed = false
//! items = [
//!     { text = "Getting Started", link = "/user-guide/getting-started/introduction" },
//! ]
//! ```

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A named, collapsible group of links in the side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section title.
    pub text: String,

    /// Start collapsed.
    #[serde(default)]
    pub collapsed: bool,

    /// Entries, top to bottom.
    pub items: Vec<NavItem>,
}

impl SidebarSection {
    /// Validate a section located at `at` (e.g. `theme.sidebar[0]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(at.join("text"), "section title must not be empty");
        }

        let items = at.join("items");
        if self.items.is_empty() {
            diag.error_with_hint(
                items.clone(),
                "sidebar section must list at least one item",
                "add an entry or remove the section",
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }
    }

    /// Link of the first entry, where the section starts reading.
    pub fn first_link(&self) -> Option<&str> {
        self.items.first().map(|item| item.link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(items: Vec<NavItem>) -> SidebarSection {
        SidebarSection {
            text: "User Guide".into(),
            collapsed: false,
            items,
        }
    }

    fn validate(section: &SidebarSection) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        section.validate(&FieldPath::new("theme.sidebar").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_empty_items_rejected() {
        let diag = validate(&section(vec![]));
        assert!(diag.has_error_at("theme.sidebar[0].items"));
    }

    #[test]
    fn test_item_errors_are_addressed() {
        let diag = validate(&section(vec![
            NavItem::new("Getting Started", "/user-guide/getting-started/introduction"),
            NavItem::new("Broken", ""),
        ]));
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("theme.sidebar[0].items[1].link"));
    }

    #[test]
    fn test_first_link() {
        let s = section(vec![NavItem::new("A", "/a"), NavItem::new("B", "/b")]);
        assert_eq!(s.first_link(), Some("/a"));
        assert_eq!(section(vec![]).first_link(), None);
    }
}
