//! `[[theme.nav]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "User Guide"
//! link = "/user-guide/getting-started/introduction"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A labelled link, used by the top navigation bar and inside sidebar sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Text shown to the reader.
    pub text: String,

    /// Site path (`/guide/intro`), fragment (`#install`) or http(s)/mailto URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate one entry located at `at` (e.g. `theme.nav[2]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(at.join("text"), "display text must not be empty");
        }

        if let Err(problem) = check_link(&self.link) {
            diag.error_with_hint(
                at.join("link"),
                problem.message(),
                "use a site path like \"/guide/intro\" or a URL like \"https://example.com\"",
            );
        }
    }
}
