//! `[site]` section configuration.
//!
//! Site metadata handed to the renderer as the page shell.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My dotfiles"
//! description = "My dotfiles"
//! base = "/dotfiles/"
//! src_dir = "content"
//! clean_urls = true
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc = "required")]
    pub title: String,

    /// Site description, used for the `<meta name="description">` tag.
    #[config(inline_doc = "required")]
    pub description: String,

    /// Base path the site is deployed under, e.g. "/dotfiles/" for a
    /// project page. Must begin and end with `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Directory holding the markdown pages (relative to the project root).
    #[config(default = ".")]
    pub src_dir: PathBuf,

    /// Drop the trailing `.html` from page URLs.
    pub clean_urls: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: None,
            src_dir: ".".into(),
            clean_urls: false,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` and `description` are non-empty
    /// - `base`, if set, begins and ends with `/`
    /// - `src_dir` is a non-empty relative path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        if self.description.trim().is_empty() {
            diag.error(Self::FIELDS.description, "site description must not be empty");
        }

        if let Some(base) = &self.base {
            if base.is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    "base path must not be empty",
                    "remove the field to serve from `/`",
                );
            } else if !base.starts_with('/') || !base.ends_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    format!("base path '{base}' must begin and end with `/`"),
                    format!("use \"/{}/\"", base.trim_matches('/')),
                );
            }
        }

        if self.src_dir.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.src_dir,
                "source directory must not be empty",
                "use \".\" for the project root",
            );
        } else if self.src_dir.has_root() {
            diag.error_with_hint(
                Self::FIELDS.src_dir,
                format!("'{}' must be relative to the project root", self.src_dir.display()),
                "e.g. \"content\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(title: &str, description: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn errors_for(config: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_field_paths_and_template() {
        assert_eq!(SiteInfoConfig::FIELDS.src_dir.as_str(), "site.src_dir");
        assert_eq!(SiteInfoConfig::TEMPLATE_SECTION, "site");

        let template = SiteInfoConfig::template_with_header();
        assert!(template.starts_with("# Site metadata.\n[site]\n"));
        assert!(template.contains("clean_urls = false\n"));
    }

    #[test]
    fn test_valid_minimal() {
        assert!(errors_for(&info("My dotfiles", "My dotfiles")).is_empty());
    }

    #[test]
    fn test_empty_title_and_description() {
        let diag = errors_for(&info("", "  "));
        assert!(diag.has_error_at("site.title"));
        assert!(diag.has_error_at("site.description"));
    }

    #[test]
    fn test_base_missing_leading_slash() {
        let mut config = info("t", "d");
        config.base = Some("dotfiles/".into());
        let diag = errors_for(&config);
        assert!(diag.has_error_at("site.base"));
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/dotfiles/\""));
    }

    #[test]
    fn test_base_missing_trailing_slash() {
        let mut config = info("t", "d");
        config.base = Some("/dotfiles".into());
        assert!(errors_for(&config).has_error_at("site.base"));
    }

    #[test]
    fn test_base_variants_accepted() {
        for base in ["/", "/dotfiles/", "/a/b/"] {
            let mut config = info("t", "d");
            config.base = Some(base.into());
            assert!(errors_for(&config).is_empty(), "{base} should be accepted");
        }
    }

    #[test]
    fn test_base_empty() {
        let mut config = info("t", "d");
        config.base = Some(String::new());
        assert!(errors_for(&config).has_error_at("site.base"));
    }

    #[test]
    fn test_src_dir_must_be_relative() {
        let mut config = info("t", "d");
        config.src_dir = "/abs/content".into();
        assert!(errors_for(&config).has_error_at("site.src_dir"));

        config.src_dir = PathBuf::new();
        assert!(errors_for(&config).has_error_at("site.src_dir"));
    }
}
