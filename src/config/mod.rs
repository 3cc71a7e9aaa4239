//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme/     # [theme]: nav, sidebar, social links
//! │   └── build      # [build]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Link checks, config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                  | Purpose                                   |
//! |--------------------------|-------------------------------------------|
//! | `[site]`                 | Title, description, base path, sources    |
//! | `[[theme.nav]]`          | Top navigation bar                        |
//! | `[[theme.sidebar]]`      | Sidebar sections and their entries        |
//! | `[[theme.social_links]]` | Icon links in the navigation bar          |
//! | `[build]`                | Bundler passthrough options (optional)    |

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    BuildSectionConfig, MinifyStrategy, NavItem, SidebarSection, SiteInfoConfig, SocialLink,
    ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Navigation bar, sidebar and social links
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Bundler passthrough options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSectionConfig>,
}

/// Validate `input` and return the complete configuration.
///
/// Every rule runs before the result is decided, so the error lists all
/// problems at once. An empty navigation bar is derived from the sidebar.
/// Performs no I/O.
pub fn build_config(input: SiteConfig) -> Result<SiteConfig, ConfigError> {
    let diag = input.validate();
    input.finish(diag)
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load, validate and complete the configuration at `path`.
    ///
    /// Unknown fields and validation warnings are logged.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let diag = config.validate();
        diag.print_warnings();
        config.finish(diag)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Serialize back to the `docsite.toml` format.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Copy for local preview: served at `/`, so the base path is dropped.
    pub fn for_preview(&self) -> Self {
        let mut config = self.clone();
        config.site.base = None;
        config
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section's checks, collecting errors and warnings.
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        if let Some(build) = &self.build {
            build.validate(&mut diag);
        }

        diag
    }

    /// Turn collected diagnostics into the final result.
    fn finish(mut self, diag: ConfigDiagnostics) -> Result<Self, ConfigError> {
        diag.into_result()
            .map_err(ConfigError::InvalidConfiguration)?;
        self.theme.ensure_nav();
        Ok(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"My dotfiles\"\ndescription = \"My dotfiles\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The deployed dotfiles documentation configuration.
#[cfg(test)]
pub const DOTFILES_TOML: &str = r#"
[site]
title = "My dotfiles"
description = "My dotfiles"
base = "/dotfiles/"
src_dir = "content"
clean_urls = true

[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "User Guide"
link = "/user-guide/getting-started/introduction"

[[theme.sidebar]]
text = "User Guide"
collapsed = false
items = [
    { text = "Getting Started", link = "/user-guide/getting-started/introduction" },
]

[[theme.social_links]]
icon = "github"
link = "https://github.com/arttet/dotfiles"

[build]
minify = "esbuild"
target = "es2022"
css_code_split = true
ssr_no_external = ["vitepress"]
"#;

// ============================================================================
// tests
// ============================================================================
