//! `[build]` section configuration.
//!
//! Options passed through to the bundler used by the site renderer. The whole
//! section is optional; without it the renderer keeps its own defaults.
//!
//! # Example
//!
//! ```toml
//! [build]
//! minify = "esbuild"          # esbuild | terser | none
//! target = "es2022"           # ECMAScript target of the client bundle
//! css_code_split = true       # Emit one stylesheet per route
//! ssr_no_external = ["vitepress"]  # Modules bundled into the SSR build
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Minifier the bundler runs over client output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinifyStrategy {
    #[default]
    Esbuild,
    Terser,
    /// Skip minification.
    None,
}

impl MinifyStrategy {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Name as written in `docsite.toml`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esbuild => "esbuild",
            Self::Terser => "terser",
            Self::None => "none",
        }
    }
}

/// Bundler passthrough options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Minifier for client output.
    #[config(inline_doc = "esbuild | terser | none")]
    pub minify: MinifyStrategy,

    /// ECMAScript target of the client bundle.
    #[config(default = "es2022")]
    pub target: String,

    /// Emit one stylesheet per route instead of a single bundle.
    pub css_code_split: bool,

    /// Modules bundled into the server-side build instead of left external.
    pub ssr_no_external: Vec<String>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            minify: MinifyStrategy::default(),
            target: "es2022".into(),
            css_code_split: true,
            ssr_no_external: Vec::new(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate build options.
    ///
    /// # Checks
    /// - `target` is non-empty
    /// - `ssr_no_external` entries are non-empty and unique
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.target.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.target,
                "bundler target must not be empty",
                "e.g. \"es2022\" or \"esnext\"",
            );
        }

        let no_external = Self::FIELDS.ssr_no_external;
        let mut seen = FxHashSet::default();
        for (i, module) in self.ssr_no_external.iter().enumerate() {
            if module.trim().is_empty() {
                diag.error(no_external.index(i), "module name must not be empty");
            } else if !seen.insert(module.as_str()) {
                diag.error_with_hint(
                    no_external.index(i),
                    format!("module '{module}' is listed more than once"),
                    "remove the duplicate entry",
                );
            }
        }
    }
}
