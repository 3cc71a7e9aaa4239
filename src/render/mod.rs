//! Renderer document generation.
//!
//! Converts a validated [`SiteConfig`] into the shape the site renderer reads
//! at build start: camelCase keys, theme settings under `themeConfig` and
//! bundler options under `vite`.
//!
//! ```json
//! {
//!   "base": "/dotfiles/",
//!   "srcDir": "content",
//!   "title": "My dotfiles",
//!   "description": "My dotfiles",
//!   "themeConfig": { "nav": [], "sidebar": [], "socialLinks": [] },
//!   "vite": {
//!     "build": { "minify": "esbuild", "target": "es2022", "cssCodeSplit": true },
//!     "ssr": { "noExternal": ["vitepress"] }
//!   },
//!   "cleanUrls": true
//! }
//! ```

use crate::config::{
    BuildSectionConfig, MinifyStrategy, NavItem, SidebarSection, SiteConfig, SocialLink,
};
use serde::{Serialize, Serializer};
use std::path::Path;

/// Output flavour of the renderer document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmitFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// ES module with a default export, loadable as `config.mjs`.
    Module,
}

/// Borrowed view of a [`SiteConfig`] in the renderer's key layout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<&'a str>,
    src_dir: &'a Path,
    title: &'a str,
    description: &'a str,
    theme_config: ThemeConfig<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vite: Option<Vite<'a>>,
    clean_urls: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeConfig<'a> {
    nav: &'a [NavItem],
    sidebar: &'a [SidebarSection],
    social_links: &'a [SocialLink],
}

#[derive(Debug, Serialize)]
struct Vite<'a> {
    build: ViteBuild<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssr: Option<ViteSsr<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViteBuild<'a> {
    #[serde(serialize_with = "serialize_minify")]
    minify: MinifyStrategy,
    target: &'a str,
    css_code_split: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViteSsr<'a> {
    no_external: &'a [String],
}

/// The bundler takes the minifier name, or `false` to disable minification.
fn serialize_minify<S: Serializer>(minify: &MinifyStrategy, s: S) -> Result<S::Ok, S::Error> {
    if minify.is_enabled() {
        s.serialize_str(minify.name())
    } else {
        s.serialize_bool(false)
    }
}

impl<'a> Vite<'a> {
    fn new(build: &'a BuildSectionConfig) -> Self {
        let ssr = (!build.ssr_no_external.is_empty()).then(|| ViteSsr {
            no_external: &build.ssr_no_external,
        });
        Self {
            build: ViteBuild {
                minify: build.minify,
                target: &build.target,
                css_code_split: build.css_code_split,
            },
            ssr,
        }
    }
}

impl<'a> RendererDocument<'a> {
    /// Build the document view. `config` should come from `build_config`.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            base: config.site.base.as_deref(),
            src_dir: &config.site.src_dir,
            title: &config.site.title,
            description: &config.site.description,
            theme_config: ThemeConfig {
                nav: &config.theme.nav,
                sidebar: &config.theme.sidebar,
                social_links: &config.theme.social_links,
            },
            vite: config.build.as_ref().map(Vite::new),
            clean_urls: config.site.clean_urls,
        }
    }

    /// Pretty-printed JSON, keys in renderer order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// ES module exporting the document.
    pub fn to_module(&self) -> serde_json::Result<String> {
        Ok(format!(
            "// Generated by docsite. Edit docsite.toml instead.\nexport default {};\n",
            self.to_json()?
        ))
    }

    /// Render in the requested format, always ending with a newline.
    pub fn render(&self, format: EmitFormat) -> serde_json::Result<String> {
        match format {
            EmitFormat::Json => self.to_json().map(|json| json + "\n"),
            EmitFormat::Module => self.to_module(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DOTFILES_TOML, build_config, test_parse_config};
    use serde_json::json;

    fn dotfiles() -> SiteConfig {
        build_config(SiteConfig::from_str(DOTFILES_TOML).unwrap()).unwrap()
    }

    #[test]
    fn test_dotfiles_document() {
        let config = dotfiles();
        let value = serde_json::to_value(RendererDocument::new(&config)).unwrap();
        assert_eq!(
            value,
            json!({
                "base": "/dotfiles/",
                "srcDir": "content",
                "title": "My dotfiles",
                "description": "My dotfiles",
                "themeConfig": {
                    "nav": [
                        { "text": "Home", "link": "/" },
                        { "text": "User Guide", "link": "/user-guide/getting-started/introduction" }
                    ],
                    "sidebar": [{
                        "text": "User Guide",
                        "collapsed": false,
                        "items": [
                            { "text": "Getting Started", "link": "/user-guide/getting-started/introduction" }
                        ]
                    }],
                    "socialLinks": [
                        { "icon": "github", "link": "https://github.com/arttet/dotfiles" }
                    ]
                },
                "vite": {
                    "build": { "minify": "esbuild", "target": "es2022", "cssCodeSplit": true },
                    "ssr": { "noExternal": ["vitepress"] }
                },
                "cleanUrls": true
            })
        );
    }

    #[test]
    fn test_key_order() {
        let config = dotfiles();
        let json = RendererDocument::new(&config).to_json().unwrap();
        let positions: Vec<usize> = [
            "\"base\"",
            "\"srcDir\"",
            "\"title\"",
            "\"themeConfig\"",
            "\"vite\"",
            "\"cleanUrls\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_optional_parts_omitted() {
        let config = build_config(test_parse_config("")).unwrap();
        let value = serde_json::to_value(RendererDocument::new(&config)).unwrap();
        assert!(value.get("base").is_none());
        assert!(value.get("vite").is_none());
        assert_eq!(value["srcDir"], ".");
        assert_eq!(value["cleanUrls"], false);
    }

    #[test]
    fn test_minify_disabled_and_no_ssr() {
        let config = test_parse_config("[build]\nminify = \"none\"\n");
        let value = serde_json::to_value(RendererDocument::new(&config)).unwrap();
        assert_eq!(value["vite"]["build"]["minify"], false);
        assert!(value["vite"].get("ssr").is_none());
    }

    #[test]
    fn test_preview_document_has_no_base() {
        let config = dotfiles().for_preview();
        let value = serde_json::to_value(RendererDocument::new(&config)).unwrap();
        assert!(value.get("base").is_none());
    }

    #[test]
    fn test_module_format() {
        let config = dotfiles();
        let module = RendererDocument::new(&config)
            .render(EmitFormat::Module)
            .unwrap();
        assert!(module.contains("export default {"));
        assert!(module.ends_with("};\n"));
    }

    #[test]
    fn test_json_format_parses() {
        let config = dotfiles();
        let json = RendererDocument::new(&config).render(EmitFormat::Json).unwrap();
        assert!(json.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "My dotfiles");
    }
}
