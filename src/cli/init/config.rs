//! Configuration file generation.
//!
//! Creates a commented docsite.toml for a new documentation site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{BuildSectionConfig, SiteInfoConfig};

/// Example theme tables, commented out so the navigation bar is derived
/// from whatever sidebar the author writes.
const THEME_EXAMPLE: &str = r#"# Navigation bar, left to right. Derived from the sidebar when omitted:
# "Home" links to "/", then one entry per sidebar section.
# [[theme.nav]]
# text = "Home"
# link = "/"

# Sidebar sections, top to bottom. Every section needs at least one item.
# [[theme.sidebar]]
# text = "User Guide"
# collapsed = false
# items = [
#     { text = "Getting Started", link = "/user-guide/getting-started/introduction" },
# ]

# Icon links in the navigation bar.
# [[theme.social_links]]
# icon = "github"
# link = "https://github.com/you/dotfiles"
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [theme] tables
    out.push_str(THEME_EXAMPLE);
    out.push('\n');

    // [build] section
    out.push_str(&BuildSectionConfig::template_with_header());

    out
}

/// Write the template to `path`.
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, build_config};

    #[test]
    fn test_template_parses() {
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();

        assert_eq!(config.site, SiteInfoConfig::default());
        assert_eq!(config.build, Some(BuildSectionConfig::default()));
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_template_documents_fields() {
        let template = generate_config_template();
        assert!(template.contains("[site]"));
        assert!(template.contains("title = \"\"  # required"));
        assert!(template.contains("# base = \"\""));
        assert!(template.contains("src_dir = \".\""));
        assert!(template.contains("[build]"));
        assert!(template.contains("minify = \"esbuild\"  # esbuild | terser | none"));
        assert!(template.contains("target = \"es2022\""));
        assert!(template.contains("# [[theme.sidebar]]"));
    }

    #[test]
    fn test_template_needs_title_and_description() {
        let mut config = SiteConfig::from_str(&generate_config_template()).unwrap();
        assert!(build_config(config.clone()).is_err());

        config.site.title = "My dotfiles".into();
        config.site.description = "My dotfiles".into();
        let config = build_config(config).unwrap();
        assert_eq!(config.theme.nav.len(), 1);
    }

    #[test]
    fn test_uncommented_theme_example_is_valid() {
        let theme: String = THEME_EXAMPLE
            .lines()
            .filter_map(|line| line.strip_prefix("# "))
            .filter(|line| {
                line.starts_with('[')
                    || line.starts_with(' ')
                    || line.starts_with(']')
                    || line.contains(" = ")
            })
            .map(|line| format!("{line}\n"))
            .collect();
        let content = format!("[site]\ntitle = \"t\"\ndescription = \"d\"\n{theme}");
        let config = build_config(SiteConfig::from_str(&content).unwrap()).unwrap();
        assert_eq!(config.theme.sidebar.len(), 1);
        assert_eq!(config.theme.social_links.len(), 1);
    }
}
