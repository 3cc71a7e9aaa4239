//! `check` command: validate and summarize.

use crate::cli::common::load_config;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;
use anyhow::Result;
use std::path::Path;

/// Validate the config at `path` and log a summary.
pub fn run_check(path: &Path, preview: bool) -> Result<()> {
    let config = load_config(path, preview)?;
    for line in summary(&config) {
        log!("ok"; "{}", line);
    }
    Ok(())
}

/// One line per part of the configuration.
pub fn summary(config: &SiteConfig) -> Vec<String> {
    let theme = &config.theme;
    let items: usize = theme.sidebar.iter().map(|s| s.items.len()).sum();

    let mut lines = vec![
        format!(
            "{} (base {})",
            config.site.title,
            config.site.base.as_deref().unwrap_or("/")
        ),
        format!(
            "{}, {} with {}, {}",
            plural_count(theme.nav.len(), "nav link"),
            plural_count(theme.sidebar.len(), "sidebar section"),
            plural_count(items, "item"),
            plural_count(theme.social_links.len(), "social link"),
        ),
    ];

    let icons: Vec<String> = theme
        .social_links
        .iter()
        .filter_map(|link| link.icon())
        .map(|icon| icon.to_string())
        .collect();
    if !icons.is_empty() {
        lines[1].push_str(&format!(" ({})", icons.join(", ")));
    }

    lines.push(match &config.build {
        Some(build) => format!(
            "build: minify {}, target {}, {}",
            build.minify.name(),
            build.target,
            plural_count(build.ssr_no_external.len(), "ssr bundled module"),
        ),
        None => "build: renderer defaults".to_string(),
    });

    lines
}
