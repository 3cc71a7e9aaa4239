//! Helpers shared by the commands that read an existing config.

use crate::config::{SiteConfig, find_config_file};
use crate::debug;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Locate `config_name` starting at the current directory.
pub fn resolve_config_path(config_name: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    match find_config_file(&cwd, config_name) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            Ok(path)
        }
        None => bail!(
            "Config file '{}' not found. Run `docsite init` to create one.",
            config_name.display()
        ),
    }
}

/// Load and validate the config, switching to the preview variant if asked.
pub fn load_config(path: &Path, preview: bool) -> Result<SiteConfig> {
    let config = SiteConfig::load(path)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;
    Ok(if preview { config.for_preview() } else { config })
}
