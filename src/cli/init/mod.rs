//! Site initialization module.
//!
//! Writes a commented default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::log;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use config::generate_config_template;

/// Write a config template named `config_name` into `dir`.
///
/// # Steps
/// 1. Validate the target path
/// 2. Write the template
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_config(dir: &Path, config_name: &Path, force: bool, dry_run: bool) -> Result<PathBuf> {
    let path = dir.join(config_name);

    if dry_run {
        print!("{}", generate_config_template());
        return Ok(path);
    }

    validate::validate_target(&path, force)?;
    config::write_config(&path)?;

    log!("init"; "wrote {}", path.display());
    log!("init"; "fill in `site.title` and `site.description`, then run `docsite check`");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_in_new_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs");

        let path = new_config(&dir, Path::new("docsite.toml"), false, false).unwrap();
        assert_eq!(path, dir.join("docsite.toml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), generate_config_template());
    }

    #[test]
    fn test_new_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docsite.toml");
        fs::write(&path, "[site]\n").unwrap();

        assert!(new_config(temp.path(), Path::new("docsite.toml"), false, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[site]\n");

        new_config(temp.path(), Path::new("docsite.toml"), true, false).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "[site]\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = new_config(temp.path(), Path::new("docsite.toml"), false, true).unwrap();
        assert!(!path.exists());
    }
}
