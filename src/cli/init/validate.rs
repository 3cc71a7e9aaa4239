//! Pre-initialization validation.
//!
//! Validates the target config path before writing the template.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to overwrite an existing config unless `force` is set.
pub fn validate_target(config_path: &Path, force: bool) -> Result<()> {
    if config_path.is_dir() {
        bail!(
            "'{}' is a directory, not a config file.",
            config_path.display()
        );
    }
    if config_path.exists() && !force {
        bail!(
            "Config file '{}' already exists.\n\
             Use `docsite init --force` to overwrite it.",
            config_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_ok() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("docsite.toml"), false).is_ok());
    }

    #[test]
    fn test_existing_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docsite.toml");
        fs::write(&path, "").unwrap();
        assert!(validate_target(&path, false).is_err());
        assert!(validate_target(&path, true).is_ok());
    }

    #[test]
    fn test_directory_rejected() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), true).is_err());
    }
}
