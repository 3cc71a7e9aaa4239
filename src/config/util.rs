//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Schemes a navigation link may use besides site paths.
const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Why a link was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkProblem {
    Empty,
    Whitespace,
    /// Not a `/`-rooted path, a `#fragment` or an absolute URL.
    Relative,
    /// Absolute URL with a scheme other than http, https or mailto.
    Scheme,
}

impl LinkProblem {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "link must not be empty",
            Self::Whitespace => "link must not contain whitespace",
            Self::Relative => {
                "link must be a path starting with `/`, a `#fragment` or an absolute URL"
            }
            Self::Scheme => "link scheme must be http, https or mailto",
        }
    }
}

/// Check a navigation target.
///
/// Accepts site paths (`/`, `/user-guide/intro`, `/faq#install`), fragments
/// on the current page (`#install`) and absolute `http`, `https` or `mailto`
/// URLs.
///
/// # Examples
/// ```ignore
/// check_link("/")                        -> Ok(())
/// check_link("#install")                 -> Ok(())
/// check_link("https://example.com/docs") -> Ok(())
/// check_link("")                         -> Err(LinkProblem::Empty)
/// check_link("guide/intro")              -> Err(LinkProblem::Relative)
/// check_link("javascript:alert(1)")      -> Err(LinkProblem::Scheme)
/// ```
pub fn check_link(link: &str) -> Result<(), LinkProblem> {
    if link.is_empty() {
        return Err(LinkProblem::Empty);
    }
    if link.chars().any(char::is_whitespace) {
        return Err(LinkProblem::Whitespace);
    }
    if link.starts_with('/') && !link.starts_with("//") {
        return Ok(());
    }
    if let Some(fragment) = link.strip_prefix('#') {
        return if fragment.is_empty() {
            Err(LinkProblem::Relative)
        } else {
            Ok(())
        };
    }

    let parsed = url::Url::parse(link).map_err(|_| LinkProblem::Relative)?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_none() => Err(LinkProblem::Relative),
        scheme if LINK_SCHEMES.contains(&scheme) => Ok(()),
        _ => Err(LinkProblem::Scheme),
    }
}

/// Check that `link` is an absolute `http`/`https` URL with a host.
pub fn check_web_url(link: &str) -> Result<(), String> {
    let parsed = url::Url::parse(link).map_err(|e| format!("invalid URL '{link}': {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(())
}

/// Find config file by searching upward from `start`.
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/dotfiles/docs/content/  ← start
/// /home/user/dotfiles/docs/docsite.toml  ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
