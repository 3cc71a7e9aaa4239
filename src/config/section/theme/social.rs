//! `[[theme.social_links]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/arttet/dotfiles"
//! ```

use crate::config::util::check_web_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icons the renderer ships with.
///
/// The icon is kept as a string in [`SocialLink`] so an unknown name is a
/// validation error instead of a parse error. Add a variant here to support
/// a new icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Bluesky,
    Discord,
    Facebook,
    Github,
    Gitlab,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const ALL: &'static [SocialIcon] = &[
        Self::Bluesky,
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Gitlab,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bluesky => "bluesky",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }

    /// Comma-separated list of known names, for hints.
    pub fn known_names() -> String {
        Self::ALL
            .iter()
            .map(|icon| icon.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SocialIcon {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Link to the author's profile or the project repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name, one of [`SocialIcon`].
    pub icon: String,

    /// Absolute `http(s)` URL.
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon: icon.name().to_string(),
            link: link.into(),
        }
    }

    /// The parsed icon, if the name is known.
    pub fn icon(&self) -> Option<SocialIcon> {
        self.icon.parse().ok()
    }

    /// Validate an entry located at `at` (e.g. `theme.social_links[0]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.icon().is_none() {
            diag.error_with_hint(
                at.join("icon"),
                format!("unknown icon '{}'", self.icon),
                format!("known icons: {}", SocialIcon::known_names()),
            );
        }

        if let Err(message) = check_web_url(&self.link) {
            diag.error_with_hint(at.join("link"), message, "use format like https://github.com/you");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(link: &SocialLink) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("theme.social_links").index(0), &mut diag);
        diag
    }

    #[test]
    fn test_icon_names_round_trip() {
        for icon in SocialIcon::ALL {
            assert_eq!(icon.name().parse::<SocialIcon>(), Ok(*icon));
        }
    }

    #[test]
    fn test_github_link_valid() {
        let link = SocialLink::new(SocialIcon::Github, "https://github.com/arttet/dotfiles");
        assert_eq!(link.icon, "github");
        assert!(validate(&link).is_empty());
    }

    #[test]
    fn test_unknown_icon() {
        let link = SocialLink {
            icon: "myspace".into(),
            link: "https://myspace.com/me".into(),
        };
        let diag = validate(&link);
        assert!(diag.has_error_at("theme.social_links[0].icon"));
        assert!(diag.errors()[0].hint.as_ref().unwrap().contains("github"));
    }

    #[test]
    fn test_icon_is_case_sensitive() {
        assert!("GitHub".parse::<SocialIcon>().is_err());
    }

    #[test]
    fn test_link_must_be_web_url() {
        let link = SocialLink::new(SocialIcon::Github, "/arttet");
        assert!(validate(&link).has_error_at("theme.social_links[0].link"));
    }
}
