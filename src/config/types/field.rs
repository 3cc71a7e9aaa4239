//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, e.g. `theme.sidebar[0].items[2].link`.
///
/// Static paths come from `#[derive(Config)]`; entries inside arrays are
/// addressed with [`FieldPath::index`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub base: Option<String>,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.base, "must start with `/`");
/// diag.error(ThemeSectionConfig::FIELDS.nav.index(0).join("link"), "empty link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of the `i`-th element of an array field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }

    /// Path of a key below this field.
    pub fn join(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_join() {
        let path = FieldPath::new("theme.sidebar").index(0).join("items").index(2);
        assert_eq!(path.as_str(), "theme.sidebar[0].items[2]");
        assert_eq!(path.join("link").as_str(), "theme.sidebar[0].items[2].link");
    }

    #[test]
    fn test_static_path_is_borrowed() {
        let path = FieldPath::new("site.title");
        assert_eq!(path.as_ref(), "site.title");
        assert_eq!(path, FieldPath::new("site.title"));
    }
}
