//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 sections)
/// - `plural_s(1)` -> `""` (1 section)
/// - `plural_s(5)` -> `"s"` (5 sections)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "link")` -> `"0 links"`
/// - `plural_count(1, "link")` -> `"1 link"`
/// - `plural_count(5, "link")` -> `"5 links"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "section"), "0 sections");
        assert_eq!(plural_count(1, "section"), "1 section");
        assert_eq!(plural_count(3, "link"), "3 links");
    }
}
