/*
[INPUT]:  Raw URL strings from the command line
[OUTPUT]: Short-link keys and scheme-normalized URLs
[POS]:    URL helpers - parsing rules shared by the processor
[UPDATE]: When classification or normalization rules change
*/

use std::borrow::Cow;
use url::{ParseError, Url};

/// Scheme prepended to URLs given without one
pub const DEFAULT_SCHEME: &str = "https";

/// Extract the key of a short link, or `None` if `raw` is not on `short_domain`
///
/// The key is the last non-empty path segment, so `https://vk.cc/abc` yields
/// `abc` while `https://vk.cc/` yields nothing.
pub fn short_link_key(raw: &str, short_domain: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if !url.host_str()?.eq_ignore_ascii_case(short_domain) {
        return None;
    }

    url.path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Whether `raw` already carries a scheme
pub fn has_scheme(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(_) => true,
        Err(ParseError::RelativeUrlWithoutBase) => false,
        Err(_) => raw.contains("://"),
    }
}

/// Prefix `https://` when the URL has no scheme; otherwise leave it untouched
pub fn normalize_url(raw: &str) -> Cow<'_, str> {
    if has_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!(
            "{}://{}",
            DEFAULT_SCHEME,
            raw.trim_start_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://vk.cc/abc123", Some("abc123"))]
    #[case("http://vk.cc/abc123", Some("abc123"))]
    #[case("https://VK.CC/abc123", Some("abc123"))]
    #[case("https://vk.cc/abc123/", Some("abc123"))]
    #[case("https://vk.cc/abc123?utm=1", Some("abc123"))]
    #[case("https://vk.cc", None)]
    #[case("https://vk.cc/", None)]
    #[case("https://example.com/abc123", None)]
    #[case("https://sub.vk.cc/abc123", None)]
    #[case("vk.cc/abc123", None)]
    #[case("not a url", None)]
    fn test_short_link_key(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(short_link_key(raw, "vk.cc").as_deref(), expected);
    }

    #[rstest]
    #[case("example.com/page", "https://example.com/page")]
    #[case("example.com", "https://example.com")]
    #[case("//example.com/page", "https://example.com/page")]
    #[case("http://example.com", "http://example.com")]
    #[case("https://example.com/a?b=c", "https://example.com/a?b=c")]
    #[case("ftp://files.example.com", "ftp://files.example.com")]
    fn test_normalize_url(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_url(raw), expected);
    }

    #[test]
    fn test_normalize_keeps_borrowed_when_scheme_present() {
        assert!(matches!(
            normalize_url("http://example.com"),
            Cow::Borrowed(_)
        ));
    }
}
