// socialsan-core/src/website.rs
//! Website identifier validation.
//!
//! Partner websites are stored as absolute URLs. Input that is already an
//! absolute URL is kept verbatim; a bare domain or partial URL gets an
//! `https://` scheme and is serialized by the `url` crate.
//!
//! License: MIT OR APACHE 2.0

use log::trace;
use url::Url;

/// True if the text between `//` and the end of the authority holds an `@`.
fn authority_has_credentials(input: &str) -> bool {
    input
        .split_once("//")
        .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
        .is_some_and(|authority| authority.contains('@'))
}

/// `Url::parse` accepts credentials with an empty host (`foo://@`), which a
/// browser URL parser rejects, so those are not treated as absolute URLs.
fn parses_as_absolute_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()) || !authority_has_credentials(input),
        Err(_) => false,
    }
}

/// Returns `input` unchanged if it parses as an absolute URL, otherwise the
/// normalized `https://` form of it, or `None` if neither parses.
///
/// Strings without a `.` or containing a space are never coerced.
pub fn url_from_string_if_valid(input: &str) -> Option<String> {
    if parses_as_absolute_url(input) {
        return Some(input.to_string());
    }

    if !input.contains('.') || input.contains(' ') {
        return None;
    }

    match Url::parse(&format!("https://{input}")) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            trace!(target: "socialsan_core::website", "Could not coerce '{}' into a URL: {}", input, e);
            None
        }
    }
}

/// Normalizes a website identifier into an absolute URL.
///
/// ```
/// use socialsan_core::sanitize_website;
///
/// assert_eq!(sanitize_website(Some("example.com")).as_deref(), Some("https://example.com/"));
/// assert_eq!(sanitize_website(Some("not a domain")), None);
/// assert_eq!(sanitize_website(Some("  ")), None);
/// ```
pub fn sanitize_website(input: Option<&str>) -> Option<String> {
    let website = input?.trim();
    if website.is_empty() {
        return None;
    }

    // A website is a single token that at least looks like a domain.
    if !website.contains('.') || website.chars().any(char::is_whitespace) {
        return None;
    }

    url_from_string_if_valid(website)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https_scheme() {
        assert_eq!(sanitize_website(Some("dub.co")).as_deref(), Some("https://dub.co/"));
        assert_eq!(sanitize_website(Some("  www.dub.co/about  ")).as_deref(), Some("https://www.dub.co/about"));
    }

    #[test]
    fn test_absolute_urls_are_kept_verbatim() {
        assert_eq!(sanitize_website(Some("http://dub.co")).as_deref(), Some("http://dub.co"));
        assert_eq!(
            sanitize_website(Some("https://dub.co/path?q=1")).as_deref(),
            Some("https://dub.co/path?q=1")
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["example.com", "sub.example.org/a/b", "https://example.net", "EXAMPLE.COM"] {
            let once = sanitize_website(Some(input)).expect("valid website");
            assert_eq!(sanitize_website(Some(&once)).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_rejects_non_domains() {
        assert_eq!(sanitize_website(None), None);
        assert_eq!(sanitize_website(Some("")), None);
        assert_eq!(sanitize_website(Some("localhost")), None);
        assert_eq!(sanitize_website(Some("two words.com")), None);
        assert_eq!(sanitize_website(Some("tab\tsep.com")), None);
    }

    #[test]
    fn test_credentials_without_host_are_coerced() {
        assert_eq!(sanitize_website(Some("X.COMHTTP://@")).as_deref(), Some("https://x.comhttp//@"));
        assert_eq!(
            sanitize_website(Some("httpsinstagram.comhttps://@")).as_deref(),
            Some("https://httpsinstagram.comhttps//@")
        );
    }

    #[test]
    fn test_hostless_urls_without_credentials_stay_verbatim() {
        assert_eq!(sanitize_website(Some("mailto:team@dub.co")).as_deref(), Some("mailto:team@dub.co"));
    }

    #[test]
    fn test_unparseable_host_is_rejected() {
        assert_eq!(url_from_string_if_valid("exa[mple.com"), None);
    }
}
