// socialsan-core/src/handle.rs
//! The handle normalization engine.
//!
//! Reduces arbitrary user input (a profile URL, an `@handle`, a bare
//! username or garbage) to the canonical handle for one platform, or rejects
//! it with `None`. The pipeline is fixed:
//!
//! 1. trim, reject empty input
//! 2. strip URL noise (scheme, bare `http`/`https`, `www.`, query, fragment)
//! 3. domain gate against the platform's known hostnames
//! 4. first matching extraction pattern, capture group 1
//! 5. drop any trailing path
//! 6. delete characters outside the platform's legal set
//! 7. truncate to the platform's length limit
//!
//! Everything here is pure and safe to call from any thread.
//!
//! License: MIT OR APACHE 2.0

use log::trace;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::platform::{PlatformType, SocialPlatform};
use crate::registry::{self, PlatformConfig};
use crate::website::sanitize_website;

fn noise_pattern(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in noise pattern '{pattern}': {e}"))
}

// ASCII-only folding: `\u{17F}` (long s) is not an `s`.
static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| noise_pattern(r"(?-u)^https?://"));
static BARE_SCHEME: Lazy<Regex> = Lazy::new(|| noise_pattern(r"(?-u)^https?$"));
static WWW_PREFIX: Lazy<Regex> = Lazy::new(|| noise_pattern(r"(?-u)^www\."));
static QUERY_SUFFIX: Lazy<Regex> = Lazy::new(|| noise_pattern(r"\?.*$"));
static FRAGMENT_SUFFIX: Lazy<Regex> = Lazy::new(|| noise_pattern(r"#.*$"));
static PATH_SUFFIX: Lazy<Regex> = Lazy::new(|| noise_pattern(r"/.*$"));

/// Removes URL scaffolding that never belongs to a handle.
///
/// Each replacement runs once, in order, on the result of the previous one.
pub fn strip_noise(input: &str) -> String {
    let stripped = SCHEME_PREFIX.replace(input, "");
    let stripped = BARE_SCHEME.replace(&stripped, "");
    let stripped = WWW_PREFIX.replace(&stripped, "");
    let stripped = QUERY_SUFFIX.replace(&stripped, "");
    FRAGMENT_SUFFIX.replace(&stripped, "").into_owned()
}

fn truncate_chars(handle: &str, max_length: Option<usize>) -> &str {
    match max_length.and_then(|max| handle.char_indices().nth(max)) {
        Some((cut, _)) => &handle[..cut],
        None => handle,
    }
}

fn normalize_with(config: &PlatformConfig, trimmed: &str) -> Option<String> {
    let handle = strip_noise(trimmed);

    // Runs before extraction, so a bare "@name" never reaches the `^@` pattern.
    if !config.matches_domain(&handle) {
        trace!(
            target: "socialsan_core::handle",
            "Rejected '{}' for {}: no known domain in input.",
            trimmed,
            config.platform
        );
        return None;
    }

    let handle = config.extract(&handle);
    let handle = PATH_SUFFIX.replace(handle, "");
    let handle = config.allowed_chars.replace_all(&handle, "");
    let handle = truncate_chars(&handle, config.max_length);

    if handle.is_empty() {
        trace!(
            target: "socialsan_core::handle",
            "Rejected '{}' for {}: nothing left after filtering.",
            trimmed,
            config.platform
        );
        return None;
    }
    Some(handle.to_string())
}

/// Normalizes `input` to the canonical handle for `platform`.
///
/// Returns `None` when the input is missing, blank, lacks every one of the
/// platform's domains, or filters down to nothing.
///
/// ```
/// use socialsan_core::{sanitize_social_handle, SocialPlatform};
///
/// assert_eq!(
///     sanitize_social_handle(Some("https://twitter.com/dubdotco?s=20"), SocialPlatform::Twitter),
///     Some("dubdotco".to_string())
/// );
/// assert_eq!(sanitize_social_handle(Some("@channelname"), SocialPlatform::Youtube), None);
/// ```
pub fn sanitize_social_handle(input: Option<&str>, platform: SocialPlatform) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    normalize_with(registry::lookup(platform), trimmed)
}

/// Routes any platform identifier to the right sanitizer: websites go
/// through [`sanitize_website`], everything else through
/// [`sanitize_social_handle`].
pub fn sanitize_identifier(input: Option<&str>, platform: PlatformType) -> Option<String> {
    match platform.as_social() {
        Some(social) => sanitize_social_handle(input, social),
        None => sanitize_website(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(input: &str, platform: SocialPlatform) -> Option<String> {
        sanitize_social_handle(Some(input), platform)
    }

    #[test]
    fn test_strip_noise_applies_each_step_once() {
        assert_eq!(strip_noise("HTTPS://www.x.com/a?b=1#c"), "x.com/a");
        assert_eq!(strip_noise("http"), "");
        assert_eq!(strip_noise("https"), "");
        // Only the leading `www.` is removed.
        assert_eq!(strip_noise("www.www.tiktok.com"), "www.tiktok.com");
        assert_eq!(strip_noise("tiktok.com/@a#x?y"), "tiktok.com/@a");
        assert_eq!(strip_noise("http\u{17F}://x.com"), "http\u{17F}://x.com");
    }

    #[test]
    fn test_missing_or_blank_input_is_rejected() {
        for platform in SocialPlatform::ALL {
            assert_eq!(sanitize_social_handle(None, platform), None);
            assert_eq!(sanitize(" \t\n", platform), None);
            assert_eq!(sanitize("", platform), None);
        }
    }

    #[test]
    fn test_youtube_variants() {
        let p = SocialPlatform::Youtube;
        assert_eq!(sanitize("https://www.youtube.com/@dubdotco", p).as_deref(), Some("dubdotco"));
        assert_eq!(sanitize("youtube.com/channel/UCabc-12_x", p).as_deref(), Some("UCabc-12_x"));
        assert_eq!(sanitize("https://youtube.com/c/Some.Name/videos", p).as_deref(), Some("Some.Name"));
        assert_eq!(sanitize("youtube.com/user/old_user?sub_confirmation=1", p).as_deref(), Some("old_user"));
        assert_eq!(sanitize("https://youtu.be/dQw4w9WgXcQ", p).as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(sanitize("m.youtube.com/@mobile", p).as_deref(), Some("mobile"));
    }

    #[test]
    fn test_twitter_accepts_x_domain_and_strips_punctuation() {
        let p = SocialPlatform::Twitter;
        assert_eq!(sanitize("https://x.com/dub_co", p).as_deref(), Some("dub_co"));
        assert_eq!(sanitize("twitter.com/some.body", p).as_deref(), Some("somebody"));
        assert_eq!(sanitize("https://twitter.com/abcdefghijklmnopqrstuvwxyz", p).as_deref(), Some("abcdefghijklmno"));
    }

    #[test]
    fn test_linkedin_company_pages_keep_first_segment() {
        let p = SocialPlatform::Linkedin;
        assert_eq!(sanitize("https://www.linkedin.com/in/john-doe-123/", p).as_deref(), Some("john-doe-123"));
        assert_eq!(sanitize("linkedin.com/company/dub", p).as_deref(), Some("company"));
    }

    #[test]
    fn test_tiktok_strips_at_sign_after_domain() {
        let p = SocialPlatform::Tiktok;
        assert_eq!(sanitize("https://www.tiktok.com/@some.creator?lang=en", p).as_deref(), Some("some.creator"));
    }

    #[test]
    fn test_domain_gate_without_pattern_match_keeps_filtered_input() {
        // Contains the domain but no pattern matches: the whole string is
        // filtered rather than rejected.
        assert_eq!(sanitize("my instagram.com", SocialPlatform::Instagram).as_deref(), Some("myinstagram.com"));
    }

    #[test]
    fn test_truncation_counts_characters() {
        assert_eq!(truncate_chars("abcdef", Some(3)), "abc");
        assert_eq!(truncate_chars("abc", Some(3)), "abc");
        assert_eq!(truncate_chars("abc", None), "abc");
        assert_eq!(truncate_chars("\u{e9}\u{e9}\u{e9}", Some(2)), "\u{e9}\u{e9}");
    }

    #[test]
    fn test_only_punctuation_is_rejected() {
        assert_eq!(sanitize("https://twitter.com/!!!", SocialPlatform::Twitter), None);
    }

    #[test]
    fn test_sanitize_identifier_routes_websites() {
        assert_eq!(
            sanitize_identifier(Some("example.com"), PlatformType::Website).as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(
            sanitize_identifier(Some("instagram.com/abc"), PlatformType::Instagram).as_deref(),
            Some("abc")
        );
    }
}
