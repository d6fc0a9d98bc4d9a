//! registry.rs - The built-in platform configuration table.
//!
//! Each social platform maps to exactly one [`PlatformRule`] (raw pattern
//! strings and limits) which is compiled once into a [`PlatformConfig`].
//! The table is static: there is no runtime registration, and both
//! [`platform_rule`] and [`lookup`] match exhaustively on [`SocialPlatform`],
//! so adding a platform does not compile until every field is supplied.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::errors::SocialsanError;
use crate::platform::SocialPlatform;

/// Maximum allowed length for a pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Matches a bare `@handle` up to the first `/` or `?`.
const AT_HANDLE_PATTERN: &str = r"^@([^/?]+)";

/// The uncompiled description of one platform.
///
/// `\w` is written as the ASCII class `[:word:]` so that only
/// `[A-Za-z0-9_]` counts as a word character. Literal hosts and path
/// prefixes sit in `(?-u:...)` groups so case folding stays ASCII: the
/// Kelvin sign `\u{212A}` must not match the `k` of `tiktok.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRule {
    /// Extraction patterns, tried in order. Capture group 1 is the handle.
    pub patterns: &'static [&'static str],
    /// Character class of characters to delete from the extracted handle.
    pub allowed_chars: &'static str,
    /// Hostname substrings, one of which must appear in the input.
    pub allowed_domains: &'static [&'static str],
    /// Platform username limit, in characters.
    pub max_length: Option<usize>,
    /// Display label.
    pub name: &'static str,
}

/// Returns the raw rule for a platform.
pub fn platform_rule(platform: SocialPlatform) -> PlatformRule {
    match platform {
        SocialPlatform::Youtube => PlatformRule {
            patterns: &[
                r"^(?:.*\.)?(?-u:youtube\.com|youtu\.be)/(?-u:channel/|c/|user/|@)?([^/?]+)",
                AT_HANDLE_PATTERN,
            ],
            allowed_chars: r"[^[:word:].\-]",
            allowed_domains: &["youtube.com", "youtu.be"],
            max_length: Some(30),
            name: "YouTube",
        },
        SocialPlatform::Twitter => PlatformRule {
            patterns: &[r"^(?:.*\.)?(?-u:twitter\.com|x\.com)/([^/?]+)", AT_HANDLE_PATTERN],
            allowed_chars: r"[^[:word:]]",
            allowed_domains: &["twitter.com", "x.com"],
            max_length: Some(15),
            name: "X/Twitter",
        },
        SocialPlatform::Linkedin => PlatformRule {
            patterns: &[r"^(?:.*\.)?(?-u:linkedin\.com)/(?-u:in/)?([^/?]+)"],
            allowed_chars: r"[^[:word:]\-]",
            allowed_domains: &["linkedin.com"],
            max_length: Some(30),
            name: "LinkedIn",
        },
        SocialPlatform::Instagram => PlatformRule {
            patterns: &[r"^(?:.*\.)?(?-u:instagram\.com)/([^/?]+)", AT_HANDLE_PATTERN],
            allowed_chars: r"[^[:word:].]",
            allowed_domains: &["instagram.com"],
            max_length: Some(30),
            name: "Instagram",
        },
        SocialPlatform::Tiktok => PlatformRule {
            patterns: &[r"^(?:.*\.)?(?-u:tiktok\.com)/@?([^/?]+)", AT_HANDLE_PATTERN],
            allowed_chars: r"[^[:word:].]",
            allowed_domains: &["tiktok.com"],
            max_length: Some(24),
            name: "TikTok",
        },
    }
}

/// A compiled, ready-to-use platform configuration.
#[derive(Debug)]
pub struct PlatformConfig {
    pub platform: SocialPlatform,
    /// Case-insensitive extraction patterns; first match wins.
    pub patterns: Vec<Regex>,
    /// Characters matched by this regex are stripped from the handle.
    pub allowed_chars: Regex,
    pub allowed_domains: &'static [&'static str],
    pub max_length: Option<usize>,
    pub name: &'static str,
}

impl PlatformConfig {
    /// True if `input` mentions one of the platform's domains, ignoring case.
    pub fn matches_domain(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        self.allowed_domains.iter().any(|domain| lowered.contains(domain))
    }

    /// Capture group 1 of the first matching pattern, or `input` untouched
    /// when no pattern matches.
    pub fn extract<'a>(&self, input: &'a str) -> &'a str {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(input))
            .and_then(|caps| caps.get(1))
            .map_or(input, |group| group.as_str())
    }
}

fn compile_pattern(
    platform: SocialPlatform,
    pattern: &str,
    case_insensitive: bool,
) -> Result<Regex, SocialsanError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(SocialsanError::PatternLengthExceeded(
            platform.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .size_limit(1 << 20)
        .build()
        .map_err(|source| SocialsanError::PatternCompilation {
            platform: platform.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

/// Compiles a [`PlatformRule`] into a [`PlatformConfig`].
pub fn compile_platform_rule(
    platform: SocialPlatform,
    rule: PlatformRule,
) -> Result<PlatformConfig, SocialsanError> {
    debug!(
        "Compiling {} extraction pattern(s) for platform '{}'.",
        rule.patterns.len(),
        platform
    );

    let patterns = rule
        .patterns
        .iter()
        .map(|pattern| compile_pattern(platform, pattern, true))
        .collect::<Result<Vec<_>, _>>()?;
    // Case folding would widen `[:word:]` beyond ASCII, so the filter is
    // compiled case-sensitively.
    let allowed_chars = compile_pattern(platform, rule.allowed_chars, false)?;

    log::debug!(
        target: "socialsan_core::registry",
        "Platform '{}' compiled successfully.",
        platform
    );

    Ok(PlatformConfig {
        platform,
        patterns,
        allowed_chars,
        allowed_domains: rule.allowed_domains,
        max_length: rule.max_length,
        name: rule.name,
    })
}

/// One compiled configuration per social platform.
struct Registry {
    youtube: PlatformConfig,
    twitter: PlatformConfig,
    linkedin: PlatformConfig,
    instagram: PlatformConfig,
    tiktok: PlatformConfig,
}

fn builtin(platform: SocialPlatform) -> PlatformConfig {
    // The built-in table is fixed at compile time; failing here is a bug in
    // `platform_rule`, covered by the tests below.
    compile_platform_rule(platform, platform_rule(platform))
        .unwrap_or_else(|e| panic!("built-in platform table is invalid: {e}"))
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry {
    youtube: builtin(SocialPlatform::Youtube),
    twitter: builtin(SocialPlatform::Twitter),
    linkedin: builtin(SocialPlatform::Linkedin),
    instagram: builtin(SocialPlatform::Instagram),
    tiktok: builtin(SocialPlatform::Tiktok),
});

/// Returns the compiled configuration for a social platform.
pub fn lookup(platform: SocialPlatform) -> &'static PlatformConfig {
    let registry = &*REGISTRY;
    match platform {
        SocialPlatform::Youtube => &registry.youtube,
        SocialPlatform::Twitter => &registry.twitter,
        SocialPlatform::Linkedin => &registry.linkedin,
        SocialPlatform::Instagram => &registry.instagram,
        SocialPlatform::Tiktok => &registry.tiktok,
    }
}
