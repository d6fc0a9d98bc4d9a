// socialsan-core/src/platform.rs
//! The closed set of partner platform types.
//!
//! [`PlatformType`] is what partner records carry. [`SocialPlatform`] is the
//! same set without `website`, and is the only type the handle registry
//! accepts, so a website lookup cannot be expressed.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SocialsanError;

/// Every platform a partner record can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Website,
    Youtube,
    Twitter,
    Linkedin,
    Instagram,
    Tiktok,
}

impl PlatformType {
    /// All platform types, in the order used for flat field output.
    pub const ALL: [PlatformType; 6] = [
        PlatformType::Website,
        PlatformType::Youtube,
        PlatformType::Twitter,
        PlatformType::Linkedin,
        PlatformType::Instagram,
        PlatformType::Tiktok,
    ];

    /// The lowercase wire tag.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformType::Website => "website",
            PlatformType::Youtube => "youtube",
            PlatformType::Twitter => "twitter",
            PlatformType::Linkedin => "linkedin",
            PlatformType::Instagram => "instagram",
            PlatformType::Tiktok => "tiktok",
        }
    }

    /// Returns the social platform for this type, or `None` for `website`.
    pub fn as_social(self) -> Option<SocialPlatform> {
        match self {
            PlatformType::Website => None,
            PlatformType::Youtube => Some(SocialPlatform::Youtube),
            PlatformType::Twitter => Some(SocialPlatform::Twitter),
            PlatformType::Linkedin => Some(SocialPlatform::Linkedin),
            PlatformType::Instagram => Some(SocialPlatform::Instagram),
            PlatformType::Tiktok => Some(SocialPlatform::Tiktok),
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformType {
    type Err = SocialsanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        PlatformType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SocialsanError::UnknownPlatform(tag.to_string()))
    }
}

/// A platform whose identifiers are handles rather than URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Youtube,
    Twitter,
    Linkedin,
    Instagram,
    Tiktok,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Youtube,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Instagram,
        SocialPlatform::Tiktok,
    ];

    pub fn as_str(self) -> &'static str {
        PlatformType::from(self).as_str()
    }
}

impl From<SocialPlatform> for PlatformType {
    fn from(platform: SocialPlatform) -> Self {
        match platform {
            SocialPlatform::Youtube => PlatformType::Youtube,
            SocialPlatform::Twitter => PlatformType::Twitter,
            SocialPlatform::Linkedin => PlatformType::Linkedin,
            SocialPlatform::Instagram => PlatformType::Instagram,
            SocialPlatform::Tiktok => PlatformType::Tiktok,
        }
    }
}

impl TryFrom<PlatformType> for SocialPlatform {
    type Error = SocialsanError;

    fn try_from(platform: PlatformType) -> Result<Self, Self::Error> {
        platform.as_social().ok_or(SocialsanError::NotASocialPlatform)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = SocialsanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PlatformType>()?.try_into()
    }
}
