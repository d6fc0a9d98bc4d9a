// socialsan-core/src/lookup.rs
//! Per-platform views over a partner's list of platform records.
//!
//! [`PlatformMap`] holds one value per [`PlatformType`], so every lookup is
//! total. [`polyfill_social_media_fields`] flattens a record list into the
//! legacy `{ website, youtube, ... }` shape.

use serde::{Deserialize, Serialize};

use crate::platform::PlatformType;

/// Anything tagged with a platform type.
pub trait HasPlatformType {
    fn platform_type(&self) -> PlatformType;
}

/// A platform record that carries an identifier.
pub trait HasIdentifier: HasPlatformType {
    fn identifier(&self) -> Option<&str>;
}

/// One value per platform type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMap<V> {
    pub website: V,
    pub youtube: V,
    pub twitter: V,
    pub linkedin: V,
    pub instagram: V,
    pub tiktok: V,
}

impl<V> PlatformMap<V> {
    /// Builds a map by calling `f` once per platform.
    pub fn from_fn(mut f: impl FnMut(PlatformType) -> V) -> Self {
        Self {
            website: f(PlatformType::Website),
            youtube: f(PlatformType::Youtube),
            twitter: f(PlatformType::Twitter),
            linkedin: f(PlatformType::Linkedin),
            instagram: f(PlatformType::Instagram),
            tiktok: f(PlatformType::Tiktok),
        }
    }

    pub fn get(&self, platform: PlatformType) -> &V {
        match platform {
            PlatformType::Website => &self.website,
            PlatformType::Youtube => &self.youtube,
            PlatformType::Twitter => &self.twitter,
            PlatformType::Linkedin => &self.linkedin,
            PlatformType::Instagram => &self.instagram,
            PlatformType::Tiktok => &self.tiktok,
        }
    }

    pub fn get_mut(&mut self, platform: PlatformType) -> &mut V {
        match platform {
            PlatformType::Website => &mut self.website,
            PlatformType::Youtube => &mut self.youtube,
            PlatformType::Twitter => &mut self.twitter,
            PlatformType::Linkedin => &mut self.linkedin,
            PlatformType::Instagram => &mut self.instagram,
            PlatformType::Tiktok => &mut self.tiktok,
        }
    }

    /// Iterates in [`PlatformType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformType, &V)> {
        PlatformType::ALL.into_iter().map(move |platform| (platform, self.get(platform)))
    }
}

/// Flat, backward-compatible identifier fields.
pub type SocialMediaFields = PlatformMap<Option<String>>;

/// Maps every platform type to the record of that type, or `None`.
///
/// Duplicate types are not rejected: the last record of a type wins.
pub fn build_social_platform_lookup<T: HasPlatformType>(records: &[T]) -> PlatformMap<Option<&T>> {
    let mut lookup = PlatformMap::from_fn(|_| None);
    for record in records {
        *lookup.get_mut(record.platform_type()) = Some(record);
    }
    lookup
}

/// Projects [`build_social_platform_lookup`] down to each platform's identifier.
pub fn polyfill_social_media_fields<T: HasIdentifier>(records: &[T]) -> SocialMediaFields {
    let lookup = build_social_platform_lookup(records);
    PlatformMap::from_fn(|platform| {
        lookup
            .get(platform)
            .and_then(|record| record.identifier())
            .map(str::to_owned)
    })
}
