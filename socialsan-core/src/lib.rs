// socialsan-core/src/lib.rs
//! # SocialSan Core Library
//!
//! `socialsan-core` normalizes the identifiers partners attach to their
//! profiles: social-media handles for YouTube, X/Twitter, LinkedIn,
//! Instagram and TikTok, and website URLs. It also carries the small amount
//! of logic needed to backfill YouTube handles from the YouTube Data API and
//! to plan a cleanup run over stored records.
//!
//! The normalization functions are pure and stateless. They never fail;
//! input that cannot be normalized yields `None`.
//!
//! ## Modules
//!
//! * `platform`: The closed `PlatformType` / `SocialPlatform` enumerations.
//! * `registry`: The static per-platform pattern table and its compiler.
//! * `handle`: The handle normalization pipeline.
//! * `website`: Website URL validation and coercion.
//! * `lookup`: Per-platform lookups and the flat polyfill view of a record list.
//! * `youtube`: YouTube channel schema, handle derivation and HTTP client.
//! * `migration`: Record-level cleanup planning.
//! * `errors`: The crate error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use socialsan_core::{sanitize_social_handle, sanitize_website, SocialPlatform};
//!
//! let handle = sanitize_social_handle(
//!     Some("https://www.linkedin.com/in/johndoe/"),
//!     SocialPlatform::Linkedin,
//! );
//! assert_eq!(handle.as_deref(), Some("johndoe"));
//!
//! let site = sanitize_website(Some("example.com"));
//! assert_eq!(site.as_deref(), Some("https://example.com/"));
//! ```
//!
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod handle;
pub mod lookup;
pub mod migration;
pub mod platform;
pub mod registry;
pub mod website;
pub mod youtube;

/// Re-exports the custom error type for clear error reporting.
pub use errors::{Result, SocialsanError};

pub use platform::{PlatformType, SocialPlatform};

pub use registry::{PlatformConfig, PlatformRule};

/// Re-exports the normalization entry points.
pub use handle::{sanitize_identifier, sanitize_social_handle};
pub use website::sanitize_website;

pub use lookup::{
    build_social_platform_lookup,
    polyfill_social_media_fields,
    HasIdentifier,
    HasPlatformType,
    PlatformMap,
    SocialMediaFields,
};

pub use youtube::{ChannelResolver, YoutubeChannel, YoutubeClient};

pub use migration::{
    apply_plan,
    needs_migration,
    plan_record,
    MigrationAction,
    MigrationEntry,
    MigrationOutcome,
    MigrationReport,
    PartnerPlatform,
};
