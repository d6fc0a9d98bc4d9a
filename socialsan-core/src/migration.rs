// socialsan-core/src/migration.rs
//! Partner platform migration planning.
//!
//! Decides, record by record, what a cleanup run should do with a stored
//! platform identifier, and applies those decisions to an in-memory record
//! list. Storage is the caller's concern.
//!
//! Policy:
//! * a normalizable identifier is rewritten to its canonical form,
//! * an identifier that cannot be normalized is deleted, unless the record
//!   has been verified, in which case it is kept as is,
//! * a YouTube `/channel/<id>` identifier is replaced by the channel's
//!   handle when a [`ChannelResolver`] can supply one, and skipped otherwise.
//!
//! License: MIT OR APACHE 2.0

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::handle::sanitize_social_handle;
use crate::lookup::{HasIdentifier, HasPlatformType};
use crate::platform::{PlatformType, SocialPlatform};
use crate::website::sanitize_website;
use crate::youtube::{channel_id_from_identifier, ChannelResolver};

/// A platform identifier stored against a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPlatform {
    pub id: String,
    #[serde(rename = "type")]
    pub platform_type: PlatformType,
    pub identifier: String,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

impl PartnerPlatform {
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }
}

impl HasPlatformType for PartnerPlatform {
    fn platform_type(&self) -> PlatformType {
        self.platform_type
    }
}

impl HasIdentifier for PartnerPlatform {
    fn identifier(&self) -> Option<&str> {
        Some(&self.identifier)
    }
}

/// What to do with one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MigrationAction {
    /// Replace the identifier.
    Update { to: String },
    /// Already canonical.
    Unchanged,
    /// Invalid and unverified.
    Delete,
    /// Invalid but verified, so it is left alone.
    KeepVerified,
    /// Could not be decided this run.
    Skip { reason: String },
}

/// Only website records that are not yet absolute URLs are selected; every
/// social record is.
pub fn needs_migration(record: &PartnerPlatform) -> bool {
    !(record.platform_type == PlatformType::Website && record.identifier.starts_with("http"))
}

fn settle(record: &PartnerPlatform, sanitized: Option<String>) -> MigrationAction {
    match sanitized {
        Some(value) if value == record.identifier => MigrationAction::Unchanged,
        Some(value) => MigrationAction::Update { to: value },
        None if record.is_verified() => MigrationAction::KeepVerified,
        None => MigrationAction::Delete,
    }
}

fn plan_channel_backfill(channel_id: &str, resolver: Option<&dyn ChannelResolver>) -> MigrationAction {
    let Some(resolver) = resolver else {
        return MigrationAction::Skip {
            reason: "no YouTube API key configured".to_string(),
        };
    };

    match resolver.resolve_handle(channel_id) {
        Ok(Some(handle)) => MigrationAction::Update { to: handle },
        Ok(None) => MigrationAction::Skip {
            reason: format!("no custom URL found for YouTube channel {channel_id}"),
        },
        Err(e) => MigrationAction::Skip {
            reason: format!("failed to fetch YouTube channel {channel_id}: {e}"),
        },
    }
}

/// Decides what to do with a single record.
pub fn plan_record(record: &PartnerPlatform, resolver: Option<&dyn ChannelResolver>) -> MigrationAction {
    let Some(platform) = record.platform_type.as_social() else {
        return settle(record, sanitize_website(Some(&record.identifier)));
    };

    if platform == SocialPlatform::Youtube {
        if let Some(channel_id) = channel_id_from_identifier(&record.identifier) {
            debug!("Record {} references YouTube channel '{}'", record.id, channel_id);
            return plan_channel_backfill(channel_id, resolver);
        }
    }

    settle(record, sanitize_social_handle(Some(&record.identifier), platform))
}

/// Per-action counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub examined: usize,
    pub not_selected: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub deleted: usize,
    pub kept_verified: usize,
    pub skipped: usize,
}

impl MigrationReport {
    fn record(&mut self, action: &MigrationAction) {
        match action {
            MigrationAction::Update { .. } => self.updated += 1,
            MigrationAction::Unchanged => self.unchanged += 1,
            MigrationAction::Delete => self.deleted += 1,
            MigrationAction::KeepVerified => self.kept_verified += 1,
            MigrationAction::Skip { .. } => self.skipped += 1,
        }
    }
}

/// A planned action together with the record it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub platform_type: PlatformType,
    pub identifier: String,
    #[serde(flatten)]
    pub action: MigrationAction,
}

/// The result of [`apply_plan`].
#[derive(Debug, Clone, Default)]
pub struct MigrationOutcome {
    /// Records after the run: deleted ones removed, updated ones rewritten.
    pub records: Vec<PartnerPlatform>,
    /// One entry per selected record, in input order.
    pub entries: Vec<MigrationEntry>,
    pub report: MigrationReport,
}

/// Plans every selected record and applies the plan to the list.
pub fn apply_plan(
    records: Vec<PartnerPlatform>,
    resolver: Option<&dyn ChannelResolver>,
) -> MigrationOutcome {
    let mut outcome = MigrationOutcome {
        records: Vec::with_capacity(records.len()),
        ..Default::default()
    };

    for mut record in records {
        outcome.report.examined += 1;
        if !needs_migration(&record) {
            outcome.report.not_selected += 1;
            outcome.records.push(record);
            continue;
        }

        let action = plan_record(&record, resolver);
        outcome.report.record(&action);
        outcome.entries.push(MigrationEntry {
            id: record.id.clone(),
            platform_type: record.platform_type,
            identifier: record.identifier.clone(),
            action: action.clone(),
        });

        match action {
            MigrationAction::Update { to } => {
                info!("Updated {} identifier: {} -> {}", record.platform_type, record.identifier, to);
                record.identifier = to;
                outcome.records.push(record);
            }
            MigrationAction::Delete => {
                info!("Deleted invalid platform identifier: {}", record.identifier);
            }
            MigrationAction::KeepVerified => {
                warn!("NOT DELETING VERIFIED PLATFORM {}: {}", record.id, record.identifier);
                outcome.records.push(record);
            }
            MigrationAction::Skip { reason } => {
                warn!("Skipped platform {} ({}): {}", record.id, record.identifier, reason);
                outcome.records.push(record);
            }
            MigrationAction::Unchanged => outcome.records.push(record),
        }
    }

    debug!("Migration finished: {:?}", outcome.report);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Result, SocialsanError};

    fn record(id: &str, platform_type: PlatformType, identifier: &str, verified: bool) -> PartnerPlatform {
        PartnerPlatform {
            id: id.to_string(),
            platform_type,
            identifier: identifier.to_string(),
            verified_at: verified.then(Utc::now),
        }
    }

    struct StaticResolver(Option<&'static str>);

    impl ChannelResolver for StaticResolver {
        fn resolve_handle(&self, _channel_id: &str) -> Result<Option<String>> {
            Ok(self.0.map(str::to_owned))
        }
    }

    struct FailingResolver;

    impl ChannelResolver for FailingResolver {
        fn resolve_handle(&self, _channel_id: &str) -> Result<Option<String>> {
            Err(SocialsanError::YoutubeApi { status: 403, body: "quota".into() })
        }
    }

    #[test]
    fn test_plan_website() {
        let r = record("1", PlatformType::Website, "dub.co", false);
        assert_eq!(plan_record(&r, None), MigrationAction::Update { to: "https://dub.co/".into() });

        let r = record("2", PlatformType::Website, "no website", false);
        assert_eq!(plan_record(&r, None), MigrationAction::Delete);
    }

    #[test]
    fn test_verified_records_are_never_deleted() {
        let r = record("1", PlatformType::Twitter, "@dubdotco", true);
        assert_eq!(plan_record(&r, None), MigrationAction::KeepVerified);

        let r = record("2", PlatformType::Twitter, "@dubdotco", false);
        assert_eq!(plan_record(&r, None), MigrationAction::Delete);
    }

    #[test]
    fn test_canonical_identifier_is_unchanged() {
        // A canonical handle only survives re-sanitizing if it still names the domain.
        let r = record("1", PlatformType::Instagram, "instagram.com", false);
        assert_eq!(plan_record(&r, None), MigrationAction::Unchanged);
    }

    #[test]
    fn test_youtube_channel_backfill() {
        let r = record("1", PlatformType::Youtube, "https://youtube.com/channel/UC123", false);
        let found = StaticResolver(Some("dubdotco"));
        assert_eq!(plan_record(&r, Some(&found)), MigrationAction::Update { to: "dubdotco".into() });

        let missing = StaticResolver(None);
        assert!(matches!(plan_record(&r, Some(&missing)), MigrationAction::Skip { .. }));
        assert!(matches!(plan_record(&r, Some(&FailingResolver)), MigrationAction::Skip { reason } if reason.contains("403")));
        assert!(matches!(plan_record(&r, None), MigrationAction::Skip { .. }));
    }

    #[test]
    fn test_apply_plan_rewrites_records() {
        let records = vec![
            record("keep", PlatformType::Website, "https://already.example", false),
            record("upd", PlatformType::Linkedin, "https://www.linkedin.com/in/johndoe/", false),
            record("del", PlatformType::Tiktok, "garbage", false),
            record("ver", PlatformType::Tiktok, "garbage", true),
        ];
        let outcome = apply_plan(records, None);

        let ids: Vec<&str> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["keep", "upd", "ver"]);
        assert_eq!(outcome.records[1].identifier, "johndoe");
        assert_eq!(outcome.entries.len(), 3);
        assert_eq!(
            outcome.report,
            MigrationReport {
                examined: 4,
                not_selected: 1,
                updated: 1,
                deleted: 1,
                kept_verified: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_entry_serializes_flat_action() {
        let entry = MigrationEntry {
            id: "1".into(),
            platform_type: PlatformType::Twitter,
            identifier: "twitter.com/a".into(),
            action: MigrationAction::Update { to: "a".into() },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "type": "twitter", "identifier": "twitter.com/a", "action": "update", "to": "a" })
        );
    }
}
