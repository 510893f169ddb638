use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::RawRelease;
use crate::render::{Tag, Value};

use super::bundle::first_bundle_url;

/// One published version of a package.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    /// Tag with a leading `v` removed.
    pub version: String,
    pub url: String,
    /// First asset that looks like a package bundle.
    pub asset_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// On-disk shape of a [`Release`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedRelease {
    pub version: String,
    pub url: String,
    pub asset_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Release {
    pub fn from_raw(raw: &RawRelease) -> Result<Self> {
        let published_at = DateTime::parse_from_rfc3339(&raw.published_at)
            .with_context(|| {
                format!(
                    "Invalid publishedAt {:?} for release {}",
                    raw.published_at, raw.tag_name
                )
            })?
            .with_timezone(&Utc);

        Ok(Self {
            version: strip_version_prefix(&raw.tag_name).to_string(),
            url: raw.url.clone(),
            asset_url: first_bundle_url(raw.assets.iter().map(|a| a.url.as_str()))
                .map(str::to_string),
            published_at,
        })
    }

    pub fn to_cache(&self) -> CachedRelease {
        CachedRelease {
            version: self.version.clone(),
            url: self.url.clone(),
            asset_url: self.asset_url.clone(),
            published_at: self.published_at,
        }
    }

    pub fn from_cache(cached: CachedRelease) -> Self {
        Self {
            version: cached.version,
            url: cached.url,
            asset_url: cached.asset_url,
            published_at: cached.published_at,
        }
    }

    pub fn to_render_value(&self) -> Value {
        Value::record([
            ("version", Value::from(self.version.as_str())),
            (
                "asset",
                Value::url_or(self.asset_url.as_deref(), "NoAssetUrl"),
            ),
            ("url", Tag::with("Url", self.url.as_str()).into()),
            ("publishedAt", Value::from(self.published_at.timestamp())),
        ])
    }
}

/// Drop a single leading `v` from a release tag.
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Newest first. Ties keep their relative order.
pub fn sort_releases(releases: &[Release]) -> Vec<&Release> {
    let mut sorted: Vec<&Release> = releases.iter().collect();
    sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    sorted
}
