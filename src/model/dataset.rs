use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::RawRepo;
use crate::render::Value;

use super::repo::{CachedRepo, Repo};

/// The whole harvested corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Ordered by identifier at acquisition time; loading keeps the stored order.
    pub repos: Vec<Repo>,
    pub updated_at: DateTime<Utc>,
}

/// On-disk shape of a [`Dataset`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedDataset {
    pub repos: Vec<CachedRepo>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Dataset {
    /// An empty corpus stamped with the current time.
    pub fn empty() -> Self {
        Self {
            repos: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn from_raw(raw_repos: &[RawRepo], updated_at: DateTime<Utc>) -> Result<Self> {
        let repos = raw_repos
            .iter()
            .map(Repo::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { repos, updated_at })
    }

    pub fn release_count(&self) -> usize {
        self.repos.iter().map(|r| r.releases.len()).sum()
    }

    pub fn to_cache(&self) -> CachedDataset {
        CachedDataset {
            repos: self.repos.iter().map(Repo::to_cache).collect(),
            updated_at: self.updated_at,
        }
    }

    pub fn from_cache(cached: CachedDataset) -> Self {
        Self {
            repos: cached.repos.into_iter().map(Repo::from_cache).collect(),
            updated_at: cached.updated_at,
        }
    }

    pub fn to_render_value(&self) -> Value {
        Value::record([
            (
                "repos",
                Value::List(self.repos.iter().map(Repo::to_render_value).collect()),
            ),
            (
                "updatedAt",
                Value::from(self.updated_at.format("%Y-%m-%d").to_string()),
            ),
        ])
    }
}
