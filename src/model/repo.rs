use anyhow::{Context, Result};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::github::RawRepo;
use crate::render::{Tag, Value};

use super::release::{CachedRelease, Release, sort_releases};

/// A repository that publishes packages.
#[derive(Debug, Clone, PartialEq)]
pub struct Repo {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub homepage_url: Option<String>,
    pub github_url: String,
    /// Unix seconds.
    pub updated_at: i64,
    /// Fetch order. Rendering sorts a copy newest first.
    pub releases: Vec<Release>,
}

/// On-disk shape of a [`Repo`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedRepo {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub homepage_url: Option<String>,
    pub github_url: String,
    pub releases: Vec<CachedRelease>,
    pub updated_at: i64,
}

impl Repo {
    pub fn from_raw(raw: &RawRepo) -> Result<Self> {
        let updated_at = DateTime::parse_from_rfc3339(&raw.updated_at)
            .with_context(|| {
                format!(
                    "Invalid updatedAt {:?} for {}/{}",
                    raw.updated_at, raw.owner.login, raw.name
                )
            })?
            .timestamp();

        let releases = raw
            .releases
            .iter()
            .map(Release::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: raw.name.clone(),
            owner: raw.owner.login.clone(),
            description: raw.description.clone(),
            homepage_url: Some(raw.homepage_url.clone()).filter(|url| !url.is_empty()),
            github_url: raw.url.clone(),
            updated_at,
            releases,
        })
    }

    /// `owner/name`, lowercased.
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name).to_lowercase()
    }

    pub fn to_cache(&self) -> CachedRepo {
        CachedRepo {
            name: self.name.clone(),
            owner: self.owner.clone(),
            description: self.description.clone(),
            homepage_url: self.homepage_url.clone(),
            github_url: self.github_url.clone(),
            releases: self.releases.iter().map(Release::to_cache).collect(),
            updated_at: self.updated_at,
        }
    }

    pub fn from_cache(cached: CachedRepo) -> Self {
        Self {
            name: cached.name,
            owner: cached.owner,
            description: cached.description,
            homepage_url: cached.homepage_url,
            github_url: cached.github_url,
            updated_at: cached.updated_at,
            releases: cached.releases.into_iter().map(Release::from_cache).collect(),
        }
    }

    pub fn to_render_value(&self) -> Value {
        let releases = sort_releases(&self.releases)
            .into_iter()
            .map(Release::to_render_value)
            .collect::<Vec<_>>();

        Value::record([
            ("name", Value::from(self.name.as_str())),
            ("owner", Value::from(self.owner.as_str())),
            ("description", Value::from(self.description.as_str())),
            (
                "homepage",
                Value::url_or(self.homepage_url.as_deref(), "NoHomepage"),
            ),
            ("github", Tag::with("Url", self.github_url.as_str()).into()),
            ("updatedAt", Value::from(self.updated_at)),
            ("releases", Value::List(releases)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{RawAsset, RawOwner, RawRelease};
    use crate::render::render;

    fn raw_repo(homepage: &str) -> RawRepo {
        RawRepo {
            name: "Roc-Parser".into(),
            owner: RawOwner {
                login: "SubtleSplendor".into(),
            },
            description: "A parser".into(),
            homepage_url: homepage.into(),
            url: "https://github.com/SubtleSplendor/Roc-Parser".into(),
            updated_at: "2024-01-01T00:00:10Z".into(),
            releases: vec![
                RawRelease {
                    tag_name: "v0.1.0".into(),
                    url: "https://github.com/r/0.1.0".into(),
                    assets: vec![],
                    published_at: "2021-01-01T00:00:00Z".into(),
                },
                RawRelease {
                    tag_name: "v0.3.0".into(),
                    url: "https://github.com/r/0.3.0".into(),
                    assets: vec![RawAsset {
                        url: "https://x/abcdefghijklmnopqrstuvwxyz0123456789ABCDEFG.tar.br"
                            .into(),
                    }],
                    published_at: "2023-06-01T00:00:00Z".into(),
                },
                RawRelease {
                    tag_name: "v0.2.0".into(),
                    url: "https://github.com/r/0.2.0".into(),
                    assets: vec![],
                    published_at: "2022-03-01T00:00:00Z".into(),
                },
            ],
        }
    }

    #[test]
    fn test_from_raw() {
        let repo = Repo::from_raw(&raw_repo("https://example.com")).unwrap();
        assert_eq!(repo.name, "Roc-Parser");
        assert_eq!(repo.owner, "SubtleSplendor");
        assert_eq!(repo.homepage_url.as_deref(), Some("https://example.com"));
        assert_eq!(repo.updated_at, 1_704_067_210);
        assert_eq!(repo.id(), "subtlesplendor/roc-parser");
        // fetch order is kept in the domain model
        let versions: Vec<&str> = repo.releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["0.1.0", "0.3.0", "0.2.0"]);
    }

    #[test]
    fn test_empty_homepage_is_absent() {
        let repo = Repo::from_raw(&raw_repo("")).unwrap();
        assert_eq!(repo.homepage_url, None);
        assert!(render(&repo.to_render_value()).contains("homepage : NoHomepage,"));
    }

    #[test]
    fn test_homepage_renders_as_url_tag() {
        let repo = Repo::from_raw(&raw_repo("https://example.com")).unwrap();
        assert!(
            render(&repo.to_render_value()).contains("homepage : Url \"https://example.com\",")
        );
    }

    #[test]
    fn test_from_raw_propagates_release_errors() {
        let mut raw = raw_repo("");
        raw.releases[1].published_at = "not a date".into();
        assert!(Repo::from_raw(&raw).is_err());
    }

    #[test]
    fn test_render_sorts_releases_newest_first() {
        let repo = Repo::from_raw(&raw_repo("")).unwrap();
        let rendered = render(&repo.to_render_value());
        let p3 = rendered.find("\"0.3.0\"").unwrap();
        let p2 = rendered.find("\"0.2.0\"").unwrap();
        let p1 = rendered.find("\"0.1.0\"").unwrap();
        assert!(p3 < p2 && p2 < p1);
        // the stored order is untouched
        assert_eq!(repo.releases[0].version, "0.1.0");
    }

    #[test]
    fn test_cache_round_trip() {
        let repo = Repo::from_raw(&raw_repo("")).unwrap();
        assert_eq!(Repo::from_cache(repo.to_cache()), repo);
    }

    #[test]
    fn test_cache_keys() {
        let repo = Repo::from_raw(&raw_repo("")).unwrap();
        let json = serde_json::to_value(repo.to_cache()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "description",
                "github_url",
                "homepage_url",
                "name",
                "owner",
                "releases",
                "updated_at"
            ]
        );
        assert!(json["homepage_url"].is_null());
        assert_eq!(json["updated_at"], 1_704_067_210);
    }
}
