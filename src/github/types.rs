use serde::{Deserialize, Serialize};

/// One hit of `gh search repos --json=fullName`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SearchHit {
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawOwner {
    pub login: String,
}

/// Repository as reported by `gh repo view`, with its releases attached.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRepo {
    pub name: String,
    pub owner: RawOwner,
    pub description: String,
    pub homepage_url: String,
    pub url: String,
    /// ISO 8601
    pub updated_at: String,
    /// Not part of the `gh repo view` response; filled in after the release fetch.
    #[serde(default)]
    pub releases: Vec<RawRelease>,
}

/// Represents a release asset as reported by `gh release view`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawAsset {
    pub url: String,
}

/// Represents a release as reported by `gh release view`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRelease {
    pub tag_name: String,
    pub url: String,
    pub assets: Vec<RawAsset>,
    /// ISO 8601
    pub published_at: String,
}
