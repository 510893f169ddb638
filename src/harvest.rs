//! Nested fetch of repository metadata: repo -> releases -> release detail.

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::command::CommandRunner;
use crate::discovery::discover_identifiers;
use crate::github::{GitHub, RawRelease, RawRepo};
use crate::model::Dataset;

/// Repository fields with the full release list attached.
#[tracing::instrument(skip(github))]
pub async fn fetch_repo<C: CommandRunner>(github: &GitHub<'_, C>, repo_id: &str) -> Result<RawRepo> {
    info!("Getting info for {}.", repo_id);
    let mut repo = github.view_repo(repo_id).await?;
    repo.releases = fetch_releases(github, repo_id).await?;
    Ok(repo)
}

/// One call to list the tags, then one call per tag for its detail.
#[tracing::instrument(skip(github))]
pub async fn fetch_releases<C: CommandRunner>(
    github: &GitHub<'_, C>,
    repo_id: &str,
) -> Result<Vec<RawRelease>> {
    info!("Getting releases for {}.", repo_id);
    let tags = github.list_release_tags(repo_id).await?;

    let mut releases = Vec::with_capacity(tags.len());
    for tag in &tags {
        info!("Getting info for release {} in {}.", tag, repo_id);
        releases.push(github.view_release(repo_id, tag).await?);
    }
    Ok(releases)
}

/// Discover every repository and fetch it, in identifier order.
pub async fn harvest_dataset<C: CommandRunner>(github: &GitHub<'_, C>) -> Result<Dataset> {
    let ids = discover_identifiers(github).await?;

    let mut raw_repos = Vec::with_capacity(ids.len());
    for id in &ids {
        raw_repos.push(fetch_repo(github, id).await?);
    }

    let dataset =
        Dataset::from_raw(&raw_repos, Utc::now()).context("Failed to normalize repositories")?;
    info!(
        "Harvested {} repos with {} releases.",
        dataset.repos.len(),
        dataset.release_count()
    );
    Ok(dataset)
}
