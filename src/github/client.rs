use anyhow::{Context, Result, anyhow};
use log::debug;

use crate::command::CommandRunner;
use crate::config::HarvestConfig;

use super::types::{RawRelease, RawRepo, SearchHit};

const REPO_FIELDS: &str = "description,homepageUrl,updatedAt,url,owner,name";
const RELEASE_FIELDS: &str = "tagName,assets,url,publishedAt";

/// Platform queries expressed as `gh` invocations.
///
/// Calls are issued one at a time; each successful call is followed by the
/// configured delay.
pub struct GitHub<'a, C: CommandRunner> {
    runner: &'a C,
    config: &'a HarvestConfig,
}

impl<'a, C: CommandRunner> GitHub<'a, C> {
    pub fn new(runner: &'a C, config: &'a HarvestConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &HarvestConfig {
        self.config
    }

    async fn call(&self, args: Vec<String>) -> Result<String> {
        let stdout = self.runner.run(&args).await?;
        if !self.config.api_delay.is_zero() {
            tokio::time::sleep(self.config.api_delay).await;
        }
        Ok(stdout)
    }

    async fn search(&self, filter: String) -> Result<Vec<String>> {
        let stdout = self
            .call(vec![
                "search".into(),
                "repos".into(),
                filter.clone(),
                format!("--limit={}", self.config.search_limit),
                "--json=fullName".into(),
            ])
            .await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&stdout)
            .with_context(|| format!("Failed to parse search results for {}", filter))?;
        Ok(hits.into_iter().map(|h| h.full_name).collect())
    }

    /// Repositories whose primary language is the configured one.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_language(&self) -> Result<Vec<String>> {
        self.search(format!("--language={}", self.config.language))
            .await
    }

    /// Repositories tagged with the configured topic.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_topic(&self) -> Result<Vec<String>> {
        self.search(format!("--topic={}", self.config.topic)).await
    }

    /// Repository-level fields; `releases` is left empty.
    #[tracing::instrument(skip(self))]
    pub async fn view_repo(&self, repo_id: &str) -> Result<RawRepo> {
        let stdout = self
            .call(vec![
                "repo".into(),
                "view".into(),
                repo_id.to_string(),
                format!("--json={}", REPO_FIELDS),
            ])
            .await?;
        serde_json::from_str(&stdout)
            .with_context(|| format!("Failed to parse repository info for {}", repo_id))
    }

    /// Release tags in the order `gh release list` prints them.
    #[tracing::instrument(skip(self))]
    pub async fn list_release_tags(&self, repo_id: &str) -> Result<Vec<String>> {
        let stdout = self
            .call(vec![
                "release".into(),
                "list".into(),
                format!("--repo={}", repo_id),
                format!("--limit={}", self.config.release_limit),
            ])
            .await?;
        let tags = parse_release_tags(&stdout)
            .with_context(|| format!("Failed to parse release list for {}", repo_id))?;
        debug!("Found {} release tags for {}", tags.len(), repo_id);
        Ok(tags)
    }

    #[tracing::instrument(skip(self))]
    pub async fn view_release(&self, repo_id: &str, tag: &str) -> Result<RawRelease> {
        let stdout = self
            .call(vec![
                "release".into(),
                "view".into(),
                tag.to_string(),
                format!("--repo={}", repo_id),
                format!("--json={}", RELEASE_FIELDS),
            ])
            .await?;
        serde_json::from_str(&stdout)
            .with_context(|| format!("Failed to parse release {} of {}", tag, repo_id))
    }
}

/// Extract tags from the tab-separated `gh release list` table.
///
/// Columns are title, type, tag, date; the tag is the third one.
pub fn parse_release_tags(stdout: &str) -> Result<Vec<String>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split('\t')
                .nth(2)
                .map(str::to_string)
                .ok_or_else(|| anyhow!("Missing tag column in release line: {:?}", line))
        })
        .collect()
}
