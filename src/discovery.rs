//! Discovery of the repositories to harvest.

use anyhow::Result;
use log::info;
use std::collections::BTreeSet;

use crate::command::CommandRunner;
use crate::github::GitHub;

/// Merge search results with the allow-list and remove the deny-list.
///
/// Identifiers are compared lowercased; the result is sorted and unique.
/// Deny-list removal happens after the union, so an identifier on both
/// lists is excluded.
pub fn reconcile<I, S>(
    found: I,
    allow_list: &BTreeSet<String>,
    deny_list: &BTreeSet<String>,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let denied: BTreeSet<String> = deny_list.iter().map(|id| id.to_lowercase()).collect();

    let merged: BTreeSet<String> = found
        .into_iter()
        .map(|id| id.as_ref().to_lowercase())
        .chain(allow_list.iter().map(|id| id.to_lowercase()))
        .collect();

    merged.difference(&denied).cloned().collect()
}

/// Search by language and by topic, then [`reconcile`] with the configured lists.
#[tracing::instrument(skip(github))]
pub async fn discover_identifiers<C: CommandRunner>(github: &GitHub<'_, C>) -> Result<Vec<String>> {
    info!("Getting repo ids.");
    let mut found = github.search_by_language().await?;
    found.extend(github.search_by_topic().await?);

    let config = github.config();
    let ids = reconcile(found, &config.allow_list, &config.deny_list);
    info!("Found {} repos.", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MockCommandRunner;
    use crate::config::HarvestConfig;
    use mockall::Sequence;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reconcile_dedupes_case_insensitively() {
        let ids = reconcile(["Foo/Bar"], &set(&["foo/bar"]), &set(&[]));
        assert_eq!(ids, vec!["foo/bar"]);
    }

    #[test]
    fn test_reconcile_deny_list_wins_over_allow_list() {
        let ids = reconcile(
            ["a/one", "B/Two"],
            &set(&["c/three", "d/four"]),
            &set(&["d/four", "b/two"]),
        );
        assert_eq!(ids, vec!["a/one", "c/three"]);
    }

    #[test]
    fn test_reconcile_deny_list_is_case_insensitive() {
        let ids = reconcile(["Roc-Lang/Roc"], &set(&[]), &set(&["ROC-LANG/roc"]));
        assert!(ids.is_empty());
    }

    #[test]
    fn test_reconcile_sorted() {
        let ids = reconcile(["z/z", "a/b", "m/n", "a/a"], &set(&[]), &set(&[]));
        assert_eq!(ids, vec!["a/a", "a/b", "m/n", "z/z"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_discover_identifiers() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .withf(|args| args.iter().any(|a| a == "--language=roc"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(r#"[{"fullName":"Foo/Bar"},{"fullName":"x/denied"}]"#.into()));
        runner
            .expect_run()
            .withf(|args| args.iter().any(|a| a == "--topic=roc-lang"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(r#"[{"fullName":"foo/bar"},{"fullName":"Topic/Only"}]"#.into()));

        let config = HarvestConfig {
            allow_list: set(&["allowed/repo", "x/denied"]),
            deny_list: set(&["x/denied"]),
            ..HarvestConfig::empty()
        };
        let github = GitHub::new(&runner, &config);
        let ids = discover_identifiers(&github).await.unwrap();
        assert_eq!(ids, vec!["allowed/repo", "foo/bar", "topic/only"]);
    }

    #[tokio::test]
    async fn test_discover_identifiers_search_failure_aborts() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("gh failed")));

        let config = HarvestConfig::empty();
        let github = GitHub::new(&runner, &config);
        assert!(discover_identifiers(&github).await.is_err());
    }
}
