use std::sync::Arc;

use log::{info, warn};

use crate::{
    AccountName, EnrichedProject, ReadmeFetcher, ReadmeOutcome, RepositoryName, RepositoryRecord,
};

/// Attaches README content to projects, fetching all of them concurrently.
pub struct ReadmeEnricher {
    fetcher: Arc<dyn ReadmeFetcher>,
}

impl ReadmeEnricher {
    /// Creates a new `ReadmeEnricher` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn ReadmeFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches the README of one repository. A failure is absorbed into `ReadmeOutcome::Missing`.
    pub async fn fetch_outcome(
        &self,
        account: &AccountName,
        repository: &RepositoryName,
    ) -> ReadmeOutcome {
        fetch_outcome(self.fetcher.as_ref(), account, repository).await
    }

    /// Enriches every record, keeping the input order whatever the completion order.
    pub async fn enrich(
        &self,
        account: &AccountName,
        records: Vec<RepositoryRecord>,
    ) -> Vec<EnrichedProject> {
        let handles = records
            .iter()
            .map(|record| {
                let fetcher = Arc::clone(&self.fetcher);
                let account = account.clone();
                let repository = record.name.clone();
                tokio::spawn(
                    async move { fetch_outcome(fetcher.as_ref(), &account, &repository).await },
                )
            })
            .collect::<Vec<_>>();

        let mut projects = Vec::with_capacity(records.len());
        for (record, handle) in records.into_iter().zip(handles) {
            let outcome = handle.await.unwrap_or_else(|e| {
                warn!("README task for {} did not complete: {e}", record.name);
                ReadmeOutcome::Missing
            });
            projects.push(EnrichedProject::new(record, outcome));
        }
        let total_enriched = projects
            .iter()
            .filter(|project| project.readme_content().is_some())
            .count();
        info!("Enriched {total_enriched}/{} projects", projects.len());

        projects
    }
}

async fn fetch_outcome(
    fetcher: &dyn ReadmeFetcher,
    account: &AccountName,
    repository: &RepositoryName,
) -> ReadmeOutcome {
    match fetcher.fetch_readme(account, repository).await {
        Ok(content) => ReadmeOutcome::Content(content),
        Err(e) => {
            warn!("Could not fetch README for {repository}: {e}");
            ReadmeOutcome::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::anyhow;
    use chrono::Utc;
    use mockall::predicate::{always, eq};
    use tokio::time::sleep;

    use crate::{MockReadmeFetcher, StdResult};

    use super::*;

    fn account() -> AccountName {
        AccountName("ArpanChaudhary".to_string())
    }

    fn name(name: &str) -> RepositoryName {
        RepositoryName(name.to_string())
    }

    /// Answers after a delay that depends on the repository, panics for `Panicking`.
    struct DelayedReadmeFetcher;

    #[async_trait::async_trait]
    impl ReadmeFetcher for DelayedReadmeFetcher {
        async fn fetch_readme(
            &self,
            _account: &AccountName,
            repository: &RepositoryName,
        ) -> StdResult<String> {
            match repository.as_str() {
                "Slow" => sleep(Duration::from_millis(300)).await,
                "Panicking" => panic!("README fetch panicked"),
                _ => sleep(Duration::from_millis(10)).await,
            }

            Ok(format!("# {repository}"))
        }
    }

    #[tokio::test]
    async fn fetch_outcome_absorbs_failure() {
        let fetcher = {
            let mut fetcher = MockReadmeFetcher::new();
            fetcher
                .expect_fetch_readme()
                .returning(|_, _| Err(anyhow!("404 Not Found")))
                .times(1);

            fetcher
        };
        let enricher = ReadmeEnricher::new(Arc::new(fetcher));

        let outcome = enricher.fetch_outcome(&account(), &name("ThinkML_v1")).await;

        assert_eq!(ReadmeOutcome::Missing, outcome);
    }

    #[tokio::test]
    async fn enrich_isolates_single_failure() {
        let fetcher = {
            let mut fetcher = MockReadmeFetcher::new();
            fetcher
                .expect_fetch_readme()
                .with(always(), eq(name("ThinkML_v1")))
                .returning(|_, _| Err(anyhow!("404 Not Found")))
                .times(1);
            fetcher
                .expect_fetch_readme()
                .with(always(), eq(name("ThinkML_v2")))
                .returning(|_, _| Ok("# v2".to_string()))
                .times(1);
            fetcher
                .expect_fetch_readme()
                .with(always(), eq(name("CARDIOPREDICT")))
                .returning(|_, _| Ok("# Hi".to_string()))
                .times(1);

            fetcher
        };
        let enricher = ReadmeEnricher::new(Arc::new(fetcher));
        let records = vec![
            RepositoryRecord::dummy("ThinkML_v1"),
            RepositoryRecord::dummy("ThinkML_v2"),
            RepositoryRecord::dummy("CARDIOPREDICT"),
        ];

        let projects = enricher.enrich(&account(), records).await;

        assert_eq!(
            vec![
                EnrichedProject::new(RepositoryRecord::dummy("ThinkML_v1"), ReadmeOutcome::Missing),
                EnrichedProject::new(
                    RepositoryRecord::dummy("ThinkML_v2"),
                    ReadmeOutcome::Content("# v2".to_string())
                ),
                EnrichedProject::new(
                    RepositoryRecord::dummy("CARDIOPREDICT"),
                    ReadmeOutcome::Content("# Hi".to_string())
                ),
            ],
            projects
        );
    }

    #[tokio::test]
    async fn enrich_keeps_input_order_when_completion_order_differs() {
        let enricher = ReadmeEnricher::new(Arc::new(DelayedReadmeFetcher));
        let records = vec![
            RepositoryRecord::dummy("Slow"),
            RepositoryRecord::dummy("Fast"),
        ];

        let projects = enricher.enrich(&account(), records).await;

        assert_eq!(
            vec![Some("# Slow"), Some("# Fast")],
            projects
                .iter()
                .map(|project| project.readme_content())
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn enrich_absorbs_panicking_task() {
        let enricher = ReadmeEnricher::new(Arc::new(DelayedReadmeFetcher));
        let records = vec![
            RepositoryRecord::dummy("Panicking"),
            RepositoryRecord::dummy("Fast"),
        ];

        let projects = enricher.enrich(&account(), records).await;

        assert_eq!(None, projects[0].readme_content());
        assert_eq!(Some("# Fast"), projects[1].readme_content());
    }

    #[tokio::test]
    async fn enrich_fetches_concurrently() {
        let now = Utc::now();
        let enricher = ReadmeEnricher::new(Arc::new(DelayedReadmeFetcher));
        let records = vec![
            RepositoryRecord::dummy("Slow"),
            RepositoryRecord::dummy("Slow"),
            RepositoryRecord::dummy("Slow"),
            RepositoryRecord::dummy("Slow"),
        ];

        let projects = enricher.enrich(&account(), records).await;

        assert_eq!(4, projects.len());
        assert!(now + chrono::Duration::milliseconds(900) > Utc::now());
    }

    #[tokio::test]
    async fn enrich_nothing() {
        let enricher = ReadmeEnricher::new(Arc::new(MockReadmeFetcher::new()));

        let projects = enricher.enrich(&account(), vec![]).await;

        assert!(projects.is_empty());
    }
}
