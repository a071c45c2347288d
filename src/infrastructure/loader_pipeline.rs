use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use log::{debug, info, warn};

use crate::{
    AccountName, AllowList, EnrichedProject, FetcherTimeout, GitHubRestFetcher, LoadResult,
    LoaderConfig, LoaderSnapshot, Notification, Notifier, ProjectLoader, RawReadmeFetcher,
    ReadmeEnricher, ReadmeFetcher, RepositoryFetcher, StatePublisher, StdResult,
};

/// Loads the showcased projects: lists the account repositories, keeps the allow-listed ones
/// and attaches the README of the featured ones.
pub struct PipelineLoader {
    account: AccountName,
    featured: AllowList,
    modules: AllowList,
    fetcher: Arc<dyn RepositoryFetcher>,
    enricher: ReadmeEnricher,
    publisher: Arc<dyn StatePublisher>,
    notifier: Arc<dyn Notifier>,
    generation: AtomicU64,
}

impl PipelineLoader {
    /// Creates a new `PipelineLoader` instance with the given collaborators.
    pub fn new(
        config: &LoaderConfig,
        fetcher: Arc<dyn RepositoryFetcher>,
        readme_fetcher: Arc<dyn ReadmeFetcher>,
        publisher: Arc<dyn StatePublisher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            account: config.account.clone(),
            featured: config.featured.clone(),
            modules: config.modules.clone(),
            fetcher,
            enricher: ReadmeEnricher::new(readme_fetcher),
            publisher,
            notifier,
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a new `PipelineLoader` instance talking to the endpoints of the configuration.
    pub fn try_new(
        config: &LoaderConfig,
        publisher: Arc<dyn StatePublisher>,
        notifier: Arc<dyn Notifier>,
    ) -> StdResult<Self> {
        let fetcher: Arc<dyn RepositoryFetcher> =
            Arc::new(GitHubRestFetcher::try_new(&config.api_endpoint)?);
        let readme_fetcher: Arc<dyn ReadmeFetcher> = Arc::new(RawReadmeFetcher::try_new(
            &config.raw_endpoint,
            &config.readme_branch,
            &config.readme_file,
        )?);

        Ok(Self::new(
            config,
            Arc::new(FetcherTimeout::new(fetcher, config.request_timeout)),
            Arc::new(FetcherTimeout::new(readme_fetcher, config.request_timeout)),
            publisher,
            notifier,
        ))
    }

    async fn load_result(&self) -> StdResult<LoadResult> {
        let records = self.fetcher.fetch_repositories(&self.account).await?;
        let featured = self.featured.filter(&records);
        let modules = self
            .modules
            .filter(&records)
            .into_iter()
            .map(EnrichedProject::bare)
            .collect::<Vec<_>>();
        debug!(
            "Retained {} featured projects and {} modules out of {} repositories",
            featured.len(),
            modules.len(),
            records.len()
        );
        let featured = self.enricher.enrich(&self.account, featured).await;

        Ok(LoadResult::new(featured, modules))
    }
}

#[async_trait::async_trait]
impl ProjectLoader for PipelineLoader {
    async fn load(&self) -> LoaderSnapshot {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Loading projects of {} (#{generation})", self.account);
        self.publisher
            .publish(LoaderSnapshot::loading(generation))
            .await;

        let snapshot = match self.load_result().await {
            Ok(result) => LoaderSnapshot::loaded(generation, result),
            Err(e) => LoaderSnapshot::failed(generation, &e.to_string()),
        };
        if self.publisher.publish(snapshot.clone()).await {
            if snapshot.error.has_error {
                self.notifier
                    .notify(&Notification::load_failed(&snapshot.error));
            }
            info!("{snapshot}");
        } else {
            warn!("Load #{generation} was superseded by a more recent one");
        }

        snapshot
    }

    async fn refresh(&self) -> LoaderSnapshot {
        info!("Refreshing projects of {}", self.account);
        self.load().await
    }
}
