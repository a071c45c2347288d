use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use log::warn;
use tokio::time::timeout;

use crate::{
    AccountName, FetcherError, ReadmeFetcher, RepositoryFetcher, RepositoryName, RepositoryRecord,
    StdResult,
};

/// A fetcher wrapper that fails any call not settled within a fixed duration.
pub struct FetcherTimeout<F: ?Sized> {
    /// The fetcher to be bounded.
    fetcher: Arc<F>,

    /// The maximum duration of a call.
    timeout: Duration,
}

impl<F: ?Sized> FetcherTimeout<F> {
    /// Creates a new `FetcherTimeout` instance with the given timeout.
    pub fn new(fetcher: Arc<F>, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for FetcherTimeout<dyn RepositoryFetcher> {
    async fn fetch_repositories(&self, account: &AccountName) -> StdResult<Vec<RepositoryRecord>> {
        match timeout(self.timeout, self.fetcher.fetch_repositories(account)).await {
            Ok(res) => res,
            Err(_) => {
                warn!("Listing repositories of {account} timed out after {:?}", self.timeout);
                Err(anyhow!(FetcherError::Timeout(self.timeout)))
            }
        }
    }
}

#[async_trait::async_trait]
impl ReadmeFetcher for FetcherTimeout<dyn ReadmeFetcher> {
    async fn fetch_readme(
        &self,
        account: &AccountName,
        repository: &RepositoryName,
    ) -> StdResult<String> {
        match timeout(self.timeout, self.fetcher.fetch_readme(account, repository)).await {
            Ok(res) => res,
            Err(_) => Err(anyhow!(FetcherError::Timeout(self.timeout))),
        }
    }
}
