use crate::{AccountName, RepositoryName, RepositoryRecord, StdResult};

/// A trait for listing the repositories of an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches all the repositories owned by the account.
    async fn fetch_repositories(&self, account: &AccountName) -> StdResult<Vec<RepositoryRecord>>;
}

/// A trait for fetching the README document of a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReadmeFetcher: Sync + Send {
    /// Fetches the raw README text of the repository.
    async fn fetch_readme(
        &self,
        account: &AccountName,
        repository: &RepositoryName,
    ) -> StdResult<String>;
}
