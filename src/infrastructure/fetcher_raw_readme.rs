use anyhow::anyhow;
use log::debug;
use reqwest::Client;

use super::fetcher_github_rest::build_http_client;
use crate::{AccountName, FetcherError, ReadmeFetcher, RepositoryName, StdResult};

/// Fetches README documents from the raw content host.
pub struct RawReadmeFetcher {
    client: Client,
    endpoint: String,
    branch: String,
    file_name: String,
}

impl RawReadmeFetcher {
    /// Creates a new `RawReadmeFetcher` reading `file_name` on `branch` of each repository.
    pub fn try_new(endpoint: &str, branch: &str, file_name: &str) -> StdResult<Self> {
        Ok(Self {
            client: build_http_client()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            branch: branch.to_string(),
            file_name: file_name.to_string(),
        })
    }

    fn readme_url(&self, account: &AccountName, repository: &RepositoryName) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.endpoint, account, repository, self.branch, self.file_name
        )
    }
}

#[async_trait::async_trait]
impl ReadmeFetcher for RawReadmeFetcher {
    async fn fetch_readme(
        &self,
        account: &AccountName,
        repository: &RepositoryName,
    ) -> StdResult<String> {
        let url = self.readme_url(account, repository);
        debug!("Fetching README from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!(FetcherError::from(e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!(FetcherError::Status {
                status: status.as_u16(),
                url,
            }));
        }

        response
            .text()
            .await
            .map_err(|e| anyhow!(FetcherError::from(e)))
    }
}
