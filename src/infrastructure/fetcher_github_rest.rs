use anyhow::anyhow;
use log::{debug, info};
use reqwest::{Client, header::ACCEPT};

use crate::{AccountName, FetcherError, RepositoryFetcher, RepositoryRecord, StdResult};

/// User-Agent header value for API requests.
pub const USER_AGENT_VALUE: &str = "portfolio-loader";

/// Builds the HTTP client shared by the fetchers.
pub(crate) fn build_http_client() -> StdResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .build()
        .map_err(|e| anyhow!(FetcherError::from(e)))
}

/// Lists the repositories of an account with the GitHub REST API.
pub struct GitHubRestFetcher {
    client: Client,
    endpoint: String,
}

impl GitHubRestFetcher {
    /// Creates a new `GitHubRestFetcher` instance for the given API endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        Ok(Self {
            client: build_http_client()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn repositories_url(&self, account: &AccountName) -> String {
        format!("{}/users/{}/repos", self.endpoint, account)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GitHubRestFetcher {
    async fn fetch_repositories(&self, account: &AccountName) -> StdResult<Vec<RepositoryRecord>> {
        let url = self.repositories_url(account);
        debug!("Fetching repositories from {url}");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
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
        let body = response
            .text()
            .await
            .map_err(|e| anyhow!(FetcherError::from(e)))?;
        let repositories = serde_json::from_str::<Vec<RepositoryRecord>>(&body)
            .map_err(|e| anyhow!(FetcherError::Parse(e.to_string())))?;
        info!("Fetched {} repositories for {account}", repositories.len());

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn account() -> AccountName {
        AccountName("ArpanChaudhary".to_string())
    }

    fn mock_json_value() -> serde_json::Value {
        json!([
            {
                "name": "ThinkML_v1",
                "description": "A machine learning toolkit",
                "html_url": "https://github.com/ArpanChaudhary/ThinkML_v1",
                "language": "Python",
                "topics": ["ml"],
                "stargazers_count": 12,
                "forks_count": 3,
                "private": false
            },
            {
                "name": "RandomRepo",
                "description": null,
                "html_url": "https://github.com/ArpanChaudhary/RandomRepo",
                "language": null,
                "topics": [],
                "stargazers_count": 0,
                "forks_count": 0
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_repositories() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/users/ArpanChaudhary/repos")
                .header("User-Agent", USER_AGENT_VALUE);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_json_value());
        });
        let fetcher = GitHubRestFetcher::try_new(&server.base_url()).unwrap();

        let repositories = fetcher.fetch_repositories(&account()).await.unwrap();

        mock.assert();
        assert_eq!(
            vec![
                RepositoryRecord {
                    description: Some("A machine learning toolkit".to_string()),
                    language: Some("Python".to_string()),
                    topics: vec!["ml".to_string()],
                    stargazers_count: Some(12),
                    forks_count: Some(3),
                    ..RepositoryRecord::new(
                        "ThinkML_v1",
                        "https://github.com/ArpanChaudhary/ThinkML_v1"
                    )
                },
                RepositoryRecord {
                    stargazers_count: Some(0),
                    forks_count: Some(0),
                    ..RepositoryRecord::new(
                        "RandomRepo",
                        "https://github.com/ArpanChaudhary/RandomRepo"
                    )
                },
            ],
            repositories
        );
    }

    #[tokio::test]
    async fn test_fetch_repositories_fails_on_non_success_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/users/ArpanChaudhary/repos");
            then.status(403).body("API rate limit exceeded");
        });
        let fetcher = GitHubRestFetcher::try_new(&server.base_url()).unwrap();

        let error = fetcher
            .fetch_repositories(&account())
            .await
            .expect_err("Fetch should fail on a non-success status");

        mock.assert();
        assert!(matches!(
            error.downcast_ref::<FetcherError>(),
            Some(FetcherError::Status { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_repositories_fails_on_malformed_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/users/ArpanChaudhary/repos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "message": "Not Found" }));
        });
        let fetcher = GitHubRestFetcher::try_new(&server.base_url()).unwrap();

        let error = fetcher
            .fetch_repositories(&account())
            .await
            .expect_err("Fetch should fail on a malformed body");

        mock.assert();
        assert!(matches!(
            error.downcast_ref::<FetcherError>(),
            Some(FetcherError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_repositories_fails_when_unreachable() {
        let fetcher = GitHubRestFetcher::try_new("http://127.0.0.1:1").unwrap();

        let error = fetcher
            .fetch_repositories(&account())
            .await
            .expect_err("Fetch should fail when the host is unreachable");

        assert!(matches!(
            error.downcast_ref::<FetcherError>(),
            Some(FetcherError::Transport(_))
        ));
    }
}
