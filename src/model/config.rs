use std::time::Duration;

use super::{AccountName, AllowList};

/// The listing API production endpoint.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The raw content production endpoint.
pub const GITHUB_RAW_ENDPOINT: &str = "https://raw.githubusercontent.com";

/// The account whose repositories are showcased.
pub const DEFAULT_ACCOUNT: &str = "ArpanChaudhary";

/// The repositories shown as featured projects.
pub const FEATURED_PROJECTS: [&str; 4] = ["ThinkML_v1", "ThinkML_v2", "ThinkMLApp_v1", "CARDIOPREDICT"];

/// The repositories shown as learning modules.
pub const LEARNING_MODULES: [&str; 4] = ["Numpy", "Pandas", "Python", "Visualization"];

/// The branch the README is read from.
pub const README_BRANCH: &str = "main";

/// The README file name.
pub const README_FILE: &str = "README.md";

/// The timeout applied to every request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The configuration of the project loader, built once at the composition root.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub account: AccountName,
    pub featured: AllowList,
    pub modules: AllowList,
    pub api_endpoint: String,
    pub raw_endpoint: String,
    pub readme_branch: String,
    pub readme_file: String,
    pub request_timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            account: AccountName(DEFAULT_ACCOUNT.to_string()),
            featured: AllowList::new(&FEATURED_PROJECTS),
            modules: AllowList::new(&LEARNING_MODULES),
            api_endpoint: GITHUB_API_ENDPOINT.to_string(),
            raw_endpoint: GITHUB_RAW_ENDPOINT.to_string(),
            readme_branch: README_BRANCH.to_string(),
            readme_file: README_FILE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
