use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

/// The name of a repository.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of the account owning the repositories.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountName(pub String);

impl Deref for AccountName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository as returned by the listing endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// The name of the repository, unique per account.
    pub name: RepositoryName,

    /// The description of the repository.
    #[serde(default)]
    pub description: Option<String>,

    /// The canonical URL of the repository.
    pub html_url: String,

    /// The homepage configured for the repository.
    #[serde(default)]
    pub homepage: Option<String>,

    /// The primary language of the repository.
    #[serde(default)]
    pub language: Option<String>,

    /// The topic labels of the repository.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,

    /// The number of stars the repository has.
    #[serde(default)]
    pub stargazers_count: Option<u32>,

    /// The number of forks the repository has.
    #[serde(default)]
    pub forks_count: Option<u32>,
}

impl RepositoryRecord {
    /// Creates a new `RepositoryRecord` with only a name and URL set.
    pub fn new(name: &str, html_url: &str) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            description: None,
            html_url: html_url.to_string(),
            homepage: None,
            language: None,
            topics: vec![],
            stargazers_count: None,
            forks_count: None,
        }
    }

    /// Creates a dummy `RepositoryRecord` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(name: &str) -> Self {
        Self {
            description: Some(format!("{name} description")),
            language: Some("Python".to_string()),
            topics: vec!["machine-learning".to_string()],
            stargazers_count: Some(3),
            forks_count: Some(1),
            ..Self::new(name, &format!("https://github.com/dummy/{name}"))
        }
    }
}

impl Display for RepositoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Language: {}, Stars: {}",
            self.name,
            self.language.as_deref().unwrap_or("-"),
            self.stargazers_count.unwrap_or_default()
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The outcome of fetching the README of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeOutcome {
    /// The README was fetched.
    Content(String),

    /// The README does not exist or could not be fetched.
    Missing,
}

impl From<ReadmeOutcome> for Option<String> {
    fn from(outcome: ReadmeOutcome) -> Self {
        match outcome {
            ReadmeOutcome::Content(content) => Some(content),
            ReadmeOutcome::Missing => None,
        }
    }
}

/// A repository with the README content attached when available.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProject {
    #[serde(flatten)]
    record: RepositoryRecord,

    #[serde(skip_serializing_if = "Option::is_none")]
    readme_content: Option<String>,
}

impl EnrichedProject {
    /// Creates an `EnrichedProject` from a record and the outcome of its README fetch.
    pub fn new(record: RepositoryRecord, readme: ReadmeOutcome) -> Self {
        Self {
            record,
            readme_content: readme.into(),
        }
    }

    /// Creates an `EnrichedProject` that is not enriched.
    pub fn bare(record: RepositoryRecord) -> Self {
        Self::new(record, ReadmeOutcome::Missing)
    }

    /// Retrieves the repository record.
    pub fn record(&self) -> &RepositoryRecord {
        &self.record
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.record.name
    }

    /// Retrieves the README content, if any.
    pub fn readme_content(&self) -> Option<&str> {
        self.readme_content.as_deref()
    }
}

/// An ordered set of repository names used as an inclusion filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(Vec<String>);

impl AllowList {
    /// Creates a new `AllowList` from the given names.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self(names.iter().map(|name| name.as_ref().to_string()).collect())
    }

    /// Checks whether a name is allowed. The comparison is exact and case-sensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|allowed| allowed == name)
    }

    /// Keeps the records allowed by this list, preserving their order.
    pub fn filter(&self, records: &[RepositoryRecord]) -> Vec<RepositoryRecord> {
        records
            .iter()
            .filter(|record| self.contains(&record.name))
            .cloned()
            .collect()
    }

    /// Retrieves the allowed names.
    pub fn names(&self) -> &[String] {
        &self.0
    }
}
