use std::{fmt::Display, time::Duration};

use serde::Serialize;

use super::EnrichedProject;

/// The message used when a failure carries no description.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while fetching projects";

/// The projects retained by one load.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    /// The featured projects, enriched with their README.
    pub featured: Vec<EnrichedProject>,

    /// The learning modules, never enriched.
    pub modules: Vec<EnrichedProject>,
}

impl LoadResult {
    /// Creates a new `LoadResult`.
    pub fn new(featured: Vec<EnrichedProject>, modules: Vec<EnrichedProject>) -> Self {
        Self { featured, modules }
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.modules.is_empty()
    }
}

/// Whether the last load failed.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub has_error: bool,
    pub message: String,
}

impl ErrorState {
    /// An error state with no error.
    pub fn none() -> Self {
        Self::default()
    }

    /// An error state carrying the given message, or the default one if it is blank.
    pub fn failed(message: &str) -> Self {
        let message = match message.trim() {
            "" => DEFAULT_ERROR_MESSAGE,
            message => message,
        };

        Self {
            has_error: true,
            message: message.to_string(),
        }
    }
}

/// Whether a load is in flight.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: true }
    }
}

/// The state published by the loader, replaced as a whole on every publication.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderSnapshot {
    /// The sequence number of the load that produced this snapshot.
    pub generation: u64,

    /// The retained projects.
    pub result: LoadResult,

    /// The error state.
    pub error: ErrorState,

    /// The loading state.
    pub loading: LoadingState,
}

impl LoaderSnapshot {
    /// The snapshot published when a load starts.
    pub fn loading(generation: u64) -> Self {
        Self {
            generation,
            result: LoadResult::default(),
            error: ErrorState::none(),
            loading: LoadingState { is_loading: true },
        }
    }

    /// The snapshot published when a load succeeds.
    pub fn loaded(generation: u64, result: LoadResult) -> Self {
        Self {
            generation,
            result,
            error: ErrorState::none(),
            loading: LoadingState { is_loading: false },
        }
    }

    /// The snapshot published when the listing fetch fails.
    pub fn failed(generation: u64, message: &str) -> Self {
        Self {
            generation,
            result: LoadResult::default(),
            error: ErrorState::failed(message),
            loading: LoadingState { is_loading: false },
        }
    }
}

impl Display for LoaderSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Snapshot #{}: loading={}, error={}, featured={}, modules={}",
            self.generation,
            self.loading.is_loading,
            self.error.has_error,
            self.result.featured.len(),
            self.result.modules.len()
        )
    }
}

/// The severity of a notification.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Info,
    Error,
}

/// A transient notification raised to the user.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub status: NotificationStatus,
    pub duration: Duration,
    pub is_closable: bool,
}

impl Notification {
    /// The notification raised when a load fails.
    pub fn load_failed(error: &ErrorState) -> Self {
        Self {
            title: "Error".to_string(),
            description: error.message.clone(),
            status: NotificationStatus::Error,
            duration: Duration::from_secs(5),
            is_closable: true,
        }
    }
}
