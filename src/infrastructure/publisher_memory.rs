use log::debug;
use tokio::sync::RwLock;

use crate::{LoaderSnapshot, PortfolioView, StatePublisher};

/// Keeps the latest published snapshot in memory.
///
/// A snapshot older than the one currently held is discarded, so that when loads overlap
/// the most recently started one wins.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<LoaderSnapshot>,
}

impl SnapshotStore {
    /// Creates a new `SnapshotStore` in the loading state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a copy of the current snapshot.
    pub async fn snapshot(&self) -> LoaderSnapshot {
        self.current.read().await.clone()
    }

    /// Projects the current snapshot for the presentation layer.
    pub async fn view(&self) -> PortfolioView {
        PortfolioView::from(&*self.current.read().await)
    }
}

#[async_trait::async_trait]
impl StatePublisher for SnapshotStore {
    async fn publish(&self, snapshot: LoaderSnapshot) -> bool {
        let mut current = self.current.write().await;
        if snapshot.generation < current.generation {
            debug!(
                "Discarding stale snapshot #{} (current #{})",
                snapshot.generation, current.generation
            );
            return false;
        }
        debug!("Publishing {snapshot}");
        *current = snapshot;

        true
    }
}
