use crate::LoaderSnapshot;

/// A trait for loading the showcased projects.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProjectLoader: Sync + Send {
    /// Runs the whole pipeline and returns the snapshot it produced.
    async fn load(&self) -> LoaderSnapshot;

    /// Runs the pipeline again, replacing the previous state.
    async fn refresh(&self) -> LoaderSnapshot;
}
