mod enricher_readme;
mod fetcher_github_rest;
mod fetcher_raw_readme;
mod fetcher_timeout;
mod loader_pipeline;
mod notifier_log;
mod publisher_memory;

pub use enricher_readme::*;
pub use fetcher_github_rest::*;
pub use fetcher_raw_readme::*;
pub use fetcher_timeout::*;
pub use loader_pipeline::*;
pub use notifier_log::*;
pub use publisher_memory::*;
