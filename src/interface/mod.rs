mod fetcher;
mod loader;
mod publisher;

pub use fetcher::*;
pub use loader::*;
pub use publisher::*;
