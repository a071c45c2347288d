mod config;
mod entities;
mod error;
mod state;
mod view;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use state::*;
pub use view::*;
