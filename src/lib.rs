//! Loads the projects showcased on a portfolio page.
//!
//! The repositories of an account are listed, filtered against the featured and learning
//! module allow-lists, and the featured ones are enriched with their README. The outcome is
//! published as a [`LoaderSnapshot`] that the presentation layer projects into a
//! [`PortfolioView`].

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
