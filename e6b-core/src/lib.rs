//! Randomly generated E6B flight computer problems.

pub mod catalog;
pub use catalog::{Catalog, CatalogError, CatalogFilter, Level, ProblemKey, Side};

pub mod config;
pub use config::GeneratorConfig;

pub mod format;

pub mod params;

mod problem;
pub use problem::Problem;

pub mod problems;

pub mod range;
