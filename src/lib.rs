pub mod crawlers;
pub mod domain;
pub mod models;
pub mod notifier;
pub mod processing;
pub mod repository;

/// Default similarity percentage a posting must reach to be reported.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 65.0;
