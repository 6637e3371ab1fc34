pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;

pub use config::{Config, MetricsConfig};
pub use error::{Error, Result};
pub use github::{ActivitySource, GitHubClient};
pub use analysis::MetricsPipeline;
