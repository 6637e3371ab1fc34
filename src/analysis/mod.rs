pub mod event_classifier;
pub mod calendar;
pub mod streak;
pub mod repo_aggregator;
pub mod language_distributor;
pub mod quality_scorer;
pub mod pipeline;

pub use calendar::{contribution_level, CalendarBuilder};
pub use event_classifier::classify_events;
pub use language_distributor::distribute_languages;
pub use pipeline::{ActivitySnapshot, MetricsPipeline};
pub use quality_scorer::{QualityScorer, QualityWeights};
pub use repo_aggregator::aggregate_repositories;
pub use streak::calculate_streaks;
