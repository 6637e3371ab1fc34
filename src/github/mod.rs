pub mod client;
pub mod paginator;
pub mod source;

pub use client::GitHubClient;
pub use paginator::Paginator;
pub use source::ActivitySource;
