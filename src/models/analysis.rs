use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contribution::{ContributionSummary, WeeklyActivityDay};
use super::user::Account;

/// Repository and account totals, derived from the owned repositories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RepoStats {
    pub total_owned_repos: u32,
    pub public_repos: u32,
    pub private_repos: u32,
    pub forked_repos: u32,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,
    pub total_size_kb: u64,
    /// Distinct languages in first-seen order.
    pub languages: Vec<String>,
    pub followers: u32,
    pub following: u32,
    pub public_gists: u32,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub recent_commits_from_events: u32,
}

impl RepoStats {
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct QualityBreakdown {
    pub star_ratio: f64,
    pub fork_ratio: f64,
    pub watch_ratio: f64,
    pub engagement: f64,
    pub activity: f64,
    pub diversity: f64,
    pub impact: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QualityRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl QualityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => QualityRating::Excellent,
            60..=79 => QualityRating::Good,
            40..=59 => QualityRating::Fair,
            20..=39 => QualityRating::Poor,
            _ => QualityRating::VeryPoor,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "Outstanding code quality and community engagement",
            QualityRating::Good => "Good practices with room for improvement",
            QualityRating::Fair => "Moderate quality, consider improving engagement",
            QualityRating::Poor => "Needs significant improvement",
            QualityRating::VeryPoor => "Critical areas need attention",
        }
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityRating::Excellent => write!(f, "Excellent"),
            QualityRating::Good => write!(f, "Good"),
            QualityRating::Fair => write!(f, "Fair"),
            QualityRating::Poor => write!(f, "Poor"),
            QualityRating::VeryPoor => write!(f, "Very Poor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityReport {
    pub score: u8,
    pub rating: QualityRating,
    pub commit_count: u32,
    pub breakdown: QualityBreakdown,
}

/// Everything the dashboard view shows for one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub account: Account,
    pub stats: RepoStats,
    pub contributions: ContributionSummary,
    pub languages: Vec<LanguageShare>,
    pub weekly_activity: Vec<WeeklyActivityDay>,
    pub quality: QualityReport,
    pub recent_commit_count: u32,
    pub recent_repositories: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
