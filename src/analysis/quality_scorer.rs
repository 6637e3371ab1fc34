use crate::models::{QualityBreakdown, QualityRating, QualityReport, RepoStats};

pub struct QualityScorer {
    weights: QualityWeights,
}

#[derive(Debug, Clone)]
pub struct QualityWeights {
    pub engagement_weight: f64,
    pub activity_weight: f64,
    pub diversity_weight: f64,
    pub impact_weight: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            engagement_weight: 0.40,
            activity_weight: 0.30,
            diversity_weight: 0.20,
            impact_weight: 0.10,
        }
    }
}

/// Picks the commit figure the score is based on: the calendar total when one
/// is available and non-zero, otherwise the event-derived approximation.
pub fn authoritative_commit_count(calendar_total: Option<u32>, event_commits: u32) -> u32 {
    calendar_total
        .filter(|&total| total > 0)
        .unwrap_or(event_commits)
}

fn capped(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

impl QualityScorer {
    pub fn new() -> Self {
        Self {
            weights: QualityWeights::default(),
        }
    }

    pub fn breakdown(&self, stats: &RepoStats, commit_count: u32) -> QualityBreakdown {
        if stats.total_owned_repos == 0 {
            return QualityBreakdown::default();
        }

        let repos = stats.total_owned_repos as f64;

        // 1. Engagement: per-repo stars, forks and watchers
        let star_ratio = stats.total_stars as f64 / repos;
        let fork_ratio = stats.total_forks as f64 / repos;
        let watch_ratio = stats.total_watchers as f64 / repos;
        let engagement =
            (capped(star_ratio * 20.0) + capped(fork_ratio * 30.0) + capped(watch_ratio * 25.0))
                / 3.0;

        // 2. Activity: commits (100 saturates) and repository count (10 saturates)
        let activity =
            (capped(commit_count as f64 / 100.0 * 100.0) + capped(repos / 10.0 * 100.0)) / 2.0;

        // 3. Diversity: public presence and language count
        let public_presence = if stats.public_repos > 0 { 100.0 } else { 50.0 };
        let diversity = (public_presence + capped(stats.language_count() as f64 * 15.0)) / 2.0;

        // 4. Impact
        let impact = capped(((stats.total_stars + stats.total_forks) as f64).sqrt() * 10.0);

        QualityBreakdown {
            star_ratio,
            fork_ratio,
            watch_ratio,
            engagement,
            activity,
            diversity,
            impact,
        }
    }

    /// Composite score in `0..=100`; zero when no repositories are owned.
    pub fn score(&self, stats: &RepoStats, commit_count: u32) -> u8 {
        if stats.total_owned_repos == 0 {
            return 0;
        }

        let b = self.breakdown(stats, commit_count);
        let weighted = b.engagement * self.weights.engagement_weight
            + b.activity * self.weights.activity_weight
            + b.diversity * self.weights.diversity_weight
            + b.impact * self.weights.impact_weight;

        capped(weighted.round()) as u8
    }

    pub fn report(&self, stats: &RepoStats, commit_count: u32) -> QualityReport {
        let score = self.score(stats, commit_count);
        tracing::debug!("Quality score {} from {} commits", score, commit_count);

        QualityReport {
            score,
            rating: QualityRating::from_score(score),
            commit_count,
            breakdown: self.breakdown(stats, commit_count),
        }
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new()
    }
}
