use chrono::{DateTime, NaiveDate, Utc};

use crate::analysis::calendar::{weekly_activity, CalendarBuilder};
use crate::analysis::event_classifier::{
    classify_events, merge_recent_commits, total_pushed_commits,
};
use crate::analysis::language_distributor::distribute_languages;
use crate::analysis::quality_scorer::{authoritative_commit_count, QualityScorer};
use crate::analysis::repo_aggregator::{aggregate_repositories, owned_repositories};
use crate::analysis::streak::calculate_streaks;
use crate::config::MetricsConfig;
use crate::error::Result;
use crate::github::ActivitySource;
use crate::models::{Account, ContributionSummary, Dashboard, RawEvent, Repository, SearchCommit};

const RECENT_REPOSITORIES: usize = 8;

/// Raw records for one account, already fetched.
#[derive(Debug, Clone)]
pub struct ActivitySnapshot {
    pub account: Account,
    pub repositories: Vec<Repository>,
    pub events: Vec<RawEvent>,
    pub search_commits: Vec<SearchCommit>,
}

pub struct MetricsPipeline<S: ActivitySource> {
    source: S,
    calendar: CalendarBuilder,
    scorer: QualityScorer,
    config: MetricsConfig,
}

impl<S: ActivitySource> MetricsPipeline<S> {
    pub fn new(source: S, config: MetricsConfig) -> Self {
        Self {
            source,
            calendar: CalendarBuilder::new(config.calendar_days),
            scorer: QualityScorer::new(),
            config,
        }
    }

    /// Fetches the account, then its repositories, events and commit search
    /// results concurrently. Commit search is best-effort.
    pub async fn fetch(&self) -> Result<ActivitySnapshot> {
        tracing::info!("Fetching account from {}", self.source.name());
        let account = self.source.fetch_account().await?;
        let handle = account.handle.as_str();

        let search = async {
            match self.source.search_commits(handle, self.config.search_limit).await {
                Ok(items) => Ok(items),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Commit search unavailable, using events only: {}", e);
                    Ok(Vec::new())
                }
                Err(e) => Err(e),
            }
        };

        let (repositories, events, search_commits) = futures::try_join!(
            self.source.fetch_repositories(),
            self.source.fetch_public_events(handle, self.config.event_limit),
            search,
        )?;

        tracing::info!(
            "Fetched {} repositories, {} events, {} searched commits for {}",
            repositories.len(),
            events.len(),
            search_commits.len(),
            handle
        );

        Ok(ActivitySnapshot {
            account,
            repositories,
            events,
            search_commits,
        })
    }

    pub async fn run(&self) -> Result<Dashboard> {
        let snapshot = self.fetch().await?;
        let now = Utc::now();
        Ok(self.compute(snapshot, now.date_naive(), now))
    }

    /// Derives every dashboard metric from a snapshot. Performs no I/O.
    pub fn compute(
        &self,
        snapshot: ActivitySnapshot,
        today: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Dashboard {
        let ActivitySnapshot {
            account,
            repositories,
            events,
            search_commits,
        } = snapshot;

        // Contributions
        let pushes = classify_events(&events);
        let calendar = self.calendar.build(&pushes, today);
        let streaks = calculate_streaks(&calendar);
        let contributions = ContributionSummary {
            total_contributions: calendar.total_commits(),
            contribution_days: calendar.active_days(),
            current_streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            calendar,
        };

        // Repositories
        let mut stats = aggregate_repositories(&account, &repositories);
        stats.recent_commits_from_events = total_pushed_commits(&events);
        let owned = owned_repositories(&account, &repositories);
        let languages = distribute_languages(owned.iter().copied());

        // Quality
        let recent_commits = merge_recent_commits(&events, &search_commits);
        let commit_count = authoritative_commit_count(
            Some(contributions.total_contributions),
            recent_commits.len() as u32,
        );
        let quality = self.scorer.report(&stats, commit_count);

        let mut by_recency: Vec<&Repository> = repositories.iter().collect();
        by_recency.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let recent_repositories = by_recency
            .into_iter()
            .take(RECENT_REPOSITORIES)
            .map(|r| r.name.clone())
            .collect();

        tracing::info!(
            "{}: {} contributions, streak {}/{}, quality {}",
            account.handle,
            contributions.total_contributions,
            contributions.current_streak,
            contributions.longest_streak,
            quality.score
        );

        Dashboard {
            weekly_activity: weekly_activity(&contributions.calendar),
            account,
            stats,
            contributions,
            languages,
            quality,
            recent_commit_count: recent_commits.len() as u32,
            recent_repositories,
            generated_at,
        }
    }
}
