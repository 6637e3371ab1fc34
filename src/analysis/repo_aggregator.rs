use crate::models::{Account, RepoStats, Repository};

/// Repositories whose owner login matches the account handle.
pub fn owned_repositories<'a>(account: &Account, repos: &'a [Repository]) -> Vec<&'a Repository> {
    repos.iter().filter(|r| r.is_owned_by(account)).collect()
}

/// Folds the repository list into account-level totals. Counts and sums cover
/// the owned subset only; `forked_repos` counts every fork in the input.
pub fn aggregate_repositories(account: &Account, repos: &[Repository]) -> RepoStats {
    let owned = owned_repositories(account, repos);

    let mut stats = RepoStats {
        total_owned_repos: owned.len() as u32,
        forked_repos: repos.iter().filter(|r| r.is_fork).count() as u32,
        followers: account.followers,
        following: account.following,
        public_gists: account.public_gists,
        ..Default::default()
    };

    for repo in &owned {
        if repo.is_private {
            stats.private_repos += 1;
        } else {
            stats.public_repos += 1;
        }

        stats.total_stars += repo.star_count;
        stats.total_forks += repo.fork_count;
        stats.total_watchers += repo.watcher_count;
        stats.total_size_kb += repo.size_kb;

        if let Some(language) = repo.detected_language() {
            if !stats.languages.iter().any(|l| l == language) {
                stats.languages.push(language.to_string());
            }
        }
    }

    stats.last_updated_at = owned.iter().filter_map(|r| r.updated_at).max();

    tracing::debug!(
        "Aggregated {} owned of {} repositories ({} languages)",
        stats.total_owned_repos,
        repos.len(),
        stats.languages.len()
    );

    stats
}
