use crate::models::{LanguageShare, Repository};
use crate::taxonomy::{language_color, FALLBACK_COLOR};

/// Bucket for repositories without a detected language.
pub const UNKNOWN_LANGUAGE: &str = "Other";
/// Bucket for languages folded out of the top entries.
pub const OTHERS_BUCKET: &str = "Others";
pub const TOP_LANGUAGES: usize = 3;

/// Rounds `100 * part / whole` half-up.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Share of repositories per language, largest first. Past [`TOP_LANGUAGES`]
/// entries the tail collapses into a trailing "Others" share.
pub fn distribute_languages<'a, I>(repos: I) -> Vec<LanguageShare>
where
    I: IntoIterator<Item = &'a Repository>,
{
    // Insertion-ordered so ties keep first-seen order after a stable sort.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total = 0;

    for repo in repos {
        let language = repo.detected_language().unwrap_or(UNKNOWN_LANGUAGE);
        match counts.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language.to_string(), 1)),
        }
        total += 1;
    }

    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(name, count)| LanguageShare {
            percentage: rounded_percentage(count, total),
            color: language_color(&name).to_string(),
            name,
        })
        .collect();
    shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    if shares.len() > TOP_LANGUAGES {
        let folded: u32 = shares
            .drain(TOP_LANGUAGES..)
            .map(|share| share.percentage)
            .sum();
        if folded > 0 {
            shares.push(LanguageShare {
                name: OTHERS_BUCKET.to_string(),
                percentage: folded,
                color: FALLBACK_COLOR.to_string(),
            });
        }
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos(languages: &[Option<&str>]) -> Vec<Repository> {
        languages
            .iter()
            .map(|l| Repository {
                language: l.map(str::to_string),
                ..Default::default()
            })
            .collect()
    }

    fn names(shares: &[LanguageShare]) -> Vec<&str> {
        shares.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_long_tail_folds_into_others() {
        let repos = repos(&[
            Some("JavaScript"),
            Some("JavaScript"),
            Some("TypeScript"),
            Some("Go"),
            Some("Python"),
            Some("Ruby"),
        ]);

        let shares = distribute_languages(&repos);
        assert_eq!(names(&shares), vec!["JavaScript", "TypeScript", "Go", "Others"]);
        let percentages: Vec<u32> = shares.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![33, 17, 17, 34]);
        assert_eq!(shares[3].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_missing_language_is_bucketed() {
        let repos = repos(&[Some("Rust"), None, Some("Rust"), Some("")]);

        let shares = distribute_languages(&repos);
        assert_eq!(names(&shares), vec!["Rust", "Other"]);
        assert_eq!(shares[0].percentage, 50);
        assert_eq!(shares[1].percentage, 50);
        assert_eq!(shares[0].color, "#dea584");
    }

    #[test]
    fn test_three_or_fewer_are_kept_whole() {
        let repos = repos(&[Some("C"), Some("Go"), Some("Go")]);

        let shares = distribute_languages(&repos);
        assert_eq!(names(&shares), vec!["Go", "C"]);
        assert_eq!(shares[0].percentage, 67);
        assert_eq!(shares[1].percentage, 33);
    }

    #[test]
    fn test_percentages_sum_within_rounding() {
        let repos = repos(&[
            Some("A"),
            Some("B"),
            Some("C"),
            Some("D"),
            Some("E"),
            Some("F"),
            Some("G"),
        ]);

        let shares = distribute_languages(&repos);
        assert!(shares.len() <= 4);
        let sum: i64 = shares.iter().map(|s| s.percentage as i64).sum();
        assert!((sum - 100).abs() <= shares.len() as i64 - 1);
    }

    #[test]
    fn test_others_omitted_when_folded_shares_round_to_zero() {
        let mut languages = vec![Some("Rust"); 197];
        languages.extend([Some("Go"), Some("C"), Some("Python"), Some("Ruby")]);
        let repos = repos(&languages);

        let shares = distribute_languages(&repos);
        assert_eq!(names(&shares), vec!["Rust", "Go", "C"]);
        let percentages: Vec<u32> = shares.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![98, 0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(distribute_languages(&Vec::<Repository>::new()).is_empty());
    }
}
