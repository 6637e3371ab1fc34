use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use gitpulse::models::Dashboard;
use gitpulse::config::validate_calendar_days;
use gitpulse::{Config, GitHubClient, MetricsConfig, MetricsPipeline};

#[derive(Parser, Debug)]
#[command(name = "gitpulse")]
#[command(version = "0.1.0")]
#[command(about = "Show contribution streaks, language mix and code quality for your GitHub account")]
struct Args {
    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Length of the contribution calendar in days
    #[arg(long)]
    calendar_days: Option<u32>,

    /// Maximum public events to read
    #[arg(long)]
    event_limit: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitpulse=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let mut metrics_config = MetricsConfig::from(&config);
    if let Some(days) = args.calendar_days {
        metrics_config.calendar_days = validate_calendar_days(days)?;
    }
    if let Some(limit) = args.event_limit {
        metrics_config.event_limit = limit;
    }

    let github = GitHubClient::with_base_url(&config.github_token, &config.api_base_url)?;
    let pipeline = MetricsPipeline::new(github, metrics_config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Fetching GitHub activity...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = pipeline.run().await;
    spinner.finish_and_clear();
    let dashboard = result?;

    output_dashboard(&dashboard, &args)?;

    Ok(())
}

fn output_dashboard(dashboard: &Dashboard, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(dashboard)?,
        "markdown" => format_markdown(dashboard),
        _ => format_text(dashboard),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    let stats = &dashboard.stats;
    let contributions = &dashboard.contributions;

    output.push_str(&format!(
        "\n=== GitHub Activity: {} ===\n\n",
        dashboard.account.handle
    ));

    if let Some(ref name) = dashboard.account.name {
        output.push_str(&format!("Name: {}\n", name));
    }
    output.push_str(&format!(
        "Followers: {}  Following: {}  Gists: {}\n\n",
        stats.followers, stats.following, stats.public_gists
    ));

    output.push_str("Repositories:\n");
    output.push_str(&format!(
        "  Owned: {} ({} public, {} private), forks seen: {}\n",
        stats.total_owned_repos, stats.public_repos, stats.private_repos, stats.forked_repos
    ));
    output.push_str(&format!(
        "  Stars: {}  Forks: {}  Watchers: {}  Size: {} KB\n",
        stats.total_stars, stats.total_forks, stats.total_watchers, stats.total_size_kb
    ));
    if let Some(updated) = stats.last_updated_at {
        output.push_str(&format!("  Last updated: {}\n", updated.format("%Y-%m-%d")));
    }

    output.push_str("\nContributions:\n");
    output.push_str(&format!(
        "  {} commits over {} active days\n",
        contributions.total_contributions, contributions.contribution_days
    ));
    output.push_str(&format!(
        "  Current streak: {} days\n  Longest streak: {} days\n",
        contributions.current_streak, contributions.longest_streak
    ));

    // Last seven days
    output.push_str("\nThis week:\n");
    for day in &dashboard.weekly_activity {
        let marker = if day.contributed { "■" } else { "□" };
        output.push_str(&format!("  {} {} {}\n", day.weekday, marker, day.commits));
    }

    if !dashboard.languages.is_empty() {
        output.push_str("\nLanguages:\n");
        for language in &dashboard.languages {
            output.push_str(&format!("  - {}: {}%\n", language.name, language.percentage));
        }
    }

    let quality = &dashboard.quality;
    output.push_str(&format!(
        "\nCode Quality: {}/100 ({})\n",
        quality.score, quality.rating
    ));
    output.push_str(&format!("  {}\n", quality.rating.description()));
    output.push_str(&format!(
        "  Engagement: {:.0}  Activity: {:.0}  Diversity: {:.0}  Impact: {:.0}\n",
        quality.breakdown.engagement,
        quality.breakdown.activity,
        quality.breakdown.diversity,
        quality.breakdown.impact
    ));

    if !dashboard.recent_repositories.is_empty() {
        output.push_str(&format!(
            "\nRecently updated: {}\n",
            dashboard.recent_repositories.join(", ")
        ));
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    let stats = &dashboard.stats;
    let contributions = &dashboard.contributions;
    let quality = &dashboard.quality;

    output.push_str(&format!("# GitHub Activity: {}\n\n", dashboard.account.handle));

    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Owned Repositories | {} |\n", stats.total_owned_repos));
    output.push_str(&format!("| Public / Private | {} / {} |\n", stats.public_repos, stats.private_repos));
    output.push_str(&format!("| Stars | {} |\n", stats.total_stars));
    output.push_str(&format!("| Forks | {} |\n", stats.total_forks));
    output.push_str(&format!("| Followers | {} |\n", stats.followers));
    output.push_str(&format!("| Contributions | {} |\n", contributions.total_contributions));
    output.push_str(&format!("| Active Days | {} |\n", contributions.contribution_days));
    output.push_str(&format!("| Current Streak | {} days |\n", contributions.current_streak));
    output.push_str(&format!("| Longest Streak | {} days |\n", contributions.longest_streak));

    if !dashboard.languages.is_empty() {
        output.push_str("\n## Languages\n\n");
        output.push_str("| Language | Share |\n|----------|-------|\n");
        for language in &dashboard.languages {
            output.push_str(&format!("| {} | {}% |\n", language.name, language.percentage));
        }
    }

    output.push_str("\n## Code Quality\n\n");
    output.push_str(&format!(
        "**{}/100** ({}): {}\n\n",
        quality.score,
        quality.rating,
        quality.rating.description()
    ));
    output.push_str("| Component | Score |\n|-----------|-------|\n");
    output.push_str(&format!("| Engagement | {:.0} |\n", quality.breakdown.engagement));
    output.push_str(&format!("| Activity | {:.0} |\n", quality.breakdown.activity));
    output.push_str(&format!("| Diversity | {:.0} |\n", quality.breakdown.diversity));
    output.push_str(&format!("| Impact | {:.0} |\n", quality.breakdown.impact));

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
