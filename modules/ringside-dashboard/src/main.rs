use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ringside_common::file_config::load_config;
use ringside_common::{Config, RecencyWindow};
use ringside_core::{Dashboard, DashboardSettings, DashboardView, JsonSnapshot, RankerConfig};

/// Render the wrestling news dashboard from collaborator JSON snapshots.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON array of news items
    #[arg(long)]
    news: Option<PathBuf>,

    /// JSON array of roster entries
    #[arg(long)]
    roster: Option<PathBuf>,

    /// JSON array of wrestler analyses
    #[arg(long)]
    analyses: Option<PathBuf>,

    /// TOML config file; overrides RINGSIDE_* environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// News recency window in days
    #[arg(long)]
    window_days: Option<String>,

    /// Promotion/brand filter ("all" for every promotion)
    #[arg(long)]
    promotion: Option<String>,

    /// Length of the push, burial and popularity lists
    #[arg(long)]
    top_k: Option<String>,

    /// Attach a seeded synthetic 24h change to leaderboard entries
    #[arg(long)]
    synthetic_seed: Option<u64>,

    /// Print the full view as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ringside=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Ringside dashboard starting...");

    let mut config = Config::from_env()?;
    if let Some(path) = &args.config {
        let file = load_config(path)?;
        config = config.merge_file(&file)?;
        info!(path = %path.display(), "Applied config file");
    }

    let mut settings = DashboardSettings::from_config(&config);
    if let Some(raw) = &args.window_days {
        settings.news_window = RecencyWindow::parse(raw)?;
    }
    if let Some(promotion) = &args.promotion {
        settings.promotion = promotion.clone();
    }
    if let Some(raw) = &args.top_k {
        settings.ranker = RankerConfig::parse(raw)?;
    }
    settings.synthetic_change_seed = args.synthetic_seed;

    let snapshot = Arc::new(JsonSnapshot {
        news_path: args.news,
        roster_path: args.roster,
        analyses_path: args.analyses,
    });
    let dashboard = Dashboard::new(snapshot.clone(), snapshot.clone(), snapshot, settings);

    let view = dashboard.refresh().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&view, &dashboard.settings().promotion);
    }

    Ok(())
}

fn print_summary(view: &DashboardView, promotion: &str) {
    println!("\n=== Ringside: {} ===", view.generated_at.format("%Y-%m-%d %H:%M UTC"));
    println!("News: {}  |  Roster ({promotion}): {}", view.news.len(), view.roster.len());

    println!("\nTop push:");
    for (i, a) in view.rankings.top_push.iter().enumerate() {
        println!(
            "  {:>2}. {} ({} mentions, momentum {:.1})",
            i + 1,
            a.wrestler_name,
            a.total_mentions,
            a.momentum_score
        );
    }

    println!("\nWorst burial:");
    for (i, a) in view.rankings.worst_burial.iter().enumerate() {
        println!(
            "  {:>2}. {} ({} mentions, burial {:.1})",
            i + 1,
            a.wrestler_name,
            a.total_mentions,
            a.burial_score
        );
    }

    println!("\nPopularity:");
    for (i, e) in view.leaderboard.iter().enumerate() {
        match e.change_24h {
            Some(change) => println!(
                "  {:>2}. {} {} ({:+.1} est.)",
                i + 1,
                e.wrestler_name,
                e.popularity,
                change.estimate
            ),
            None => println!("  {:>2}. {} {}", i + 1, e.wrestler_name, e.popularity),
        }
    }
}
