use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soccer_ticket_scrapping::cli::Cli;
use soccer_ticket_scrapping::config::{load_config, TEAMS};
use soccer_ticket_scrapping::export::{
    compute_event_statistics, write_csv_file, STATISTICS_COLUMNS,
};
use soccer_ticket_scrapping::models::{date_key, TeamOutcome, LISTING_COLUMNS};
use soccer_ticket_scrapping::report::print_team_reports;
use soccer_ticket_scrapping::scrape_teams;
use soccer_ticket_scrapping::utilities::fetch_page::HttpFetcher;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,soccer_ticket_scrapping=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.list_teams {
        for team in TEAMS {
            println!("{}\t{}", team.slug, team.name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration settings
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;
    let teams = cli.selected_teams()?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));

    let fetch_date = Local::now().date_naive();
    let fetcher = HttpFetcher::new(&config.scraper)?;

    // Ctrl-C stops the current team's pagination and skips the rest
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{}", "Interrupted, stopping after the current request".yellow());
                cancel.cancel();
            }
        });
    }

    println!("{}", format!("Scraping {} team(s)", teams.len()).cyan());
    let slugs: Vec<&str> = teams.iter().map(|team| team.slug).collect();
    let combined = scrape_teams(&fetcher, &slugs, &config.scraper, fetch_date, &cancel).await;

    print_team_reports(&combined);

    tokio::fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let listings_path = output_dir.join(format!("soccer_secondary_prices_{}.csv", date_key(&fetch_date)));
    let written = write_csv_file(&listings_path, &LISTING_COLUMNS, combined.records()).await?;
    println!("{}", format!("Wrote {} listings to {}", written, listings_path.display()).green());

    if !cli.no_stats {
        let statistics = compute_event_statistics(combined.records());
        let stats_path =
            output_dir.join(format!("soccer_secondary_price_stats_{}.csv", date_key(&fetch_date)));
        let written = write_csv_file(&stats_path, &STATISTICS_COLUMNS, &statistics).await?;
        println!("{}", format!("Wrote statistics for {} events to {}", written, stats_path.display()).green());
    }

    let all_failed = combined
        .teams
        .iter()
        .all(|result| result.outcome() == TeamOutcome::Failed);
    if all_failed {
        eprintln!("{}", "No team could be scraped".red());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
