use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::config::DEFAULT_SETTINGS_FILE;
use crate::config::{find_team, Team, TEAMS};

#[derive(Parser, Debug)]
#[command(name = "soccer_ticket_scrapping")]
#[command(about = "Scrapes soccer ticket resale listings into CSV tables")]
#[command(version)]
pub struct Cli {
    /// Team to scrape, by display name or slug (repeatable)
    #[arg(short, long = "team", value_name = "NAME|SLUG")]
    pub teams: Vec<String>,

    /// Scrape every team in the catalog
    #[arg(short, long, conflicts_with = "teams")]
    pub all: bool,

    /// Print the team catalog and exit
    #[arg(long)]
    pub list_teams: bool,

    /// Directory for the CSV exports (overrides the settings file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Settings file, layered under APP_* environment variables
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE)]
    pub config: String,

    /// Skip the per-event statistics export
    #[arg(long)]
    pub no_stats: bool,
}

impl Cli {
    /// Teams to scrape, in the order given on the command line. Repeats are dropped.
    pub fn selected_teams(&self) -> Result<Vec<&'static Team>> {
        if self.all {
            return Ok(TEAMS.iter().collect());
        }
        if self.teams.is_empty() {
            bail!("Select at least one team with --team, or use --all (see --list-teams)");
        }

        let mut selected: Vec<&'static Team> = Vec::new();
        for wanted in &self.teams {
            let Some(team) = find_team(wanted) else {
                let known: Vec<&str> = TEAMS.iter().map(|team| team.slug).collect();
                bail!("Unknown team '{}'. Known slugs: {}", wanted, known.join(", "));
            };
            if !selected.contains(&team) {
                selected.push(team);
            }
        }

        Ok(selected)
    }
}
