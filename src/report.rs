use colored::{ColoredString, Colorize};

use crate::config::find_team;
use crate::models::{CombinedResult, ScrapeResult, TeamOutcome};

/// One console line per team, e.g. `浦和レッズ (reds): succeeded, 3 pages, 57 listings`.
pub fn team_summary(result: &ScrapeResult) -> String {
    let name = find_team(&result.slug).map_or(result.slug.as_str(), |team| team.name);
    let mut line = format!(
        "{} ({}): {}, {} pages, {} listings",
        name,
        result.slug,
        result.outcome(),
        result.pages_scraped,
        result.records.len()
    );

    if result.outcome() != TeamOutcome::Succeeded {
        line.push_str(&format!(" [{}]", result.stop_reason));
    }

    line
}

fn paint(line: String, outcome: TeamOutcome) -> ColoredString {
    match outcome {
        TeamOutcome::Succeeded => line.green(),
        TeamOutcome::PartiallySucceeded => line.yellow(),
        TeamOutcome::Failed => line.red(),
    }
}

pub fn print_team_reports(combined: &CombinedResult) {
    for result in &combined.teams {
        println!("{}", paint(team_summary(result), result.outcome()));
    }
}
