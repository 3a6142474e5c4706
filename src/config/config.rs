use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "Settings.toml";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Listing index root; a team's page 1 lives at `<base_url>/<slug>`.
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Courtesy pause between two page fetches of the same team.
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    /// Hard cap on pages fetched per team.
    pub max_pages: u32,
    /// Consecutive pages with no listings tolerated while a next link is still advertised.
    pub max_empty_pages: u32,
    /// Wall-clock budget per team, 0 disables it.
    pub team_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            base_url: "https://ticketjam.jp/tickets".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            delay_min_ms: 100,
            delay_max_ms: 100,
            max_pages: 200,
            max_empty_pages: 3,
            team_timeout_secs: 300,
        }
    }
}

impl ScraperConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn team_timeout(&self) -> Option<Duration> {
        match self.team_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: ".".to_string(),
        }
    }
}

/// Loads settings from an optional TOML file, overridden by `APP_*` variables
/// (`APP_SCRAPER__MAX_PAGES=50`).
pub fn load_config(settings_file: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new(settings_file, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does-not-exist.toml").unwrap();

        assert_eq!(config.scraper.base_url, "https://ticketjam.jp/tickets");
        assert_eq!(config.scraper.max_pages, 200);
        assert_eq!(config.output.directory, ".");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\nmax_pages = 7\nteam_timeout_secs = 0\n[output]\ndirectory = \"out\"").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.scraper.max_pages, 7);
        assert_eq!(config.scraper.team_timeout(), None);
        assert_eq!(config.scraper.delay_min_ms, 100);
        assert_eq!(config.output.directory, "out");
    }
}
