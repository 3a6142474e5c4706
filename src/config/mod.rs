pub mod config;
pub mod teams;

pub use self::config::{load_config, AppConfig, OutputConfig, ScraperConfig};
pub use self::teams::{find_team, Team, TEAMS};
