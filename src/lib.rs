pub mod cli;
pub mod config;
pub mod export;
pub mod extractors;
pub mod models;
pub mod report;
pub mod scrape_listings;
pub mod utilities;

pub use scrape_listings::{scrape_team, scrape_teams};
