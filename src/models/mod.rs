pub mod listing;
pub mod scrape_result;

pub use listing::{date_key, ListingRecord, ListingStatus, LISTING_COLUMNS};
pub use scrape_result::{CombinedResult, ScrapeResult, StopReason, TeamOutcome};
