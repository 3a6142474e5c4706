pub mod extract_detail;
pub mod extract_event_date;
pub mod extract_event_name;
pub mod extract_listings;
pub mod extract_next_page;
pub mod extract_price;
pub mod extract_quantity;
pub mod extract_status;
mod digit_run;
mod text_fragments;

pub use extract_listings::{extract_listing, extract_listings, extract_page, ExtractedPage};
pub use extract_next_page::has_next_page;
