use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use super::{
    extract_detail::extract_detail, extract_event_date::extract_event_date,
    extract_event_name::extract_event_name, extract_next_page::has_next_page,
    extract_price::extract_price, extract_quantity::extract_quantity,
    extract_status::extract_status,
};
use crate::models::ListingRecord;

// Active and grayed-out listings are the same kind of item.
static ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".eventlist__item.active, .eventlist__item.bg-gray")
        .expect("valid listing selector")
});

/// What one listing page yields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPage {
    pub records: Vec<ListingRecord>,
    pub has_next: bool,
}

/// Extracts every listing on a page, in document order.
pub fn extract_listings(document: &Html, fetch_date: NaiveDate) -> Vec<ListingRecord> {
    document
        .select(&ITEM_SELECTOR)
        .map(|item| extract_listing(&item, fetch_date))
        .collect()
}

/// Builds one record from a listing container. Each field is read on its own.
pub fn extract_listing(item: &ElementRef, fetch_date: NaiveDate) -> ListingRecord {
    ListingRecord {
        fetch_date,
        event_date: extract_event_date(item),
        event_name: extract_event_name(item),
        detail: extract_detail(item),
        price: extract_price(item),
        quantity: extract_quantity(item),
        status: extract_status(item),
    }
}

/// Parses a raw listing page and reads both its records and its next-page signal.
pub fn extract_page(html_content: &str, fetch_date: NaiveDate) -> ExtractedPage {
    let document = Html::parse_document(html_content);

    ExtractedPage {
        records: extract_listings(&document, fetch_date),
        has_next: has_next_page(&document),
    }
}
