use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Selector};

use super::text_fragments::text_fragments;

static VENUE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.venue").expect("valid venue selector"));

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}/\d{2}/\d{2}").expect("valid date pattern"));

/// Extracts the match date from the venue block of a listing.
pub fn extract_event_date(item: &ElementRef) -> Option<NaiveDate> {
    let venue = item.select(&VENUE_SELECTOR).next()?;

    parse_event_date(&text_fragments(&venue, None).concat())
}

/// Finds the first `YYYY/MM/DD` in `text`. Impossible dates are treated as absent.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    let found = DATE_PATTERN.find(text)?;

    NaiveDate::parse_from_str(found.as_str(), "%Y/%m/%d").ok()
}
