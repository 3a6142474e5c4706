use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::text_fragments::text_fragments;

static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.eventlist__description").expect("valid description selector")
});

/// Extracts the seller's free-text description of a listing.
pub fn extract_detail(item: &ElementRef) -> Option<String> {
    let description = item.select(&DESCRIPTION_SELECTOR).next()?;

    Some(text_fragments(&description, None).join(" "))
}
