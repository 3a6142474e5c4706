use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::text_fragments::text_fragments;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.eventlist__title").expect("valid title selector"));

/// Extracts the event name of a listing, leaving out the `<small>` annotations
/// nested in the title.
pub fn extract_event_name(item: &ElementRef) -> Option<String> {
    let title = item.select(&TITLE_SELECTOR).next()?;

    Some(text_fragments(&title, Some("small")).join(" "))
}
