use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::digit_run::first_digit_run;
use super::text_fragments::text_fragments;

// Matches both the `ml-1 bold` and `ml-1 bold sell-true` variants.
static QUANTITY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.ml-1.bold").expect("valid quantity selector"));

pub fn extract_quantity(item: &ElementRef) -> Option<u64> {
    let quantity = item.select(&QUANTITY_SELECTOR).next()?;

    parse_quantity(&text_fragments(&quantity, None).concat())
}

/// First integer found in a quantity descriptor such as `残り3枚`. A run too
/// long for `u64` counts as missing.
pub fn parse_quantity(text: &str) -> Option<u64> {
    first_digit_run(text)?.parse::<u64>().ok()
}
