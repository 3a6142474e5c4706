use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::digit_run::first_digit_run;
use super::text_fragments::text_fragments;

static PRICE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.u-text-vivid-red.u-text-size-md.font-weight-bold")
        .expect("valid price selector")
});

pub fn extract_price(item: &ElementRef) -> Option<f64> {
    let price = item.select(&PRICE_SELECTOR).next()?;

    parse_price(&text_fragments(&price, None).concat())
}

/// Reads a currency string such as `¥12,800`: separators are dropped and the
/// first run of digits becomes the amount.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.replace([',', '，'], "");

    first_digit_run(&cleaned)?.parse::<f64>().ok()
}
