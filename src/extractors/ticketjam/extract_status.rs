use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::text_fragments::text_fragments;
use crate::models::ListingStatus;

static LINKS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.eventlist__links").expect("valid links selector"));

static STATUS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.u-text-vivid-red").expect("valid status selector"));

/// Reads the trade status label from the links section of a listing.
/// Anything but the two in-progress/completed labels counts as before-trade.
pub fn extract_status(item: &ElementRef) -> ListingStatus {
    item.select(&LINKS_SELECTOR)
        .next()
        .and_then(|links| links.select(&STATUS_SELECTOR).next())
        .map(|label| ListingStatus::from_label(&text_fragments(&label, None).concat()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn status_of(inner: &str) -> ListingStatus {
        let document = Html::parse_fragment(&format!("<div class='item'>{}</div>", inner));
        let selector = Selector::parse("div.item").unwrap();
        let item = document.select(&selector).next().unwrap();
        extract_status(&item)
    }

    #[test]
    fn recognised_labels() {
        assert_eq!(
            status_of("<div class='eventlist__links'><span class='u-text-vivid-red'> 取引中 </span></div>"),
            ListingStatus::InTrade
        );
        assert_eq!(
            status_of("<div class='eventlist__links'><span class='u-text-vivid-red'>取引済</span></div>"),
            ListingStatus::CompletedTrade
        );
    }

    #[test]
    fn anything_else_is_before_trade() {
        assert_eq!(
            status_of("<div class='eventlist__links'><span class='u-text-vivid-red'>NEW</span></div>"),
            ListingStatus::BeforeTrade
        );
        assert_eq!(
            status_of("<div class='eventlist__links'><a href='/x'>詳細</a></div>"),
            ListingStatus::BeforeTrade
        );
        assert_eq!(status_of("<div class='venue'>2025/04/12</div>"), ListingStatus::BeforeTrade);
    }

    #[test]
    fn label_outside_links_section_is_ignored() {
        assert_eq!(
            status_of("<span class='u-text-vivid-red'>取引中</span><div class='eventlist__links'></div>"),
            ListingStatus::BeforeTrade
        );
    }
}
