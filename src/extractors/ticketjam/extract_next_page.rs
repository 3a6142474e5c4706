use std::sync::LazyLock;

use scraper::{Html, Selector};

static NEXT_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[rel~="next"][href]"#).expect("valid next link selector"));

/// True when the page advertises a following page through a `rel="next"` link with a target.
pub fn has_next_page(document: &Html) -> bool {
    document.select(&NEXT_LINK_SELECTOR).next().is_some()
}
