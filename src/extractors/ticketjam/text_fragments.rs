use scraper::ElementRef;

/// Collects the trimmed, non-empty text nodes under `element` in document order.
/// Text inside a descendant named `skip_tag` is left out.
pub fn text_fragments<'a>(element: &ElementRef<'a>, skip_tag: Option<&str>) -> Vec<&'a str> {
    let root = element.id();

    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;

            if let Some(tag) = skip_tag {
                let skipped = node
                    .ancestors()
                    .take_while(|ancestor| ancestor.id() != root)
                    .any(|ancestor| {
                        ancestor
                            .value()
                            .as_element()
                            .map_or(false, |el| el.name() == tag)
                    });
                if skipped {
                    return None;
                }
            }

            let trimmed: &'a str = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect()
}
