// src/extract.rs
use scraper::{ElementRef, Html, Selector};

/// Collects the visible text of an html document, one fragment per element.
///
/// Walks the `<body>` element tree depth-first, taking each element's own
/// text (its direct child text nodes) before descending into its children.
/// Going element by element with own text keeps fragments aligned with the
/// document structure instead of smearing the whole body into one string.
///
/// `<script>` and `<style>` subtrees are skipped: the parser surfaces their
/// contents as text nodes, but they are not visible page text.
#[must_use]
pub fn text_fragments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut fragments = Vec::new();

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    if let Some(body) = body {
        collect_own_text(body, &mut fragments);
    }

    fragments
}

fn collect_own_text(element: ElementRef, fragments: &mut Vec<String>) {
    if matches!(element.value().name(), "script" | "style") {
        return;
    }

    let own_text = element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !own_text.is_empty() {
        fragments.push(own_text);
    }

    for child in element.children().filter_map(ElementRef::wrap) {
        collect_own_text(child, fragments);
    }
}
