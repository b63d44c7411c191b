use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use super::element_text_single_line;

/// Anchors inside top-level headings, plus anchors whose class mentions
/// "headline" or "title". Class matching is a case-sensitive substring match.
static HEADLINE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"h1 a, h2 a, h3 a, a[class*="headline"], a[class*="title"]"#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineEntry {
    pub title: String,
    pub url: String,
}

pub fn extract_from_html(html: &str, page_url: &Url) -> Vec<HeadlineEntry> {
    extract(&Html::parse_document(html), page_url)
}

/// Collect headline links in document order, keeping the first entry per URL.
pub fn extract(document: &Html, page_url: &Url) -> Vec<HeadlineEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for anchor in document.select(&HEADLINE_SEL) {
        let title = element_text_single_line(anchor);
        if title.is_empty() {
            continue;
        }
        let Some(url) = anchor
            .value()
            .attr("href")
            .and_then(|href| resolve_href(page_url, href))
        else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }
        entries.push(HeadlineEntry { title, url });
    }

    entries
}

/// Absolute (`http`-prefixed) hrefs pass through untouched, anything else is
/// joined onto the page URL.
fn resolve_href(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    page_url.join(href).ok().map(String::from)
}
