use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element_text;

pub const NOT_FOUND_SENTINEL: &str = "Could not find article content.";

/// Guess at which container holds an article's body text.
#[derive(Debug, Clone, Copy)]
pub struct ContentHeuristic {
    pub name: &'static str,
    pub container: &'static str,
    pub paragraphs: &'static str,
}

/// Highest priority first.
pub const CONTENT_HEURISTICS: &[ContentHeuristic] = &[
    ContentHeuristic { name: "article-content", container: "div.article-content", paragraphs: "p" },
    ContentHeuristic { name: "story-body", container: "div.story-body", paragraphs: "p" },
    ContentHeuristic { name: "entry-content", container: "div.entry-content", paragraphs: "p" },
    ContentHeuristic { name: "main-content", container: "div#main-content", paragraphs: "p" },
];

static COMPILED: LazyLock<Vec<(&'static ContentHeuristic, Selector)>> = LazyLock::new(|| {
    CONTENT_HEURISTICS
        .iter()
        .map(|h| {
            let css = format!("{} {}", h.container, h.paragraphs);
            (h, Selector::parse(&css).unwrap())
        })
        .collect()
});

/// Body text from the first heuristic that selects any paragraph, or `None`.
pub fn extract_from_html(html: &str) -> Option<String> {
    extract(&Html::parse_document(html))
}

pub fn extract(document: &Html) -> Option<String> {
    COMPILED.iter().find_map(|(heuristic, selector)| {
        let paragraphs: Vec<String> = document.select(selector).map(element_text).collect();
        if paragraphs.is_empty() {
            return None;
        }
        tracing::debug!(
            "Matched '{}' heuristic ({} paragraphs)",
            heuristic.name,
            paragraphs.len()
        );
        Some(paragraphs.join("\n\n"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn article_content_beats_story_body() {
        let html = r#"
            <div class="story-body"><p>Story one.</p><p>Story two.</p></div>
            <div class="article-content"><p>Article one.</p></div>
        "#;
        assert_eq!(extract_from_html(html).as_deref(), Some("Article one."));
    }

    #[test]
    fn falls_through_to_entry_content() {
        let html = r#"
            <div class="story-body"><span>no paragraphs here</span></div>
            <div class="entry-content"><p> A. </p><p>B.</p></div>
        "#;
        assert_eq!(extract_from_html(html).as_deref(), Some("A.\n\nB."));
    }

    #[test]
    fn main_content_id_selects_paragraphs_directly() {
        let html = r#"<div id="main-content"><p>First.</p><section><p>Nested.</p></section></div>"#;
        assert_eq!(extract_from_html(html).as_deref(), Some("First.\n\nNested."));
    }

    #[test]
    fn collects_from_every_matching_container() {
        let html = r#"
            <div class="entry-content"><p>Part one.</p></div>
            <aside>ad</aside>
            <div class="entry-content"><p>Part two.</p></div>
        "#;
        assert_eq!(
            extract_from_html(html).as_deref(),
            Some("Part one.\n\nPart two.")
        );
    }

    #[test]
    fn no_heuristic_matches() {
        let html = r#"<div class="content"><p>Unrecognised layout.</p></div>"#;
        assert_eq!(extract_from_html(html), None);
    }

    #[test]
    fn class_name_must_match_exactly() {
        let html = r#"<div class="Article-Content"><p>Wrong case.</p></div>"#;
        assert_eq!(extract_from_html(html), None);
    }

    #[test]
    fn story_body_fixture() {
        let body = extract_from_html(&fixture("story_body_article")).unwrap();
        let paragraphs: Vec<_> = body.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "The council voted 7-2 in favour of the new crossing.");
        assert!(!body.contains("Related stories"));
    }

    #[test]
    fn heuristic_table_order() {
        let names: Vec<_> = CONTENT_HEURISTICS.iter().map(|h| h.name).collect();
        assert_eq!(
            names,
            vec!["article-content", "story-body", "entry-content", "main-content"]
        );
    }
}
