pub mod article;
pub mod headlines;

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Visible text of an element with surrounding whitespace removed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Visible text flattened onto a single line.
fn element_text_single_line(element: ElementRef<'_>) -> String {
    WHITESPACE_RE
        .replace_all(&element_text(element), " ")
        .into_owned()
}
