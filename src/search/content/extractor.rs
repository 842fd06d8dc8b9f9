//! Page text extraction
//!
//! Turns rendered HTML into the visible text of `<body>`, the way a
//! browser's `innerText` would read it. Inline markup joins its text with
//! no gap; block elements and `<br>` separate it.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start a new line of text
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "option", "p", "pre",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Extract visible body text, whitespace-normalized and trimmed
///
/// Returns an empty string when the page has no visible text.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = match Selector::parse("body") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let body = match document.select(&body_selector).next() {
        Some(body) => body,
        None => return String::new(),
    };

    let mut text = String::new();
    collect_text(body, &mut text);
    clean_text(&text)
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                let name = e.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                if let Some(el) = ElementRef::wrap(child) {
                    collect_text(el, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// Clean text: collapse whitespace runs, trim ends
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_chars` characters, appending `...` when cut
///
/// Counts characters, not bytes, so CJK pages are never split mid-codepoint.
pub fn truncate_content(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
