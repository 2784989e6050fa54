//! Multi-candidate selector resolution
//!
//! Shelter sub-sites render the same logical field under two markup
//! generations (a modern span-based layout and a legacy definition-list
//! layout), so every field lookup walks an ordered candidate list and takes
//! the first non-empty match. No per-shelter configuration is needed.

use scraper::{ElementRef, Selector};

/// Returns the text of the first candidate selector with a non-empty match.
///
/// Candidates are evaluated in order against the scope element; a selector
/// that matches an element whose text is empty after trimming does not
/// resolve, and the next candidate is tried. Returns None when every
/// candidate misses.
pub fn first_text(scope: ElementRef<'_>, candidates: &[&str]) -> Option<String> {
    for css in candidates {
        let selector = match Selector::parse(css) {
            Ok(selector) => selector,
            Err(_) => continue,
        };

        if let Some(element) = scope.select(&selector).next() {
            let text: String = element.text().collect();
            if !text.trim().is_empty() {
                return Some(text);
            }
        }
    }

    None
}

/// Returns an attribute value from the first element matching the selector.
pub fn first_attr(scope: ElementRef<'_>, css: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;

    scope
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Selector-existence predicate for presence-based flags.
///
/// The element counts even when it carries no text: presence, not content,
/// determines the flag.
pub fn marker_present(scope: ElementRef<'_>, css: &str) -> bool {
    Selector::parse(css)
        .map(|selector| scope.select(&selector).next().is_some())
        .unwrap_or(false)
}
