// src/core/html.rs
//
// Thin helpers over `scraper` so the specs read as named lookups.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector that is a literal in this crate.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Visible text of an element, whitespace collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

pub fn first_in<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}
