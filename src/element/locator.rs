use tracing::debug;

use crate::dom::dom_model::DomNode;
use crate::element::classifier::is_role_button;
use crate::element::element_model::{ElementKind, Locator, LocatorStrategy};

// ============================================================================
// Locator resolution — fixed priority chain
// ============================================================================

/// Pick the most stable locator for a relevant node.
///
/// Rules are tried in order and the first one that produces a locator wins:
/// 1. `id` (unless it looks generated)
/// 2. `name`
/// 3. `data-testid` as a CSS attribute selector
/// 4. composite CSS selector from tag, type, classes and descriptive attributes
/// 5. relative XPath from id/name/type/text predicates
///
/// Returns `None` when every rule fails; the caller drops the node.
pub fn resolve(node: &DomNode, kind: ElementKind) -> Option<Locator> {
    let locator = by_id(node)
        .or_else(|| by_name(node))
        .or_else(|| by_test_id(node))
        .or_else(|| by_css(node, kind))
        .or_else(|| by_xpath(node));

    match &locator {
        Some(l) => debug!(tag = %node.tag, strategy = %l.strategy, value = %l.value, "resolved locator"),
        None => debug!(tag = %node.tag, "no locator rule matched"),
    }

    locator
}

fn by_id(node: &DomNode) -> Option<Locator> {
    let id = node.non_blank_attr("id")?;
    if is_dynamic_id(id) {
        debug!(id, "rejecting dynamic-looking id");
        return None;
    }
    Some(Locator::new(LocatorStrategy::Id, id))
}

fn by_name(node: &DomNode) -> Option<Locator> {
    node.non_blank_attr("name")
        .map(|name| Locator::new(LocatorStrategy::Name, name))
}

fn by_test_id(node: &DomNode) -> Option<Locator> {
    node.non_blank_attr("data-testid").map(|test_id| {
        Locator::new(
            LocatorStrategy::CssSelector,
            format!("[data-testid='{}']", escape_css_value(test_id)),
        )
    })
}

fn by_css(node: &DomNode, kind: ElementKind) -> Option<Locator> {
    let selector = build_css_selector(node, kind)?;
    Some(Locator::new(LocatorStrategy::CssSelector, selector))
}

fn by_xpath(node: &DomNode) -> Option<Locator> {
    let xpath = build_xpath(node)?;
    Some(Locator::new(LocatorStrategy::XPath, xpath))
}

// ============================================================================
// Stability heuristics
// ============================================================================

/// An id is treated as generated when it carries a run of 4+ digits or
/// mentions a guid.
pub fn is_dynamic_id(id: &str) -> bool {
    longest_digit_run(id) >= 4 || id.to_ascii_lowercase().contains("guid")
}

/// Class names worth putting into a selector: longer than two characters,
/// no run of 3+ digits, and not a state class like `active` or `selected`.
pub fn is_stable_class(class: &str) -> bool {
    let lower = class.to_ascii_lowercase();
    class.chars().count() > 2
        && longest_digit_run(class) < 3
        && !lower.contains("active")
        && !lower.contains("selected")
}

fn longest_digit_run(s: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in s.chars() {
        if c.is_ascii_digit() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

// ============================================================================
// CSS selector
// ============================================================================

/// Build `tag[type]...classes...[placeholder][title][role][value]`.
///
/// Returns `None` when nothing beyond the bare tag name could be added.
/// For `div`/`span` role-buttons the role term is implied by classification
/// and is not emitted.
pub fn build_css_selector(node: &DomNode, kind: ElementKind) -> Option<String> {
    let mut terms: Vec<String> = Vec::new();

    if node.tag == "input" {
        if let Some(t) = node.non_blank_attr("type") {
            terms.push(attr_term("type", t));
        }
    }

    if let Some(classes) = node.attr("class") {
        for class in classes.split_whitespace().filter(|c| is_stable_class(c)) {
            terms.push(format!(".{}", escape_css_identifier(class)));
        }
    }

    for name in ["placeholder", "title"] {
        if let Some(value) = node.non_blank_attr(name) {
            terms.push(attr_term(name, value));
        }
    }

    if kind != ElementKind::Generic {
        if let Some(role) = node.non_blank_attr("role") {
            terms.push(attr_term("role", role));
        }
    }

    if kind == ElementKind::Button {
        if let Some(value) = node.non_blank_attr("value") {
            terms.push(attr_term("value", value));
        }
    }

    if terms.is_empty() {
        return None;
    }

    Some(format!("{}{}", node.tag, terms.concat()))
}

fn attr_term(name: &str, value: &str) -> String {
    format!("[{}='{}']", name, escape_css_value(value))
}

/// Backslash-escape both quote characters inside a quoted CSS attribute value.
pub fn escape_css_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\'' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a class name for a `.class` term.
///
/// Characters that would end the term early (`:`, `/`, `.`, ...) get a
/// backslash. A digit cannot start an identifier, not even after a leading
/// `-`, so it is written as a hex escape: `2col` → `\32 col`.
pub fn escape_css_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        let leading = i == 0 || (i == 1 && ident.starts_with('-'));
        if leading && c.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", c as u32));
            continue;
        }
        if !(c.is_alphanumeric() || c == '-' || c == '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// XPath
// ============================================================================

/// Build `//tag[pred and pred ...]` from id, name, type and visible text.
///
/// Returns `None` when the node offers no predicate at all.
pub fn build_xpath(node: &DomNode) -> Option<String> {
    let mut predicates: Vec<String> = Vec::new();

    if let Some(id) = node.non_blank_attr("id") {
        predicates.push(format!("@id={}", xpath_literal(id)));
    }

    if let Some(name) = node.non_blank_attr("name") {
        predicates.push(format!("@name={}", xpath_literal(name)));
    }

    if node.tag == "input" {
        if let Some(t) = node.non_blank_attr("type") {
            predicates.push(format!("@type={}", xpath_literal(t)));
        }
    }

    let text_bearing = matches!(node.tag.as_str(), "button" | "a") || is_role_button(node);
    let text = normalize_space(&node.text);
    if text_bearing && !text.is_empty() {
        predicates.push(format!("normalize-space(.)={}", xpath_literal(&text)));
    }

    if predicates.is_empty() {
        return None;
    }

    Some(format!("//{}[{}]", node.tag, predicates.join(" and ")))
}

/// Collapse XML whitespace runs to one space and trim, as XPath's
/// `normalize-space()` does. Non-breaking spaces are left alone.
pub fn normalize_space(text: &str) -> String {
    text.split([' ', '\t', '\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a string as an XPath 1.0 literal.
///
/// XPath has no escape sequences, so a value holding both quote kinds is
/// split on `'` and stitched back together with `concat()`.
pub fn xpath_literal(value: &str) -> String {
    let has_single = value.contains('\'');
    let has_double = value.contains('"');

    match (has_single, has_double) {
        (false, _) => format!("'{}'", value),
        (true, false) => format!("\"{}\"", value),
        (true, true) => {
            let parts: Vec<String> = value
                .split('\'')
                .map(|part| format!("'{}'", part))
                .collect();
            format!("concat({})", parts.join(", \"'\", "))
        }
    }
}
