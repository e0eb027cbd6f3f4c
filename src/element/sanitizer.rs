use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::element::element_model::ElementKind;
use crate::element::keywords::ReservedWords;

/// Counter per lower-cased base identifier. One registry per generation run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    counters: HashMap<String, u32>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump and return the occurrence count for `base` (case-insensitive).
    pub fn next(&mut self, base: &str) -> u32 {
        let counter = self.counters.entry(base.to_ascii_lowercase()).or_insert(0);
        *counter += 1;
        *counter
    }

    pub fn clear(&mut self) {
        self.counters.clear();
    }
}

// ============================================================================
// First pass — per-element sanitization
// ============================================================================

/// Turn a suggested name into a safe identifier and number it against the registry.
///
/// A generic suggestion (the kind's own label) is numbered even on its first
/// occurrence, so `Button1`, `Button2` rather than `Button`, `Button2`.
pub fn sanitize(
    suggested: &str,
    kind: ElementKind,
    registry: &mut NameRegistry,
    reserved: &ReservedWords,
) -> String {
    let base = base_identifier(suggested, kind, reserved);
    let is_generic = suggested.trim().is_empty() || suggested == kind.label();
    let occurrence = registry.next(&base);

    let name = if occurrence > 1 || is_generic {
        format!("{}{}", base, occurrence)
    } else {
        base
    };

    debug!(suggested, name = %name, "sanitized name");
    name
}

/// Sanitization without the uniqueness counter.
pub fn base_identifier(suggested: &str, kind: ElementKind, reserved: &ReservedWords) -> String {
    let source = if suggested.trim().is_empty() {
        kind.label()
    } else {
        suggested
    };

    let mut cleaned: String = source
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if cleaned.is_empty() || starts_with_digit(&cleaned) {
        cleaned.insert(0, '_');
    }

    let mut identifier = pascal_case(&cleaned);

    // Casing drops the underscore that shielded a leading digit.
    if starts_with_digit(&identifier) {
        identifier.insert(0, '_');
    }

    if identifier.is_empty() {
        identifier = kind.label().to_string();
    }

    if reserved.contains(&identifier) {
        identifier.push_str("Element");
    }

    identifier
}

/// Split on `_` and title-case each segment: `user_NAME` → `UserName`.
pub fn pascal_case(s: &str) -> String {
    s.split('_')
        .filter(|segment| !segment.is_empty())
        .map(title_case)
        .collect()
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

// ============================================================================
// Second pass — whole-set reconciliation
// ============================================================================

/// Make every name in the set unique, case-insensitively.
///
/// The first pass keys its counters on the base name, so a numbered generic
/// name (`Button1`) can still collide with an element literally suggested as
/// `Button1`. The first occurrence of a name keeps it; the later duplicates are
/// walked from the end of the list and get running counters from 2, skipping
/// any candidate that is already taken.
pub fn deduplicate(names: &mut [String]) {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        first_seen.entry(name.to_ascii_lowercase()).or_insert(i);
    }

    let mut taken: HashSet<String> = names.iter().map(|n| n.to_ascii_lowercase()).collect();
    let mut counters: HashMap<String, u32> = HashMap::new();

    for i in (0..names.len()).rev() {
        let key = names[i].to_ascii_lowercase();
        if first_seen.get(&key) == Some(&i) {
            continue;
        }

        let counter = counters.entry(key).or_insert(1);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{}{}", names[i], counter);
            if !taken.contains(&candidate.to_ascii_lowercase()) {
                break candidate;
            }
        };

        debug!(from = %names[i], to = %renamed, "deduplicated name");
        taken.insert(renamed.to_ascii_lowercase());
        names[i] = renamed;
    }
}
