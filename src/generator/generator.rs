use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::dom::dom_model::DomNode;
use crate::element::classifier::classify;
use crate::element::element_model::CandidateElement;
use crate::element::keywords::ReservedWords;
use crate::element::locator::resolve;
use crate::element::naming::suggest;
use crate::element::sanitizer::{NameRegistry, deduplicate, sanitize};
use crate::element::element_model::ElementKind;
use crate::emit::emitter::{emit, member_name, operations_for};

use super::generator_model::{GeneratedElement, GenerationResult};

/// Run discovery, locator resolution and naming over a node list.
///
/// Returns every relevant node as a candidate, in document order. Candidates
/// without a locator keep `locator` and `resolved_name` empty and never touch
/// the name registry.
pub fn discover(nodes: &[DomNode], reserved: &ReservedWords) -> Vec<CandidateElement> {
    let mut registry = NameRegistry::new();
    let mut candidates = Vec::new();

    for node in nodes {
        let Some(kind) = classify(node) else {
            continue;
        };

        let mut candidate = CandidateElement::new(node.clone(), kind, suggest(node, kind));
        candidate.locator = resolve(node, kind);

        if candidate.locator.is_some() {
            candidate.resolved_name = Some(sanitize(
                &candidate.suggested_name,
                kind,
                &mut registry,
                reserved,
            ));
        }

        candidates.push(candidate);
    }

    reconcile_names(&mut candidates);
    reconcile_members(&mut candidates);
    candidates
}

/// Second naming pass over the named candidates.
fn reconcile_names(candidates: &mut [CandidateElement]) {
    let mut named: Vec<&mut CandidateElement> = candidates
        .iter_mut()
        .filter(|c| c.resolved_name.is_some())
        .collect();

    let mut names: Vec<String> = named
        .iter()
        .filter_map(|c| c.resolved_name.clone())
        .collect();

    deduplicate(&mut names);

    for (candidate, name) in named.iter_mut().zip(names) {
        candidate.resolved_name = Some(name);
    }
}

/// Third naming pass: unique identifiers can still yield clashing members,
/// e.g. select `Color` and button `ColorSelected` both produce
/// `GetColorSelectedText`. The later element is re-suffixed until none of its
/// members clash and its identifier stays unique.
fn reconcile_members(candidates: &mut [CandidateElement]) {
    let mut taken_names: HashSet<String> = candidates
        .iter()
        .filter_map(|c| c.resolved_name.as_deref())
        .map(str::to_ascii_lowercase)
        .collect();
    let mut taken_members: HashSet<String> = HashSet::new();

    for candidate in candidates.iter_mut() {
        let Some(name) = candidate.resolved_name.clone() else {
            continue;
        };
        let kind = candidate.kind;

        let mut final_name = name.clone();
        let mut counter = 1;
        while clashes(kind, &final_name, &taken_members) {
            counter += 1;
            let next = format!("{}{}", name, counter);
            if !taken_names.contains(&next.to_ascii_lowercase()) {
                final_name = next;
            }
        }

        if final_name != name {
            debug!(from = %name, to = %final_name, "renamed to avoid member clash");
            taken_names.insert(final_name.to_ascii_lowercase());
            candidate.resolved_name = Some(final_name.clone());
        }

        taken_members.extend(member_keys(kind, &final_name));
    }
}

fn member_keys(kind: ElementKind, name: &str) -> Vec<String> {
    operations_for(kind)
        .into_iter()
        .map(|op| member_name(op, name).to_ascii_lowercase())
        .collect()
}

fn clashes(kind: ElementKind, name: &str, taken: &HashSet<String>) -> bool {
    member_keys(kind, name).iter().any(|m| taken.contains(m))
}

/// Turn discovered candidates into output records plus warnings for dropped nodes.
pub fn collect(candidates: &[CandidateElement]) -> GenerationResult {
    let mut result = GenerationResult::default();

    for candidate in candidates {
        match (&candidate.locator, &candidate.resolved_name) {
            (Some(locator), Some(name)) => result.elements.push(GeneratedElement {
                identifier: name.clone(),
                kind: candidate.kind,
                locator: locator.clone(),
                members: emit(candidate),
            }),
            _ => {
                let message = drop_warning(candidate);
                warn!("{}", message);
                result.warnings.push(message);
            }
        }
    }

    info!(
        elements = result.elements.len(),
        warnings = result.warnings.len(),
        "page elements generated"
    );
    result
}

/// Full core pipeline: node list in, generated elements and warnings out.
pub fn generate(nodes: &[DomNode], reserved: &ReservedWords) -> GenerationResult {
    collect(&discover(nodes, reserved))
}

pub fn drop_warning(candidate: &CandidateElement) -> String {
    format!(
        "No stable locator for <{}> '{}' ({}); element skipped",
        candidate.node.tag, candidate.suggested_name, candidate.kind
    )
}
