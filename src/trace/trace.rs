use serde::Serialize;

use crate::element::element_model::{CandidateElement, ElementKind, Locator};

/// One line of the decision trace: what happened to a single relevant node.
#[derive(Debug, Serialize)]
pub struct ElementTrace {
    pub index: usize,
    pub tag: String,
    pub kind: ElementKind,
    pub suggested_name: String,

    pub locator: Option<Locator>,
    pub resolved_name: Option<String>,

    pub drop_reason: Option<String>,
}

impl ElementTrace {
    pub fn from_candidate(index: usize, candidate: &CandidateElement) -> Self {
        let drop_reason = if candidate.locator.is_none() {
            Some("no_locator".to_string())
        } else if candidate.resolved_name.is_none() {
            Some("no_name".to_string())
        } else {
            None
        };

        Self {
            index,
            tag: candidate.node.tag.clone(),
            kind: candidate.kind,
            suggested_name: candidate.suggested_name.clone(),
            locator: candidate.locator.clone(),
            resolved_name: candidate.resolved_name.clone(),
            drop_reason,
        }
    }
}
