use serde::Serialize;

use crate::element::element_model::{ElementKind, Locator};
use crate::emit::member_model::MemberDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedElement {
    pub identifier: String,
    pub kind: ElementKind,
    pub locator: Locator,
    pub members: Vec<MemberDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationResult {
    pub elements: Vec<GeneratedElement>,
    pub warnings: Vec<String>,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.elements.iter().map(|e| e.members.len()).sum()
    }
}
