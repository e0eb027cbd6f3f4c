use std::fmt;

use serde::Serialize;

use crate::dom::dom_model::DomNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Input,
    Button,
    Checkbox,
    RadioButton,
    Link,
    Select,
    TextArea,
    Generic,
}

impl ElementKind {
    /// Label used as the fallback name for elements of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Input => "Input",
            ElementKind::Button => "Button",
            ElementKind::Checkbox => "Checkbox",
            ElementKind::RadioButton => "RadioButton",
            ElementKind::Link => "Link",
            ElementKind::Select => "Select",
            ElementKind::TextArea => "TextArea",
            ElementKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocatorStrategy {
    Id,
    Name,
    CssSelector,
    XPath,
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocatorStrategy::Id => "Id",
            LocatorStrategy::Name => "Name",
            LocatorStrategy::CssSelector => "CssSelector",
            LocatorStrategy::XPath => "XPath",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locator {
    pub strategy: LocatorStrategy,
    pub value: String,
}

impl Locator {
    pub fn new(strategy: LocatorStrategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }
}

/// Working record for one relevant node while it moves through the pipeline.
///
/// Only candidates holding both a `locator` and a `resolved_name` make it
/// into the generated output.
#[derive(Debug, Clone)]
pub struct CandidateElement {
    pub node: DomNode,
    pub kind: ElementKind,
    pub suggested_name: String,
    pub locator: Option<Locator>,
    pub resolved_name: Option<String>,
}

impl CandidateElement {
    pub fn new(node: DomNode, kind: ElementKind, suggested_name: String) -> Self {
        Self {
            node,
            kind,
            suggested_name,
            locator: None,
            resolved_name: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.locator.is_some() && self.resolved_name.is_some()
    }
}
