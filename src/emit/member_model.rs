use serde::Serialize;

use crate::element::element_model::Locator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationKind {
    /// Locator field declaration.
    LocatorField,
    /// Internal accessor returning the live element.
    Find,
    /// Presence + visibility probe.
    IsDisplayed,
    Click,
    EnterText,
    GetValue,
    SelectByVisibleText,
    SelectByValue,
    GetSelectedText,
    GetText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDescriptor {
    pub operation: OperationKind,
    pub element_name: String,
    pub member_name: String,
    pub locator: Locator,
}
