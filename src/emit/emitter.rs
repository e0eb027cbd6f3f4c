use crate::element::element_model::{CandidateElement, ElementKind, Locator};
use crate::emit::member_model::{MemberDescriptor, OperationKind};

/// Operations generated for an element of the given kind, in output order.
pub fn operations_for(kind: ElementKind) -> Vec<OperationKind> {
    let mut ops = vec![OperationKind::LocatorField, OperationKind::Find];

    match kind {
        ElementKind::Button
        | ElementKind::Link
        | ElementKind::Checkbox
        | ElementKind::RadioButton
        | ElementKind::Generic => ops.push(OperationKind::Click),
        ElementKind::Input | ElementKind::TextArea => {
            ops.push(OperationKind::EnterText);
            ops.push(OperationKind::GetValue);
        }
        ElementKind::Select => {
            ops.push(OperationKind::SelectByVisibleText);
            ops.push(OperationKind::SelectByValue);
            ops.push(OperationKind::GetSelectedText);
        }
    }

    if !matches!(
        kind,
        ElementKind::Input | ElementKind::TextArea | ElementKind::Select
    ) {
        ops.push(OperationKind::GetText);
    }

    ops.push(OperationKind::IsDisplayed);
    ops
}

/// Member name for an operation on the element called `name`.
pub fn member_name(operation: OperationKind, name: &str) -> String {
    match operation {
        OperationKind::LocatorField => format!("{}Locator", name),
        OperationKind::Find => format!("Find{}", name),
        OperationKind::IsDisplayed => format!("Is{}Displayed", name),
        OperationKind::Click => format!("Click{}", name),
        OperationKind::EnterText => format!("EnterText{}", name),
        OperationKind::GetValue => format!("Get{}Value", name),
        OperationKind::SelectByVisibleText => format!("Select{}ByText", name),
        OperationKind::SelectByValue => format!("Select{}ByValue", name),
        OperationKind::GetSelectedText => format!("Get{}SelectedText", name),
        OperationKind::GetText => format!("Get{}Text", name),
    }
}

/// Expand a candidate into its member descriptors.
///
/// A candidate without a locator or a resolved name has nothing to emit.
pub fn emit(element: &CandidateElement) -> Vec<MemberDescriptor> {
    match (&element.locator, &element.resolved_name) {
        (Some(locator), Some(name)) => emit_members(element.kind, name, locator),
        _ => Vec::new(),
    }
}

pub fn emit_members(kind: ElementKind, name: &str, locator: &Locator) -> Vec<MemberDescriptor> {
    operations_for(kind)
        .into_iter()
        .map(|operation| MemberDescriptor {
            operation,
            element_name: name.to_string(),
            member_name: member_name(operation, name),
            locator: locator.clone(),
        })
        .collect()
}
