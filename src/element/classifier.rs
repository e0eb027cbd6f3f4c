use crate::dom::dom_model::DomNode;
use crate::element::element_model::ElementKind;

/// Decide whether a node is relevant and, if so, which kind of element it is.
///
/// Each node is judged on its own; a relevant node nested inside another
/// relevant node is classified independently.
pub fn classify(node: &DomNode) -> Option<ElementKind> {
    if !node.is_element() {
        return None;
    }

    match node.tag.as_str() {
        "input" => Some(classify_input(node)),
        "button" => Some(ElementKind::Button),
        "a" => Some(ElementKind::Link),
        "select" => Some(ElementKind::Select),
        "textarea" => Some(ElementKind::TextArea),
        "div" | "span" if is_role_button(node) => Some(ElementKind::Generic),
        _ => None,
    }
}

fn classify_input(node: &DomNode) -> ElementKind {
    match input_type(node).as_str() {
        "submit" | "reset" | "button" => ElementKind::Button,
        "checkbox" => ElementKind::Checkbox,
        "radio" => ElementKind::RadioButton,
        _ => ElementKind::Input,
    }
}

/// Lower-cased `type` of an `<input>`, defaulting to `"text"`.
pub fn input_type(node: &DomNode) -> String {
    node.non_blank_attr("type")
        .unwrap_or("text")
        .to_ascii_lowercase()
}

pub fn is_role_button(node: &DomNode) -> bool {
    node.attr("role") == Some("button")
}
