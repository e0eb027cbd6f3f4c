use crate::dom::dom_model::DomNode;
use crate::element::classifier::input_type;
use crate::element::element_model::ElementKind;

pub const MAX_TEXT_NAME_CHARS: usize = 30;

/// Suggest a human-meaningful name for a relevant node.
///
/// Stable identifier attributes outrank visible text. The result is never
/// empty: when nothing usable is found the kind's label is returned, which
/// the sanitizer treats as a generic name and always numbers.
pub fn suggest(node: &DomNode, kind: ElementKind) -> String {
    let tag = node.tag.as_str();

    if let Some(id) = node.non_blank_attr("id") {
        return id.to_string();
    }

    if let Some(name) = node.non_blank_attr("name") {
        return name.to_string();
    }

    if matches!(tag, "input" | "textarea") {
        if let Some(placeholder) = node.non_blank_attr("placeholder") {
            return placeholder.to_string();
        }
    }

    if tag == "input" && matches!(input_type(node).as_str(), "submit" | "button") {
        if let Some(value) = node.non_blank_attr("value") {
            return value.to_string();
        }
    }

    let text = node.trimmed_text();

    if matches!(tag, "button" | "a") && !text.is_empty() {
        return text.to_string();
    }

    if !text.is_empty() {
        return text.chars().take(MAX_TEXT_NAME_CHARS).collect();
    }

    kind.label().to_string()
}
