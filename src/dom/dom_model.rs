#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

/// A read-only view of one parsed DOM node.
///
/// Tag names are stored lower-cased. Attributes keep their source order and
/// are looked up case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    pub tag: String,
    pub kind: NodeKind,
    pub text: String,
    attributes: Vec<(String, String)>,
}

impl DomNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            kind: NodeKind::Element,
            text: String::new(),
            attributes: Vec::new(),
        }
    }

    pub fn text_node(text: &str) -> Self {
        Self {
            tag: String::new(),
            kind: NodeKind::Text,
            text: text.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Set an attribute, replacing an existing one with the same (case-insensitive) name.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value trimmed, or `None` when absent or blank.
    pub fn non_blank_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}
