use scraper::{ElementRef, Html};
use tracing::debug;

use crate::dom::dom_model::DomNode;

/// Parse a raw HTML document into its element nodes, in document (pre-order) order.
///
/// html5ever recovers from malformed markup, so this never fails. Text and
/// comment nodes are not returned; each element carries the concatenated text
/// of its descendants instead.
pub fn parse_document(html: &str) -> Vec<DomNode> {
    let document = Html::parse_document(html);

    let nodes: Vec<DomNode> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .map(to_dom_node)
        .collect();

    debug!(elements = nodes.len(), "parsed document");
    nodes
}

fn to_dom_node(el: ElementRef<'_>) -> DomNode {
    let mut node = DomNode::element(el.value().name());
    for (name, value) in el.value().attrs() {
        node.set_attr(name, value);
    }
    node.text = el.text().collect::<String>();
    node
}
