use annolint_api::TextRange;
use tree_sitter::Node;

pub(crate) fn text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

pub(crate) fn range(node: Node<'_>) -> TextRange {
    TextRange::new(node.start_byte(), node.end_byte())
}

/// Every child except comments.
pub(crate) fn all_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    children
}

/// Named children except comments.
pub(crate) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    children
}

pub(crate) fn find_child<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    all_children(node).into_iter().find(|c| c.kind() == kind)
}

/// Offset of the first token after the modifier list, or the node start when
/// there is none.
pub(crate) fn head_offset(node: Node<'_>) -> usize {
    let children = all_children(node);
    match children.iter().position(|c| c.kind() == "modifiers") {
        Some(i) => children
            .get(i + 1)
            .map_or(children[i].end_byte(), |next| next.start_byte()),
        None => node.start_byte(),
    }
}

/// Type text with whitespace removed, as used in binding keys.
pub(crate) fn compact(type_text: &str) -> String {
    type_text.split_whitespace().collect()
}
