//! Ordering policy for directory listings

use crate::node::{Node, NodeKind};
use std::cmp::Ordering;

/// Order a directory's children for display: directories before files,
/// then case-insensitive name order. The sort is stable, so names that
/// compare equal keep their input order.
pub fn sort_children(nodes: &[Node]) -> Vec<Node> {
    let mut sorted = nodes.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Recursively order every loaded directory in the tree.
///
/// Pure transform: the input is left untouched and a new tree is
/// returned. Files and directories whose children are not loaded come
/// back unchanged.
pub fn sort_tree(node: &Node) -> Node {
    let mut sorted = node.clone();
    sort_in_place(&mut sorted);
    sorted
}

fn sort_in_place(node: &mut Node) {
    if let Some(children) = node.children.as_mut() {
        children.sort_by(compare);
        for child in children {
            sort_in_place(child);
        }
    }
}

fn compare(a: &Node, b: &Node) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Directory, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Directory) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}
