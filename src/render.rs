//! Plain-text tree rendering.

use crate::tree::{NodeId, Tree, TreeNode};

const BRANCH: &str = "\u{251c}\u{2500}\u{2500}\u{2500}"; // ├───
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500}\u{2500}"; // └───
const BAR: char = '\u{2502}'; // │

/// Render the whole tree, one line per node in pre-order.
pub fn render(tree: &Tree) -> String {
    let mut out = String::new();
    render_into(tree, &mut out);
    out
}

/// Append the rendering of `tree` to `out`.
pub fn render_into(tree: &Tree, out: &mut String) {
    for id in tree.top_level() {
        render_node(tree, *id, out);
    }
}

fn render_node(tree: &Tree, id: NodeId, out: &mut String) {
    let node = tree.node(id);

    push_prefix(tree, id, out);
    out.push_str(if node.is_last_sibling { LAST_BRANCH } else { BRANCH });
    out.push_str(&node.entry.name);
    if let Some(size) = size_annotation(node) {
        out.push(' ');
        out.push_str(&size);
    }
    out.push('\n');

    for child in tree.children(id) {
        render_node(tree, *child, out);
    }
}

/// One slot per ancestor. The leading slots, one for each ancestor that is
/// not a last sibling, carry a bar; the rest are blank.
fn push_prefix(tree: &Tree, id: NodeId, out: &mut String) {
    let depth = tree.depth(id);
    let open = tree.open_ancestors(id);
    for slot in 0..depth {
        if slot < open {
            out.push(BAR);
        }
        out.push('\t');
    }
}

/// `(empty)` or `(<n>b)` for files, nothing for directories.
fn size_annotation(node: &TreeNode) -> Option<String> {
    if node.entry.is_dir {
        return None;
    }
    Some(match node.entry.size {
        0 => "(empty)".to_string(),
        n => format!("({n}b)"),
    })
}
