use super::{NodeId, Tree, TreeNode};

/// Iterator over a node's ancestors, immediate parent first.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.node(id);
        self.next = node.parent;
        Some(node)
    }
}

impl Tree {
    /// Walk the parent chain upward from `id` (the node itself excluded).
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Number of ancestors; top-level nodes have depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Number of ancestors that are not the last sibling in their own group.
    pub fn open_ancestors(&self, id: NodeId) -> usize {
        self.ancestors(id).filter(|a| !a.is_last_sibling).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DirEntry;

    fn push(tree: &mut Tree, name: &str, last: bool, parent: Option<NodeId>) -> NodeId {
        tree.push(TreeNode {
            entry: DirEntry::dir(name),
            is_last_sibling: last,
            parent,
            children: Vec::new(),
        })
    }

    #[test]
    fn depth_counts_parent_chain() {
        let mut tree = Tree::default();
        let a = push(&mut tree, "a", true, None);
        let b = push(&mut tree, "b", false, Some(a));
        let c = push(&mut tree, "c", true, Some(b));

        assert_eq!(tree.depth(a), 0);
        assert_eq!(tree.depth(b), 1);
        assert_eq!(tree.depth(c), 2);
    }

    #[test]
    fn ancestors_run_from_parent_to_top() {
        let mut tree = Tree::default();
        let a = push(&mut tree, "a", true, None);
        let b = push(&mut tree, "b", false, Some(a));
        let c = push(&mut tree, "c", true, Some(b));

        let names: Vec<&str> = tree.ancestors(c).map(|n| n.entry.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn open_ancestors_skip_last_siblings() {
        let mut tree = Tree::default();
        let a = push(&mut tree, "a", true, None);
        let b = push(&mut tree, "b", false, Some(a));
        let c = push(&mut tree, "c", false, Some(b));
        let d = push(&mut tree, "d", true, Some(c));

        assert_eq!(tree.open_ancestors(a), 0);
        assert_eq!(tree.open_ancestors(c), 1);
        assert_eq!(tree.open_ancestors(d), 2);
    }
}
