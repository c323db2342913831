use std::path::Path;
use tracing::{debug, trace};

use super::{DirEntry, DirLister, FsLister, NodeId, Tree, TreeConfig, TreeNode};
use crate::error::ListingError;

/// Build the tree below `root` from the real filesystem.
pub fn build(root: &Path, config: &TreeConfig) -> Result<Tree, ListingError> {
    build_with(&FsLister, root, config)
}

/// Build the tree below `root`, listing directories through `lister`.
///
/// The first directory that fails to list aborts the whole build.
pub fn build_with(
    lister: &dyn DirLister,
    root: &Path,
    config: &TreeConfig,
) -> Result<Tree, ListingError> {
    let mut tree = Tree::default();
    let top = build_level(lister, root, None, config, &mut tree)?;
    tree.set_top_level(top);
    debug!(root = %root.display(), nodes = tree.len(), "tree built");
    Ok(tree)
}

/// List one directory and recurse into its subdirectories.
/// Returns the ids of the directory's children in sorted order.
fn build_level(
    lister: &dyn DirLister,
    path: &Path,
    parent: Option<NodeId>,
    config: &TreeConfig,
    tree: &mut Tree,
) -> Result<Vec<NodeId>, ListingError> {
    let mut entries = lister.list(path)?;
    debug!(path = %path.display(), entries = entries.len(), "listed directory");

    if !config.include_files {
        entries.retain(|e| e.is_dir);
    }
    entries.sort_by(sort_cmp);

    let len = entries.len();
    let mut ids = Vec::with_capacity(len);

    for (i, entry) in entries.into_iter().enumerate() {
        trace!(name = %entry.name, is_dir = entry.is_dir, size = entry.size, "entry");

        let child_path = entry.is_dir.then(|| path.join(&entry.os_name));
        let id = tree.push(TreeNode {
            entry,
            is_last_sibling: i + 1 == len,
            parent,
            children: Vec::new(),
        });

        if let Some(child_path) = child_path {
            let children = build_level(lister, &child_path, Some(id), config, tree)?;
            tree.attach_children(id, children);
        }

        ids.push(id);
    }

    Ok(ids)
}

/// Case-sensitive order on the raw names; byte order on unix.
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.os_name.cmp(&b.os_name)
}
