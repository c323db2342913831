//! Tree data model, the directory-listing seam, and tree building.

mod ancestry;
pub(crate) mod build;

use crate::error::ListingError;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub use ancestry::Ancestors;
pub use build::{build, build_with};

/// Snapshot of one filesystem entry at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Display name (filename component only), lossily decoded.
    pub name: String,
    /// Name exactly as the filesystem returned it, used to build child paths.
    pub os_name: OsString,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Size in bytes as reported by the listing.
    pub size: u64,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            os_name: OsString::from(&name),
            name,
            is_dir: true,
            size: 0,
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            os_name: OsString::from(&name),
            name,
            is_dir: false,
            size,
        }
    }
}

/// Index of a node inside its owning [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One entry of the built hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// The listed entry this node wraps.
    pub entry: DirEntry,
    /// Whether this node sorts last among its siblings.
    pub is_last_sibling: bool,
    /// Enclosing directory node, `None` for top-level nodes.
    pub parent: Option<NodeId>,
    /// Sorted children; empty for files and empty directories.
    pub children: Vec<NodeId>,
}

/// The built hierarchy below a root directory.
///
/// All nodes live in one arena; parents are referenced by [`NodeId`] so the
/// ancestry walk never needs shared ownership. The root itself is not a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    top: Vec<NodeId>,
}

impl Tree {
    /// Ids of the root's immediate children, in sorted order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top
    }

    /// # Panics
    ///
    /// Panics if `id` was not handed out by this tree. The same holds for
    /// [`Tree::children`] and [`Tree::parent`].
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every node in pre-order (a directory before its children).
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.top.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub(crate) fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn attach_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        self.nodes[id.0].children = children;
    }

    pub(crate) fn set_top_level(&mut self, top: Vec<NodeId>) {
        self.top = top;
    }
}

/// Configuration for tree building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Whether regular files appear in the tree (directories always do).
    pub include_files: bool,
}

/// Abstraction over directory listing so it can be swapped or mocked.
pub trait DirLister {
    /// List the immediate children of `path`, in no particular order.
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>, ListingError>;
}

/// Default `DirLister` that reads the real filesystem through walkdir.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>, ListingError> {
        // walkdir yields nothing for a plain file, so check the root first.
        let meta = fs::metadata(path).map_err(|e| ListingError::from_io(path, e))?;
        if !meta.is_dir() {
            return Err(ListingError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut entries = Vec::new();
        for entry_result in walker {
            let entry = entry_result.map_err(|e| walk_error(e, path))?;
            let size = entry
                .metadata()
                .map_err(|e| walk_error(e, entry.path()))?
                .len();

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                os_name: entry.file_name().to_os_string(),
                is_dir: entry.file_type().is_dir(),
                size,
            });
        }
        Ok(entries)
    }
}

/// Convert a walkdir error into a listing error for the path it names.
fn walk_error(err: walkdir::Error, fallback: &Path) -> ListingError {
    let failed = err.path().unwrap_or(fallback).to_path_buf();
    match err.into_io_error() {
        Some(io_err) => ListingError::from_io(&failed, io_err),
        None => ListingError::Io {
            path: failed,
            source: std::io::Error::other("directory walk failed"),
        },
    }
}
