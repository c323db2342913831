#![forbid(unsafe_code)]
//! dirtree — print a directory hierarchy as a box-drawing tree.

pub mod cli;
pub mod error;
pub mod render;
pub mod tree;

use std::io::Write;
use std::path::Path;

pub use error::{Error, ListingError, WriteError};
use tree::TreeConfig;

/// Build the tree below `path`, render it, and write it to `out` in one go.
///
/// Nothing is written unless the whole tree was built successfully.
pub fn dir_tree<W: Write>(out: &mut W, path: &Path, config: &TreeConfig) -> Result<(), Error> {
    let tree = tree::build(path, config)?;
    let text = render::render(&tree);

    out.write_all(text.as_bytes()).map_err(WriteError::from)?;
    out.flush().map_err(WriteError::from)?;
    Ok(())
}
