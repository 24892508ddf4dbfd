//! Ubiquitous read-only queries for trees.
//!
//! This includes:
//! - Minimum depth of a leaf
//! - Strictly increasing values along every root-to-leaf path
//!
//! All of them are written against [`Traversable`], recurse once per level of the tree and never mutate it.
//!
//! [`Traversable`]: ../trait.Traversable.html " "

mod leaf_depth;
pub use leaf_depth::*;

mod monotonic_paths;
pub use monotonic_paths::*;
