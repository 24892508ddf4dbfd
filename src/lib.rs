//! Ordered key/value trees with owned children, and read-only queries over them.
//!
//! # Overview
//! The crate revolves around [`Tree`], a node which holds a key, a value and an ordered list of child trees which it owns outright. There is no arena and no reference counting: attaching a child moves it into its parent, so sharing a node between two parents or making a node its own descendant is simply unrepresentable.
//!
//! On top of that sit two recursive queries, found in the [`algorithms`] module and re-exported here:
//! - [`min_depth_leaf`] — the number of edges on the shortest path from the root to a leaf
//! - [`increasing_values`] — whether values strictly increase along every root-to-leaf path
//!
//! Both are written against the [`Traversable`] trait rather than [`Tree`] itself, so they work for any ordered tree that can lend out references to its children.
//!
//! # Example
//! ```rust
//! use kindling::{Tree, min_depth_leaf, increasing_values};
//!
//! let mut c = Tree::new('C', 70);
//! let mut f = Tree::new('F', 80);
//! f.add_child(Tree::new('G', 120));
//! c.add_child(f);
//! c.add_child(Tree::new('K', 100));
//!
//! // K is a leaf right below the root, so the deeper branch does not matter.
//! assert_eq!(min_depth_leaf(&c), 1);
//! // 70 < 80 < 120 and 70 < 100.
//! assert!(increasing_values(&c));
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Adds [`Error`] trait implementations and the tree printer, which is built on `termtree`.
//! - `smallvec` (**enabled by default**) — keeps the explicit stack of the pre-order iterator inline for shallow trees. Without it, a [`Vec`] is used.
//! - `log` — emits `trace`-level records through the `log` facade whenever children are attached or a query finishes. No logger is installed by this crate.
//!
//! The crate always requires an allocator, since children are stored in a [`Vec`].
//!
//! [`algorithms`]: traversal/algorithms/index.html " "
//! [`Traversable`]: traversal/trait.Traversable.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

// Forwards to `log::trace!` when the `log` feature is on, expands to nothing otherwise.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub mod tree;
pub use tree::{Tree, InvalidArgument};

pub mod traversal;
pub use traversal::Traversable;
#[doc(no_inline)]
pub use traversal::algorithms::{min_depth_leaf, increasing_values};

/// A prelude for using Kindling, containing the most used items for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::tree::{
        Tree,
        InvalidArgument as InvalidTreeArgument,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Traversable,
        algorithms::{min_depth_leaf, increasing_values},
    };
}

pub(crate) mod util;
