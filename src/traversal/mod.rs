//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — a *trait for types which describe ordered tree-like structures* that can lend out references to their children
//! - Implementations of read-only queries over such structures (see the [`algorithms`] module for more)
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "

pub mod algorithms;

use core::{iter::FusedIterator, slice};
use crate::Tree;

/// Ordered tree-like structures whose nodes carry a key and a value and can be walked by borrowing.
///
/// Every value of an implementing type is a node together with the subtree below it, which is what allows the algorithms in this module to be written recursively: the children of a node are themselves `Traversable` values of the same type.
///
/// # Example
/// A chain of nodes, where every node has at most one child, can be used with the algorithms without being converted into a [`Tree`]:
/// ```rust
/// use kindling::{Traversable, min_depth_leaf, increasing_values};
///
/// struct Chain {
///     value: u32,
///     next: Option<Box<Chain>>,
/// }
/// impl Traversable for Chain {
///     type Key = ();
///     type Value = u32;
///     type Children<'a> = std::option::IntoIter<&'a Chain>;
///
///     fn key(&self) -> &() { &() }
///     fn value(&self) -> &u32 { &self.value }
///     fn children(&self) -> Self::Children<'_> {
///         self.next.as_deref().into_iter()
///     }
/// }
///
/// let chain = Chain {
///     value: 1,
///     next: Some(Box::new(Chain { value: 2, next: None })),
/// };
/// assert_eq!(min_depth_leaf(&chain), 1);
/// assert!(increasing_values(&chain));
/// ```
///
/// [`Tree`]: ../struct.Tree.html " "
pub trait Traversable {
    /// The key attached to every node.
    type Key;
    /// The value attached to every node.
    type Value;
    /// The iterator over the children of a node, yielding them in order.
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    /// Returns a reference to the key of the node.
    fn key(&self) -> &Self::Key;
    /// Returns a reference to the value of the node.
    fn value(&self) -> &Self::Value;
    /// Returns an iterator over the children of the node.
    fn children(&self) -> Self::Children<'_>;

    /// Returns the number of children of the node.
    #[inline]
    fn num_children(&self) -> usize {
        self.children().count()
    }
    /// Returns `true` if the node does not have any children, `false` otherwise.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }
}

/// An iterator over references to the children of a [`Tree`] node.
///
/// [`Tree`]: ../struct.Tree.html " "
#[derive(Debug)]
pub struct Children<'a, K, V>(slice::Iter<'a, Tree<K, V>>);
impl<'a, K, V> Iterator for Children<'a, K, V> {
    type Item = &'a Tree<K, V>;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<K, V> Clone for Children<'_, K, V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<K, V> DoubleEndedIterator for Children<'_, K, V> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}
impl<K, V> ExactSizeIterator for Children<'_, K, V> {}
impl<K, V> FusedIterator for Children<'_, K, V> {}

impl<K, V> Traversable for Tree<K, V> {
    type Key = K;
    type Value = V;
    type Children<'a> = Children<'a, K, V>
    where
        Self: 'a;

    #[inline(always)]
    fn key(&self) -> &K {
        Tree::key(self)
    }
    #[inline(always)]
    fn value(&self) -> &V {
        Tree::value(self)
    }
    #[inline(always)]
    fn children(&self) -> Self::Children<'_> {
        Children(Tree::children(self).iter())
    }
    #[inline(always)]
    fn num_children(&self) -> usize {
        Tree::num_children(self)
    }
    #[inline(always)]
    fn is_leaf(&self) -> bool {
        Tree::is_leaf(self)
    }
}
