//! Ordered key/value trees, ones which don't impose any restrictions on the number of child nodes that a node can have.
//!
//! Every [`Tree`] is a root node paired with a key, a value and a list of child trees. There is no empty tree: the smallest tree is a single leaf node. Children are kept in the order they were attached in, and each one is owned by exactly one parent.
//!
//! # Example
//! ```rust
//! use kindling::Tree;
//!
//! // Creating a tree only requires the key and value for the root node.
//! let mut root = Tree::new("ROOT", 0);
//! // It does not have any children yet, hence:
//! assert!(root.is_leaf());
//!
//! // Let's grow it a little. Children are trees themselves, and attaching one moves it into the
//! // parent, so it has to be filled in before being attached.
//! for i in 1..=3 {
//!     let mut child = Tree::new("CHILD", i);
//!     child.add_child(Tree::new("GRANDCHILD", i * 10));
//!     root.add_child(child);
//! }
//! assert_eq!(root.num_children(), 3);
//!
//! // Children come back in the order they were added in.
//! let values = root.children().iter().map(|c| *c.value()).collect::<Vec<_>>();
//! assert_eq!(values, [1, 2, 3]);
//! // The root, three children and three grandchildren:
//! assert_eq!(root.num_nodes(), 7);
//! ```

use core::{
    any::Any,
    fmt::{self, Formatter, Display},
};
use alloc::{boxed::Box, vec::Vec};

mod iter;
pub use iter::Iter;

#[cfg(feature = "std")]
mod print;
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
pub use print::Printer;

#[cfg(test)]
mod tests;

/// A node of an ordered tree, together with the entire subtree below it.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tree<K, V = K> {
    key: K,
    value: V,
    children: Vec<Tree<K, V>>,
}
impl<K, V> Tree<K, V> {
    /// Creates a single-node tree with the specified key and value.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let tree = Tree::new('A', 10);
    /// assert_eq!(tree.key(), &'A');
    /// assert_eq!(tree.value(), &10);
    /// assert!(tree.is_leaf());
    /// ```
    #[inline(always)]
    pub const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            children: Vec::new(),
        }
    }
    /// Creates a tree with the specified key and value for the root node and attaches the given trees as its children, in order.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let tree = Tree::with_children('F', 80, vec![
    ///     Tree::new('G', 120),
    ///     Tree::new('C', 70),
    /// ]);
    /// assert_eq!(tree.num_children(), 2);
    /// ```
    pub fn with_children(key: K, value: V, children: impl IntoIterator<Item = Self>) -> Self {
        let mut tree = Self::new(key, value);
        tree.extend(children);
        tree
    }

    /// Attaches `child` as the last child of the root node.
    ///
    /// The child is moved into the tree, so the type system already rules out sharing a node between two parents or attaching a node under itself. See [`try_add_child`] for the dynamically typed version.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let mut a = Tree::new('A', 10);
    /// a.add_child(Tree::new('B', 20));
    /// assert_eq!(a.num_children(), 1);
    /// assert_eq!(a.children()[0].key(), &'B');
    /// ```
    ///
    /// [`try_add_child`]: #method.try_add_child " "
    #[inline]
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
        trace!("attached child #{}", self.children.len());
    }
    /// Attaches a dynamically typed value as the last child of the root node, if it is a tree of the same type.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the value is not a `Tree<K, V>`. The value is handed back inside the error instead of being dropped.
    ///
    /// Boxing erases the type before inference can reach into the box, so unsuffixed literals in the boxed tree take their default type (`i32`, `f64`). Suffix them to match the parent.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let mut a = Tree::new('A', 10_u32);
    /// a.try_add_child(Box::new(Tree::new('B', 20_u32))).unwrap();
    ///
    /// let error = a.try_add_child(Box::new("not a tree")).unwrap_err();
    /// assert_eq!(error.into_inner().downcast_ref::<&str>(), Some(&"not a tree"));
    /// assert_eq!(a.num_children(), 1);
    /// ```
    ///
    /// [`InvalidArgument`]: struct.InvalidArgument.html " "
    pub fn try_add_child(&mut self, child: Box<dyn Any>) -> Result<(), InvalidArgument>
    where
        K: 'static,
        V: 'static,
    {
        match child.downcast::<Self>() {
            Ok(tree) => {
                self.add_child(*tree);
                Ok(())
            }
            Err(argument) => {
                trace!("rejected a child which is not a tree");
                Err(InvalidArgument { argument })
            }
        }
    }

    /// Returns the number of direct children of the root node, which is `0` for a leaf.
    #[inline(always)]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }
    /// Returns `true` if the root node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    /// Returns a reference to the key of the root node.
    #[inline(always)]
    pub const fn key(&self) -> &K {
        &self.key
    }
    /// Returns a reference to the value of the root node.
    #[inline(always)]
    pub const fn value(&self) -> &V {
        &self.value
    }
    /// Returns the children of the root node in the order they were attached in.
    #[inline(always)]
    pub fn children(&self) -> &[Self] {
        &self.children
    }
    /// Returns an iterator over every node of the tree in pre-order, starting with the root.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let mut c = Tree::new('C', 70);
    /// let mut f = Tree::new('F', 80);
    /// f.add_child(Tree::new('G', 120));
    /// c.add_child(f);
    /// c.add_child(Tree::new('K', 100));
    ///
    /// let keys = c.iter().map(|node| *node.key()).collect::<String>();
    /// assert_eq!(keys, "CFGK");
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }
    /// Returns the total number of nodes in the tree, including the root.
    pub fn num_nodes(&self) -> usize {
        self.iter().count()
    }
    /// Consumes the tree, returning the key and value of the root node along with its children.
    #[inline]
    pub fn into_parts(self) -> (K, V, Vec<Self>) {
        (self.key, self.value, self.children)
    }
}
impl<K, V> From<(K, V)> for Tree<K, V> {
    #[inline(always)]
    fn from(op: (K, V)) -> Self {
        Self::new(op.0, op.1)
    }
}
impl<K, V> Extend<Tree<K, V>> for Tree<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = Tree<K, V>>>(&mut self, iter: I) {
        for child in iter {
            self.add_child(child);
        }
    }
}
impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = &'a Tree<K, V>;
    type IntoIter = Iter<'a, K, V>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The error type produced by [`try_add_child`], indicating that the value which was attempted to be attached is not a tree of the same type.
///
/// [`try_add_child`]: struct.Tree.html#method.try_add_child " "
#[derive(Debug)]
pub struct InvalidArgument {
    argument: Box<dyn Any>,
}
impl InvalidArgument {
    /// Returns the rejected value, so that it does not get dropped if it could instead be reused.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_inner(self) -> Box<dyn Any> {
        self.argument
    }
}
impl Display for InvalidArgument {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("parameter to add_child must be a tree of the same type")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidArgument {}
