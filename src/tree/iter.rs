use core::{iter::FusedIterator, slice};
use crate::util::{self, Stack};
use super::Tree;

/// A pre-order iterator over references to every node of a tree.
///
/// Created by [`Tree::iter`]. The root is yielded first, then each child subtree in turn, in the order the children were attached in.
///
/// [`Tree::iter`]: struct.Tree.html#method.iter " "
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    // One sibling iterator per level, the innermost level on top.
    stack: Stack<slice::Iter<'a, Tree<K, V>>>,
}
impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: &'a Tree<K, V>) -> Self {
        let mut stack = util::stack();
        stack.push(slice::from_ref(root).iter());
        Self { stack }
    }
    /// Returns the depth of the most recently yielded node, with the root at depth `0`, or `None` if the iterator has been exhausted.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let tree = Tree::with_children('A', 10, vec![Tree::new('B', 20)]);
    /// let mut iter = tree.iter();
    /// iter.next();
    /// assert_eq!(iter.depth(), Some(0));
    /// iter.next();
    /// assert_eq!(iter.depth(), Some(1));
    /// ```
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        // The top of the stack holds the children of the last yielded node.
        self.stack.len().checked_sub(2)
    }
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Tree<K, V>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            if let Some(node) = siblings.next() {
                self.stack.push(node.children.iter());
                return Some(node);
            }
            self.stack.pop();
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.stack.iter().map(ExactSizeIterator::len).sum::<usize>();
        // Every pending sibling yields at least itself, and nothing is left once none are pending.
        (pending, if pending == 0 { Some(0) } else { None })
    }
}
impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
