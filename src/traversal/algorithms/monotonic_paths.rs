use super::super::Traversable;

/// Determines whether the values along every path from the root to a leaf are *strictly* increasing.
///
/// Each edge is checked once: the value of every child has to be greater than the value of its parent. An edge between equal values, or between values which cannot be compared at all (such as a `NaN`), fails the check. A tree consisting of a single node has no edges and passes trivially.
///
/// Traversal stops at the first failing edge.
///
/// # Example
/// ```rust
/// # use kindling::{Tree, increasing_values};
/// let mut f = Tree::new('F', 80);
/// f.add_child(Tree::new('G', 120));
/// assert!(increasing_values(&f));
///
/// // One decreasing edge is enough to fail the whole tree.
/// f.add_child(Tree::new('C', 70));
/// assert!(!increasing_values(&f));
/// ```
pub fn increasing_values<T>(root: &T) -> bool
where
    T: Traversable,
    T::Value: PartialOrd,
{
    let increasing = increasing_below(root);
    trace!("values increase along every path: {}", increasing);
    increasing
}

fn increasing_below<T>(node: &T) -> bool
where
    T: Traversable,
    T::Value: PartialOrd,
{
    let value = node.value();
    node.children()
        .all(|child| value < child.value() && increasing_below(child))
}
