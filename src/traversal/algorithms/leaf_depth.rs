use super::super::Traversable;

/// Computes the minimum depth of a leaf in the tree, i.e. the number of edges on the shortest path from the root to a node without children.
///
/// A tree consisting of a single node is its own leaf and thus has a minimum leaf depth of `0`. The order of siblings does not affect the result.
///
/// # Example
/// ```rust
/// # use kindling::{Tree, min_depth_leaf};
/// let mut f = Tree::new('F', 80);
/// f.add_child(Tree::new('G', 120));
/// let mut c = Tree::new('C', 70);
/// c.add_child(f);
/// assert_eq!(min_depth_leaf(&c), 2);
///
/// // A shallower leaf wins regardless of the deeper branch.
/// c.add_child(Tree::new('K', 100));
/// assert_eq!(min_depth_leaf(&c), 1);
/// ```
pub fn min_depth_leaf<T: Traversable>(root: &T) -> usize {
    let depth = min_depth_below(root);
    trace!("minimum leaf depth is {}", depth);
    depth
}

fn min_depth_below<T: Traversable>(node: &T) -> usize {
    node.children()
        .map(|child| min_depth_below(child) + 1)
        .min()
        .unwrap_or(0)
}
