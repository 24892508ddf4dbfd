use core::fmt::{self, Formatter, Display, Debug};
use alloc::boxed::Box;
use super::Tree;

type Format<'a, T> = Box<dyn Fn(&T, &mut Formatter<'_>) -> fmt::Result + 'a>;

/// A `Display` adapter which draws a tree with box-drawing characters, one `key: value` line per node.
///
/// Created by [`Tree::display`] or [`Tree::display_with`].
///
/// # Example
/// ```rust
/// # use kindling::Tree;
/// let mut root = Tree::new("ROOT", 0);
/// let mut child = Tree::new("CHILD 1", 1);
/// child.add_child(Tree::new("GRANDCHILD 1", 10));
/// root.add_child(child);
/// root.add_child(Tree::new("CHILD 2", 2));
///
/// assert_eq!(
///     root.display().to_string(),
///     "\
/// ROOT: 0
/// ├── CHILD 1: 1
/// │   └── GRANDCHILD 1: 10
/// └── CHILD 2: 2
/// ",
/// );
/// // Cutting the output off after the first two levels:
/// assert_eq!(
///     root.display().max_depth(2).to_string(),
///     "\
/// ROOT: 0
/// ├── CHILD 1: 1
/// └── CHILD 2: 2
/// ",
/// );
/// ```
///
/// [`Tree::display`]: struct.Tree.html#method.display " "
/// [`Tree::display_with`]: struct.Tree.html#method.display_with " "
pub struct Printer<'a, K, V> {
    tree: &'a Tree<K, V>,
    max_depth: Option<usize>,
    key_format: Format<'a, K>,
    value_format: Format<'a, V>,
}
impl<'a, K, V> Printer<'a, K, V> {
    /// Renders only the first `depth` levels of the tree, the root being the first one. A depth of `0` renders nothing.
    #[inline(always)]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
    /// Replaces the function used to format keys.
    #[inline]
    pub fn with_key_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&K, &mut Formatter<'_>) -> fmt::Result + 'a,
    {
        self.key_format = Box::new(f);
        self
    }
    /// Replaces the function used to format values.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// let tree = Tree::new("pi", 3.14159);
    /// let printed = tree
    ///     .display()
    ///     .with_value_format(|v, f| write!(f, "{:.2}", v))
    ///     .to_string();
    /// assert_eq!(printed, "pi: 3.14\n");
    /// ```
    #[inline]
    pub fn with_value_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&V, &mut Formatter<'_>) -> fmt::Result + 'a,
    {
        self.value_format = Box::new(f);
        self
    }

    // `remaining` counts the levels left to render including `node`'s own, and is never `Some(0)`.
    fn build<'p>(
        &'p self,
        node: &'a Tree<K, V>,
        remaining: Option<usize>,
    ) -> termtree::Tree<Label<'p, 'a, K, V>> {
        let mut out = termtree::Tree::new(Label { printer: self, node });
        let remaining = remaining.map(|depth| depth - 1);
        if remaining != Some(0) {
            for child in node.children() {
                out.push(self.build(child, remaining));
            }
        }
        out
    }
}
impl<K, V> Display for Printer<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.max_depth == Some(0) {
            return Ok(());
        }
        Display::fmt(&self.build(self.tree, self.max_depth), f)
    }
}
impl<K, V> Debug for Printer<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

struct Label<'p, 'a, K, V> {
    printer: &'p Printer<'a, K, V>,
    node: &'a Tree<K, V>,
}
impl<K, V> Display for Label<'_, '_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.printer.key_format)(self.node.key(), f)?;
        f.write_str(": ")?;
        (self.printer.value_format)(self.node.value(), f)
    }
}

impl<K, V> Tree<K, V> {
    /// Returns an adapter which prints the tree, formatting keys and values with their `Display` implementations.
    ///
    /// See [`Printer`] for an example of the output.
    ///
    /// [`Printer`]: struct.Printer.html " "
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    pub fn display(&self) -> Printer<'_, K, V>
    where
        K: Display,
        V: Display,
    {
        self.display_with(<K as Display>::fmt, <V as Display>::fmt)
    }
    /// Returns an adapter which prints the tree, formatting keys and values with the specified functions.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::Tree;
    /// // Neither the key nor the value implement Display here.
    /// let tree = Tree::with_children(('A', 1), vec![10], vec![
    ///     Tree::new(('B', 2), vec![20, 21]),
    /// ]);
    /// let printed = tree
    ///     .display_with(|k, f| write!(f, "{}{}", k.0, k.1), |v, f| write!(f, "{:?}", v))
    ///     .to_string();
    /// assert_eq!(printed, "A1: [10]\n└── B2: [20, 21]\n");
    /// ```
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    pub fn display_with<'a, KF, VF>(&'a self, key_format: KF, value_format: VF) -> Printer<'a, K, V>
    where
        KF: Fn(&K, &mut Formatter<'_>) -> fmt::Result + 'a,
        VF: Fn(&V, &mut Formatter<'_>) -> fmt::Result + 'a,
    {
        Printer {
            tree: self,
            max_depth: None,
            key_format: Box::new(key_format),
            value_format: Box::new(value_format),
        }
    }
}
impl<K: Display, V: Display> Display for Tree<K, V> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(), f)
    }
}
