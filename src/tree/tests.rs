use super::*;
use alloc::{string::ToString, vec};

#[test]
fn basic() {
    let mut tree = Tree::new('A', 10);
    assert!(tree.is_leaf());
    assert_eq!(tree.num_children(), 0);

    tree.add_child(Tree::new('B', 20));
    tree.add_child(Tree::new('C', 70));
    assert!(!tree.is_leaf());
    assert_eq!(tree.num_children(), 2);

    let keys = tree.children().iter().map(Tree::key).copied().collect::<Vec<_>>();
    assert_eq!(keys, ['B', 'C']);
    assert_eq!(tree.children()[1].value(), &70);
}

#[test]
fn children_keep_insertion_order() {
    let a = Tree::with_children('R', 0, vec![Tree::new('X', 1), Tree::new('Y', 2)]);
    let b = Tree::with_children('R', 0, vec![Tree::new('Y', 2), Tree::new('X', 1)]);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn try_add_child() {
    let mut tree: Tree<&'static str, u32> = Tree::new("root", 1);
    tree.try_add_child(Box::new(Tree::new("child", 2_u32)))
        .expect("a tree of the same type must be accepted");
    assert_eq!(tree.num_children(), 1);

    let error = tree
        .try_add_child(Box::new(42_u32))
        .expect_err("a number is not a tree");
    assert_eq!(
        error.to_string(),
        "parameter to add_child must be a tree of the same type",
    );
    assert_eq!(error.into_inner().downcast_ref::<u32>(), Some(&42));

    // Same shape, different value type.
    let error = tree
        .try_add_child(Box::new(Tree::new("child", 2_i64)))
        .expect_err("the value type does not match");
    assert!(error.into_inner().is::<Tree<&'static str, i64>>());

    assert_eq!(tree.num_children(), 1);
}

#[test]
fn try_add_child_literal_defaults() {
    let mut tree: Tree<char, u8> = Tree::new('A', 1);
    // An unsuffixed integer inside the box is an `i32`, not the `u8` of the parent.
    let error = tree
        .try_add_child(Box::new(Tree::new('B', 2)))
        .expect_err("the literal defaults to i32");
    assert!(error.into_inner().is::<Tree<char, i32>>());
    tree.try_add_child(Box::new(Tree::new('B', 2_u8)))
        .expect("a suffixed literal matches the parent's value type");
    assert_eq!(tree.children()[0].value(), &2);
}

#[test]
fn iter_is_pre_order() {
    let tree = Tree::with_children('C', 70, vec![
        Tree::with_children('F', 80, vec![Tree::new('G', 120), Tree::new('H', 40)]),
        Tree::new('K', 100),
    ]);

    let mut iter = tree.iter();
    let mut visited = Vec::new();
    while let Some(node) = iter.next() {
        visited.push((*node.key(), iter.depth().expect("a node was just yielded")));
    }
    assert_eq!(visited, [('C', 0), ('F', 1), ('G', 2), ('H', 2), ('K', 1)]);
    assert_eq!(iter.depth(), None);
    assert_eq!(iter.next(), None);

    assert_eq!(tree.num_nodes(), 5);
    assert_eq!((&tree).into_iter().count(), tree.iter().count());
}

#[test]
fn iter_size_hint() {
    let tree = Tree::with_children(0, 0, vec![Tree::new(1, 1), Tree::new(2, 2)]);
    let mut iter = tree.iter();
    assert_eq!(iter.size_hint(), (1, None));
    iter.next();
    assert_eq!(iter.size_hint(), (2, None));
    assert_eq!(iter.by_ref().count(), 2);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn iter_clone_without_clone_payloads() {
    struct Opaque(u8);
    let tree = Tree::with_children(Opaque(0), Opaque(0), vec![
        Tree::new(Opaque(1), Opaque(1)),
        Tree::new(Opaque(2), Opaque(2)),
    ]);
    let mut iter = tree.iter();
    iter.next();
    let rest = iter.clone();
    assert_eq!(iter.map(|node| node.key().0).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(rest.map(|node| node.value().0).collect::<Vec<_>>(), [1, 2]);

    let mut children = crate::Traversable::children(&tree);
    children.next();
    assert_eq!(children.clone().map(|node| node.key().0).collect::<Vec<_>>(), [2]);
    assert_eq!(children.count(), 1);
}

#[test]
fn deep_chain() {
    // Deeper than the inline capacity of the traversal stack.
    let mut tree = Tree::new(0_u32, 0_u32);
    for i in 1..100 {
        tree = Tree::with_children(i, i, vec![tree]);
    }
    assert_eq!(tree.num_nodes(), 100);
    let last = tree.iter().last().expect("the tree is not empty");
    assert_eq!(last.key(), &0);
}

#[test]
fn conversions() {
    let mut tree = Tree::from(('A', 10));
    tree.extend(vec![Tree::from(('B', 20)), Tree::from(('C', 30))]);
    let (key, value, children) = tree.into_parts();
    assert_eq!((key, value), ('A', 10));
    assert_eq!(children, [Tree::new('B', 20), Tree::new('C', 30)]);
}

#[cfg(feature = "std")]
#[test]
fn print() {
    let mut root = Tree::new("ROOT".to_string(), "foo");
    for i in 1..=2 {
        let mut child = Tree::new(format!("CHILD {}", i), "foo");
        for j in 1..=2 {
            child.add_child(Tree::new(format!("GRANDCHILD {}", j), "foo"));
        }
        root.add_child(child);
    }

    assert_eq!(
        root.to_string(),
        "\
ROOT: foo
├── CHILD 1: foo
│   ├── GRANDCHILD 1: foo
│   └── GRANDCHILD 2: foo
└── CHILD 2: foo
    ├── GRANDCHILD 1: foo
    └── GRANDCHILD 2: foo
",
    );
    assert_eq!(root.display().max_depth(1).to_string(), "ROOT: foo\n");
    assert_eq!(root.display().max_depth(0).to_string(), "");
    assert_eq!(root.display().max_depth(10).to_string(), root.to_string());
}

#[cfg(feature = "std")]
#[test]
fn print_with_formats() {
    let tree = Tree::with_children(1_u8, 0.5_f32, vec![Tree::new(2, 0.3)]);
    let printed = tree
        .display()
        .with_key_format(|k, f| write!(f, "#{:03}", k))
        .with_value_format(|v, f| write!(f, "{:.1}", v))
        .to_string();
    assert_eq!(printed, "#001: 0.5\n└── #002: 0.3\n");
}
