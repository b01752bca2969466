mod validate;

use std::cmp::Ordering;

use validate_bst::{Link, TreeNode};

/// Builds a tree by inserting `xs` in order without any balancing. Later copies of a value are
/// dropped, so the result is always a valid BST.
pub(crate) fn build_unique<T: Ord + Copy>(xs: &[T]) -> Link<T> {
    let mut root = None;
    for x in xs {
        insert(&mut root, *x, false);
    }

    root
}

/// Builds a tree by inserting `xs` in order, sending values equal to a node into its left
/// subtree. Any repeated value ends up below its first copy.
pub(crate) fn build_with_duplicates<T: Ord + Copy>(xs: &[T]) -> Link<T> {
    let mut root = None;
    for x in xs {
        insert(&mut root, *x, true);
    }

    root
}

fn insert<T: Ord>(link: &mut Link<T>, value: T, keep_duplicates: bool) {
    match link {
        None => *link = Some(Box::new(TreeNode::new(value))),
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value, keep_duplicates),
            Ordering::Equal if keep_duplicates => insert(&mut node.left, value, keep_duplicates),
            Ordering::Equal => {}
            Ordering::Greater => insert(&mut node.right, value, keep_duplicates),
        },
    }
}
