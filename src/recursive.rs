//! BST validation by recursing down the tree with the bounds inherited from each ancestor.
//!
//! This is the direct form of the algorithm and is easiest to follow, but it uses one stack
//! frame per level. For trees that may be very deep (e.g. built by inserting sorted keys without
//! balancing) prefer [`iterative`][crate::iterative], which the crate root functions use.
//!
//! # Examples
//!
//! ```
//! use validate_bst::{recursive, TreeNode};
//!
//! let root = TreeNode::new(2)
//!     .with_left(TreeNode::new(1))
//!     .with_right(TreeNode::new(3));
//!
//! assert!(recursive::is_valid_bst(Some(&root)));
//! ```

use crate::bounds::Bounds;
use crate::error::Violation;
use crate::node::TreeNode;

/// Returns `true` if every node in the tree is strictly greater than everything in its left
/// subtree and strictly less than everything in its right subtree. An empty tree is valid.
pub fn is_valid_bst<T>(root: Option<&TreeNode<T>>) -> bool
where
    T: Ord,
{
    validate(root).is_ok()
}

/// Like [`is_valid_bst`] but reports the first node, in pre-order, that is out of order.
pub fn validate<T>(root: Option<&TreeNode<T>>) -> Result<(), Violation<&'_ T>>
where
    T: Ord,
{
    validate_subtree(root, Bounds::unbounded(), 0)
}

fn validate_subtree<'a, T>(
    node: Option<&'a TreeNode<T>>,
    bounds: Bounds<'a, T>,
    depth: usize,
) -> Result<(), Violation<&'a T>>
where
    T: Ord,
{
    match node {
        None => Ok(()),
        Some(n) => {
            bounds.check(&n.value, depth)?;
            validate_subtree(n.left.as_deref(), bounds.left_of(&n.value), depth + 1)?;
            validate_subtree(n.right.as_deref(), bounds.right_of(&n.value), depth + 1)
        }
    }
}
