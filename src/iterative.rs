//! BST validation with an explicit stack of pending subtrees instead of recursion.
//!
//! Each frame holds a node, the bounds inherited from its ancestors and its depth. Frames live
//! in a `Vec` on the heap, so arbitrarily deep trees are checked without growing the call stack.
//! Nodes are visited in the same pre-order as [`recursive`][crate::recursive] and the first
//! violation found is the same one it would report.
//!
//! # Examples
//!
//! ```
//! use validate_bst::{iterative, TreeNode};
//!
//! // 4 is in the root's right subtree but isn't greater than 5.
//! let root = TreeNode::new(5)
//!     .with_left(TreeNode::new(1))
//!     .with_right(
//!         TreeNode::new(4)
//!             .with_left(TreeNode::new(3))
//!             .with_right(TreeNode::new(6)),
//!     );
//!
//! assert!(!iterative::is_valid_bst(Some(&root)));
//!
//! let violation = iterative::validate(Some(&root)).unwrap_err();
//! assert_eq!(*violation.value(), 4);
//! assert_eq!(*violation.bound(), 5);
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
    let mut stack: Vec<(&TreeNode<T>, Bounds<'_, T>, usize)> = Vec::new();
    stack.extend(root.map(|root| (root, Bounds::unbounded(), 0)));

    while let Some((node, bounds, depth)) = stack.pop() {
        bounds.check(&node.value, depth)?;

        // Right is pushed first so the whole left subtree is checked before it.
        if let Some(right) = node.right.as_deref() {
            stack.push((right, bounds.right_of(&node.value), depth + 1));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, bounds.left_of(&node.value), depth + 1));
        }
    }

    Ok(())
}
