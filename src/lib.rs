//! This crate decides whether a binary tree is a Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A binary tree is made of `Node`s. Each `Node` stores a value and has up to two child `Node`s.
//! For the tree to be a BST, the following must hold **strictly**:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! > Note that these rules are about whole subtrees, not just direct children. In the tree below
//! > every parent/child pair looks fine, but `4` is in the right subtree of `5`, so it is not a
//! > BST:
//! >
//! > ```text
//! >     5
//! >    / \
//! >   1   4
//! >      / \
//! >     3   6
//! > ```
//!
//! Validation walks down from the root carrying the open interval `(low, high)` that its
//! ancestors allow. Going left tightens `high` to the parent's value and going right tightens
//! `low`. Each node is visited at most once and the walk stops at the first node outside its
//! interval. An empty tree is a BST, and so is a single node. Equal values are never allowed.
//!
//! Two walks are provided. [`recursive`] uses the call stack. [`iterative`] uses a heap-allocated
//! stack and handles trees of any height. The functions at the crate root use [`iterative`].
//!
//! # Examples
//!
//! ```
//! use validate_bst::{is_valid_bst, validate, TreeNode, Violation};
//!
//! let root = TreeNode::new(2)
//!     .with_left(TreeNode::new(1))
//!     .with_right(TreeNode::new(3));
//! assert!(is_valid_bst(Some(&root)));
//!
//! // Duplicates are rejected.
//! let root = TreeNode::new(1).with_left(TreeNode::new(1));
//! assert_eq!(
//!     validate(Some(&root)),
//!     Err(Violation::NotBelowUpperBound {
//!         value: &1,
//!         bound: &1,
//!         depth: 1,
//!     })
//! );
//!
//! // The empty tree is trivially valid.
//! assert!(is_valid_bst::<i32>(None));
//! ```
//!
//! The validators only read the tree. Because children are owned through `Box`, a `TreeNode`
//! cannot form a cycle or share a subtree, so every input is a finite tree and validation always
//! terminates.

#![deny(missing_docs)]

mod bounds;
pub mod error;
pub mod iterative;
pub mod node;
pub mod recursive;

pub use error::Violation;
pub use node::{Link, TreeNode};

/// Returns `true` if the tree rooted at `root` is a BST. See the [crate] docs for the exact rules.
///
/// This uses the [`iterative`] walk so very deep trees are fine.
pub fn is_valid_bst<T>(root: Option<&TreeNode<T>>) -> bool
where
    T: Ord,
{
    iterative::is_valid_bst(root)
}

/// Checks that the tree rooted at `root` is a BST, returning the first node (in pre-order) that
/// breaks the ordering otherwise.
pub fn validate<T>(root: Option<&TreeNode<T>>) -> Result<(), Violation<&'_ T>>
where
    T: Ord,
{
    iterative::validate(root)
}
