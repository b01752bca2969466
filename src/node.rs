//! The binary tree handed to the validators.
//!
//! Children are owned through `Box`, so every node has exactly one parent and the tree can
//! neither contain cycles nor share subtrees. Nothing here keeps the search-tree ordering: a
//! `TreeNode` is just a value with up to two children, and the validators decide whether the
//! values happen to be in order.
//!
//! # Examples
//!
//! ```
//! use validate_bst::TreeNode;
//!
//! let root = TreeNode::new(2)
//!     .with_left(TreeNode::new(1))
//!     .with_right(TreeNode::new(3));
//!
//! assert_eq!(root.left.as_ref().map(|n| n.value), Some(1));
//! assert_eq!(root.right.as_ref().map(|n| n.value), Some(3));
//! ```

/// An owned, possibly empty, subtree.
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// A single node of a binary tree.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree with a heap stack and work at any height. The
/// derived `Debug` nests one level per node and will overflow the stack on very deep trees.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// The value stored in this node.
    pub value: T,
    /// The left subtree, `None` when absent.
    pub left: Link<T>,
    /// The right subtree, `None` when absent.
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns this node with `child` as its left subtree, replacing any previous one.
    pub fn with_left(mut self, child: TreeNode<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Returns this node with `child` as its right subtree, replacing any previous one.
    pub fn with_right(mut self, child: TreeNode<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        // Collect the descendants in pre-order, then rebuild them back to front: by the time a
        // node is rebuilt its left subtree copy is on top of `built` with its right one below.
        let mut pre_order = Vec::new();
        let mut pending: Vec<&TreeNode<T>> = Vec::new();
        pending.extend(self.right.as_deref());
        pending.extend(self.left.as_deref());
        while let Some(node) = pending.pop() {
            pre_order.push(node);
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }

        let mut built: Vec<Box<TreeNode<T>>> = Vec::with_capacity(pre_order.len());
        for node in pre_order.into_iter().rev() {
            let copy = node.clone_shallow(&mut built);
            built.push(Box::new(copy));
        }

        self.clone_shallow(&mut built)
    }
}

impl<T: Clone> TreeNode<T> {
    /// Copies this node's value, taking its already copied children off the top of `built`.
    fn clone_shallow(&self, built: &mut Vec<Box<TreeNode<T>>>) -> Self {
        let mut copy = TreeNode::new(self.value.clone());
        if self.left.is_some() {
            copy.left = built.pop();
        }
        if self.right.is_some() {
            copy.right = built.pop();
        }

        copy
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for (a_child, b_child) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (a_child.as_deref(), b_child.as_deref()) {
                    (Some(a_child), Some(b_child)) => pending.push((a_child, b_child)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T> Drop for TreeNode<T> {
    // The derived drop would recurse once per level, which overflows the stack on a long chain.
    // Detach every descendant onto a heap stack instead so each `Box` is freed childless.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
