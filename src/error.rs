//! The report returned by [`validate`][crate::validate] when a tree is not a BST.

use thiserror::Error;

/// The first node found out of order, together with the ancestor value it failed against.
///
/// The validators hand out `Violation<&T>`, borrowing both values from the validated tree, so it
/// prints whenever `T: Display`. `depth` counts edges from the root, so the root itself is at
/// depth `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Violation<V> {
    /// The node is in the right subtree of an ancestor whose value is not less than its own.
    #[error("value {value} at depth {depth} must be greater than {bound}")]
    NotAboveLowerBound {
        /// The offending node's value.
        value: V,
        /// The tightest lower bound inherited from the node's ancestors.
        bound: V,
        /// The offending node's depth.
        depth: usize,
    },
    /// The node is in the left subtree of an ancestor whose value is not greater than its own.
    #[error("value {value} at depth {depth} must be less than {bound}")]
    NotBelowUpperBound {
        /// The offending node's value.
        value: V,
        /// The tightest upper bound inherited from the node's ancestors.
        bound: V,
        /// The offending node's depth.
        depth: usize,
    },
}

impl<V: Copy> Violation<V> {
    /// The value of the node that broke the ordering.
    pub fn value(&self) -> V {
        match self {
            Self::NotAboveLowerBound { value, .. } | Self::NotBelowUpperBound { value, .. } => {
                *value
            }
        }
    }

    /// The ancestor value the node was compared against.
    pub fn bound(&self) -> V {
        match self {
            Self::NotAboveLowerBound { bound, .. } | Self::NotBelowUpperBound { bound, .. } => {
                *bound
            }
        }
    }

    /// How many edges separate the offending node from the root.
    pub fn depth(&self) -> usize {
        match self {
            Self::NotAboveLowerBound { depth, .. } | Self::NotBelowUpperBound { depth, .. } => {
                *depth
            }
        }
    }
}
