use crate::error::Violation;

/// The open interval `(low, high)` a node's value must fall in, inherited from its ancestors.
///
/// Each end is either absent (no ancestor constrains that side) or an exclusive bound borrowed
/// from an ancestor's value. Using `Option` rather than sentinel extremes means a node holding
/// `T::MIN` or `T::MAX` is still compared correctly.
pub(crate) struct Bounds<'a, T> {
    low: Option<&'a T>,
    high: Option<&'a T>,
}

// Derived `Clone`/`Copy` would require `T: Copy`.
impl<'a, T> Clone for Bounds<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for Bounds<'a, T> {}

impl<'a, T> Bounds<'a, T> {
    /// The bounds of the root: nothing constrains it.
    pub(crate) fn unbounded() -> Self {
        Self {
            low: None,
            high: None,
        }
    }

    /// Bounds for the left child of a node holding `value`.
    pub(crate) fn left_of(self, value: &'a T) -> Self {
        Self {
            high: Some(value),
            ..self
        }
    }

    /// Bounds for the right child of a node holding `value`.
    pub(crate) fn right_of(self, value: &'a T) -> Self {
        Self {
            low: Some(value),
            ..self
        }
    }

    /// Checks that `value` lies strictly inside the interval. The lower bound is checked first.
    pub(crate) fn check(self, value: &'a T, depth: usize) -> Result<(), Violation<&'a T>>
    where
        T: Ord,
    {
        if let Some(bound) = self.low {
            if value <= bound {
                tracing::trace!(depth, bound = "lower", "node out of order");
                return Err(Violation::NotAboveLowerBound {
                    value,
                    bound,
                    depth,
                });
            }
        }
        if let Some(bound) = self.high {
            if value >= bound {
                tracing::trace!(depth, bound = "upper", "node out of order");
                return Err(Violation::NotBelowUpperBound {
                    value,
                    bound,
                    depth,
                });
            }
        }

        Ok(())
    }
}
