//! Error types for checked list operations.

use thiserror::Error;

/// Error returned when an operation requires a non-empty list.
///
/// Returned by [`ForwardList::pop_front`], [`ForwardList::front`],
/// [`ForwardList::front_mut`], and [`ForwardList::remove_after`].
///
/// [`ForwardList::pop_front`]: crate::ForwardList::pop_front
/// [`ForwardList::front`]: crate::ForwardList::front
/// [`ForwardList::front_mut`]: crate::ForwardList::front_mut
/// [`ForwardList::remove_after`]: crate::ForwardList::remove_after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("list is empty")]
pub struct Empty;
