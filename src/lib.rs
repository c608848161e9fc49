//! Singly-linked list with shared node ownership and cursor-based splicing.
//!
//! Most list types tie node lifetime to the chain: remove a node and any
//! outstanding reference to it dangles. This crate ties node lifetime to
//! *interest* instead: every node is reference-counted, so a [`Cursor`]
//! pointing into the list keeps its node alive across removals, and the
//! chain releases nodes the moment nobody is looking at them.
//!
//! ```text
//! head ──> [1] ──> [2] ──> [3] ──> (end)
//!                   ▲
//!                 Cursor     keeps [2] alive even after remove_after
//! ```
//!
//! What you get:
//!
//! - **O(1) front mutation**: [`ForwardList::push_front`],
//!   [`ForwardList::pop_front`]
//! - **O(1) positional splicing**: [`ForwardList::insert_after`],
//!   [`ForwardList::remove_after`] against a [`Cursor`]
//! - **Stable positions**: cursors survive unrelated mutations; a cursor to
//!   a removed node still reads the value
//! - **Deterministic teardown**: `clear` and `Drop` sever links
//!   iteratively, never recursing through the chain
//!
//! # Quick Start
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 3]);
//!
//! let first = list.cursor_front();
//! let second = list.insert_after(&first, 2);
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! list.remove_after(&second).unwrap();
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! assert_eq!(list.pop_front(), Ok(1));
//! assert_eq!(list.pop_front(), Ok(2));
//! assert!(list.pop_front().is_err());
//! ```
//!
//! # Error Contract
//!
//! Operations that need a non-empty list ([`pop_front`],
//! [`front`]/[`front_mut`], [`remove_after`]) return [`Empty`] when there
//! is nothing to act on. Operations taking a position require the cursor to
//! reference a node of the list; handing them the end cursor (or a position
//! with no successor to `remove_after`) is a contract violation and panics.
//!
//! # Single-Threaded
//!
//! Nodes are `Rc`-shared, so the container is `!Send` and `!Sync` by
//! construction. There is no internal locking; wrap the list in external
//! synchronization if you need cross-thread access. This is a
//! single-threaded building block.
//!
//! [`pop_front`]: ForwardList::pop_front
//! [`front`]: ForwardList::front
//! [`front_mut`]: ForwardList::front_mut
//! [`remove_after`]: ForwardList::remove_after

#![warn(missing_docs)]

pub mod error;
pub mod list;

pub use error::Empty;
pub use list::{Cursor, ForwardList, IntoIter, Iter};
