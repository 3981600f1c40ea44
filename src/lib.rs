//! This crate provides a singly-linked forward list with owned nodes, anchored
//! at a head slot.
//!
//! The [`List`] allows inserting and removing elements right after any known
//! position in constant time. In compromise, reaching a position takes *O*(*n*)
//! time, and the list can only be walked forward.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! assert!(cursor.move_next().is_ok()); // the cursor points to 2
//! cursor.insert_after(3); // insert 3 after 2, the cursor moves onto it
//! assert_eq!(cursor.current(), Some(&3));
//! assert_eq!(cursor.view(), &List::from([1, 2, 3, 4]));
//!
//! assert_eq!(cursor.erase_after(), 4); // remove the element after the cursor
//! assert_eq!(cursor.view(), &List::from([1, 2, 3]));
//!
//! cursor.push_front(0); // pushing front to the list is also allowed
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗        ┌───────────┐        ┌───────────┐              ┌───────────┐
//! ║   head    ║ ─────→ │   next    │ ─────→ │   next    │ ─────→ ┄┄ ─→ │   next    │ ─→ ∅
//! ╟───────────╢        ├───────────┤        ├───────────┤  Node 2, ... ├───────────┤
//! ║   (len)   ║        │ payload T │        │ payload T │              │ payload T │
//! ╚═══════════╝        └───────────┘        └───────────┘              └───────────┘
//!     List                 Node 0               Node 1                   Node n - 1
//! ```
//! The `List` contains:
//! - the head slot `head`, which links to the first node, or to nothing if the
//!   list is empty;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! forward_list = { default-features = false }
//! ```
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` link that owns the next node (or nothing if it is the last
//!   element in the list);
//! - the actual payload `T`.
//!
//! The head slot has *NO* payload. It is a position of its own, so inserting
//! at the front of the list is just inserting after the head slot.
//!
//! In a list with length *n*, there are *n* + 2 positions: the head slot
//! (before the start), the nodes indexed by 0, 1, ..., *n* - 1, and the end
//! (past the last node).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. They are
//! forward-only and fused. [`IterMut`] provides mutability of the elements (but
//! not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list. A cursor can stand on any of the *n* + 2
//! positions, and only moves forward. Two cursors are equal if they stand on
//! the same position of the same list.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let list = List::from([1, 2, 3]);
//! let mut cursor = list.cursor_before_start();
//! assert_eq!(cursor.current(), None); // the head slot holds no element
//! assert_eq!(cursor.peek_next(), Some(&1));
//!
//! assert!(cursor.seek_forward(3).is_ok());
//! assert_eq!(cursor.current(), Some(&3));
//!
//! assert!(cursor.move_next().is_ok());
//! assert!(cursor.is_end());
//! assert!(cursor == list.cursor_end());
//! assert!(cursor.move_next().is_err()); // nothing is past the end
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides the ways to mutate the list at any position.
//! - [`insert_after`]: insert a new item after the cursor;
//! - [`erase_after`]: remove the item after the cursor;
//! - [`try_erase_after`]: remove the item after the cursor, or report why not;
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_before_start_mut();
//!
//! cursor.insert_after(5); // becomes [5, 1, 2, 3, 4], points to 5
//! assert_eq!(cursor.current(), Some(&5));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.erase_after(), 3); // becomes [5, 1, 2, 4], points to 2
//! assert_eq!(cursor.current(), Some(&2));
//!
//! cursor.move_to_last();
//! assert!(cursor.try_erase_after().is_err()); // nothing after the last element
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 2, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`erase_after`]: crate::list::cursor::CursorMut::erase_after
//! [`try_erase_after`]: crate::list::cursor::CursorMut::try_erase_after

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{swap, List};

pub mod list;
