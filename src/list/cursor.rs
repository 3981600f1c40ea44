use crate::list::{List, Node, Position};
use std::fmt;
use std::fmt::Formatter;
use std::ptr;
use thiserror::Error;

/// The error returned when a cursor cannot perform a move or an erasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor is at the end, which has no successor.
    #[error("the cursor is past the end of the list")]
    PastEnd,
    /// The cursor is at the last element (or at the head slot of an empty
    /// list), so there is nothing after it.
    #[error("there is no element after the cursor")]
    NoSuccessor,
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it denotes a position rather
/// than yielding elements, and can be compared with other cursors.
///
/// In a list with length *n*, there are *n* + 2 valid locations for the cursor:
/// the head slot before the start, the *n* elements, and the end.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The head slot is
/// denoted by `^` and the end by `$`).
/// ```
/// use forward_list::List;
///
/// // Create a list: [^ A B C $]
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor at the head slot: [|^ A B C $]
/// let mut cursor = list.cursor_before_start();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor forward: [^ |A B C $]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor to the end: [^ A B C |$]
/// assert!(cursor.seek_forward(3).is_ok());
/// assert!(cursor == list.cursor_end());
///
/// // There is nothing after the end.
/// assert!(cursor.move_next().is_err());
/// ```
///
/// # Comparison
///
/// Only cursors belonging to the same list and denoting the same position
/// are considered equal.
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert!(cursor1 == cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert!(cursor1 != cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different lists.
/// assert!(cursor1 != cursor3);
///
/// let mut list = List::from([1, 2, 3]);
/// let cursor = list.cursor_start_mut();
/// // A mutable cursor compares with its read-only view.
/// assert!(cursor == cursor.as_cursor());
/// assert!(cursor.as_cursor() == cursor);
/// ```
///
/// A cursor borrows the list, so the list cannot change under it.
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let cursor = list.cursor_start();
/// list.push_front(0);
/// println!("{:?}", cursor.current());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Position<T>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a [`Cursor`], except that it can insert and erase
/// elements right after its position. The references it yields are tied to
/// its own lifetime, so it never yields more than one element at once.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the list as an
/// immutable reference whose lifetime is shorter than the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Position<T>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The position right after the cursor, or `None` at the end.
            pub(crate) fn next_position(&self) -> Option<Position<T>> {
                // SAFETY: the cursor only ever holds positions of `self.list`.
                unsafe { self.list.link_after(self.current) }.map(Position::from_link)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the head slot.
            pub fn is_before_start(&self) -> bool {
                self.current == Position::Head
            }

            /// Returns `true` if the cursor is past the last element.
            pub fn is_end(&self) -> bool {
                self.current == Position::End
            }

            /// Move the cursor to the next position, or return an error
            /// if the cursor is already at the end.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert!(cursor.is_end());
            ///
            /// // Forbid to move past the end
            /// assert!(cursor.move_next().is_err());
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_next(&mut self) -> Result<(), CursorError> {
                self.current = self.next_position().ok_or(CursorError::PastEnd)?;
                Ok(())
            }

            /// Move forward the cursor by given steps, or return the number of
            /// steps taken when it reaches the end first.
            ///
            /// If an error occurs, the cursor will stay at the end.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert_eq!(cursor.seek_forward(5), Err(1));
            /// assert!(cursor.is_end());
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Set the cursor to the head slot.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_before_start(&mut self) {
                self.current = Position::Head;
            }

            /// Set the cursor to the first element, or to the end if the list
            /// is empty.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.current = Position::from_link(self.list.front_link());
            }

            /// Set the cursor past the last element.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.current = Position::End;
            }

            /// Set the cursor to the last element, or to the head slot if the
            /// list is empty. Inserting after this position appends to the list.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// cursor.move_to_last();
            /// assert_eq!(cursor.current(), Some(&3));
            /// assert_eq!(cursor.peek_next(), None);
            /// ```
            pub fn move_to_last(&mut self) {
                self.current = Position::Head;
                while let Some(next @ Position::Node(_)) = self.next_position() {
                    self.current = next;
                }
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("before_start", &self.is_before_start())
                    .field("end", &self.is_end())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

// Cursors of either flavor compare by list identity and position.
macro_rules! impl_cursor_eq {
    ($LHS:ident, $RHS:ident) => {
        impl<'a, 'b, T> PartialEq<$RHS<'b, T>> for $LHS<'a, T> {
            fn eq(&self, other: &$RHS<'b, T>) -> bool {
                ptr::eq(&*self.list, &*other.list) && self.current == other.current
            }
        }
    };
}

impl_cursor_eq!(Cursor, Cursor);
impl_cursor_eq!(Cursor, CursorMut);
impl_cursor_eq!(CursorMut, Cursor);
impl_cursor_eq!(CursorMut, CursorMut);

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> Eq for CursorMut<'a, T> {}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Position<T>) -> Self {
        Self { current, list }
    }

    /// Return an immutable reference of the element at the cursor, or
    /// `None` if it is at the head slot or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor_before_start().current(), None);
    /// assert_eq!(list.cursor_start().current(), Some(&1));
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        match self.current {
            // SAFETY: node positions of the cursor are live nodes of
            // `self.list`, which is borrowed for `'a`.
            Position::Node(node) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }

    /// Return an immutable reference of the element right after the cursor,
    /// or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(list.cursor_before_start().peek_next(), Some(&1));
    /// assert_eq!(list.cursor_start().peek_next(), Some(&2));
    /// assert_eq!(list.cursor_end().peek_next(), None);
    /// ```
    pub fn peek_next(&self) -> Option<&'a T> {
        match self.next_position() {
            // SAFETY: the same as `current`.
            Some(Position::Node(node)) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Position<T>) -> Self {
        Self { current, list }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of the element at the cursor, or
    /// `None` if it is at the head slot or at the end.
    pub fn current(&self) -> Option<&T> {
        match self.current {
            // SAFETY: node positions of the cursor are live nodes of `self.list`.
            Position::Node(node) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }

    /// Return a mutable reference of the element at the cursor, or
    /// `None` if it is at the head slot or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Neither the head slot nor the end holds an element.
    /// assert!(list.cursor_before_start_mut().current_mut().is_none());
    /// assert!(list.cursor_end_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            // SAFETY: node positions of the cursor are live nodes of `self.list`,
            // which is uniquely borrowed through the cursor.
            Position::Node(mut node) => Some(unsafe { &mut node.as_mut().element }),
            _ => None,
        }
    }

    /// Return an immutable reference of the element right after the cursor,
    /// or `None` if there is none.
    pub fn peek_next(&self) -> Option<&T> {
        match self.next_position() {
            // SAFETY: the same as `current`.
            Some(Position::Node(node)) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor to an immutable one.
    ///
    /// There is no conversion back.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_before_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().len(), 3);
    ///
    /// cursor.insert_after(4);
    /// assert_eq!(cursor.view(), &List::from([4, 1, 2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert a new element right after the cursor, and move the cursor
    /// onto it.
    ///
    /// Repeated insertions from the head slot thus keep the order in which
    /// the elements are given.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.insert_after(4); // becomes [1, 4, 2, 3], points to 4
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    ///
    /// cursor.move_to_before_start();
    /// cursor.insert_after(0); // becomes [0, 1, 4, 2, 3], points to 0
    /// assert_eq!(cursor.current(), Some(&0));
    ///
    /// assert_eq!(list, List::from([0, 1, 4, 2, 3]));
    /// ```
    pub fn insert_after(&mut self, item: T) {
        // SAFETY: the cursor only ever holds positions of `self.list`.
        let node = unsafe { self.list.attach_after(self.current, item) };
        self.current = Position::Node(node);
    }

    /// Remove the element right after the cursor and return it, or return an
    /// error if there is none. The cursor stays put, and its successor becomes
    /// the element after the removed one.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use forward_list::list::cursor::CursorError;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.try_erase_after(), Ok(2));
    /// assert_eq!(cursor.try_erase_after(), Err(CursorError::NoSuccessor));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.try_erase_after(), Err(CursorError::PastEnd));
    /// ```
    pub fn try_erase_after(&mut self) -> Result<T, CursorError> {
        // SAFETY: the cursor only ever holds positions of `self.list`.
        unsafe { self.list.detach_after(self.current) }.map(Node::into_element)
    }

    /// Remove the element right after the cursor and return it.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end or at the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.erase_after(), 1); // becomes [0, 2, 3, 4]
    /// assert_eq!(cursor.current(), Some(&0));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    ///
    /// cursor.seek_forward(2).unwrap();
    /// assert_eq!(cursor.erase_after(), 4); // becomes [0, 2, 3]
    /// assert_eq!(cursor.peek_next(), None);
    ///
    /// assert_eq!(list, List::from([0, 2, 3]));
    /// ```
    pub fn erase_after(&mut self) -> T {
        self.try_erase_after()
            .unwrap_or_else(|err| panic!("Cannot erase after the cursor: {}", err))
    }

    /// Add an element first in the list.
    ///
    /// It is the same as [`List::push_front`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used. The cursor keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.push_front(0);
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// assert_eq!(list, List::from([0, 1, 2, 3]));
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
    }

    /// Remove the first element and return it, or `None` if the list is
    /// empty.
    ///
    /// It is the same as [`List::pop_front`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used. If the cursor is at the removed element, it moves
    /// to the new first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_front(), Some(1));
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// assert_eq!(list, List::from([2, 3]));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.list.front_link()?;
        let at_front = self.current == Position::Node(front);
        let item = self.list.pop_front();
        if at_front {
            self.move_to_start();
        }
        item
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
