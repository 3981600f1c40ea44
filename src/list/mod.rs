use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use log::trace;

use crate::list::cursor::{Cursor, CursorError, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::swap;

/// The `List` is a singly-linked list with owned nodes, anchored at a head slot.
/// It allows inserting and removing elements right after any known position in
/// constant time. In compromise, reaching a position takes *O*(*n*) time.
///
/// The `List` contains:
/// - the head slot `head`, which links to the first element (or to nothing if
///   the list is empty) and never holds an element itself;
/// - a length field `len` indicating the length of the list. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// forward_list = { default-features = false }
/// ```
///
/// # Positions
///
/// A list with length *n* has *n* + 2 positions: the head slot (before the
/// start), the *n* elements, and the end (past the last element). Only the
/// elements are dereferenceable, and only the end has no successor.
pub struct List<T> {
    /// the head slot
    head: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// An owning link to the next node, or `None` at the end of the chain.
///
/// Each node is owned by exactly one link: the head slot for the first node,
/// and the `next` field of its predecessor for every other node.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

/// A position in the chain of a list.
pub(crate) enum Position<T> {
    /// The head slot, preceding the first element.
    Head,
    /// A node holding an element.
    Node(NonNull<Node<T>>),
    /// Past the last element.
    End,
}

impl<T> Position<T> {
    /// The position a link leads to.
    pub(crate) fn from_link(link: Link<T>) -> Self {
        match link {
            Some(node) => Position::Node(node),
            None => Position::End,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::Head, Position::Head) | (Position::End, Position::End) => true,
            (Position::Node(a), Position::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Position::Head => f.write_str("Head"),
            Position::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Position::End => f.write_str("End"),
        }
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_link(&self) -> Link<T> {
        self.head
    }

    /// Returns the link leaving `pos`, or `None` if `pos` is the end.
    ///
    /// It is unsafe because it does not check whether `pos` belongs to the list.
    pub(crate) unsafe fn link_after(&self, pos: Position<T>) -> Option<Link<T>> {
        match pos {
            Position::Head => Some(self.head),
            Position::Node(node) => Some(node.as_ref().next),
            Position::End => None,
        }
    }

    /// Like [`List::link_after`], but returns the link for rewriting.
    unsafe fn link_after_mut(&mut self, pos: Position<T>) -> Option<&mut Link<T>> {
        match pos {
            Position::Head => Some(&mut self.head),
            Position::Node(mut node) => Some(&mut node.as_mut().next),
            Position::End => None,
        }
    }

    /// Allocate a node holding `element` and link it right after `pos`.
    /// Return the new node.
    ///
    /// It is unsafe because it does not check whether `pos` belongs to the list.
    /// If it does not, this function call will make the list ill-formed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end.
    pub(crate) unsafe fn attach_after(&mut self, pos: Position<T>, element: T) -> NonNull<Node<T>> {
        let link = self
            .link_after_mut(pos)
            .expect("Cannot insert after the end of the list");
        let mut node = Node::new_detached(element);
        node.as_mut().next = link.take();
        *link = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        node
    }

    /// Unlink the node right after `pos`, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `pos` belongs to the list.
    /// If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_after(
        &mut self,
        pos: Position<T>,
    ) -> Result<Box<Node<T>>, CursorError> {
        let link = self.link_after_mut(pos).ok_or(CursorError::PastEnd)?;
        let node = link.ok_or(CursorError::NoSuccessor)?;
        let node = Box::from_raw(node.as_ptr());
        *link = node.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Ok(node)
    }

    /// Count the nodes by walking the chain.
    #[cfg(any(debug_assertions, not(feature = "length")))]
    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut link = self.head;
        while let Some(node) = link {
            count += 1;
            // SAFETY: every link reachable from the head slot is a live node.
            link = unsafe { node.as_ref().next };
        }
        count
    }

    #[cfg(all(debug_assertions, feature = "length"))]
    pub(crate) fn assert_len(&self) {
        assert_eq!(self.len, self.count_nodes(), "List length out of sync");
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let head = None;
        #[cfg(feature = "length")]
        let len = 0;
        let _marker = PhantomData;
        Self {
            head,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// Without the `length` feature, this operation computes in *O*(*n*) time.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.count_nodes()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        let mut released = 0_usize;
        while self.pop_front().is_some() {
            released += 1;
        }
        trace!("released {} nodes on clear", released);
        #[cfg(all(debug_assertions, feature = "length"))]
        self.assert_len();
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        match self.head {
            // SAFETY: the first node is live while the list is borrowed.
            Some(node) => Some(unsafe { &node.as_ref().element }),
            None => None,
        }
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            // SAFETY: the first node is live and uniquely borrowed with the list.
            Some(mut node) => Some(unsafe { &mut node.as_mut().element }),
            None => None,
        }
    }

    /// Adds an element first in the list.
    ///
    /// This is the same as inserting after the head slot.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_before_start_mut().insert_after(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This is the same as erasing after the head slot.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.cursor_before_start_mut().erase_after())
    }

    /// Exchanges the contents of two lists.
    ///
    /// No node is moved or copied, and cursors cannot be alive across the call,
    /// so nothing is invalidated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut a = List::from([1, 2, 3]);
    /// let mut b = List::from([4, 5]);
    ///
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from([4, 5]));
    /// assert_eq!(b, List::from([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        #[cfg(feature = "length")]
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Provides a cursor at the head slot, before the first element.
    ///
    /// The cursor is not dereferenceable, but inserting or erasing after it
    /// works on the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_before_start();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    /// ```
    pub fn cursor_before_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::Head)
    }

    /// Provides a cursor at the first element.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert!(empty.cursor_start() == empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_link(self.head))
    }

    /// Provides a cursor past the last element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert!(cursor.is_end());
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Provides a cursor with editing operations at the head slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// let mut cursor = list.cursor_before_start_mut();
    ///
    /// cursor.insert_after(1);
    /// cursor.insert_after(2);
    /// cursor.insert_after(3);
    ///
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn cursor_before_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::Head)
    }

    /// Provides a cursor with editing operations at the first element.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let current = Position::from_link(self.head);
        CursorMut::new(self, current)
    }

    /// Provides a cursor with editing operations past the last element.
    ///
    /// Nothing can be inserted or erased after the end, so it is mostly
    /// useful for comparison.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::End)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let next = None;
        NonNull::from(Box::leak(Box::new(Node { next, element })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_front(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);

        dropped.borrow_mut().clear();
        let mut list = List::new();
        list.push_front(DropChecker::new(5, &dropped));
        list.push_front(DropChecker::new(4, &dropped));
        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[4, 5]);
        assert!(list.is_empty());
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[4, 5]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        list.push_front(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_pop_then_push_restores() {
        let mut list = List::from([4, 8, 15, 16, 23, 42]);
        let original = list.clone();
        let front = list.pop_front().unwrap();
        assert_ne!(list, original);
        list.push_front(front);
        assert_eq!(list, original);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..100);
        assert_eq!(list.len(), 100);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn list_drop_long_chain() {
        // Dropping must not recurse through the chain.
        let list = List::from_iter(0..200_000);
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn list_swap() {
        let mut a = List::from([1, 2, 3]);
        let mut b = List::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(b, List::from([1, 2, 3]));
        assert_eq!(b.len(), 3);

        a.push_front(9);
        b.swap(&mut a);
        assert_eq!(a, List::from([1, 2, 3]));
        assert_eq!(b, List::from([9]));
    }

    #[test]
    fn list_front_mut() {
        let mut list = List::from(["a", "b"]);
        *list.front_mut().unwrap() = "z";
        assert_eq!(list, List::from(["z", "b"]));
        let mut empty: List<&str> = List::new();
        assert_eq!(empty.front_mut(), None);
    }

    #[test]
    fn list_debug() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        let empty: List<i32> = List::new();
        assert_eq!(format!("{:?}", empty), "[]");
    }

    #[test]
    fn list_matches_vec_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed_f00d);
        let mut list = List::new();
        let mut model: Vec<i32> = Vec::new();

        for _ in 0..5_000 {
            match rng.gen_range(0..100) {
                0..=24 => {
                    let value = rng.gen();
                    list.push_front(value);
                    model.insert(0, value);
                }
                25..=44 => {
                    let expected = if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(0))
                    };
                    assert_eq!(list.pop_front(), expected);
                }
                45..=74 => {
                    let at = rng.gen_range(0..=model.len());
                    let value = rng.gen();
                    let mut cursor = list.cursor_before_start_mut();
                    assert!(cursor.seek_forward(at).is_ok());
                    cursor.insert_after(value);
                    assert_eq!(cursor.current(), Some(&value));
                    model.insert(at, value);
                }
                75..=98 => {
                    if model.is_empty() {
                        continue;
                    }
                    let at = rng.gen_range(0..model.len());
                    let mut cursor = list.cursor_before_start_mut();
                    assert!(cursor.seek_forward(at).is_ok());
                    assert_eq!(cursor.erase_after(), model.remove(at));
                    assert_eq!(cursor.peek_next(), model.get(at));
                }
                _ => {
                    list.clear();
                    model.clear();
                }
            }
            assert_eq!(list.len(), model.len());
            assert_eq!(list.is_empty(), model.is_empty());
            assert!(list.iter().eq(model.iter()));
        }
    }
}
