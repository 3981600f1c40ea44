use crate::list::List;
use log::trace;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Lists are equal if they have the same length and equal elements in the
/// same order.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.len() != other.len() || self.iter().ne(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lists are ordered lexicographically, so a prefix sorts before any longer
/// list sharing it.
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep-copy the list into new nodes, in the same order.
    ///
    /// If cloning an element panics, the partial copy is dropped and `self`
    /// is untouched.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replace the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built aside first and swapped in afterwards, so a panic
    /// while cloning an element leaves `self` unmodified. The previous
    /// contents are dropped after the swap.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `source` share one chain of nodes.
    ///
    /// The borrow checker already rejects assigning a list from itself:
    /// ```compile_fail
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.clone_from(&list);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        assert!(
            self.is_empty() || self.head != source.head,
            "Cannot assign a list from itself"
        );
        let mut copy = source.clone();
        trace!("assigning a copy of {} elements", copy.len());
        self.swap(&mut copy);
        #[cfg(all(debug_assertions, feature = "length"))]
        self.assert_len();
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

/// Exchanges the contents of two lists. See [`List::swap`].
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let mut a = List::from([1]);
/// let mut b = List::from([2, 3]);
///
/// forward_list::swap(&mut a, &mut b);
/// assert_eq!(a, List::from([2, 3]));
/// assert_eq!(b, List::from([1]));
/// ```
#[inline]
pub fn swap<T>(lhs: &mut List<T>, rhs: &mut List<T>) {
    lhs.swap(rhs);
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{self, AssertUnwindSafe};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        let list = List::from([1, 2, 3]);
        #[allow(clippy::eq_op)]
        {
            assert!(list == list);
            assert!(!(list != list));
        }
        assert_eq!(list, List::from([1, 2, 3]));
        assert_ne!(list, List::from([1, 2]));
        assert_ne!(list, List::from([1, 2, 4]));
        assert_ne!(list, List::new());
        assert_eq!(List::<i32>::new(), List::new());

        let equal = List::from_iter(1..=3);
        assert_eq!(list == equal, !(list != equal));
        assert!(!(list < equal) && !(equal < list));
        assert_eq!(hash_of(&list), hash_of(&equal));
    }

    #[test]
    fn list_ord() {
        assert!(List::from([1, 2]) < List::from([1, 2, 3]));
        assert!(List::from([1, 3]) > List::from([1, 2, 9]));
        assert!(List::new() < List::from([1]));
        assert!(List::<i32>::new() <= List::new());
        assert!(List::<i32>::new() >= List::new());
        assert!(List::from([2]) >= List::from([1, 9]));
        assert!(List::from([1, 2, 9]) <= List::from([1, 3]));
        assert_eq!(
            List::from([1, 2]).cmp(&List::from([1, 2])),
            std::cmp::Ordering::Equal
        );
        assert_eq!(
            List::from([1.0, f64::NAN]).partial_cmp(&List::from([1.0, f64::NAN])),
            None
        );
    }

    #[test]
    fn list_hash_depends_on_len() {
        let a = List::from([vec![1], vec![]]);
        let b = List::from([vec![1]]);
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_clone_is_independent() {
        let mut original = List::from([String::from("a"), String::from("b")]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.push_front(String::from("z"));
        assert_eq!(original, List::from([String::from("a"), String::from("b")]));
        assert_eq!(copy.len(), 3);

        original.front_mut().unwrap().push('!');
        assert_eq!(copy.iter().nth(1).map(String::as_str), Some("a"));
    }

    #[test]
    fn list_clone_from() {
        let source = List::from_iter(0..4);
        let mut target = List::from([9, 9, 9, 9, 9, 9]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.len(), 4);

        let mut empty = List::new();
        empty.clone_from(&List::new());
        assert!(empty.is_empty());
        empty.clone_from(&source);
        assert_eq!(empty, source);
    }

    #[test]
    fn list_clone_from_is_strongly_exception_safe() {
        #[derive(Debug, PartialEq)]
        struct Fragile(i32);
        impl Clone for Fragile {
            fn clone(&self) -> Self {
                if self.0 < 0 {
                    panic!("refusing to clone {}", self.0);
                }
                Fragile(self.0)
            }
        }

        let source = List::from([Fragile(1), Fragile(-1), Fragile(2)]);
        let mut target = List::from([Fragile(7), Fragile(8)]);
        let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target, List::from([Fragile(7), Fragile(8)]));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn list_swap_free_function() {
        let mut a = List::from(['a', 'b']);
        let mut b = List::new();
        crate::swap(&mut a, &mut b);
        assert!(a.is_empty());
        assert_eq!(b, List::from(['a', 'b']));
        crate::swap(&mut a, &mut b);
        assert_eq!(a, List::from(['a', 'b']));
        assert!(b.is_empty());
    }

    #[test]
    fn list_contains() {
        let list = List::from(["x", "y"]);
        assert!(list.contains(&"y"));
        assert!(!list.contains(&"z"));
        assert!(!List::<&str>::new().contains(&"x"));
    }
}
