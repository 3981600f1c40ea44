use crate::list::{Link, List};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the elements of a `List`.
///
/// It walks the chain from the first element until the terminal link.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Link<T>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let next = list.front_link();
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            next,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            #[cfg(feature = "length")]
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element at `next` and advance `next` along its link,
    /// or return `None` at the end of the chain.
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: every link reachable from the head slot is a live node, and
        // the list is borrowed for `'a`.
        let current = unsafe { node.as_ref() };
        self.next = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Link<T>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let next = list.front_link();
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            next,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut link = self.next;
        while let Some(node) = link {
            // SAFETY: the remaining nodes are live, and reading them through
            // `&self` does not overlap any reference yielded so far.
            let current = unsafe { node.as_ref() };
            f.field(&current.element);
            link = current.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.next?;
        // SAFETY: every link reachable from the head slot is a live node, the
        // list is uniquely borrowed for `'a`, and each node is yielded once.
        let current = unsafe { node.as_mut() };
        self.next = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Build a list in the order of the iterator, by inserting each item after
/// the previous one, starting at the head slot.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Append the items to the back of the list, in order.
///
/// The list is walked once to find its last element, so extending costs
/// *O*(*n* + *m*).
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_before_start_mut();
        cursor.move_to_last();
        iter.into_iter().for_each(|item| cursor.insert_after(item));
        #[cfg(all(debug_assertions, feature = "length"))]
        self.assert_len();
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER();
                    #[cfg(feature = "length")]
                    assert_eq!(iter.len(), len);
                    for (i, item) in vec.$ITER().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        #[cfg(feature = "length")]
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None); // Fused
                    #[cfg(feature = "length")]
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone());
            test_iter_mut(input);
        }
        test_case(0..10);
        test_case(0..2);
        test_case(0..1);
        test_case(0..0);
        test_case(["a", "b", "c"].map(String::from));
    }

    #[test]
    fn iter_mut_writes_through() {
        let mut list = List::from([1, 2, 3]);
        list.iter_mut().for_each(|item| *item *= 2);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 4, 6]);
        for item in &mut list {
            *item += 1;
        }
        assert_eq!(list, List::from([3, 5, 7]));
    }

    #[test]
    fn into_iter_yields_in_order() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 4);
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn construct_preserves_order() {
        let from_array = List::from([3, 1, 2]);
        let from_vec = List::from(vec![3, 1, 2]);
        let from_iter: List<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array, from_iter);
        assert_eq!(from_array.len(), 3);
        assert_eq!(Vec::from_iter(from_array), vec![3, 1, 2]);

        let empty = List::<u8>::from([]);
        assert!(empty.is_empty());
    }

    #[test]
    fn extend_appends_to_back() {
        let mut list: List<i32> = List::new();
        list.extend([1, 2]);
        list.extend(&[3, 4]);
        list.extend(Vec::<i32>::new());
        list.extend(5..6);
        assert_eq!(list, List::from([1, 2, 3, 4, 5]));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn iter_debug() {
        let mut list = List::from([1, 2, 3]);
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter([2, 3])");
        let mut iter = list.iter_mut();
        iter.next();
        assert_eq!(format!("{:?}", iter), "IterMut(2, 3)");
    }
}
