//! A growable binary min-heap with a manually provided less-than predicate.
#![doc(html_root_url = "https://docs.rs/heapq")]
#![crate_name = "heapq"]
#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces
)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;

pub use error::HeapError;

use log::{debug, trace};
use std::{
    fmt::{self, Debug, Formatter},
    slice::Iter,
    vec::IntoIter,
};

/// The predicate type used by heaps built with [`BinaryHeap::ordered`].
pub type LessFn<T> = fn(&T, &T) -> bool;

fn less_than<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// A binary min-heap backed by a `Vec`, ordered by the predicate `less`.
///
/// `less(a, b)` must return true if `a` is strictly higher priority (smaller) than `b`,
/// and must behave as a strict weak order. A predicate that does not will not cause
/// memory unsafety, but the order in which elements are popped is then unspecified.
///
/// No child ever compares strictly less than its parent. Elements that compare equal
/// may come out in any order.
///
/// Operations that take an index refer to a position in [`as_slice`](Self::as_slice).
/// Positions move on every `push`, `pop`, `remove` and `fix`, so an index is only
/// meaningful until the next mutation.
#[derive(Clone)]
pub struct BinaryHeap<T, F = LessFn<T>> {
    data: Vec<T>,
    less: F,
}

impl<T, F> BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates a new empty heap ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.push(2);
    /// heap.push(1);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    ///
    /// Ordering keys by values held elsewhere:
    /// ```
    /// # use heapq::*;
    /// let weights = [5, 1, 3];
    /// let mut heap = BinaryHeap::new(|a: &usize, b: &usize| weights[*a] < weights[*b]);
    /// heap.extend([0, 1, 2]);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn new(less: F) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    /// Creates a new empty heap ordered by `less` with room for `capacity` elements
    /// before reallocating.
    pub fn with_capacity(capacity: usize, less: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Takes ownership of `items` and rearranges them in place into a heap ordered by `less`.
    ///
    /// # Time Complexity
    ///
    /// O(n), cheaper than pushing the elements one at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let heap = BinaryHeap::from_vec(vec![5, 3, 8, 1], |a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
    /// ```
    pub fn from_vec(items: Vec<T>, less: F) -> Self {
        let mut heap = Self { data: items, less };
        heap.rebuild();
        heap
    }

    /// Returns a reference to the smallest element, or `None` if the heap is empty.
    #[inline(always)]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Pushes `item` onto the heap.
    ///
    /// # Time Complexity
    ///
    /// O(log n), with amortized O(1) growth of the backing storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element.
    ///
    /// # Returns
    ///
    /// `None` if there are no elements in the heap. The heap is left untouched.
    ///
    /// `Some(elem)` if there was an element. No remaining element is strictly less than `elem`.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::from_vec(vec![2, 1], |a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let item = self.data.swap_remove(0);
        let len = self.data.len();
        self.sift_down(0, len);
        Some(item)
    }

    /// Removes and returns the element at array position `index`.
    ///
    /// The last element takes its place and is moved down or up as needed.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`. The heap is left untouched.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::from_vec(vec![1, 2, 3], |a: &i32, b: &i32| a < b);
    /// let last = heap.len() - 1;
    /// assert_eq!(heap.remove(last), Ok(3));
    /// assert!(heap.remove(5).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        self.check_index(index, "remove")?;
        let item = self.data.swap_remove(index);
        let len = self.data.len();
        if index < len && !self.sift_down(index, len) {
            self.sift_up(index);
        }
        Ok(item)
    }

    /// Restores the heap order after the element at `index` was changed in place,
    /// for example through [`as_slice_mut`](Self::as_slice_mut).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`. The heap is left untouched.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::from_vec(vec![1, 2, 3], |a: &i32, b: &i32| a < b);
    /// heap.as_slice_mut()[0] = 10;
    /// heap.fix(0).unwrap();
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn fix(&mut self, index: usize) -> Result<(), HeapError> {
        self.check_index(index, "fix")?;
        let len = self.data.len();
        if !self.sift_down(index, len) {
            self.sift_up(index);
        }
        Ok(())
    }

    /// Calls `f` on the element at `index` and then restores the heap order around it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`, without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::from_vec(vec![1, 2, 3], |a: &i32, b: &i32| a < b);
    /// heap.update(0, |x| *x += 10).unwrap();
    /// assert_eq!(heap.into_sorted_vec(), vec![2, 3, 11]);
    /// ```
    pub fn update<U>(&mut self, index: usize, f: U) -> Result<(), HeapError>
    where
        U: FnOnce(&mut T),
    {
        self.check_index(index, "update")?;
        f(&mut self.data[index]);
        self.fix(index)
    }

    /// Re-establishes the heap order over every element in O(n).
    ///
    /// Use this after changing many elements through [`as_slice_mut`](Self::as_slice_mut),
    /// where calling [`fix`](Self::fix) once per element would be more expensive.
    /// Calling it on a heap that is already in order changes nothing.
    pub fn rebuild(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index, len);
        }
        trace!("heapified {} elements", len);
    }

    /// Returns true if no element compares strictly less than its parent.
    ///
    /// This walks the whole heap and is never called by the mutating operations.
    /// It can only return false if the predicate is not a strict weak order, or if
    /// elements were changed through [`as_slice_mut`](Self::as_slice_mut) without a
    /// following [`fix`](Self::fix) or [`rebuild`](Self::rebuild).
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|child| !self.less(child, (child - 1) / 2))
    }

    /// Consumes the heap and returns its elements sorted ascending by `less`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    #[inline(always)]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.less)(&self.data[a], &self.data[b])
    }

    fn check_index(&self, index: usize, op: &str) -> Result<(), HeapError> {
        let len = self.data.len();
        if index < len {
            Ok(())
        } else {
            debug!("{}: index {} out of bounds (len {})", op, index, len);
            Err(HeapError::IndexOutOfBounds { index, len })
        }
    }

    fn sift_up(&mut self, mut node_index: usize) {
        while node_index != 0 {
            let parent_index = (node_index - 1) >> 1;
            if !self.less(node_index, parent_index) {
                break;
            }
            self.data.swap(node_index, parent_index);
            node_index = parent_index;
        }
    }

    /// Moves the element at `start` towards the leaves, looking only at positions below `bound`.
    /// Returns whether the element moved.
    fn sift_down(&mut self, start: usize, bound: usize) -> bool {
        let mut node_index = start;
        loop {
            let lchild_index = (node_index << 1) + 1;
            if lchild_index >= bound {
                break;
            }
            let rchild_index = lchild_index + 1;
            // Left wins ties.
            let child_index = if rchild_index < bound && self.less(rchild_index, lchild_index) {
                rchild_index
            } else {
                lchild_index
            };
            if !self.less(child_index, node_index) {
                break;
            }
            self.data.swap(node_index, child_index);
            node_index = child_index;
        }
        node_index > start
    }
}

impl<T: PartialOrd> BinaryHeap<T> {
    /// Creates a new empty heap ordered by `<`.
    ///
    /// Floating point `NaN` values are not ordered by `<` and must not be pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::ordered();
    /// heap.push(2.5);
    /// heap.push(-1.0);
    /// assert_eq!(heap.pop(), Some(-1.0));
    /// ```
    pub fn ordered() -> Self {
        Self::new(less_than)
    }
}

impl<T, F> BinaryHeap<T, F> {
    /// Provides immutable access to the backing array of the heap.
    /// NOTE: The elements are NOT in the order they'd be popped in!
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Provides mutable access to the backing array of the heap.
    /// Caution: after changing an element, call [`fix`](Self::fix) with its index
    /// (or [`rebuild`](Self::rebuild)) before any other operation.
    #[inline(always)]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements in array order.
    /// NOTE: The elements are NOT in the order they'd be popped in!
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use heapq::*;
    /// let mut heap = BinaryHeap::ordered();
    /// heap.push(1);
    /// assert_eq!(heap.len(), 1);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, F> Debug for BinaryHeap<T, F>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("len", &self.data.len())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: PartialOrd> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T: PartialOrd> From<Vec<T>> for BinaryHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items, less_than)
    }
}

impl<T: PartialOrd> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, F> Extend<T> for BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: 'a, F> IntoIterator for &'a BinaryHeap<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ownership transferring iterator, in array order.
impl<T, F> IntoIterator for BinaryHeap<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
