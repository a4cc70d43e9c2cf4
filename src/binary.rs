//! Comparator-driven binary heap
//!
//! An array-backed binary heap whose ordering is supplied by a
//! [`Comparator`]. The root is always the element that ranks highest under
//! the comparator: with [`DefaultComparator`] this is a max-heap, with
//! [`Inverted`](crate::compare::Inverted) a min-heap, and with a closure
//! whatever the closure says.
//!
//! Elements live in a `Vec` in implicit tree layout: index `i` has children
//! `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `top` / `peek`    | O(1)       |
//! | `heapify`         | O(n)       |
//! | `append`          | O(n + m)   |
//! | `into_sorted_vec` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.push(7), 7);
//!
//! let order: Vec<_> = heap.drain_sorted().collect();
//! assert_eq!(order, vec![9, 8, 7, 5, 3, 2, 1]);
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```
//!
//! With a closure as the comparator:
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! // Shortest word first
//! let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
//! heap.push("heap");
//! heap.push("a");
//! heap.push("binary");
//! assert_eq!(heap.pop(), Ok("a"));
//! assert_eq!(heap.pop(), Ok("heap"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;
use std::vec;

use log::{debug, trace};

use crate::compare::{Comparator, DefaultComparator};
use crate::traits::{Heap, HeapError};

/// A binary heap ordered by a comparator
///
/// `C` defaults to [`DefaultComparator`], which orders numbers numerically and
/// text lexicographically and makes the heap a max-heap.
#[derive(Clone)]
pub struct BinaryHeap<T, C = DefaultComparator> {
    /// Elements in implicit tree layout
    data: Vec<T>,
    cmp: C,
}

impl<T> BinaryHeap<T>
where
    DefaultComparator: Comparator<T>,
{
    /// Creates an empty heap using the default ordering
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }

    /// Creates an empty heap using the default ordering, with room for
    /// `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, DefaultComparator)
    }

    /// Builds a heap out of `data` using the default ordering
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, DefaultComparator)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp`, with room for `capacity`
    /// elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap out of `data` ordered by `cmp`
    ///
    /// The vector's allocation is reused.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.rebuild();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the highest-ranked element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| empty("top"))
    }

    /// Returns the highest-ranked element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts `element` and returns the new number of elements
    ///
    /// The element is appended and then moved towards the root while it ranks
    /// strictly above its parent. An element that ties with its parent stays
    /// below it.
    pub fn push(&mut self, element: T) -> usize {
        self.data.push(element);
        let len = self.data.len();
        self.sift_up(len - 1);
        len
    }

    /// Removes and returns the highest-ranked element
    ///
    /// The last element takes the root's place and is sifted down. If the
    /// root was the only element it is returned without any sifting.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements; the heap is not
    /// modified.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.data.pop().ok_or_else(|| empty("pop"))?;
        if self.data.is_empty() {
            return Ok(last);
        }

        let root = mem::replace(&mut self.data[0], last);
        let len = self.data.len();
        self.sift_down(0, len);
        Ok(root)
    }

    /// Replaces the heap's contents with `initial` and restores heap order
    ///
    /// The heap keeps its comparator and its allocation.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, initial: I) {
        self.data.clear();
        self.data.extend(initial);
        self.rebuild();
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// Elements are ranked by this heap's comparator.
    ///
    /// # Time Complexity
    /// O(n + m)
    pub fn append(&mut self, other: &mut Self) {
        self.data.append(&mut other.data);
        self.rebuild();
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing storage to fit the current elements
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the comparator the heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the elements in heap layout
    ///
    /// `as_slice()[0]` is the root; the rest follow the implicit tree layout
    /// described in the [module docs](self).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap layout, which is not sorted order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Checks that every parent ranks at or above each of its children
    ///
    /// Only fails if the comparator is not a consistent total order.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|child| self.compare((child - 1) / 2, child) != Ordering::Less)
    }

    /// Consumes the heap and returns the elements in heap layout
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns the elements in ascending order
    ///
    /// Ascending means the highest-ranked element comes last, the reverse of
    /// extraction order. Sorts in place.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(0, end);
        }
        self.data
    }

    /// Returns an iterator that pops elements in extraction order
    ///
    /// Elements the iterator has not yielded when it is dropped are removed
    /// from the heap as well.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Restores heap order over the whole backing storage, bottom-up
    fn rebuild(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index, len);
        }
        trace!("rebuilt heap of {} elements", len);
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(index, parent) == Ordering::Greater {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down within the first `len` slots
    ///
    /// A child replaces the current best candidate when it ranks at or above
    /// it, left child first, so on ties the right child wins over the left and
    /// either child wins over the parent.
    fn sift_down(&mut self, mut index: usize, len: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < len && self.compare(left, largest) != Ordering::Less {
                largest = left;
            }
            if right < len && self.compare(right, largest) != Ordering::Less {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.data.swap(index, largest);
            index = largest;
        }
    }

    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.cmp.compare(&self.data[a], &self.data[b])
    }
}

fn empty(operation: &str) -> HeapError {
    debug!("{} called on an empty heap", operation);
    HeapError::Empty
}

impl<T, C: Comparator<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, element: T) -> usize {
        self.push(element)
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.top()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.pop()
    }

    fn heapify<I: IntoIterator<Item = T>>(&mut self, initial: I) {
        self.heapify(initial)
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

/// Consumes the heap, yielding elements in heap layout
impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> Drop for DrainSorted<'_, T, C> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
