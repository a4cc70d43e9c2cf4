//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait, the operation surface shared by
//! the heaps in this crate, and [`HeapError`], the single failure a heap
//! operation can report.
//!
//! Unlike `std::collections::BinaryHeap`, extraction on an empty heap is an
//! explicit [`HeapError::Empty`] rather than `None`, so callers can propagate
//! it with `?` alongside their own errors.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap with no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The ordering is whatever the heap was built with; the root is always the
/// element that ranks highest under it.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{BinaryHeap, Heap, HeapError};
///
/// fn drain_two<H: Heap<i32>>(heap: &mut H) -> Result<(i32, i32), HeapError> {
///     Ok((heap.pop()?, heap.pop()?))
/// }
///
/// let mut heap = BinaryHeap::from_vec(vec![4, 9, 1]);
/// assert_eq!(drain_two(&mut heap), Ok((9, 4)));
/// assert_eq!(drain_two(&mut heap), Err(HeapError::Empty));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element and returns the new number of elements
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, element: T) -> usize;

    /// Returns the highest-ranked element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest-ranked element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Replaces the contents with `initial` and restores heap order
    ///
    /// # Time Complexity
    /// O(n)
    fn heapify<I: IntoIterator<Item = T>>(&mut self, initial: I);
}
