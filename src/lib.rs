//! Comparator-driven binary heap for Rust
//!
//! This crate provides an array-backed binary heap priority queue whose
//! ordering comes from a pluggable comparator rather than from `Ord` alone.
//!
//! # Features
//!
//! - **BinaryHeap**: O(log n) push and pop, O(1) top, O(n) bulk build (heapify)
//! - **Comparators**: any `Fn(&T, &T) -> Ordering` closure, the numeric/text
//!   [`DefaultComparator`], and the [`Inverted`](compare::Inverted) adapter
//! - **Explicit errors**: `top` and `pop` on an empty heap return
//!   [`HeapError::Empty`] instead of panicking
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, HeapError};
//! use comparator_heap::compare::{DefaultComparator, Inverted};
//!
//! let mut max_heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(max_heap.pop(), Ok(9));
//! assert_eq!(max_heap.pop(), Ok(8));
//!
//! let mut min_heap = BinaryHeap::with_comparator(Inverted(DefaultComparator));
//! min_heap.push(4);
//! min_heap.push(2);
//! assert_eq!(min_heap.top(), Ok(&2));
//!
//! let mut empty: BinaryHeap<i32> = BinaryHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::Empty));
//! ```

pub mod binary;
pub mod compare;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use compare::{default_compare, Comparator, DefaultComparator};
pub use traits::{Heap, HeapError};
