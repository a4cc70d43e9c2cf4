//! Comparators: the orderings a [`BinaryHeap`](crate::BinaryHeap) is built on
//!
//! A comparator ranks two elements against each other. `Greater` means the
//! first argument belongs closer to the root, so a heap built on a comparator
//! always yields the element that ranks highest under it first.
//!
//! Any `Fn(&T, &T) -> Ordering` closure or function is a [`Comparator`].
//! [`DefaultComparator`] orders numbers numerically and text lexicographically,
//! which gives a max-heap for both. [`Inverted`] flips any comparator.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use comparator_heap::compare::{default_compare, Comparator, DefaultComparator, Inverted};
//!
//! assert_eq!(default_compare(&3, &5), Ordering::Less);
//! assert_eq!(default_compare("b", "a"), Ordering::Greater);
//! assert_eq!(DefaultComparator.compare(&2.5, &2.5), Ordering::Equal);
//! assert_eq!(Inverted(DefaultComparator).compare(&3, &5), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

/// A total order over elements of type `T`
///
/// Implementations must be consistent for the lifetime of the heap that owns
/// them. A comparator that is not a total order does not cause a panic, but
/// the heap built on it loses its ordering guarantees.
pub trait Comparator<T: ?Sized> {
    /// Ranks `a` against `b`
    ///
    /// Returns `Greater` if `a` should be extracted before `b`, `Less` if
    /// after, and `Equal` if the two are equivalent.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ordering used by [`DefaultComparator`] and [`default_compare`]
///
/// Implemented for the primitive numeric types (numeric order), for text
/// (`str`, `String`, `char`; lexicographic order) and for `bool` (`false`
/// before `true`, matching the order of their textual forms).
pub trait DefaultOrder {
    /// Ranks `self` against `other`
    fn default_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_default_order_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl DefaultOrder for $t {
                #[inline]
                fn default_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_default_order_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, str, String,
);

macro_rules! impl_default_order_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl DefaultOrder for $t {
                // NaN has no numeric rank, so it is ranked by its text instead.
                #[inline]
                fn default_order(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| compare_as_text(self, other))
                }
            }
        )*
    };
}

impl_default_order_float!(f32, f64);

impl<T: DefaultOrder + ?Sized> DefaultOrder for &T {
    #[inline]
    fn default_order(&self, other: &Self) -> Ordering {
        (**self).default_order(*other)
    }
}

/// Numeric order for numbers, lexicographic order for text
///
/// This is the comparator [`BinaryHeap::new`](crate::BinaryHeap::new) uses.
/// Under it the heap is a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparator;

impl<T: DefaultOrder + ?Sized> Comparator<T> for DefaultComparator {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.default_order(b)
    }
}

/// Compares two values with the default ordering
///
/// Usable on its own, independent of any heap.
///
/// ```rust
/// use std::cmp::Ordering;
/// use comparator_heap::compare::default_compare;
///
/// assert_eq!(default_compare(&3, &5), Ordering::Less);
/// assert_eq!(default_compare("b", "a"), Ordering::Greater);
/// assert_eq!(default_compare(&2, &2), Ordering::Equal);
/// ```
#[inline]
pub fn default_compare<T: DefaultOrder + ?Sized>(a: &T, b: &T) -> Ordering {
    a.default_order(b)
}

/// Compares the textual forms of two values lexicographically
///
/// Both values are rendered with [`Display`] and the resulting strings are
/// compared byte-wise. The two values need not share a type, which makes this
/// usable as a catch-all ordering for heterogeneous data.
///
/// This is a plain text comparison and is surprising on numbers: `10` ranks
/// below `9` because `"10" < "9"`, and `10` against `"10"` is `Equal`. Use
/// [`default_compare`] when both sides are numbers.
///
/// ```rust
/// use std::cmp::Ordering;
/// use comparator_heap::compare::compare_as_text;
///
/// assert_eq!(compare_as_text(&10, &"9"), Ordering::Less);
/// assert_eq!(compare_as_text(&10, &"10"), Ordering::Equal);
/// assert_eq!(compare_as_text(&true, &"false"), Ordering::Greater);
/// ```
pub fn compare_as_text<A, B>(a: &A, b: &B) -> Ordering
where
    A: Display + ?Sized,
    B: Display + ?Sized,
{
    a.to_string().cmp(&b.to_string())
}

/// Reverses the ranking of the wrapped comparator
///
/// `Inverted(DefaultComparator)` turns the default max-heap into a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inverted<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Inverted<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}
