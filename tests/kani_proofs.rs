//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use comparator_heap::compare::{DefaultComparator, Inverted};
#[cfg(kani)]
use comparator_heap::{BinaryHeap, HeapError};

/// Proof that push returns the new length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_returns_len() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();
    let first: u32 = kani::any();
    let second: u32 = kani::any();

    assert!(heap.push(first) == 1);
    assert!(heap.push(second) == 2);
    assert!(heap.len() == 2);
}

/// Proof that top and pop on an empty heap fail without side effects
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();

    assert!(heap.top() == Err(HeapError::Empty));
    assert!(heap.pop() == Err(HeapError::Empty));
    assert!(heap.is_empty());
}

/// Proof that pop returns the maximum of three arbitrary values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_max() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    let mut heap = BinaryHeap::new();
    heap.push(a);
    heap.push(b);
    heap.push(c);

    let max = a.max(b).max(c);
    assert!(heap.pop() == Ok(max));
    assert!(heap.len() == 2);
}

/// Proof that heapify establishes the heap property for four arbitrary values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heapify_establishes_order() {
    let values: [i16; 4] = kani::any();

    let heap = BinaryHeap::from_vec_with_comparator(values.to_vec(), Inverted(DefaultComparator));
    assert!(heap.is_heap());

    let min = values.iter().copied().min();
    assert!(heap.peek().copied() == min);
}

/// Proof that a single-element pop empties the heap
#[cfg(kani)]
#[kani::proof]
fn verify_single_element_pop() {
    let value: u8 = kani::any();
    let mut heap = BinaryHeap::from_vec(vec![value]);

    assert!(heap.pop() == Ok(value));
    assert!(heap.is_empty());
}
