//! Scenario tests for the indexed D-ary heap
//!
//! Tests cover:
//! - The documented poll/decrease scenario
//! - Error reporting for every failure class
//! - Insert/delete round trips
//! - Degree independence of extraction order
//! - Generic use through the `IndexedHeap` trait, including the binary wrapper

use indexed_dary_heap::dary::{MinIndexedBinaryHeap, MinIndexedDHeap};
use indexed_dary_heap::{HeapError, IndexedHeap};

/// Deterministic values without pulling in an RNG
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_poll_after_decrease() {
    let mut heap = MinIndexedDHeap::new(2, 5).unwrap();
    heap.insert(0, 10).unwrap();
    heap.insert(1, 5).unwrap();
    heap.insert(2, 7).unwrap();
    heap.decrease(0, 3).unwrap();

    assert_eq!(heap.peek_min_value(), Ok(&3));
    assert_eq!(heap.poll_min_key(), Ok(0));
    assert_eq!(heap.peek_min_value(), Ok(&5));
    assert_eq!(heap.poll_min_key(), Ok(1));
    assert_eq!(heap.peek_min_value(), Ok(&7));
    assert_eq!(heap.poll_min_key(), Ok(2));
    assert!(heap.is_empty());
}

#[test]
fn test_error_scenario() {
    let mut heap: MinIndexedDHeap<i32> = MinIndexedDHeap::new(2, 5).unwrap();
    assert_eq!(heap.peek_min_value(), Err(HeapError::Underflow));
    assert_eq!(heap.poll_min_key(), Err(HeapError::Underflow));

    heap.insert(0, 1).unwrap();
    assert_eq!(heap.insert(0, 2), Err(HeapError::DuplicateKey(0)));
    assert_eq!(heap.delete(3), Err(HeapError::NotFound(3)));
    assert_eq!(heap.update(3, 1), Err(HeapError::NotFound(3)));
    assert_eq!(heap.decrease(3, 1), Err(HeapError::NotFound(3)));
    assert_eq!(heap.increase(3, 1), Err(HeapError::NotFound(3)));
    assert_eq!(heap.value_of(3), Err(HeapError::NotFound(3)));

    let out_of_range = HeapError::OutOfRange { key: 5, capacity: 5 };
    assert_eq!(heap.contains(5), Err(out_of_range));
    assert_eq!(heap.insert(5, 0), Err(out_of_range));
    assert_eq!(heap.delete(5), Err(out_of_range));
    assert_eq!(heap.value_of(5), Err(out_of_range));

    // Nothing above may have touched the heap
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.value_of(0), Ok(&1));
    assert!(heap.is_consistent());
}

#[test]
fn test_error_messages() {
    assert_eq!(HeapError::Underflow.to_string(), "priority queue underflow");
    assert_eq!(
        HeapError::DuplicateKey(4).to_string(),
        "key index already exists; received 4"
    );
    assert_eq!(
        HeapError::OutOfRange { key: 9, capacity: 3 }.to_string(),
        "key index out of bounds; received 9, capacity is 3"
    );
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(
        MinIndexedDHeap::<u8>::new(4, 0),
        Err(HeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        MinIndexedDHeap::<u8>::binary(0),
        Err(HeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        MinIndexedBinaryHeap::<u8>::new(0),
        Err(HeapError::InvalidArgument(_))
    ));
}

#[test]
fn test_oversized_degree_rejected() {
    for degree in [usize::MAX, usize::MAX - 1, usize::MAX / 2] {
        assert!(matches!(
            MinIndexedDHeap::<u8>::new(degree, 5),
            Err(HeapError::InvalidArgument(_))
        ));
    }
    // Large but representable degrees still work
    let heap = MinIndexedDHeap::<u8>::new(1 << 10, 1).unwrap();
    assert_eq!(heap.capacity(), (1 << 10) + 1);
}

#[test]
fn test_insert_delete_round_trip() {
    let mut heap = MinIndexedDHeap::new(3, 32).unwrap();
    // Distinct values: 7 is invertible mod 101
    for key in 0..20 {
        heap.insert(key, (key as i64 * 7) % 101).unwrap();
    }
    let before: Vec<usize> = heap.keys().collect();

    // Swims all the way to the root before being removed again
    heap.insert(25, -1).unwrap();
    assert_eq!(heap.peek_min_key(), Ok(25));
    assert_eq!(heap.delete(25), Ok(-1));

    assert_eq!(heap.len(), 20);
    assert_eq!(heap.contains(25), Ok(false));
    assert_eq!(heap.keys().collect::<Vec<_>>(), before);
    assert!(heap.is_consistent());
}

#[test]
fn test_decrease_monotonicity() {
    let mut heap = MinIndexedDHeap::new(4, 10).unwrap();
    for key in 0..10 {
        heap.insert(key, 50 + key as i64).unwrap();
    }

    assert_eq!(heap.decrease(6, 56), Ok(false));
    assert_eq!(heap.decrease(6, 80), Ok(false));
    assert_eq!(heap.value_of(6), Ok(&56));

    assert_eq!(heap.decrease(6, 1), Ok(true));
    assert_eq!(heap.value_of(6), Ok(&1));
    assert_eq!(heap.peek_min_key(), Ok(6));
    assert!(heap.is_min_heap());
}

#[test]
fn test_sorted_extraction_across_degrees() {
    let mut lcg = Lcg::new(42);
    let values: Vec<u64> = (0..200).map(|_| lcg.next() % 1_000).collect();

    let mut orders = Vec::new();
    for degree in [2, 3, 5, 16] {
        let mut heap = MinIndexedDHeap::new(degree, values.len()).unwrap();
        for (key, value) in values.iter().enumerate() {
            heap.insert(key, *value).unwrap();
        }
        // Remove every seventh key before draining
        for key in (0..values.len()).step_by(7) {
            heap.delete(key).unwrap();
        }
        assert!(heap.is_min_heap());

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.poll_min_value().unwrap());
        }
        assert!(drained.windows(2).all(|w| w[0] <= w[1]));
        orders.push(drained);
    }

    assert!(orders.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_update_then_poll_everything() {
    let mut heap = MinIndexedDHeap::new(3, 64).unwrap();
    let mut lcg = Lcg::new(3);
    for key in 0..64 {
        heap.insert(key, lcg.next() % 500).unwrap();
    }
    for key in (0..64).step_by(3) {
        heap.update(key, lcg.next() % 500).unwrap();
        assert!(heap.is_min_heap());
    }
    for key in (1..64).step_by(5) {
        let current = *heap.value_of(key).unwrap();
        assert_eq!(heap.increase(key, current + 250), Ok(true));
        assert!(heap.is_min_heap());
    }
    assert!(heap.is_consistent());

    let mut last = 0;
    while let Ok(value) = heap.poll_min_value() {
        assert!(value >= last);
        last = value;
    }
}

#[test]
fn test_iter_matches_values() {
    let mut heap = MinIndexedDHeap::new(2, 6).unwrap();
    for key in [4, 1, 5, 0] {
        heap.insert(key, key * 10).unwrap();
    }
    let mut pairs: Vec<(usize, usize)> = heap.iter().map(|(k, v)| (k, *v)).collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![(0, 0), (1, 10), (4, 40), (5, 50)]);
}

// ============================================================================
// Generic trait usage
// ============================================================================

fn drain<H: IndexedHeap<u32>>(heap: &mut H) -> Vec<(usize, u32)> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.poll_min().unwrap());
    }
    out
}

fn relax_all<H: IndexedHeap<u32>>(heap: &mut H, proposals: &[(usize, u32)]) {
    for &(key, value) in proposals {
        if heap.contains(key).unwrap() {
            heap.decrease(key, value).unwrap();
        } else {
            heap.insert(key, value).unwrap();
        }
    }
}

#[test]
fn test_relaxation_through_trait() {
    let proposals = [(3, 30), (1, 12), (3, 8), (2, 9), (1, 15), (0, 40), (0, 2)];

    for degree in [2, 4, 7] {
        let mut heap: MinIndexedDHeap<u32> = MinIndexedDHeap::new(degree, 4).unwrap();
        relax_all(&mut heap, &proposals);
        assert_eq!(IndexedHeap::peek_min(&heap), Ok((0, &2)));
        assert_eq!(IndexedHeap::value_of(&heap, 1), Ok(&12));
        assert_eq!(drain(&mut heap), vec![(0, 2), (3, 8), (2, 9), (1, 12)]);
    }
}

#[test]
fn test_binary_heap_through_trait() {
    let proposals = [(3, 30), (1, 12), (3, 8), (2, 9), (1, 15), (0, 40), (0, 2)];

    let mut heap: MinIndexedBinaryHeap<u32> = MinIndexedBinaryHeap::new(4).unwrap();
    assert_eq!(heap.degree(), 2);
    relax_all(&mut heap, &proposals);
    assert!(heap.is_min_heap());
    assert_eq!(IndexedHeap::peek_min(&heap), Ok((0, &2)));
    assert_eq!(drain(&mut heap), vec![(0, 2), (3, 8), (2, 9), (1, 12)]);
}
