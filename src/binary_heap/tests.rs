use super::*;
use crate::test_helpers::test_rng;
use crate::{total_order_fn, Reversed};
use rand::Rng;
use std::vec::Vec;

fn assert_heap_invariant<T, O: TotalOrder<OrderedType = T>>(heap: &BinaryHeap<T, O>) {
    let data = heap.as_slice();
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        assert!(
            !heap.order().gt(&data[parent], &data[child]),
            "heap invariant violated between parent {parent} and child {child}",
        );
    }
}

#[test]
fn test_pop_in_ascending_order() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    for x in [5, 3, 8, 1] {
        heap.push(x);
    }

    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(8));
    assert_eq!(heap.pop(), Err(EmptyQueue));
}

#[test]
fn test_reversed_order() {
    let mut heap = BinaryHeap::new(Reversed(OrdTotalOrder::default()));
    for x in [5, 3, 8, 1] {
        heap.push(x);
    }

    assert_eq!(heap.pop(), Ok(8));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Err(EmptyQueue));
}

#[test]
fn test_fn_total_order() {
    // Order pairs by their second component only.
    let mut heap = BinaryHeap::new(total_order_fn(|a: &(u32, u32), b: &(u32, u32)| a.1.cmp(&b.1)));
    heap.push((0, 7));
    heap.push((1, 2));
    heap.push((2, 9));

    assert_eq!(heap.pop(), Ok((1, 2)));
    assert_eq!(heap.pop(), Ok((0, 7)));
    assert_eq!(heap.pop(), Ok((2, 9)));
}

#[test]
fn test_empty_failures_leave_heap_untouched() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();

    assert_eq!(heap.peek(), Err(EmptyQueue));
    assert_eq!(heap.pop(), Err(EmptyQueue));
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());

    // A drained heap behaves exactly like a fresh one.
    heap.push(42);
    assert_eq!(heap.pop(), Ok(42));
    assert_eq!(heap.pop(), Err(EmptyQueue));
    assert_eq!(heap.peek(), Err(EmptyQueue));
    assert!(heap.is_empty());

    // The failures must not have corrupted anything.
    heap.push(7);
    assert_eq!(heap.peek(), Ok(&7));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_peek_is_idempotent() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    heap.push(2);
    heap.push(4);
    heap.push(1);

    for _ in 0..10 {
        assert_eq!(heap.peek(), Ok(&1));
        assert_eq!(heap.len(), 3);
    }
}

#[test]
fn test_len_bookkeeping() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    assert_eq!(heap.len(), 0);

    for (i, x) in [9, 2, 7, 2, 5].into_iter().enumerate() {
        heap.push(x);
        assert_eq!(heap.len(), i + 1);
        assert_eq!(heap.is_empty(), heap.len() == 0);
    }

    for expected in (0..5).rev() {
        assert!(heap.pop().is_ok());
        assert_eq!(heap.len(), expected);
        assert_eq!(heap.is_empty(), heap.len() == 0);
    }
}

fn check_pop_order(mut input: Vec<u32>) {
    let heap: BinaryHeap<u32> = input.iter().copied().collect();
    assert_eq!(heap.len(), input.len());
    assert_heap_invariant(&heap);

    let mut popped = Vec::with_capacity(input.len());
    let mut heap = heap;
    while let Ok(x) = heap.pop() {
        popped.push(x);
    }

    input.sort();
    assert_eq!(popped, input);
}

#[test]
fn test_pop_order_matches_reference_sort() {
    check_pop_order(Vec::new());
    check_pop_order(vec![1]);
    check_pop_order(vec![2, 1]);
    check_pop_order(vec![1, 1]);
    check_pop_order(vec![3, 3, 3, 3]);

    let mut rng = test_rng();
    for n in [3, 4, 10, 100, 1000] {
        // Drawing from a small range makes duplicates likely.
        let input: Vec<u32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
        check_pop_order(input);
    }
}

#[test]
fn test_invariant_over_random_interleavings() {
    let mut rng = test_rng();
    let mut heap: BinaryHeap<u32> = BinaryHeap::default();
    let mut pushes = 0usize;
    let mut pops = 0usize;

    for _ in 0..1000 {
        if rng.gen_bool(0.6) {
            heap.push(rng.gen_range(0u32..50));
            pushes += 1;
        } else if heap.pop().is_ok() {
            pops += 1;
        }
        assert_eq!(heap.len(), pushes - pops);
        assert_heap_invariant(&heap);
    }
}

#[test]
fn test_all_equal_elements() {
    let mut heap: BinaryHeap<u8> = BinaryHeap::default();
    for _ in 0..16 {
        heap.push(1u8);
    }
    for _ in 0..16 {
        assert_eq!(heap.pop(), Ok(1));
    }
    assert_eq!(heap.pop(), Err(EmptyQueue));
}

#[test]
fn test_from_vec_and_from_array() {
    let heap = BinaryHeap::from_vec(OrdTotalOrder::default(), vec![9, 5, 6, 0, 4]);
    assert_heap_invariant(&heap);
    assert_eq!(heap.peek(), Ok(&0));

    let heap: BinaryHeap<i32> = BinaryHeap::from([3, 1, 2]);
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);
}

#[test]
fn test_into_sorted_vec() {
    let mut rng = test_rng();
    let mut input: Vec<i64> = (0..200).map(|_| rng.gen_range(-50..50)).collect();

    let heap: BinaryHeap<i64> = input.iter().copied().collect();
    let sorted = heap.into_sorted_vec();

    input.sort();
    assert_eq!(sorted, input);

    // Under a reversed order, "ascending" means descending.
    let heap = BinaryHeap::from_vec(Reversed(OrdTotalOrder::default()), input.clone());
    let mut expected = input;
    expected.reverse();
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn test_into_iter_sorted() {
    let heap: BinaryHeap<i32> = BinaryHeap::from([4, 1, 3, 2]);
    let collected: Vec<_> = heap.into_iter_sorted().collect();
    assert_eq!(collected, [1, 2, 3, 4]);
}

#[test]
fn test_extend() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    heap.extend([5, 2, 9]);
    heap.extend(&[1, 7]);
    assert_heap_invariant(&heap);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.into_sorted_vec(), [1, 2, 5, 7, 9]);
}

#[test]
fn test_iter_and_into_iter_visit_everything() {
    let heap: BinaryHeap<i32> = BinaryHeap::from([6, 2, 8, 4]);

    let mut via_iter: Vec<i32> = heap.iter().copied().collect();
    via_iter.sort();
    assert_eq!(via_iter, [2, 4, 6, 8]);

    let mut via_into_iter: Vec<i32> = heap.into_iter().collect();
    via_into_iter.sort();
    assert_eq!(via_into_iter, [2, 4, 6, 8]);
}

#[test]
fn test_drain_and_clear() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::from([1, 3, 5]);
    let mut drained: Vec<i32> = heap.drain().collect();
    drained.sort();
    assert_eq!(drained, [1, 3, 5]);
    assert!(heap.is_empty());

    heap.extend([2, 4]);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(EmptyQueue));
}

#[test]
fn test_clone() {
    let heap: BinaryHeap<i32> = BinaryHeap::from([3, 1, 2]);
    let clone = heap.clone();
    assert_eq!(heap.into_sorted_vec(), clone.into_sorted_vec());
}

#[test]
fn test_empty_queue_display() {
    assert_eq!(EmptyQueue.to_string(), "priority queue is empty");
}
