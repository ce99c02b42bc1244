//! Property-based tests using proptest
//!
//! Random sequences of push/pop/remove/fix are applied to a heap and to a
//! plain `Vec` model; the heap must agree with the model and keep its
//! invariant after every step.

use heapq::{BinaryHeap, HeapError};
use proptest::prelude::*;

fn init_test() {
    drop(env_logger::try_init());
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Remove(usize),
    Fix(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Fix(i, v)),
    ]
}

/// Removes one occurrence of `value` from the model, failing if it is absent.
fn take(model: &mut Vec<i32>, value: i32) -> Result<(), TestCaseError> {
    let pos = model.iter().position(|&x| x == value);
    prop_assert!(pos.is_some(), "{} is not in the model", value);
    if let Some(pos) = pos {
        model.swap_remove(pos);
    }
    Ok(())
}

proptest! {
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        init_test();
        let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a < b);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    heap.push(value);
                    model.push(value);
                }
                Op::Pop => {
                    let expected = model.iter().min().copied();
                    prop_assert_eq!(heap.pop(), expected);
                    if let Some(value) = expected {
                        take(&mut model, value)?;
                    }
                }
                Op::Remove(index) => {
                    if heap.is_empty() {
                        prop_assert_eq!(
                            heap.remove(index),
                            Err(HeapError::IndexOutOfBounds { index, len: 0 })
                        );
                    } else {
                        let index = index % heap.len();
                        let expected = heap.as_slice()[index];
                        prop_assert_eq!(heap.remove(index), Ok(expected));
                        take(&mut model, expected)?;
                    }
                }
                Op::Fix(index, value) => {
                    if heap.is_empty() {
                        prop_assert!(heap.fix(index).is_err());
                    } else {
                        let index = index % heap.len();
                        let old = std::mem::replace(&mut heap.as_slice_mut()[index], value);
                        heap.fix(index).unwrap();
                        take(&mut model, old)?;
                        model.push(value);
                    }
                }
            }

            prop_assert!(heap.is_heap());
            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.peek().copied(), model.iter().min().copied());
        }

        model.sort();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }

    #[test]
    fn from_vec_matches_pushes(items in prop::collection::vec(any::<i16>(), 0..100)) {
        let built = BinaryHeap::from_vec(items.clone(), |a: &i16, b: &i16| a < b);
        prop_assert!(built.is_heap());

        let mut pushed = BinaryHeap::ordered();
        pushed.extend(items.iter().copied());
        prop_assert!(pushed.is_heap());

        let mut sorted = items;
        sorted.sort();
        prop_assert_eq!(built.into_sorted_vec(), sorted.clone());
        prop_assert_eq!(pushed.into_sorted_vec(), sorted);
    }

    #[test]
    fn pop_runs_are_non_decreasing(
        items in prop::collection::vec(any::<u8>(), 1..64),
        pops in 1usize..16,
    ) {
        let mut heap: BinaryHeap<u8> = items.into_iter().collect();
        let mut last = None;
        for _ in 0..pops {
            match heap.pop() {
                Some(x) => {
                    if let Some(prev) = last {
                        prop_assert!(prev <= x);
                    }
                    last = Some(x);
                }
                None => break,
            }
            prop_assert!(heap.is_heap());
        }
    }

    #[test]
    fn out_of_bounds_leaves_heap_untouched(
        items in prop::collection::vec(any::<i32>(), 0..32),
        extra in 0usize..8,
    ) {
        let mut heap: BinaryHeap<i32> = items.into();
        let before = heap.as_slice().to_vec();
        let index = heap.len() + extra;
        let err = HeapError::IndexOutOfBounds { index, len: before.len() };

        prop_assert_eq!(heap.remove(index), Err(err));
        prop_assert_eq!(heap.fix(index), Err(err));
        prop_assert_eq!(heap.update(index, |x| *x = 0), Err(err));
        prop_assert_eq!(heap.as_slice(), &before[..]);
    }
}
