#![cfg(feature = "collections-all")]
//! Property tests checking every container against [`VecDeque`] over random operation sequences.

use std::collections::VecDeque;

use dsa_collections::collections::adaptors::Deque;
use dsa_collections::collections::circ::{BufferPolicy, OverflowPolicy, RingBuffer};
use dsa_collections::collections::contiguous::DynamicArray;
use dsa_collections::collections::linked::{DoublyLinkedList, LinkedList};
use dsa_collections::collections::segmented::SegmentedList;
use dsa_collections::collections::tiered::TieredArray;
use proptest::prelude::*;

/// An operation applied to both a container and the model. Indices are reduced modulo the
/// current length when applied, so that every generated operation is valid.
#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (any::<usize>(), any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        any::<usize>().prop_map(Op::Remove),
        any::<usize>().prop_map(Op::Get),
    ]
}

/// Ops that only touch the back, plus arbitrary positions.
fn back_op() -> impl Strategy<Value = Op> {
    op().prop_filter("front operations aren't supported", |op| {
        !matches!(op, Op::PushFront(_) | Op::PopFront)
    })
}

/// Runs `ops` against the model, calling `apply` with each op (indices already reduced) and
/// checking the result it returns.
fn check<F>(ops: &[Op], mut apply: F) -> Result<VecDeque<i32>, TestCaseError>
where
    F: FnMut(&Op) -> Option<i32>,
{
    let mut model = VecDeque::new();
    for op in ops {
        let reduced = match *op {
            Op::Insert(index, value) => Op::Insert(index % (model.len() + 1), value),
            Op::Remove(_) | Op::Get(_) if model.is_empty() => continue,
            Op::Remove(index) => Op::Remove(index % model.len()),
            Op::Get(index) => Op::Get(index % model.len()),
            ref other => other.clone(),
        };

        let expected = match reduced {
            Op::PushFront(value) => {
                model.push_front(value);
                None
            },
            Op::PushBack(value) => {
                model.push_back(value);
                None
            },
            Op::PopFront => model.pop_front(),
            Op::PopBack => model.pop_back(),
            Op::Insert(index, value) => {
                model.insert(index, value);
                None
            },
            Op::Remove(index) => model.remove(index),
            Op::Get(index) => model.get(index).copied(),
        };

        prop_assert_eq!(apply(&reduced), expected, "Result of {:?} should match", reduced);
    }
    Ok(model)
}

proptest! {
    #[test]
    fn prop_ring_buffer_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut buf = RingBuffer::new();
        let model = check(&ops, |op| match *op {
            Op::PushFront(value) => { buf.push_front(value); None },
            Op::PushBack(value) => { buf.push_back(value); None },
            Op::PopFront => buf.pop_front(),
            Op::PopBack => buf.pop_back(),
            Op::Insert(index, value) => { buf.insert(index, value); None },
            Op::Remove(index) => Some(buf.remove(index)),
            Op::Get(index) => buf.get(index).copied(),
        })?;
        prop_assert!(buf.iter().eq(model.iter()));
        prop_assert!(buf.cap() >= buf.len());
    }

    #[test]
    fn prop_fixed_ring_buffer_keeps_newest(
        cap in 1..16_usize,
        values in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut buf = RingBuffer::with_policy(cap, BufferPolicy::fixed(OverflowPolicy::ReplaceOnFull));
        buf.extend(values.iter().copied());

        let skip = values.len().saturating_sub(cap);
        prop_assert_eq!(buf.len(), values.len().min(cap));
        prop_assert!(buf.iter().eq(values[skip..].iter()), "Only the newest values should remain.");
    }

    #[test]
    fn prop_segmented_list_matches_model(
        block_size in 3..10_usize,
        ops in prop::collection::vec(op(), 0..300),
    ) {
        let mut list = SegmentedList::with_block_size(block_size);
        let model = check(&ops, |op| {
            let result = match *op {
                Op::PushFront(value) => { list.push_front(value); None },
                Op::PushBack(value) => { list.push_back(value); None },
                Op::PopFront => list.pop_front(),
                Op::PopBack => list.pop_back(),
                Op::Insert(index, value) => { list.insert(index, value); None },
                Op::Remove(index) => Some(list.remove(index)),
                Op::Get(index) => list.get(index).copied(),
            };

            // Every block except the last holds at least b - 1 elements, and none exceed b + 1.
            let blocks: Vec<_> = list.blocks().map(|block| block.len()).collect();
            if let Some((_, interior)) = blocks.split_last() {
                assert!(interior.iter().all(|&len| len + 1 >= block_size), "{:?}", blocks);
            }
            assert!(blocks.iter().all(|&len| len >= 1 && len <= block_size + 1), "{:?}", blocks);
            result
        })?;
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }

    #[test]
    fn prop_doubly_linked_list_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = DoublyLinkedList::new();
        let model = check(&ops, |op| match *op {
            Op::PushFront(value) => { list.push_front(value); None },
            Op::PushBack(value) => { list.push_back(value); None },
            Op::PopFront => list.pop_front(),
            Op::PopBack => list.pop_back(),
            Op::Insert(index, value) => { list.insert(index, value); None },
            Op::Remove(index) => Some(list.remove(index)),
            Op::Get(index) => list.get(index).copied(),
        })?;
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }

    #[test]
    fn prop_linked_list_matches_model(
        ops in prop::collection::vec(
            op().prop_filter("pop_back isn't supported", |op| !matches!(op, Op::PopBack)),
            0..200,
        ),
    ) {
        let mut list = LinkedList::new();
        let model = check(&ops, |op| match *op {
            Op::PushFront(value) => { list.push_front(value); None },
            Op::PushBack(value) => { list.push_back(value); None },
            Op::PopFront => list.pop_front(),
            Op::PopBack => None,
            Op::Insert(index, value) => { list.insert(index, value); None },
            Op::Remove(index) => Some(list.remove(index)),
            Op::Get(index) => list.get(index).copied(),
        })?;
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert_eq!(list.back(), model.back(), "The tail pointer should track the last node.");
    }

    #[test]
    fn prop_dynamic_array_matches_model(ops in prop::collection::vec(back_op(), 0..200)) {
        let mut arr = DynamicArray::new();
        let model = check(&ops, |op| match *op {
            Op::PushBack(value) => { arr.push(value); None },
            Op::PopBack => arr.pop(),
            Op::Insert(index, value) => { arr.insert(index, value); None },
            Op::Remove(index) => Some(arr.remove(index)),
            Op::Get(index) => arr.get(index).copied(),
            Op::PushFront(_) | Op::PopFront => None,
        })?;
        prop_assert!(arr.iter().eq(model.iter()));
    }

    #[test]
    fn prop_tiered_array_matches_model(ops in prop::collection::vec(back_op(), 0..200)) {
        let mut arr = TieredArray::new();
        let model = check(&ops, |op| match *op {
            Op::PushBack(value) => { arr.push(value); None },
            Op::PopBack => arr.pop(),
            Op::Insert(index, value) => { arr.insert(index, value); None },
            Op::Remove(index) => Some(arr.remove(index)),
            Op::Get(index) => arr.get(index).copied(),
            Op::PushFront(_) | Op::PopFront => None,
        })?;
        prop_assert!(arr.iter().eq(model.iter()));

        // Block k always holds exactly k + 1 slots.
        let blocks = arr.blocks();
        for (k, block) in blocks.iter().enumerate() {
            prop_assert_eq!(block.cap(), k + 1);
        }
        prop_assert!(arr.cap() >= arr.len());
    }

    #[test]
    fn prop_deque_matches_model(
        ops in prop::collection::vec(
            op().prop_filter("arbitrary insertion isn't supported", |op| {
                !matches!(op, Op::Insert(..) | Op::Remove(_))
            }),
            0..300,
        ),
    ) {
        let mut deque: Deque<i32> = Deque::new();
        let model = check(&ops, |op| {
            let result = match *op {
                Op::PushFront(value) => { deque.push_front(value); None },
                Op::PushBack(value) => { deque.push_back(value); None },
                Op::PopFront => deque.pop_front(),
                Op::PopBack => deque.pop_back(),
                Op::Get(index) => deque.get(index).copied(),
                Op::Insert(..) | Op::Remove(_) => None,
            };

            let (front, back) = deque.halves();
            let (f, b) = (front.len(), back.len());
            assert!(f + b < 2 || (3 * f >= b && 3 * b >= f), "Unbalanced halves {f} and {b}.");
            result
        })?;
        prop_assert!(deque.iter().eq(model.iter()));
    }
}
