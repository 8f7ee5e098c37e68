#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use rstest::rstest;

use super::*;
use crate::util::alloc::{CountedDrop, LiveCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

fn contents<T: Clone>(buf: &RingBuffer<T>) -> Vec<T> {
    buf.iter().cloned().collect()
}

#[test]
fn test_fixed_replace_on_full() {
    let mut buf = RingBuffer::with_cap(3);
    assert_eq!(buf.policy(), BufferPolicy::fixed(OverflowPolicy::ReplaceOnFull));

    buf.extend(0..3);
    assert!(buf.is_full());
    buf.push_back(3);
    assert_eq!(contents(&buf), [1, 2, 3], "Pushing to the back should replace the front.");

    buf.push_front(-1);
    assert_eq!(contents(&buf), [-1, 1, 2], "Pushing to the front should replace the back.");
    assert_eq!(buf.cap(), 3, "A fixed buffer should never change capacity.");

    assert_eq!(buf.pop_back(), Some(2));
    assert_eq!(buf.pop_front(), Some(-1));
    assert_eq!(buf.len(), 1);
    assert!(!buf.is_full());
}

#[test]
fn test_fixed_throw_on_full() {
    let mut buf = RingBuffer::with_policy(2, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
    buf.push_back('a');
    buf.push_front('b');

    assert_eq!(buf.try_push_back('c'), Err(PushError::Full(FullCollection { cap: 2 })));
    assert_eq!(buf.try_push_front('c'), Err(FullCollection { cap: 2 }.into()));
    assert_eq!(contents(&buf), ['b', 'a'], "A rejected push shouldn't change the buffer.");

    assert_panics!({
        let mut buf = RingBuffer::with_policy(1, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
        buf.push_back(0);
        buf.push_back(1);
    });
}

#[rstest]
#[case::replace(OverflowPolicy::ReplaceOnFull)]
#[case::throw(OverflowPolicy::ThrowOnFull)]
fn test_zero_capacity(#[case] overflow: OverflowPolicy) {
    let mut buf = RingBuffer::with_policy(0, BufferPolicy::fixed(overflow));
    assert!(buf.is_full(), "A buffer with no slots should always be full.");
    assert!(buf.is_empty());
    assert_eq!(buf.try_push_back(1), Err(PushError::ZeroCapacity(ZeroCapacity)));
    assert_eq!(buf.try_push_front(1), Err(ZeroCapacity.into()));
    assert_eq!(buf.try_insert(0, 1), Err(InsertError::ZeroCapacity(ZeroCapacity)));
    assert_eq!(buf.pop_front(), None);
    assert_eq!(buf.try_pop_back(), Err(EmptyCollection));
}

#[test]
fn test_dynamic_growth_and_shrink() {
    let mut buf = RingBuffer::new();
    let mut caps = Vec::new();
    for i in 0..9 {
        buf.push_back(i);
        caps.push(buf.cap());
    }
    assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);

    let mut caps = Vec::new();
    while buf.pop_front().is_some() {
        caps.push(buf.cap());
    }
    assert_eq!(
        caps,
        [16, 16, 16, 16, 8, 8, 4, 2, 1],
        "Capacity should halve whenever the buffer becomes a quarter full."
    );
    assert_eq!(buf.cap(), 1, "A dynamic buffer should never shrink below a single slot.");
}

#[rstest]
#[case::front(true)]
#[case::back(false)]
fn test_dynamic_growth_keeps_order(#[case] front: bool) {
    // Wrap the contents around the end of the storage before growing.
    let mut buf = RingBuffer::with_cap(4);
    buf.extend(0..6);
    buf.set_policy(Some(CapacityPolicy::Dynamic), None);
    assert!(!buf.is_linearized() && buf.is_full());

    if front {
        buf.push_front(-1);
        assert_eq!(contents(&buf), [-1, 2, 3, 4, 5]);
    } else {
        buf.push_back(6);
        assert_eq!(contents(&buf), [2, 3, 4, 5, 6]);
    }
    assert_eq!(buf.cap(), 8);
}

#[rstest]
#[case::start(0)]
#[case::near_front(1)]
#[case::middle(3)]
#[case::near_back(5)]
#[case::end(6)]
fn test_insert_remove(#[case] index: usize) {
    let mut buf = RingBuffer::with_cap(8);
    buf.extend(0..4);
    buf.push_front(-1);
    buf.push_front(-2);
    let mut model = vec![-2, -1, 0, 1, 2, 3];

    buf.insert(index, 100);
    model.insert(index, 100);
    assert_eq!(contents(&buf), model, "Inserting at {index} should match a Vec.");

    assert_eq!(buf.remove(index), 100);
    model.remove(index);
    assert_eq!(contents(&buf), model, "Removing at {index} should match a Vec.");
}

#[test]
fn test_insert_errors() {
    let mut buf = RingBuffer::with_cap(2);
    buf.push_back(0);
    assert_eq!(
        buf.try_insert(2, 1),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 2, len: 1 }))
    );
    buf.insert(0, 1);
    assert_eq!(
        buf.try_insert(1, 2),
        Err(FullCollection { cap: 2 }.into()),
        "Inserting into a full fixed buffer should fail even when it replaces on full."
    );
    assert_eq!(buf.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(contents(&buf), [1, 0]);

    let mut buf: RingBuffer<_> = RingBuffer::new();
    buf.insert(0, 'a');
    buf.insert(0, 'b');
    buf.insert(1, 'c');
    assert_eq!(contents(&buf), ['b', 'c', 'a'], "A dynamic buffer should grow to fit inserts.");
}

#[test]
fn test_full_remove_front_side() {
    let mut buf = RingBuffer::with_cap(5);
    buf.extend(0..5);
    assert!(buf.is_full());
    assert_eq!(buf.remove(1), 1);
    assert!(!buf.is_full());
    buf.push_back(5);
    assert_eq!(contents(&buf), [0, 2, 3, 4, 5]);
    assert_eq!(buf.remove(3), 4);
    buf.push_front(-1);
    assert_eq!(contents(&buf), [-1, 0, 2, 3, 5]);
}

#[test]
fn test_resize() {
    let mut buf = RingBuffer::with_cap(6);
    buf.extend(0..9);
    assert_eq!(contents(&buf), [3, 4, 5, 6, 7, 8]);

    let mut discard_old = buf.clone();
    discard_old.resize(4, ResizePolicy::DiscardOld);
    assert_eq!(contents(&discard_old), [5, 6, 7, 8]);
    assert!(discard_old.is_full());

    let mut discard_new = buf.clone();
    discard_new.resize(4, ResizePolicy::DiscardNew);
    assert_eq!(contents(&discard_new), [3, 4, 5, 6]);

    buf.resize(10, ResizePolicy::default());
    assert_eq!(contents(&buf), [3, 4, 5, 6, 7, 8], "Growing should keep every element.");
    assert_eq!(buf.cap(), 10);
    assert!(buf.is_linearized(), "Resizing should move the first element into the first slot.");

    buf.resize(0, ResizePolicy::DiscardOld);
    assert!(buf.is_empty() && buf.is_full());
}

#[test]
fn test_resize_drops_discarded() {
    let counter = LiveCounter::new();
    let mut buf = RingBuffer::with_cap(8);
    buf.extend((0..8).map(|i| counter.track(i)));
    buf.resize(3, ResizePolicy::DiscardOld);
    assert_eq!(counter.live(), 3, "Discarded elements should be dropped.");
    assert_eq!(buf.iter().map(|t| t.value).collect::<Vec<_>>(), [5, 6, 7]);
}

#[test]
fn test_linearize() {
    let mut buf = RingBuffer::with_cap(5);
    buf.extend(0..7);
    assert!(!buf.is_linearized());
    let (first, second) = buf.as_slices();
    assert_eq!((first, second), (&[2, 3, 4][..], &[5, 6][..]));

    assert_eq!(buf.linearize(), &[2, 3, 4, 5, 6]);
    assert!(buf.is_linearized());
    assert_eq!(buf.as_slices().1, &[] as &[i32]);

    buf.pop_front();
    buf.push_back(7);
    let copy = buf.linearize_copy(Some(BufferPolicy::dynamic()));
    assert!(copy.is_linearized());
    assert_eq!(copy, buf);
    assert_eq!(copy.policy(), BufferPolicy::dynamic());
    assert_eq!(copy.cap(), 5);
}

#[test]
fn test_access() {
    let mut buf = RingBuffer::with_cap(4);
    assert_eq!(buf.front(), None);
    assert_eq!(buf.back(), None);

    buf.extend(["a", "b", "c", "d", "e"]);
    assert_eq!(buf.front(), Some(&"b"));
    assert_eq!(buf.back(), Some(&"e"));
    assert_eq!(buf[2], "d");
    buf[2] = "x";
    *buf.back_mut().unwrap() = "y";
    *buf.front_mut().unwrap() = "z";
    assert_eq!(contents(&buf), ["z", "c", "x", "y"]);
    assert_eq!(buf.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(buf.get_mut(4), None);

    assert_panics!({
        let buf = RingBuffer::<u8>::with_cap(1);
        let _ = buf[0];
    });
}

#[test]
fn test_policy_changes() {
    let mut buf = RingBuffer::with_cap(2);
    buf.extend(0..2);
    buf.set_policy(Some(CapacityPolicy::Dynamic), None);
    buf.push_back(2);
    assert_eq!(buf.cap(), 4, "A buffer switched to dynamic capacity should grow.");

    buf.set_policy(Some(CapacityPolicy::Fixed), Some(OverflowPolicy::ThrowOnFull));
    buf.push_back(3);
    assert!(buf.try_push_back(4).is_err());
    assert_eq!(buf.policy(), BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
}

#[test]
fn test_clear_and_drop() {
    let counter = LiveCounter::new();
    let mut buf = RingBuffer::with_cap(4);
    buf.extend((0..6).map(|i| counter.track(i)));
    assert_eq!(counter.live(), 4, "Replaced elements should be dropped.");

    buf.clear();
    assert_eq!(counter.live(), 0);
    assert_eq!(buf.cap(), 4, "Clearing should keep the capacity.");
    buf.push_back(counter.track(10));
    assert_eq!(buf.front().map(|t| t.value), Some(10));

    let dropped = CountedDrop::new(0);
    let mut buf = RingBuffer::with_cap(3);
    buf.extend(iter::repeat_with(|| dropped.clone()).take(5));
    drop(buf);
    assert_eq!(dropped.take(), 5, "Every pushed element should be dropped exactly once.");
}

#[test]
fn test_iterators() {
    let mut buf = RingBuffer::with_cap(5);
    buf.extend(0..8);

    for value in buf.iter_mut() {
        *value *= 10;
    }
    assert_eq!(buf.iter().rev().copied().collect::<Vec<_>>(), [70, 60, 50, 40, 30]);
    assert_eq!(buf.iter().len(), 5);

    let mut iter = buf.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(30));
    assert_eq!(iter.next_back(), Some(70));
    assert_eq!(iter.collect::<Vec<_>>(), [40, 50, 60]);

    let counter = LiveCounter::new();
    let buf: RingBuffer<_> = (0..10).map(|i| counter.track(i)).collect();
    let mut iter = buf.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.live(), 0, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_value_semantics() {
    let mut original = RingBuffer::with_policy(4, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
    original.extend(["a", "b", "c"].map(String::from));

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.cap(), 4);
    assert_eq!(copy.policy(), original.policy(), "A clone should keep the policy.");
    copy[0].push('!');
    assert_eq!(original[0], "a", "Mutating a clone shouldn't affect the original.");

    let moved = std::mem::take(&mut original);
    assert_eq!(moved.len(), 3);
    assert!(original.is_empty());
    original.push_back(String::from("reused"));
    assert_eq!(original.len(), 1, "A moved-from RingBuffer should remain usable.");

    let state = RandomState::new();
    let mut wrapped = RingBuffer::with_cap(3);
    wrapped.extend(0..5);
    let linear: RingBuffer<_> = (2..5).collect();
    assert_eq!(wrapped, linear, "Equality should only depend on the logical sequence.");
    assert_eq!(state.hash_one(&wrapped), state.hash_one(&linear));
    assert_eq!(format!("{wrapped}"), "[2, 3, 4]");
}

#[test]
fn test_zst_support() {
    let mut buf = RingBuffer::new();
    for _ in 0..100 {
        buf.push_back(ZeroSizedType);
        buf.push_front(ZeroSizedType);
    }
    assert_eq!(buf.len(), 200);
    buf.insert(50, ZeroSizedType);
    assert_eq!(buf.remove(0), ZeroSizedType);
    assert_eq!(buf.iter().count(), 200);
}
