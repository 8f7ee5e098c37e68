#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::{BackAccess, FrontAccess, IndexedAccess, Sequence};
use crate::util::alloc::{CountedDrop, LiveCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: FixedArray<u8> = FixedArray::new();
    assert!(arr.is_empty(), "A new FixedArray should be empty.");
    assert_eq!(arr, FixedArray::default());

    let arr: FixedArray<String> = FixedArray::sized(3);
    assert_eq!(arr.len(), 3);
    assert!(arr.iter().all(String::is_empty), "Sized elements should hold the default value.");

    let arr = FixedArray::from_fn(5, |i| i * 10);
    assert_eq!(*arr, [0, 10, 20, 30, 40]);
    assert_eq!(arr, FixedArray::from([0, 10, 20, 30, 40]));
    assert_eq!(arr, (0..5).map(|i| i * 10).collect::<FixedArray<_>>());

    assert_eq!(
        FixedArray::<u64>::try_from_fn(usize::MAX, |_| 0),
        Err(CapacityOverflow),
        "An allocation larger than isize::MAX bytes should fail."
    );
    assert_panics!({
        FixedArray::<u64>::sized(usize::MAX);
    });
}

#[test]
fn test_from_fn_panic_drops_prefix() {
    let counter = LiveCounter::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        FixedArray::from_fn(10, |i| {
            assert!(i < 6, "out of values");
            counter.track(i)
        })
    }));
    assert!(result.is_err());
    assert_eq!(counter.live(), 0, "Elements built before the panic should be dropped.");
}

#[test]
fn test_access() {
    let mut arr = FixedArray::from([1, 2, 3, 4]);
    assert_eq!(arr.try_get(3), Ok(&4));
    assert_eq!(arr.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    *arr.try_get_mut(0).unwrap() += 10;
    arr[1] = 20;
    assert_eq!(arr.replace(2, 30), 3);
    assert_eq!(arr.try_replace(4, 0), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(*arr, [11, 20, 30, 4], "Failed operations shouldn't change the FixedArray.");

    // Contiguous storage exposes a single pointer to the first element.
    // SAFETY: The array holds four initialized elements.
    assert_eq!(unsafe { *arr.as_ptr().add(3) }, 4);

    assert_panics!({
        let mut arr = FixedArray::from([1, 2, 3]);
        arr.replace(3, 0);
    });
}

#[test]
fn test_capabilities() {
    let mut arr = FixedArray::from(['a', 'b', 'c']);
    assert_eq!(Sequence::len(&arr), 3);
    assert_eq!(IndexedAccess::get(&arr, 1), Some(&'b'));
    assert_eq!(IndexedAccess::get(&arr, 3), None);
    *FrontAccess::front_mut(&mut arr).unwrap() = 'x';
    *BackAccess::back_mut(&mut arr).unwrap() = 'z';
    assert_eq!(*arr, ['x', 'b', 'z']);

    let empty: FixedArray<char> = FixedArray::new();
    assert!(Sequence::is_empty(&empty));
    assert_eq!(FrontAccess::front(&empty), None);
    assert_eq!(BackAccess::back(&empty), None);
}

#[test]
fn test_dynamic_conversion() {
    let mut dynamic = DynamicArray::with_cap(16);
    dynamic.extend(0..5);

    let fixed = FixedArray::from(dynamic);
    assert_eq!(*fixed, [0, 1, 2, 3, 4]);
    assert_eq!(fixed.storage.size(), 5, "Spare capacity should be released.");

    let mut dynamic = fixed.into_dynamic();
    assert_eq!(dynamic.cap(), 5);
    dynamic.push(5);
    assert_eq!(*dynamic, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: FixedArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_iterators() {
    let mut arr = FixedArray::from_fn(5, |i| i);

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8], "FixedArray mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(*iter.collect::<FixedArray<_>>(), [2, 4, 6]);

    let counter = LiveCounter::new();
    let arr = FixedArray::from_fn(6, |i| counter.track(i));
    let mut iter = arr.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.live(), 0, "Dropping an owned iterator should drop all remaining elements.");
}

#[test]
fn test_value_semantics() {
    let mut original: FixedArray<_> = (0..4).map(|i| i.to_string()).collect();

    let mut copy = original.clone();
    assert_eq!(copy, original, "A clone should equal its original.");
    copy[0].push('!');
    assert_eq!(*original, ["0", "1", "2", "3"], "Mutating a clone shouldn't affect the original.");

    let moved = std::mem::take(&mut original);
    assert_eq!(*moved, ["0", "1", "2", "3"]);
    assert!(original.is_empty(), "A moved-from FixedArray should be empty.");
    assert_eq!(original.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_equality_and_format() {
    let arr = FixedArray::from([0_usize, 1, 2]);
    let other: FixedArray<usize> = (0..3).collect();
    assert_eq!(arr, other, "Different construction methods should produce equal results.");
    assert_ne!(arr, FixedArray::from([0_usize, 1]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(&other),
        "Equal arrays should produce the same hash."
    );

    assert_eq!(format!("{arr}"), "[0, 1, 2]");
    assert_eq!(format!("{:?}", FixedArray::from([1_u8])), "FixedArray { contents: [1], len: 1 }");
}

#[test]
fn test_zst_support() {
    let arr: FixedArray<ZeroSizedType> = FixedArray::sized(100);
    assert_eq!(arr.len(), 100);
    assert_eq!(arr.iter().count(), 100);
    assert_eq!(arr.into_iter().count(), 100);
}
