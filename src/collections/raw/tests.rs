#![cfg(test)]

use super::*;
use crate::util::alloc::{LiveCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_construct_destroy_balance() {
    let counter = LiveCounter::new();
    let mut storage = RawStorage::new(8);
    assert_eq!(counter.live(), 0, "Allocating storage should never construct a value.");

    for i in 0..8 {
        // SAFETY: Every slot starts vacant.
        unsafe { storage.construct(i, counter.track(i)); }
    }
    assert_eq!(counter.live(), 8);

    for i in (0..8).step_by(2) {
        // SAFETY: Even slots were constructed above.
        unsafe { storage.destroy(i); }
    }
    assert_eq!(counter.live(), 4, "Destroying a slot should drop its value in place.");

    for i in (1..8).step_by(2) {
        // SAFETY: Odd slots are still occupied.
        let value = unsafe { storage.take(i) };
        assert_eq!(value.value, i);
    }
    assert_eq!(counter.live(), 0, "Every construction should be matched by a destruction.");

    drop(storage);
    assert_eq!(counter.live(), 0, "Dropping storage should never drop values.");
}

#[test]
fn test_access_and_relocate() {
    let mut storage = RawStorage::new(4);
    // SAFETY: Slots 0 and 1 are vacant.
    unsafe {
        storage.construct(0, String::from("zero"));
        storage.construct(1, String::from("one"));
    }

    // SAFETY: Slot 0 is occupied.
    unsafe { storage.at_mut(0).push('!'); }
    // SAFETY: Slot 0 is occupied.
    assert_eq!(unsafe { storage.at(0) }, "zero!");

    // SAFETY: Slot 1 is occupied and slot 3 is vacant.
    unsafe { storage.relocate(1, 3); }
    #[cfg(debug_assertions)]
    {
        assert!(!storage.is_occupied(1), "The source slot should be vacant after relocation.");
        assert!(storage.is_occupied(3), "The destination slot should be occupied after relocation.");
    }
    // SAFETY: Slot 3 was just filled.
    assert_eq!(unsafe { storage.at(3) }, "one");

    // SAFETY: Slots 0 and 3 are occupied.
    unsafe {
        storage.destroy(0);
        storage.destroy(3);
    }
}

#[test]
fn test_rotate_left() {
    let mut storage = RawStorage::new(5);
    for i in [3, 4, 0] {
        // SAFETY: Each slot is constructed once.
        unsafe { storage.construct(i, i * 10); }
    }

    storage.rotate_left(3);

    // SAFETY: Rotating by 3 moves slots 3, 4 and 0 to 0, 1 and 2.
    assert_eq!(unsafe { storage.slice(0, 3) }, &[30, 40, 0]);
    #[cfg(debug_assertions)]
    assert!(
        !storage.is_occupied(3) && !storage.is_occupied(4),
        "Vacant slots should rotate along with occupied ones."
    );

    for i in 0..3 {
        // SAFETY: Slots 0..3 are occupied after the rotation.
        unsafe { storage.destroy(i); }
    }
}

#[test]
fn test_realloc() {
    let mut storage = RawStorage::new(2);
    // SAFETY: Slots 0 and 1 are vacant.
    unsafe {
        storage.construct(0, 1_u64);
        storage.construct(1, 2_u64);
    }

    // SAFETY: Growing never deallocates any slots.
    unsafe { storage.realloc(16); }
    assert_eq!(storage.size(), 16);
    // SAFETY: Slots 0 and 1 keep their values when growing.
    assert_eq!(unsafe { storage.slice(0, 2) }, &[1, 2], "Values should survive reallocation.");

    // SAFETY: Slot 1 is occupied.
    unsafe { storage.destroy(1); }
    // SAFETY: Slots 1.. are all vacant.
    unsafe { storage.realloc(1); }
    // SAFETY: Slot 0 is occupied.
    assert_eq!(unsafe { storage.take(0) }, 1);

    // SAFETY: There are no occupied slots left.
    unsafe { storage.realloc(0); }
    assert_eq!(storage.size(), 0);

    assert_panics!({
        let _ = RawStorage::<u64>::new(isize::MAX as usize);
    }, "Layouts larger than isize::MAX should panic.");
    assert!(RawStorage::<u64>::try_new(usize::MAX).is_err());
}

#[test]
fn test_zst_support() {
    let mut storage = RawStorage::new(1_000);
    let old_ptr = storage.as_ptr();

    // SAFETY: Slot 7 is vacant.
    unsafe { storage.construct(7, ZeroSizedType); }
    // SAFETY: Slot 7 is occupied.
    assert_eq!(unsafe { storage.take(7) }, ZeroSizedType);

    let mut storage = RawStorage::<ZeroSizedType>::new(4);
    // SAFETY: No slots are occupied.
    unsafe { storage.realloc(400); }
    assert_eq!(storage.size(), 400);
    assert_eq!(
        storage.as_ptr(),
        old_ptr,
        "Zero-sized types should only ever use dangling pointers."
    );
}

#[test]
#[cfg(debug_assertions)]
fn test_debug_occupancy_checks() {
    assert_panics!({
        let mut storage = RawStorage::new(1);
        // SAFETY: Intentionally incorrect, the second construct should be caught.
        unsafe {
            storage.construct(0, 0);
            storage.construct(0, 1);
        }
    }, "Constructing an occupied slot should be caught.");

    assert_panics!({
        let mut storage = RawStorage::<u8>::new(1);
        // SAFETY: Intentionally incorrect, the slot was never constructed.
        unsafe { storage.destroy(0); }
    }, "Destroying a vacant slot should be caught.");

    assert_panics!({
        let mut storage = RawStorage::new(1);
        // SAFETY: Intentionally leaves the slot occupied.
        unsafe { storage.construct(0, 0_u8); }
        drop(storage);
    }, "Dropping storage with occupied slots should be caught.");
}
