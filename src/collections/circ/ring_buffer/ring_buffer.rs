use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use derive_more::IsVariant;

use super::{BufferPolicy, CapacityPolicy, Iter, IterMut, OverflowPolicy, ResizePolicy};
use crate::collections::raw::RawStorage;
#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, EmptyCollection, FullCollection, IndexOutOfBounds, InsertError, PushError,
    ZeroCapacity,
};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A circular sequence over a [`RawStorage<T>`], with either a fixed or a self-adjusting
/// capacity.
///
/// Elements occupy the slots from `head` walking forward (and wrapping around) to `tail`. Because
/// `head == tail` could mean either empty or full, a full buffer stores its tail as
/// [`Tail::Full`] instead of an index. A buffer with a capacity of zero is always considered full.
///
/// The behavior of pushes on a full buffer is configured by a [`BufferPolicy`]:
/// - With a [`Dynamic`](CapacityPolicy::Dynamic) capacity, the buffer doubles its capacity (or
///   grows to 1 from 0), and halves it again whenever a removal leaves it exactly a quarter full.
/// - With a [`Fixed`](CapacityPolicy::Fixed) capacity, the push either overwrites the element at
///   the other end ([`ReplaceOnFull`](OverflowPolicy::ReplaceOnFull)) or fails
///   ([`ThrowOnFull`](OverflowPolicy::ThrowOnFull)).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingBuffer.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_front/back` | `O(1)`*, `O(n)` |
/// | `pop_front/back` | `O(1)`*, `O(n)` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `resize` | `O(n)` |
/// | `linearize` | `O(n)` |
///
/// \* Amortized, only when the capacity is dynamic and has to change.
pub struct RingBuffer<T> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) head: usize,
    pub(crate) tail: Tail,
    pub(crate) policy: BufferPolicy,
}

/// The position after the last element of a [`RingBuffer`], or a sentinel for a full one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Tail {
    Full,
    At(usize),
}

impl<T> RingBuffer<T> {
    /// Creates a new, empty RingBuffer with a [`Dynamic`](CapacityPolicy::Dynamic) capacity. No
    /// memory is allocated until the first push.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::new();
    /// assert_eq!(buf.cap(), 0);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.cap(), 2);
    /// ```
    pub fn new() -> RingBuffer<T> {
        Self::with_policy(0, BufferPolicy::dynamic())
    }

    /// Creates a new RingBuffer with exactly `cap` slots and the default policy, a
    /// [`Fixed`](CapacityPolicy::Fixed) capacity that [replaces](OverflowPolicy::ReplaceOnFull)
    /// the oldest element on overflow.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::with_cap(3);
    /// buf.extend(0..5);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    pub fn with_cap(cap: usize) -> RingBuffer<T> {
        Self::with_policy(cap, BufferPolicy::default())
    }

    /// Creates a new RingBuffer with exactly `cap` slots and the provided policy.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_policy(cap: usize, policy: BufferPolicy) -> RingBuffer<T> {
        RingBuffer {
            storage: RawStorage::new(cap),
            head: 0,
            tail: if cap == 0 { Tail::Full } else { Tail::At(0) },
            policy,
        }
    }

    /// Returns the number of elements in the RingBuffer.
    pub const fn len(&self) -> usize {
        match self.tail {
            Tail::Full => self.cap(),
            Tail::At(tail) => (tail + self.cap() - self.head) % self.cap(),
        }
    }

    /// Returns true if the RingBuffer contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if there is no vacant slot left. A RingBuffer with zero capacity is always
    /// full.
    pub const fn is_full(&self) -> bool {
        self.tail.is_full()
    }

    /// Returns the number of slots in the RingBuffer.
    pub const fn cap(&self) -> usize {
        self.storage.size()
    }

    /// Returns the current policy.
    pub const fn policy(&self) -> BufferPolicy {
        self.policy
    }

    /// Updates either half of the policy, leaving a [`None`] half as it is.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::{CapacityPolicy, OverflowPolicy, RingBuffer};
    /// let mut buf = RingBuffer::<u8>::with_cap(4);
    /// buf.set_policy(None, Some(OverflowPolicy::ThrowOnFull));
    /// assert_eq!(buf.policy().capacity, CapacityPolicy::Fixed);
    /// assert_eq!(buf.policy().overflow, OverflowPolicy::ThrowOnFull);
    /// ```
    pub const fn set_policy(
        &mut self,
        capacity: Option<CapacityPolicy>,
        overflow: Option<OverflowPolicy>,
    ) {
        if let Some(capacity) = capacity {
            self.policy.capacity = capacity;
        }
        if let Some(overflow) = overflow {
            self.policy.overflow = overflow;
        }
    }

    /// Pushes `value` onto the back of the RingBuffer, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the RingBuffer is full with a fixed capacity and either has zero capacity or is
    /// configured to [throw on full](OverflowPolicy::ThrowOnFull). See
    /// [`try_push_back`](RingBuffer::try_push_back).
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::with_cap(2);
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.pop_front(), Some(1), "The oldest element should have been replaced.");
    /// ```
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.try_push_back(value).throw()
    }

    /// Pushes `value` onto the back of the RingBuffer, returning an [`Err`] rather than panicking
    /// if there is no room and the policy doesn't allow it to be made.
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
        if self.is_full() {
            self.make_room()?;

            if self.is_full() {
                // Only reachable with a fixed capacity that replaces on full.
                let index = self.head;
                self.head = self.wrap_add(self.head, 1);
                // SAFETY: The buffer is full, so the head slot is occupied.
                unsafe { self.storage.destroy(index); }
                // SAFETY: The slot was just vacated.
                return Ok(unsafe { self.storage.construct(index, value) });
            }
        }

        let Tail::At(index) = self.tail else {
            unreachable!("A buffer that isn't full always has a tail index.")
        };

        let next = self.wrap_add(index, 1);
        self.tail = if next == self.head { Tail::Full } else { Tail::At(next) };

        // SAFETY: The tail slot is always vacant when the buffer isn't full.
        Ok(unsafe { self.storage.construct(index, value) })
    }

    /// Pushes `value` onto the front of the RingBuffer, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the RingBuffer is full with a fixed capacity and either has zero capacity or is
    /// configured to [throw on full](OverflowPolicy::ThrowOnFull). See
    /// [`try_push_front`](RingBuffer::try_push_front).
    pub fn push_front(&mut self, value: T) -> &mut T {
        self.try_push_front(value).throw()
    }

    /// Pushes `value` onto the front of the RingBuffer, returning an [`Err`] rather than
    /// panicking if there is no room and the policy doesn't allow it to be made.
    ///
    /// When the buffer is full and [replaces on full](OverflowPolicy::ReplaceOnFull), the element
    /// at the back is the one overwritten.
    pub fn try_push_front(&mut self, value: T) -> Result<&mut T, PushError> {
        if self.is_full() {
            self.make_room()?;

            if self.is_full() {
                // The back element sits just before head, which becomes the new head.
                let index = self.wrap_sub(self.head, 1);
                self.head = index;
                // SAFETY: The buffer is full, so the back slot is occupied.
                unsafe { self.storage.destroy(index); }
                // SAFETY: The slot was just vacated.
                return Ok(unsafe { self.storage.construct(index, value) });
            }
        }

        let index = self.wrap_sub(self.head, 1);
        self.head = index;
        if self.tail == Tail::At(index) {
            self.tail = Tail::Full;
        }

        // SAFETY: The buffer wasn't full, so the slot before head is vacant.
        Ok(unsafe { self.storage.construct(index, value) })
    }

    /// Removes the first element and returns it, if the RingBuffer isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf: RingBuffer<_> = (0..3).collect();
    /// assert_eq!(buf.pop_front(), Some(0));
    /// assert_eq!(buf.pop_front(), Some(1));
    /// assert_eq!(buf.pop_front(), Some(2));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.take_front()?;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the first element and returns it, or an [`Err`] if the RingBuffer is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes the last element and returns it, if the RingBuffer isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.take_back()?;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the last element and returns it, or an [`Err`] if the RingBuffer is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len().checked_sub(1)?)
    }

    /// Returns a reference to the element at logical position `index`, counting from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a mutable reference to the element at logical position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a reference to the element at logical position `index`, or an [`Err`] if it is out
    /// of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is less than len, so its physical slot is occupied.
        Ok(unsafe { self.storage.at(self.physical(index)) })
    }

    /// Returns a mutable reference to the element at logical position `index`, or an [`Err`] if
    /// it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let slot = self.physical(index);
        // SAFETY: index is less than len, so its physical slot is occupied.
        Ok(unsafe { self.storage.at_mut(slot) })
    }

    /// Inserts `value` at logical position `index`, shifting whichever side of it is shorter.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or if the buffer is full and has a fixed
    /// capacity. See [`try_insert`](RingBuffer::try_insert).
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf: RingBuffer<_> = (0..4).collect();
    /// buf.insert(1, 10);
    /// buf.insert(4, 20);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [0, 10, 1, 2, 20, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at logical position `index`, returning an [`Err`] rather than panicking.
    ///
    /// Unlike pushes, an insertion never overwrites anything: a full buffer with a fixed capacity
    /// rejects it regardless of the [`OverflowPolicy`].
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, InsertError> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }

        if self.is_full() {
            match self.policy.capacity {
                CapacityPolicy::Dynamic => self.grow(),
                CapacityPolicy::Fixed if self.cap() == 0 => return Err(ZeroCapacity.into()),
                CapacityPolicy::Fixed => return Err(FullCollection { cap: self.cap() }.into()),
            }
        }

        let Tail::At(tail) = self.tail else {
            unreachable!("A buffer that isn't full always has a tail index.")
        };

        if index < len - index {
            // Move the front part one slot towards the front.
            let new_head = self.wrap_sub(self.head, 1);
            for i in 0..index {
                let src = self.physical(i);
                // SAFETY: src is occupied and the slot before it is either the vacant slot before
                // head or was vacated by the previous iteration.
                unsafe { self.storage.relocate(src, self.wrap_sub(src, 1)); }
            }
            self.head = new_head;
            if tail == new_head {
                self.tail = Tail::Full;
            }
        } else {
            // Move the back part one slot towards the back.
            for i in (index..len).rev() {
                let src = self.physical(i);
                // SAFETY: src is occupied and the slot after it is either the vacant tail slot or
                // was vacated by the previous iteration.
                unsafe { self.storage.relocate(src, self.wrap_add(src, 1)); }
            }
            let next = self.wrap_add(tail, 1);
            self.tail = if next == self.head { Tail::Full } else { Tail::At(next) };
        }

        let slot = self.physical(index);
        // SAFETY: The slot at index has just been vacated by one of the shifts above.
        Ok(unsafe { self.storage.construct(slot, value) })
    }

    /// Removes and returns the element at logical position `index`, shifting whichever side of it
    /// is shorter to close the gap.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_remove`](RingBuffer::try_remove).
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at logical position `index`, returning an [`Err`] rather
    /// than panicking if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len();

        // SAFETY: index is less than len, so its physical slot is occupied.
        let value = unsafe { self.storage.take(self.physical(index)) };

        if index < len - 1 - index {
            // Move the front part one slot towards the back.
            for i in (0..index).rev() {
                let src = self.physical(i);
                // SAFETY: src is occupied and the slot after it was just vacated.
                unsafe { self.storage.relocate(src, self.wrap_add(src, 1)); }
            }
            if self.is_full() {
                self.tail = Tail::At(self.head);
            }
            self.head = self.wrap_add(self.head, 1);
        } else {
            // Move the back part one slot towards the front.
            for i in index + 1..len {
                let src = self.physical(i);
                // SAFETY: src is occupied and the slot before it was just vacated.
                unsafe { self.storage.relocate(src, self.wrap_sub(src, 1)); }
            }
            self.tail = Tail::At(self.physical(len - 1));
        }

        self.shrink_if_sparse();
        Ok(value)
    }

    /// Reallocates the RingBuffer with exactly `new_cap` slots, moving its elements so that the
    /// first one ends up in the first slot. If `new_cap` is less than the current length, the
    /// provided [`ResizePolicy`] decides which elements are dropped.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::{ResizePolicy, RingBuffer};
    /// let mut buf: RingBuffer<_> = (0..6).collect();
    /// buf.resize(4, ResizePolicy::DiscardNew);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    /// buf.resize(2, ResizePolicy::DiscardOld);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn resize(&mut self, new_cap: usize, policy: ResizePolicy) {
        if new_cap == self.cap() {
            return;
        }

        let len = self.len();
        let keep = cmp::min(len, new_cap);
        let skip = match policy {
            ResizePolicy::DiscardOld => len - keep,
            ResizePolicy::DiscardNew => 0,
        };

        let mut storage = RawStorage::new(new_cap);
        for i in 0..len {
            let slot = self.physical(i);
            if (skip..skip + keep).contains(&i) {
                // SAFETY: slot is occupied in the old storage and i - skip is a vacant slot of the
                // new storage, filled in order.
                unsafe { storage.construct(i - skip, self.storage.take(slot)); }
            } else {
                // SAFETY: slot is occupied, and won't be visited again.
                unsafe { self.storage.destroy(slot); }
            }
        }

        // The old storage is entirely vacant now.
        self.storage = storage;
        self.head = 0;
        self.tail = if keep == new_cap { Tail::Full } else { Tail::At(keep) };
    }

    /// Rotates the underlying storage so that the first element is stored in the first slot,
    /// making the elements contiguous. The capacity, length and order of elements are unchanged.
    /// Returns the elements as a single mutable slice.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::with_cap(4);
    /// buf.extend(0..6);
    /// assert_eq!(buf.linearize(), &[2, 3, 4, 5]);
    /// ```
    pub fn linearize(&mut self) -> &mut [T] {
        if self.head != 0 {
            let cap = self.cap();
            self.storage.rotate_left(self.head);
            if let Tail::At(tail) = self.tail {
                self.tail = Tail::At((tail + cap - self.head) % cap);
            }
            self.head = 0;
        }

        let len = self.len();
        // SAFETY: With a head of 0, the first len slots are exactly the occupied ones.
        unsafe { self.storage.slice_mut(0, len) }
    }

    /// Returns true if the elements are already stored contiguously from the first slot.
    pub const fn is_linearized(&self) -> bool {
        self.head == 0
    }

    /// Returns the elements as two slices in logical order. The second slice is only non-empty
    /// when the elements wrap around the end of the storage.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (first, second) = self.slice_lens();
        // SAFETY: The first run starts at head and the second at 0, together covering exactly the
        // occupied slots without overlapping.
        unsafe { (self.storage.slice(self.head, first), self.storage.slice(0, second)) }
    }

    /// Returns the elements as two mutable slices in logical order.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (first, second) = self.slice_lens();
        let ptr = self.storage.as_mut_ptr();
        // SAFETY: The runs head..head + first and 0..second are occupied and never overlap, so
        // they can be borrowed mutably at the same time.
        unsafe {
            (
                slice::from_raw_parts_mut(ptr.add(self.head), first),
                slice::from_raw_parts_mut(ptr, second),
            )
        }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for i in 0..self.len() {
            // SAFETY: Every logical position below len maps to an occupied slot.
            unsafe { self.storage.destroy(self.physical(i)); }
        }
        self.head = 0;
        self.tail = if self.cap() == 0 { Tail::Full } else { Tail::At(0) };
    }

    /// Swaps the contents, capacity and policy of two RingBuffers.
    pub const fn swap(&mut self, other: &mut RingBuffer<T>) {
        mem::swap(self, other);
    }

    /// Returns an iterator over references to every element, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns an iterator over mutable references to every element, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Creates a linearized copy of the RingBuffer with the same capacity, using the provided
    /// policy or keeping the current one.
    pub fn linearize_copy(&self, policy: Option<BufferPolicy>) -> RingBuffer<T> {
        let mut copy = RingBuffer::with_policy(self.cap(), policy.unwrap_or(self.policy));
        for (i, value) in self.iter().enumerate() {
            // SAFETY: The copy has the same capacity and is filled in order from slot 0.
            unsafe { copy.storage.construct(i, value.clone()); }
        }
        copy.tail = if self.is_full() { Tail::Full } else { Tail::At(self.len()) };
        copy
    }
}

impl<T> RingBuffer<T> {
    /// Makes room in a full buffer according to the policy. If the buffer is still full
    /// afterwards, the policy is a fixed capacity that replaces on full.
    pub(crate) fn make_room(&mut self) -> Result<(), PushError> {
        match self.policy {
            BufferPolicy { capacity: CapacityPolicy::Dynamic, .. } => {
                self.grow();
                Ok(())
            },
            _ if self.cap() == 0 => Err(ZeroCapacity.into()),
            BufferPolicy { overflow: OverflowPolicy::ThrowOnFull, .. } => {
                Err(FullCollection { cap: self.cap() }.into())
            },
            BufferPolicy { overflow: OverflowPolicy::ReplaceOnFull, .. } => Ok(()),
        }
    }

    /// Doubles the capacity, or sets it to 1 if it was 0.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => 1,
            cap => cap.checked_mul(2).ok_or(CapacityOverflow).throw(),
        };
        self.resize(new_cap, ResizePolicy::DiscardOld);
    }

    /// Halves a dynamic capacity once the buffer is exactly a quarter full. A single slot is never
    /// given up.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let cap = self.cap();
        if self.policy.capacity.is_dynamic() && cap > 1 && self.len() == cap / 4 {
            self.resize(cap / 2, ResizePolicy::DiscardOld);
        }
    }

    /// Removes the first element without ever changing the capacity.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let index = self.head;
        if self.is_full() {
            self.tail = Tail::At(index);
        }
        self.head = self.wrap_add(index, 1);
        // SAFETY: The buffer isn't empty, so the old head slot is occupied.
        Some(unsafe { self.storage.take(index) })
    }

    /// Removes the last element without ever changing the capacity.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let index = self.physical(self.len() - 1);
        self.tail = Tail::At(index);
        // SAFETY: The buffer isn't empty, so the slot of the last element is occupied.
        Some(unsafe { self.storage.take(index) })
    }

    /// Converts a logical position into a slot index. Only valid with a non-zero capacity.
    pub(crate) const fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    pub(crate) const fn wrap_add(&self, index: usize, offset: usize) -> usize {
        (index + offset) % self.cap()
    }

    pub(crate) const fn wrap_sub(&self, index: usize, offset: usize) -> usize {
        (index + self.cap() - offset) % self.cap()
    }

    /// The lengths of the run starting at head and the wrapped run starting at 0.
    pub(crate) const fn slice_lens(&self) -> (usize, usize) {
        let len = self.len();
        let first = if len < self.cap() - self.head { len } else { self.cap() - self.head };
        (first, len - first)
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    /// Pushes every item onto the back, following the current policy.
    ///
    /// # Panics
    /// Panics if a push fails, see [`push_back`](RingBuffer::push_back).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    /// Collects into a RingBuffer with a [`Dynamic`](CapacityPolicy::Dynamic) capacity.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buf = RingBuffer::with_policy(iter.size_hint().0, BufferPolicy::dynamic());
        buf.extend(iter);
        buf
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        self.linearize_copy(None)
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: Debug> Display for RingBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
