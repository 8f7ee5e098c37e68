use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Blocks, BlocksMut, Iter, IterMut};
use crate::collections::circ::{BufferPolicy, OverflowPolicy, RingBuffer};
use crate::collections::linked::node::{Link, NodeRef};
#[doc(inline)]
pub use crate::util::error::{BlockSizeTooSmall, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

pub(crate) type BlockRef<T> = NodeRef<RingBuffer<T>>;

/// The smallest block size that keeps the rebalancing bounds meaningful.
pub const MIN_BLOCK_SIZE: usize = 3;

/// The block size used by [`SegmentedList::new`].
pub const DEFAULT_BLOCK_SIZE: usize = MIN_BLOCK_SIZE;

/// A doubly linked list of blocks, where each block is a fixed capacity [`RingBuffer`] holding up
/// to `block_size + 1` elements.
///
/// Every block other than the last holds between `block_size - 1` and `block_size + 1` elements.
/// Indexed operations walk block by block from the nearer end, then work within a single block,
/// so they cost `O(block_size + n / block_size)` instead of `O(n)`.
///
/// Insertion and removal keep the block bounds by moving elements between neighbouring blocks:
/// - Shift: a block within `block_size` steps has room (or spare elements), so one element is
///   passed along each block in between.
/// - Spread: `block_size` consecutive blocks are full, so a new block is added after them and
///   their contents are spread over one more block.
/// - Gather: `block_size` consecutive blocks are at their minimum, so their contents are
///   gathered into one fewer block.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SegmentedList.
/// - `b`: The block size.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `push_front` | `O(b)`* |
/// | `pop_front/back` | `O(b)`* |
/// | `get` | `O(1 + min(i, n - i) / b)` |
/// | `insert` | `O(b + min(i, n - i) / b)`* |
/// | `remove` | `O(b + min(i, n - i) / b)`* |
///
/// \* Amortized over a sequence of insertions and removals.
pub struct SegmentedList<T> {
    pub(crate) head: Link<RingBuffer<T>>,
    pub(crate) tail: Link<RingBuffer<T>>,
    pub(crate) len: usize,
    pub(crate) block_size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> SegmentedList<T> {
    /// Creates a new, empty SegmentedList with a block size of [`DEFAULT_BLOCK_SIZE`]. No blocks
    /// are allocated until the first element is added.
    pub const fn new() -> SegmentedList<T> {
        SegmentedList {
            head: None,
            tail: None,
            len: 0,
            block_size: DEFAULT_BLOCK_SIZE,
            _phantom: PhantomData,
        }
    }

    /// Creates a new, empty SegmentedList with the provided block size.
    ///
    /// # Panics
    /// Panics if `block_size` is less than [`MIN_BLOCK_SIZE`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::segmented::SegmentedList;
    /// let list: SegmentedList<u8> = SegmentedList::with_block_size(16);
    /// assert_eq!(list.block_size(), 16);
    /// assert!(SegmentedList::<u8>::try_with_block_size(2).is_err());
    /// ```
    pub fn with_block_size(block_size: usize) -> SegmentedList<T> {
        Self::try_with_block_size(block_size).throw()
    }

    /// Creates a new, empty SegmentedList with the provided block size, returning an [`Err`] if
    /// it is less than [`MIN_BLOCK_SIZE`].
    pub const fn try_with_block_size(
        block_size: usize,
    ) -> Result<SegmentedList<T>, BlockSizeTooSmall> {
        if block_size < MIN_BLOCK_SIZE {
            return Err(BlockSizeTooSmall {
                size: block_size,
                min: MIN_BLOCK_SIZE,
            });
        }

        Ok(SegmentedList {
            head: None,
            tail: None,
            len: 0,
            block_size,
            _phantom: PhantomData,
        })
    }

    /// Returns the length of the SegmentedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SegmentedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the nominal block size. Each block can hold one more element than this.
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head?.value().front()
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        block_mut(self.head?).front_mut()
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail?.value().back()
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        block_mut(self.tail?).back_mut()
    }

    /// Adds the provided element to the back of the list, returning a reference to it. Appending
    /// only ever touches the last block.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::segmented::SegmentedList;
    /// let mut list = SegmentedList::new();
    /// for i in 0..10 {
    ///     list.push_back(i);
    /// }
    /// assert_eq!(list.blocks().map(|block| block.len()).collect::<Vec<_>>(), [4, 4, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) -> &mut T {
        let tail = match self.tail {
            Some(tail) if !tail.value().is_full() => tail,
            Some(tail) => self.insert_block_after(tail),
            None => {
                let node = NodeRef::unlinked(self.new_block());
                self.head = Some(node);
                self.tail = Some(node);
                node
            },
        };

        self.len += 1;
        block_mut(tail).push_back(value)
    }

    /// Adds the provided element to the front of the list, returning a reference to it.
    pub fn push_front(&mut self, value: T) -> &mut T {
        self.insert(0, value)
    }

    /// Removes the first element and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front().ok()
    }

    /// Removes the first element and returns it, or an [`Err`] if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        // SAFETY: The list isn't empty, so index 0 is in bounds.
        Ok(unsafe { self.try_remove(0).ok().unreachable() })
    }

    /// Removes the last element and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back().ok()
    }

    /// Removes the last element and returns it, or an [`Err`] if the list is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        let last = self.len.checked_sub(1).ok_or(EmptyCollection)?;
        // SAFETY: The list isn't empty, so the last index is in bounds.
        Ok(unsafe { self.try_remove(last).ok().unreachable() })
    }

    /// Returns a reference to the element at the provided `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is
    /// out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let (node, offset) = self.checked_locate(index)?;
        Ok(&node.value()[offset])
    }

    /// Returns a mutable reference to the element at the provided `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] if
    /// it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let (node, offset) = self.checked_locate(index)?;
        Ok(&mut block_mut(node)[offset])
    }

    /// Inserts `value` at `index`, so that it is preceded by `index` elements.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::segmented::SegmentedList;
    /// let mut list: SegmentedList<_> = (0..8).collect();
    /// list.insert(3, 100);
    /// list.insert(0, 200);
    /// assert_eq!(list[0], 200);
    /// assert_eq!(list[4], 100);
    /// assert_eq!(list.len(), 10);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is
    /// greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        if index == self.len {
            return Ok(self.push_back(value));
        }

        let (node, offset) = self.locate(index);

        // Look for a block with room, stepping over at most block_size full ones.
        let mut steps = 0;
        let mut reached = Some(node);
        while steps < self.block_size {
            match reached {
                Some(current) if current.value().is_full() => {
                    reached = *current.next();
                    steps += 1;
                },
                _ => break,
            }
        }

        match reached {
            None => {
                // Every block up to the end is full.
                // SAFETY: The list isn't empty, because index is less than len.
                let tail = unsafe { self.tail.unreachable() };
                let new_tail = self.insert_block_after(tail);
                self.shift_back(new_tail, node);
            },
            Some(until) if steps == self.block_size => self.spread(node, until),
            Some(until) => self.shift_back(until, node),
        }

        self.len += 1;
        Ok(block_mut(node).insert(offset, value))
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking
    /// if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let (node, offset) = self.checked_locate(index)?;
        let min = self.block_size - 1;

        // Look for a block with spare elements, stepping over at most block_size minimal ones.
        let mut steps = 0;
        let mut reached = Some(node);
        while steps < self.block_size {
            match reached {
                Some(current) if current.value().len() == min => {
                    reached = *current.next();
                    steps += 1;
                },
                _ => break,
            }
        }

        if steps == self.block_size && reached.is_some() {
            self.gather(node);
        }

        let value = block_mut(node).remove(offset);
        self.len -= 1;

        // Pass one element back along each block that is now under its minimum.
        let mut current = node;
        while current.value().len() < min {
            let Some(next) = *current.next() else { break };
            // SAFETY: Only the last block can be empty, and next has room for one more.
            unsafe { move_front_to_back(next, current) };
            current = next;
        }

        if current.value().is_empty() {
            self.remove_block(current);
        }

        Ok(value)
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning an [`Err`] rather than
    /// panicking if it is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Drops every element and frees every block.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        while let Some(node) = curr {
            curr = *node.next();
            drop(node.take_node());
        }
        self.tail = None;
        self.len = 0;
    }

    /// Swaps the contents of two SegmentedLists, including their block sizes.
    pub const fn swap(&mut self, other: &mut SegmentedList<T>) {
        mem::swap(self, other);
    }

    /// Returns an iterator over the blocks of the list, from front to back.
    pub fn blocks(&self) -> Blocks<'_, T> {
        Blocks {
            front: self.head,
            back: self.tail,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.blocks().flatten(),
            len: self.len,
        }
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut {
            inner: self.blocks_mut().flatten(),
            len,
        }
    }
}

impl<T> SegmentedList<T> {
    pub(crate) fn new_block(&self) -> RingBuffer<T> {
        RingBuffer::with_policy(
            self.block_size + 1,
            BufferPolicy::fixed(OverflowPolicy::ThrowOnFull),
        )
    }

    pub(crate) const fn blocks_mut(&mut self) -> BlocksMut<'_, T> {
        BlocksMut {
            front: self.head,
            back: self.tail,
            _phantom: PhantomData,
        }
    }

    /// Finds the block holding `index` and the offset of the element within it, walking from
    /// the nearer end. `index` must be in bounds.
    pub(crate) fn locate(&self, index: usize) -> (BlockRef<T>, usize) {
        if index <= self.len / 2 {
            // SAFETY: The list isn't empty when index is in bounds.
            let mut node = unsafe { self.head.unreachable() };
            let mut offset = index;
            while offset >= node.value().len() {
                offset -= node.value().len();
                // SAFETY: offset is still within the elements following node.
                node = unsafe { node.next().unreachable() };
            }
            (node, offset)
        } else {
            // SAFETY: The list isn't empty when index is in bounds.
            let mut node = unsafe { self.tail.unreachable() };
            let mut start = self.len - node.value().len();
            while index < start {
                // SAFETY: index is before the start of node, so node has a predecessor.
                node = unsafe { node.prev().unreachable() };
                start -= node.value().len();
            }
            (node, index - start)
        }
    }

    pub(crate) fn checked_locate(
        &self,
        index: usize,
    ) -> Result<(BlockRef<T>, usize), IndexOutOfBounds> {
        if index < self.len {
            Ok(self.locate(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Passes one element from each block to the next, starting at `until` and walking back to
    /// `from`. `until` must have room and be reachable from `from`.
    pub(crate) fn shift_back(&mut self, from: BlockRef<T>, until: BlockRef<T>) {
        let mut current = from;
        while current != until {
            // SAFETY: until precedes current.
            let prev = unsafe { current.prev().unreachable() };
            // SAFETY: prev is full and current has room.
            unsafe { move_back_to_front(prev, current) };
            current = prev;
        }
    }

    /// Adds an empty block before `until`, which is `block_size` blocks after `from`, then fills
    /// each block from the new one back to `from` with exactly `block_size` elements.
    pub(crate) fn spread(&mut self, from: BlockRef<T>, until: BlockRef<T>) {
        let mut current = self.insert_block_before(until);
        while current != from {
            // SAFETY: from precedes current.
            let prev = unsafe { current.prev().unreachable() };
            while current.value().len() < self.block_size {
                // SAFETY: Every block between from and the new one started full, so prev always
                // has more elements than current needs.
                unsafe { move_back_to_front(prev, current) };
            }
            current = prev;
        }
    }

    /// Fills each of the `block_size - 1` blocks starting at `from` up to `block_size` elements,
    /// taking them from the blocks that follow, then frees the block left empty at the end.
    pub(crate) fn gather(&mut self, from: BlockRef<T>) {
        let mut current = from;
        for _ in 1..self.block_size {
            // SAFETY: block_size minimal blocks follow from.
            let next = unsafe { current.next().unreachable() };
            while current.value().len() < self.block_size {
                // SAFETY: The minimal blocks hold exactly enough elements to fill all but one.
                unsafe { move_front_to_back(next, current) };
            }
            current = next;
        }
        debug_assert!(current.value().is_empty());
        self.remove_block(current);
    }

    pub(crate) fn insert_block_after(&mut self, node: BlockRef<T>) -> BlockRef<T> {
        let new = NodeRef::unlinked(self.new_block());
        if let Some(next) = *node.next() {
            new.link_to(next);
        }
        node.link_to(new);
        if self.tail == Some(node) {
            self.tail = Some(new);
        }
        new
    }

    pub(crate) fn insert_block_before(&mut self, node: BlockRef<T>) -> BlockRef<T> {
        let new = NodeRef::unlinked(self.new_block());
        match *node.prev() {
            Some(prev) => prev.link_to(new),
            None => self.head = Some(new),
        }
        new.link_to(node);
        new
    }

    pub(crate) fn remove_block(&mut self, node: BlockRef<T>) {
        if self.head == Some(node) {
            self.head = *node.next();
        }
        if self.tail == Some(node) {
            self.tail = *node.prev();
        }
        node.unlink();
        drop(node.take_node());
    }

    /// Checks the links, block capacities and block occupancy bounds.
    #[cfg(test)]
    pub(crate) fn verify_blocks(&self) {
        let Some(head) = self.head else {
            assert!(self.tail.is_none(), "An empty list should have no tail.");
            assert_eq!(self.len, 0, "A list without blocks should be empty.");
            return;
        };

        assert!(head.prev().is_none(), "The head should have no previous block.");
        let mut count = 0;
        let mut curr = head;
        loop {
            let block = curr.value();
            count += block.len();
            assert_eq!(block.cap(), self.block_size + 1, "Every block should hold b + 1.");
            match curr.next() {
                Some(next) => {
                    assert!(*next.prev() == Some(curr), "Every link should be mirrored.");
                    assert!(
                        block.len() + 1 >= self.block_size,
                        "Interior blocks should hold at least b - 1 elements, found {}.",
                        block.len(),
                    );
                    curr = *next;
                },
                None => break,
            }
        }
        assert!(self.tail == Some(curr), "Following next links should end at the tail.");
        assert!(!curr.value().is_empty(), "The last block should never be empty.");
        assert_eq!(count, self.len, "The stored length should match the block contents.");
    }
}

/// Borrows the block owned by `node`. Only used on blocks of a list that is mutably borrowed.
fn block_mut<'a, T>(mut node: BlockRef<T>) -> &'a mut RingBuffer<T> {
    node.value_mut()
}

/// Moves the last element of `from` onto the front of `into`.
///
/// # Safety
/// `from` must not be empty, and must be a different block to `into`.
unsafe fn move_back_to_front<T>(from: BlockRef<T>, into: BlockRef<T>) {
    // SAFETY: The caller guarantees that from has an element to take.
    let value = unsafe { block_mut(from).pop_back().unreachable() };
    block_mut(into).push_front(value);
}

/// Moves the first element of `from` onto the back of `into`.
///
/// # Safety
/// `from` must not be empty, and must be a different block to `into`.
unsafe fn move_front_to_back<T>(from: BlockRef<T>, into: BlockRef<T>) {
    // SAFETY: The caller guarantees that from has an element to take.
    let value = unsafe { block_mut(from).pop_front().unreachable() };
    block_mut(into).push_back(value);
}

impl<T> Index<usize> for SegmentedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for SegmentedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for SegmentedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for SegmentedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SegmentedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for SegmentedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SegmentedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SegmentedList<T> {
    fn clone(&self) -> Self {
        let mut list = SegmentedList {
            head: None,
            tail: None,
            len: self.len,
            block_size: self.block_size,
            _phantom: PhantomData,
        };

        for block in self.blocks() {
            let node = NodeRef::unlinked(block.clone());
            match list.tail {
                Some(tail) => tail.link_to(node),
                None => list.head = Some(node),
            }
            list.tail = Some(node);
        }

        list
    }
}

impl<T: PartialEq> PartialEq for SegmentedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SegmentedList<T> {}

impl<T: Hash> Hash for SegmentedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for SegmentedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("block_size", &self.block_size)
            .field("blocks", &DebugEntries(self.blocks().map(|block| DebugEntries(block.iter()))))
            .finish()
    }
}

impl<T: Debug> Display for SegmentedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
