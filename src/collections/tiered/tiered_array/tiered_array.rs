use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut};
use crate::collections::contiguous::DynamicArray;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A sequence stored as a table of blocks with capacities 1, 2, 3 and so on, so that the table
/// only needs `O(√n)` entries and at most `O(√n)` slots are ever unused.
///
/// Every block is full except for the second to last (the "near-empty" block), and the last block
/// is always an empty spare. A TieredArray with no elements has no blocks at all. Because of this
/// layout, the length is computed from the block count and the occupancy of the near-empty block
/// instead of being stored.
///
/// Inserting or removing in the middle moves a single element across each of the following
/// blocks, rather than shifting every following element like a [`DynamicArray`] would.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the TieredArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(√n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(√n)` |
/// | `remove` | `O(√n)` |
///
/// \* Amortized, appending a block occasionally reallocates the block table.
pub struct TieredArray<T> {
    pub(crate) blocks: DynamicArray<DynamicArray<T>>,
}

impl<T> TieredArray<T> {
    /// Creates a new, empty TieredArray without allocating.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::tiered::TieredArray;
    /// let arr: TieredArray<u8> = TieredArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.block_count(), 0);
    /// ```
    pub fn new() -> TieredArray<T> {
        TieredArray {
            blocks: DynamicArray::new(),
        }
    }

    /// Creates a new, empty TieredArray with room in its block table for every block needed to
    /// hold `cap` elements. Blocks themselves are still only allocated as they're needed.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> TieredArray<T> {
        let blocks = match cap.checked_sub(1) {
            Some(last) => Self::element_index(last).0 + 2,
            None => 0,
        };

        TieredArray {
            blocks: DynamicArray::with_cap(blocks),
        }
    }

    /// Maps a position onto the index of the block containing it and the offset within that
    /// block, by inverting the triangular numbers. The square root is computed exactly on
    /// integers, so positions on block boundaries are never misplaced.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::tiered::TieredArray;
    /// assert_eq!(TieredArray::<()>::element_index(0), (0, 0));
    /// assert_eq!(TieredArray::<()>::element_index(2), (1, 1));
    /// assert_eq!(TieredArray::<()>::element_index(3), (2, 0));
    /// assert_eq!(TieredArray::<()>::element_index(9), (3, 3));
    /// ```
    pub const fn element_index(pos: usize) -> (usize, usize) {
        // Block b holds the positions b(b+1)/2 up to (b+1)(b+2)/2 - 1, which rearranges to the
        // largest b with (2b+1)^2 <= 8pos+1.
        let root = (8 * pos as u128 + 1).isqrt() as usize;
        let block = (root - 1) / 2;
        (block, pos - Self::block_start(block))
    }

    /// Returns the number of elements in the TieredArray.
    pub fn len(&self) -> usize {
        match self.blocks.len().checked_sub(1) {
            None | Some(0) => 0,
            Some(full) => Self::block_start(full) - (full - self.near_empty().len()),
        }
    }

    /// Returns true if the TieredArray contains no elements.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the total number of slots across every block, including the spare.
    pub fn cap(&self) -> usize {
        self.blocks.iter().map(DynamicArray::cap).sum()
    }

    /// Returns the number of blocks, including the empty spare at the end.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns a read-only view of every block, in order.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::tiered::TieredArray;
    /// let arr: TieredArray<_> = (0..5).collect();
    /// let blocks: Vec<&[i32]> = arr.blocks().iter().map(|b| &**b).collect();
    /// assert_eq!(blocks, [&[0][..], &[1, 2][..], &[3, 4][..], &[][..]]);
    /// ```
    pub fn blocks(&self) -> &[DynamicArray<T>] {
        &self.blocks
    }

    /// Pushes `value` onto the end of the TieredArray, returning a reference to it.
    pub fn push(&mut self, value: T) -> &mut T {
        let len = self.len();
        self.insert(len, value)
    }

    /// Removes the last element and returns it, if the TieredArray isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.try_remove(last).ok()
    }

    /// Removes the last element and returns it, or an [`Err`] if the TieredArray is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    /// Inserts `value` at `index`, moving one element from each following block into the next.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::tiered::TieredArray;
    /// let mut arr: TieredArray<_> = (0..4).collect();
    /// arr.insert(0, 10);
    /// arr.insert(3, 20);
    /// assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [10, 0, 1, 20, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is
    /// greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        if self.blocks.is_empty() {
            self.grow();
            self.grow();
        } else if self.near_empty().len() == self.blocks.len() - 1 {
            self.grow();
        }

        let (block, offset) = Self::element_index(index);
        for i in (block + 1..self.blocks.len() - 1).rev() {
            // SAFETY: Every block before the near-empty one is full, so i - 1 has an element.
            let moved = unsafe { self.blocks[i - 1].pop().unreachable() };
            self.blocks[i].insert(0, moved);
        }

        Ok(self.blocks[block].insert(offset, value))
    }

    /// Removes and returns the element at `index`, moving the first element of each following
    /// block onto the end of the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let (block, offset) = Self::element_index(index);
        let value = self.blocks[block].remove(offset);
        for i in block..self.blocks.len() - 2 {
            let moved = self.blocks[i + 1].remove(0);
            self.blocks[i].push(moved);
        }

        if self.near_empty().is_empty() {
            if self.blocks.len() > 2 {
                self.shrink();
            } else {
                self.blocks.clear();
            }
        }

        Ok(value)
    }

    /// Returns a reference to the element at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        let (block, offset) = Self::element_index(index);
        Ok(&self.blocks[block][offset])
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if it is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        let (block, offset) = Self::element_index(index);
        Ok(&mut self.blocks[block][offset])
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
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Drops every element and block, keeping the capacity of the block table.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Swaps the contents of two TieredArrays without moving any elements.
    pub const fn swap(&mut self, other: &mut TieredArray<T>) {
        mem::swap(self, other);
    }

    /// Returns an iterator over references to every element, in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.blocks.iter().flatten(),
            len: self.len(),
        }
    }

    /// Returns an iterator over mutable references to every element, in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len();
        IterMut {
            inner: self.blocks.iter_mut().flatten(),
            len,
        }
    }

    /// Checks the block layout: block i has capacity i + 1, every block before the near-empty one
    /// is full, the near-empty block has at least one element and the last block is empty.
    #[cfg(test)]
    pub(crate) fn verify_blocks(&self) -> bool {
        let count = self.blocks.len();
        if count == 0 {
            return true;
        }

        count >= 2
            && self.blocks.iter().enumerate().all(|(i, block)| block.cap() == i + 1)
            && self.blocks[..count - 2].iter().enumerate().all(|(i, block)| block.len() == i + 1)
            && !self.near_empty().is_empty()
            && self.blocks[count - 1].is_empty()
    }

    /// The first position stored in `block`. Halving the even factor first keeps the product in
    /// range for every block that starts at or below `usize::MAX`.
    pub(crate) const fn block_start(block: usize) -> usize {
        if block % 2 == 0 {
            block / 2 * (block + 1)
        } else {
            (block + 1) / 2 * block
        }
    }

    /// The second to last block, which is the only one that can be partially full. Only valid
    /// when there are blocks.
    pub(crate) fn near_empty(&self) -> &DynamicArray<T> {
        &self.blocks[self.blocks.len() - 2]
    }

    /// Appends an empty block sized to the new block count.
    pub(crate) fn grow(&mut self) {
        let cap = self.blocks.len() + 1;
        self.blocks.push(DynamicArray::with_cap(cap));
    }

    /// Drops the empty spare block, leaving the emptied near-empty block as the new spare.
    pub(crate) fn shrink(&mut self) {
        debug_assert!(self.blocks.back().is_some_and(DynamicArray::is_empty));
        self.blocks.pop();
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}

impl<T> Index<usize> for TieredArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for TieredArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for TieredArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for TieredArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = TieredArray::with_cap(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl<T> Default for TieredArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TieredArray<T> {
    fn clone(&self) -> Self {
        TieredArray {
            blocks: self.blocks.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TieredArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TieredArray<T> {}

impl<T: Hash> Hash for TieredArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for TieredArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TieredArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("blocks", &DebugEntries(self.blocks.iter().map(|block| &**block)))
            .finish()
    }
}

impl<T: Debug> Display for TieredArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
