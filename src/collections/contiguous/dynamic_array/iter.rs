use std::iter::FusedIterator;
use std::mem;
use std::slice;

use super::DynamicArray;
use crate::collections::raw::RawStorage;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        // The array is left with no elements, so dropping it only drops the empty storage.
        self.len = 0;

        IntoIter {
            storage: mem::take(&mut self.storage),
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`DynamicArray`] or a
/// [`FixedArray`](crate::collections::contiguous::FixedArray). The slots in `front..back` are
/// occupied.
pub struct IntoIter<T> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.front += 1;
            // SAFETY: Every slot in front..back is occupied, and front is no longer in that range.
            Some(unsafe { self.storage.take(self.front - 1) })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: Every slot in front..back is occupied, and back is no longer in that range.
            Some(unsafe { self.storage.take(self.back) })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: Every slot in front..back is still occupied.
            unsafe { self.storage.destroy(i); }
        }
    }
}

// Borrowed iteration uses the iter and iter_mut definitions provided by Deref<Target=[T]>.
