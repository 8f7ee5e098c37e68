use std::mem;
use std::slice;

use super::FixedArray;
use crate::collections::contiguous::dynamic_array::IntoIter;

impl<T> IntoIterator for FixedArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();

        // Taking the storage leaves the array empty, so dropping it destroys nothing.
        IntoIter {
            storage: mem::take(&mut self.storage),
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
