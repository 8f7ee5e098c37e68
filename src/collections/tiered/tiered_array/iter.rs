use std::iter::{Flatten, FusedIterator};
use std::slice;

use super::TieredArray;
use crate::collections::contiguous::DynamicArray;
use crate::collections::contiguous::dynamic_array::IntoIter as BlockIntoIter;

impl<T> IntoIterator for TieredArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter {
            inner: self.blocks.into_iter().flatten(),
            len,
        }
    }
}

impl<'a, T> IntoIterator for &'a TieredArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TieredArray<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`TieredArray`], block by block.
pub struct IntoIter<T> {
    pub(crate) inner: Flatten<BlockIntoIter<DynamicArray<T>>>,
    pub(crate) len: usize,
}

/// A type for borrowed iteration over a [`TieredArray`].
pub struct Iter<'a, T> {
    pub(crate) inner: Flatten<slice::Iter<'a, DynamicArray<T>>>,
    pub(crate) len: usize,
}

/// A type for mutable borrowed iteration over a [`TieredArray`].
pub struct IterMut<'a, T> {
    pub(crate) inner: Flatten<slice::IterMut<'a, DynamicArray<T>>>,
    pub(crate) len: usize,
}

// Flatten can't know the total length, so each iterator counts what it has left.
macro_rules! counted_iter {
    ($name:ident$(<$lt:lifetime>)?, $item:ty) => {
        impl<$($lt,)? T> Iterator for $name<$($lt,)? T> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                let value = self.inner.next()?;
                self.len -= 1;
                Some(value)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.len, Some(self.len))
            }
        }

        impl<$($lt,)? T> DoubleEndedIterator for $name<$($lt,)? T> {
            fn next_back(&mut self) -> Option<Self::Item> {
                let value = self.inner.next_back()?;
                self.len -= 1;
                Some(value)
            }
        }

        impl<$($lt,)? T> ExactSizeIterator for $name<$($lt,)? T> {}

        impl<$($lt,)? T> FusedIterator for $name<$($lt,)? T> {}
    };
}

counted_iter!(IntoIter, T);
counted_iter!(Iter<'a>, &'a T);
counted_iter!(IterMut<'a>, &'a mut T);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
