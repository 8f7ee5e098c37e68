use std::iter::{Flatten, FusedIterator};
use std::marker::PhantomData;

use super::SegmentedList;
use crate::collections::circ::RingBuffer;
use crate::collections::linked::node::Link;

impl<T> IntoIterator for SegmentedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a SegmentedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SegmentedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`SegmentedList`].
pub struct IntoIter<T> {
    pub(crate) list: SegmentedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the blocks of a [`SegmentedList`], in order. Each block is a [`RingBuffer`]
/// with a capacity of one more than the list's block size.
pub struct Blocks<'a, T> {
    // Both ends are cleared once they meet.
    pub(crate) front: Link<RingBuffer<T>>,
    pub(crate) back: Link<RingBuffer<T>>,
    pub(crate) _phantom: PhantomData<&'a RingBuffer<T>>,
}

/// A mutable counterpart to [`Blocks`], used for mutable element iteration.
pub(crate) struct BlocksMut<'a, T> {
    pub(crate) front: Link<RingBuffer<T>>,
    pub(crate) back: Link<RingBuffer<T>>,
    pub(crate) _phantom: PhantomData<&'a mut RingBuffer<T>>,
}

macro_rules! block_iter {
    ($name:ident, $item:ty, $value:ident) => {
        impl<'a, T> Iterator for $name<'a, T> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                #[allow(unused_mut)]
                let mut node = self.front?;
                if self.back == Some(node) {
                    self.front = None;
                    self.back = None;
                } else {
                    self.front = *node.next();
                }
                Some(node.$value())
            }
        }

        impl<'a, T> DoubleEndedIterator for $name<'a, T> {
            fn next_back(&mut self) -> Option<Self::Item> {
                #[allow(unused_mut)]
                let mut node = self.back?;
                if self.front == Some(node) {
                    self.front = None;
                    self.back = None;
                } else {
                    self.back = *node.prev();
                }
                Some(node.$value())
            }
        }

        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

block_iter!(Blocks, &'a RingBuffer<T>, value);
block_iter!(BlocksMut, &'a mut RingBuffer<T>, value_mut);

impl<'a, T> Clone for Blocks<'a, T> {
    fn clone(&self) -> Self {
        Blocks {
            front: self.front,
            back: self.back,
            _phantom: PhantomData,
        }
    }
}

/// A type for borrowed iteration over a [`SegmentedList`].
pub struct Iter<'a, T> {
    pub(crate) inner: Flatten<Blocks<'a, T>>,
    pub(crate) len: usize,
}

/// A type for mutable borrowed iteration over a [`SegmentedList`].
pub struct IterMut<'a, T> {
    pub(crate) inner: Flatten<BlocksMut<'a, T>>,
    pub(crate) len: usize,
}

// Flattened blocks don't know the total length, so each iterator counts what it has left.
macro_rules! counted_iter {
    ($name:ident, $item:ty) => {
        impl<'a, T> Iterator for $name<'a, T> {
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

        impl<'a, T> DoubleEndedIterator for $name<'a, T> {
            fn next_back(&mut self) -> Option<Self::Item> {
                let value = self.inner.next_back()?;
                self.len -= 1;
                Some(value)
            }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}

        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

counted_iter!(Iter, &'a T);
counted_iter!(IterMut, &'a mut T);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
