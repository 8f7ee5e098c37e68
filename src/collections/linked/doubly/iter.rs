use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{DoublyLinkedList, ListContents, ListState};
use crate::collections::linked::node::NodeRef;
use crate::util::option::OptionExtension;

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    // The iterator just holds the list and pops from either end.
    pub(crate) list: DoublyLinkedList<T>,
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

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable borrowed iteration over a [`DoublyLinkedList`].
pub struct IterMut<'a, T> {
    // The fields are the same as a list's, but the nodes themselves are never modified. len tracks
    // the number of items left to yield from either end.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut head = self.state.advance_front()?;
        Some(head.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut tail = self.state.advance_back()?;
        Some(tail.value_mut())
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

/// A type for borrowed iteration over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.advance_front()?.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(self.state.advance_back()?.value())
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

impl<T> ListState<T> {
    /// Copies the head, tail and length without touching any nodes.
    pub(crate) const fn shallow_copy(&self) -> ListState<T> {
        match self {
            Empty => Empty,
            Full(ListContents { len, head, tail }) => Full(ListContents {
                len: *len,
                head: *head,
                tail: *tail,
            }),
        }
    }

    /// Returns the current head and moves it forward, without modifying the node itself. Only
    /// used on shallow copies.
    fn advance_front(&mut self) -> Option<NodeRef<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let current = *head;
                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one item is left, so head has a next node.
                        *head = unsafe { head.next().unreachable() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }
                Some(current)
            },
        }
    }

    /// Returns the current tail and moves it backward, without modifying the node itself. Only
    /// used on shallow copies.
    fn advance_back(&mut self) -> Option<NodeRef<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let current = *tail;
                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one item is left, so tail has a previous node.
                        *tail = unsafe { tail.prev().unreachable() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }
                Some(current)
            },
        }
    }
}
