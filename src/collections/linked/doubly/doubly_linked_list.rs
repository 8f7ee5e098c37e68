use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, ONE};
use crate::collections::linked::node::{Node, NodeRef};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Indexed operations walk from whichever end of the list is nearer to the index.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// Each step of a walk follows a pointer to a separate allocation, so the `O(i)` operations are
/// slow in practice. For indexed work, the block based `SegmentedList` pays for one pointer per
/// block rather than one per element.
#[derive(PartialEq, Eq, Hash)]
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList, returning a reference to
    /// it.
    ///
    /// # Panics
    /// Panics if the length would overflow.
    pub fn push_front(&mut self, value: T) -> &mut T {
        let mut node = match &mut self.state {
            Empty => {
                let node = NodeRef::unlinked(value);
                self.state = Full(ListContents::wrap_one(node));
                node
            },
            Full(contents) => contents.push_front(value),
        };
        node.value_mut()
    }

    /// Adds the provided element to the back of the DoublyLinkedList, returning a reference to
    /// it.
    ///
    /// # Panics
    /// Panics if the length would overflow.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let mut node = match &mut self.state {
            Empty => {
                let node = NodeRef::unlinked(value);
                self.state = Full(ListContents::wrap_one(node));
                node
            },
            Full(contents) => contents.push_back(value),
        };
        node.value_mut()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unreachable() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the first element from the list and returns it, or an [`Err`] if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unreachable() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, or an [`Err`] if the list is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the provided `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is
    /// out of bounds.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] if
    /// it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` at `index`, so that it is preceded by `index` elements.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = [1, 2, 4].into_iter().collect();
    /// list.insert(2, 3);
    /// list.insert(0, 0);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
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

        if index == 0 {
            return Ok(self.push_front(value));
        }
        if index == len {
            return Ok(self.push_back(value));
        }

        // SAFETY: 0 < index < len, so the list has at least two elements.
        let contents = unsafe { self.state.contents_mut().unreachable() };
        let prev_node = contents.seek(index - 1);
        // SAFETY: prev_node isn't the tail, because index is less than len.
        let next_node = unsafe { prev_node.next().unreachable() };

        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let mut node = NodeRef::from_node(Node {
            value,
            prev: Some(prev_node),
            next: Some(next_node),
        });
        *prev_node.next_mut() = Some(node);
        *next_node.prev_mut() = Some(node);

        Ok(node.value_mut())
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
        let contents = self.checked_contents_for_index_mut(index)?;
        let last_index = contents.last_index();

        if index == 0 {
            // SAFETY: contents is already checked to be valid for the provided index.
            return Ok(unsafe { self.pop_front().unreachable() });
        }
        if index == last_index {
            // SAFETY: contents is already checked to be valid for the provided index.
            return Ok(unsafe { self.pop_back().unreachable() });
        }

        let node = contents.seek(index);
        // Both neighbours exist, because the head and tail are handled above.
        node.unlink();
        // SAFETY: If the length was 1, index would have been 0.
        contents.len = unsafe { contents.len.checked_sub(1).unreachable() };

        Ok(node.take_node().value)
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
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), new_value))
    }

    /// Moves every element of `other` onto the back of this list, without reallocating any nodes.
    ///
    /// # Panics
    /// Panics if the combined length would overflow.
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        let Full(other_contents) = mem::take(&mut other.state) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow).throw();

                self_contents.tail.link_to(other_contents.head);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Swaps the contents of two DoublyLinkedLists.
    pub const fn swap(&mut self, other: &mut DoublyLinkedList<T>) {
        mem::swap(self, other);
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none(), "The head should have no previous node.");
                let mut curr = head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    assert!(*next.prev() == Some(curr), "Every link should be mirrored.");
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "Following next links should end at the tail.");
                assert_eq!(count, len.get(), "The stored length should match the node count.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from the nearer end. `index` must be in bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            Self::seek_fwd(index, self.head)
        } else {
            Self::seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: The caller guarantees that count nodes follow node.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn seek_bwd(count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: The caller guarantees that count nodes precede node.
            node = unsafe { node.prev().unreachable() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) -> NodeRef<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::unlinked(value);
        node.link_to(self.head);
        self.head = node;
        node
    }

    pub fn push_back(&mut self, value: T) -> NodeRef<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::unlinked(value);
        self.tail.link_to(node);
        self.tail = node;
        node
    }

    pub fn wrap_one(node: NodeRef<T>) -> ListContents<T> {
        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn contents_mut(&mut self) -> Option<&mut ListContents<T>> {
        match self {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                drop(ptr.take_node());
            }
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: Hash> Hash for ListContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ") <-> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
