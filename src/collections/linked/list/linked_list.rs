use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{ForwardLink, ForwardRef, Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from front to back.
///
/// The list keeps a pointer to its last node as well as its first, so that elements can be pushed
/// onto either end in constant time. Only the front can be popped cheaply though, because finding
/// the node before the tail requires walking the whole list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) head: ForwardLink<T>,
    pub(crate) tail: ForwardLink<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.head {
            Some(head) => Some(head.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(mut head) => Some(head.value_mut()),
            None => None,
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.tail {
            Some(tail) => Some(tail.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.tail {
            Some(mut tail) => Some(tail.value_mut()),
            None => None,
        }
    }

    /// Adds the provided element to the front of the LinkedList, returning a reference to it.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// *list.push_front(0) += 1;
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) -> &mut T {
        let mut node = ForwardRef::new(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        node.value_mut()
    }

    /// Adds the provided element to the back of the LinkedList, returning a reference to it.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let mut node = ForwardRef::new(value, None);
        match self.tail {
            Some(tail) => *tail.next_mut() = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        node.value_mut()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?.take_node();
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the first element from the list and returns it, or an [`Err`] if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the provided `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is
    /// out of bounds.
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
    /// # use dsa_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [0, 1, 3].into_iter().collect();
    /// list.insert(2, 2);
    /// list.insert(4, 4);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
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

        if index == 0 {
            return Ok(self.push_front(value));
        }
        if index == self.len {
            return Ok(self.push_back(value));
        }

        let prev = self.seek(index - 1);
        let mut node = ForwardRef::new(value, *prev.next());
        *prev.next_mut() = Some(node);
        self.len += 1;

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
        self.check_index(index)?;

        if index == 0 {
            // SAFETY: index is in bounds, so the list isn't empty.
            return Ok(unsafe { self.pop_front().unreachable() });
        }

        let prev = self.seek(index - 1);
        // SAFETY: index is in bounds, so prev is followed by the node being removed.
        let node = unsafe { prev.next().unreachable() }.take_node();
        *prev.next_mut() = node.next;
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;

        Ok(node.value)
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

    /// Drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Swaps the contents of two LinkedLists.
    pub const fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(self, other);
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    /// Finds the node at `index`, which must be in bounds.
    pub(crate) fn seek(&self, index: usize) -> ForwardRef<T> {
        // SAFETY: The list is non-empty when index is in bounds.
        let tail = unsafe { self.tail.unreachable() };
        if index == self.len - 1 {
            return tail;
        }

        // SAFETY: The list is non-empty when index is in bounds.
        let mut node = unsafe { self.head.unreachable() };
        for _ in 0..index {
            // SAFETY: index nodes follow the head.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<ForwardRef<T>, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.seek(index))
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut last = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            count += 1;
            last = Some(node);
            curr = *node.next();
        }
        assert!(self.tail == last, "The last reachable node should be the tail.");
        assert_eq!(count, self.len, "The stored length should match the node count.");
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head;
        while let Some(ptr) = curr {
            curr = *ptr.next();
            drop(ptr.take_node());
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
