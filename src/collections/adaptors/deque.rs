use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{Back, Stack};
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::{BackAccess, IndexedAccess, PopBack, PushBack};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};

/// A double-ended queue built from two stacks, each backed by a container that only needs to
/// work at its back.
///
/// The front half is stored reversed, so the top of each stack is one end of the deque. Whenever
/// one half becomes more than three times the size of the other, both are rebuilt with half of
/// the elements each. This keeps popping from either end cheap, even after many pushes to the
/// other end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)`* |
/// | `get` | `O(1)`** |
///
/// \* Amortized, rebalancing takes `O(n)`.
///
/// \** When the backing container has constant time indexing.
pub struct Deque<T, C = DynamicArray<T>> {
    pub(crate) front: Stack<T, C, Back>,
    pub(crate) back: Stack<T, C, Back>,
}

impl<T, C> Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + Default,
{
    /// Creates a new, empty Deque.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::adaptors::Deque;
    /// let mut deque: Deque<_> = Deque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), Some(3));
    /// ```
    pub fn new() -> Deque<T, C> {
        Deque {
            front: Stack::new(),
            back: Stack::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Adds `value` to the front of the Deque.
    ///
    /// # Panics
    /// Panics if the backing container can't hold another element.
    pub fn push_front(&mut self, value: T) {
        self.front.push(value);
        self.rebalance();
    }

    /// Adds `value` to the back of the Deque.
    ///
    /// # Panics
    /// Panics if the backing container can't hold another element.
    pub fn push_back(&mut self, value: T) {
        self.back.push(value);
        self.rebalance();
    }

    /// Removes the first element and returns it, if the Deque isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        // The front half can only be empty if there is at most one element left.
        let value = self.front.pop().or_else(|| self.back.pop())?;
        self.rebalance();
        Some(value)
    }

    /// Removes the first element and returns it, or an [`Err`] if the Deque is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes the last element and returns it, if the Deque isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.back.pop().or_else(|| self.front.pop())?;
        self.rebalance();
        Some(value)
    }

    /// Removes the last element and returns it, or an [`Err`] if the Deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    pub fn front(&self) -> Option<&T> {
        self.front.top().or_else(|| self.back.top())
    }

    pub fn back(&self) -> Option<&T> {
        self.back.top().or_else(|| self.front.top())
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Swaps the contents of two Deques.
    pub const fn swap(&mut self, other: &mut Deque<T, C>) {
        mem::swap(self, other);
    }

    /// Returns the two stacks making up the Deque, front half first. The front half's top is the
    /// first element of the Deque.
    pub const fn halves(&self) -> (&Stack<T, C, Back>, &Stack<T, C, Back>) {
        (&self.front, &self.back)
    }

    /// Rebuilds both halves with an even split of the elements, if either has grown to more than
    /// three times the size of the other.
    pub(crate) fn rebalance(&mut self) {
        let front_len = self.front.len();
        let back_len = self.back.len();
        let len = front_len + back_len;
        if len < 2 || (3 * front_len >= back_len && 3 * back_len >= front_len) {
            return;
        }

        // Recover the logical order: the front half pops in order, the back half in reverse.
        let mut logical = DynamicArray::with_cap(len);
        while let Some(value) = self.front.pop() {
            logical.push(value);
        }
        let mut back_rev = DynamicArray::with_cap(back_len);
        while let Some(value) = self.back.pop() {
            back_rev.push(value);
        }
        while let Some(value) = back_rev.pop() {
            logical.push(value);
        }

        let front_len = len / 2;
        let mut values = logical.into_iter();
        let front_values: DynamicArray<T> = values.by_ref().take(front_len).collect();

        let mut front = Stack::new();
        for value in front_values.into_iter().rev() {
            front.push(value);
        }
        let mut back = Stack::new();
        for value in values {
            back.push(value);
        }

        self.front = front;
        self.back = back;
    }
}

impl<T, C> Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + IndexedAccess<T> + Default,
{
    /// Returns a reference to the element at `index`, counting from the front, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        let front_len = self.front.len();
        match index.checked_sub(front_len) {
            None => self.front.underlying().get(front_len - 1 - index),
            Some(back_index) => self.back.underlying().get(back_index),
        }
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] if it is out of
    /// bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })
    }
}

impl<T, C> Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + Default,
    for<'a> &'a C: IntoIterator<Item = &'a T, IntoIter: DoubleEndedIterator>,
{
    /// Returns an iterator over the Deque from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.front.underlying().into_iter().rev().chain(self.back.underlying())
    }
}

impl<T, C> Default for Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, C> FromIterator<T> for Deque<T, C>
where
    C: PushBack<T> + PopBack<T> + BackAccess<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T, C: Clone> Clone for Deque<T, C> {
    fn clone(&self) -> Self {
        Deque {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T, C: Debug> Debug for Deque<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("front", &self.front.container)
            .field("back", &self.back.container)
            .finish()
    }
}
