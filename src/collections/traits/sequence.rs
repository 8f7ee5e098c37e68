use crate::util::error::{EmptyCollection, PushError};
use crate::util::result::ResultExtension;

/// A collection holding an ordered sequence of elements.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence where any element can be accessed by its position.
pub trait IndexedAccess<T>: Sequence {
    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;
}

/// A sequence that can add elements to its back.
pub trait PushBack<T>: Sequence {
    /// Adds `value` to the back, returning a reference to it, or an [`Err`] if the collection
    /// can't hold it.
    fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError>;

    /// Adds `value` to the back, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the collection can't hold another element.
    fn push_back(&mut self, value: T) -> &mut T {
        self.try_push_back(value).throw()
    }
}

/// A sequence that can add elements to its front.
pub trait PushFront<T>: Sequence {
    /// Adds `value` to the front, returning a reference to it, or an [`Err`] if the collection
    /// can't hold it.
    fn try_push_front(&mut self, value: T) -> Result<&mut T, PushError>;

    /// Adds `value` to the front, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the collection can't hold another element.
    fn push_front(&mut self, value: T) -> &mut T {
        self.try_push_front(value).throw()
    }
}

/// A sequence that can remove elements from its back.
pub trait PopBack<T>: Sequence {
    fn pop_back(&mut self) -> Option<T>;

    fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }
}

/// A sequence that can remove elements from its front.
pub trait PopFront<T>: Sequence {
    fn pop_front(&mut self) -> Option<T>;

    fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }
}

/// A sequence with direct access to its first element.
pub trait FrontAccess<T>: Sequence {
    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;
}

/// A sequence with direct access to its last element.
pub trait BackAccess<T>: Sequence {
    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;
}
