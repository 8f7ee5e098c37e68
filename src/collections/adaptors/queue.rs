use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::circ::RingBuffer;
use crate::collections::traits::{
    BackAccess, FrontAccess, PopBack, PopFront, PushBack, PushFront, Sequence,
};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, PushError};
use crate::util::result::ResultExtension;

/// Selects the direction elements flow through a [`Queue`]'s container, by picking
/// [`BackToFront`] or [`FrontToBack`].
pub trait QueueOrder<T, C> {
    /// Whether elements leave from the container's front.
    const POPS_FRONT: bool;

    fn push(container: &mut C, value: T) -> Result<&mut T, PushError>;

    fn pop(container: &mut C) -> Option<T>;
}

/// Elements are pushed onto the back of the container and popped from the front.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackToFront;

/// Elements are pushed onto the front of the container and popped from the back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontToBack;

impl<T, C: PushBack<T> + PopFront<T>> QueueOrder<T, C> for BackToFront {
    const POPS_FRONT: bool = true;

    fn push(container: &mut C, value: T) -> Result<&mut T, PushError> {
        container.try_push_back(value)
    }

    fn pop(container: &mut C) -> Option<T> {
        container.pop_front()
    }
}

impl<T, C: PushFront<T> + PopBack<T>> QueueOrder<T, C> for FrontToBack {
    const POPS_FRONT: bool = false;

    fn push(container: &mut C, value: T) -> Result<&mut T, PushError> {
        container.try_push_front(value)
    }

    fn pop(container: &mut C) -> Option<T> {
        container.pop_back()
    }
}

/// A first-in, first-out adaptor over any container that can push at one end and pop at the
/// other, with access to both.
///
/// [`front`](Queue::front) is always the next element to be popped and [`back`](Queue::back) the
/// most recently pushed, regardless of which way round the container is used.
///
/// # Examples
/// ```
/// # use dsa_collections::collections::adaptors::Queue;
/// let mut queue: Queue<_> = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.front(), Some(&2));
/// assert_eq!(queue.back(), Some(&3));
/// ```
pub struct Queue<T, C = RingBuffer<T>, O = BackToFront> {
    pub(crate) container: C,
    pub(crate) _phantom: PhantomData<(T, O)>,
}

impl<T, C, O> Queue<T, C, O>
where
    C: Sequence + FrontAccess<T> + BackAccess<T> + Default,
    O: QueueOrder<T, C>,
{
    /// Creates a new Queue over an empty container.
    pub fn new() -> Queue<T, C, O> {
        Queue::from_container(C::default())
    }

    /// Drops every element, by replacing the container with an empty one.
    pub fn clear(&mut self) {
        self.container = C::default();
    }
}

impl<T, C, O> Queue<T, C, O>
where
    C: Sequence + FrontAccess<T> + BackAccess<T>,
    O: QueueOrder<T, C>,
{
    /// Creates a Queue over an existing container, keeping its elements in the order the
    /// direction `O` would have pushed them.
    pub const fn from_container(container: C) -> Queue<T, C, O> {
        Queue {
            container,
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Adds `value` to the back of the queue, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the container can't hold another element.
    pub fn push(&mut self, value: T) -> &mut T {
        self.try_push(value).throw()
    }

    /// Adds `value` to the back of the queue, returning an [`Err`] if the container can't hold
    /// another element.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, PushError> {
        O::push(&mut self.container, value)
    }

    /// Removes the element at the front of the queue and returns it, if the queue isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        O::pop(&mut self.container)
    }

    /// Removes the element at the front of the queue and returns it, or an [`Err`] if the queue
    /// is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    /// Returns the next element to be popped, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.ends().0
    }

    /// Returns the most recently pushed element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.ends().1
    }

    /// Returns a reference to the underlying container.
    pub const fn underlying(&self) -> &C {
        &self.container
    }

    /// Consumes the Queue, returning the underlying container.
    pub fn into_inner(self) -> C {
        self.container
    }

    /// Returns the queue's front and back, in terms of the container's own ends.
    fn ends(&self) -> (Option<&T>, Option<&T>) {
        let container_front = self.container.front();
        let container_back = self.container.back();
        if O::POPS_FRONT {
            (container_front, container_back)
        } else {
            (container_back, container_front)
        }
    }
}

impl<T, C, O> Default for Queue<T, C, O>
where
    C: Sequence + FrontAccess<T> + BackAccess<T> + Default,
    O: QueueOrder<T, C>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone, O> Clone for Queue<T, C, O> {
    fn clone(&self) -> Self {
        Queue {
            container: self.container.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: PartialEq, O> PartialEq for Queue<T, C, O> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq, O> Eq for Queue<T, C, O> {}

impl<T, C: Debug, O> Debug for Queue<T, C, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}
