use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::{
    BackAccess, FrontAccess, PopBack, PopFront, PushBack, PushFront, Sequence,
};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, PushError};
use crate::util::result::ResultExtension;

/// Selects the end of a container that a [`Stack`] works at. The choice is made entirely through
/// the type system, by picking [`Back`] or [`Front`].
pub trait StackEnd<T, C> {
    fn push(container: &mut C, value: T) -> Result<&mut T, PushError>;

    fn pop(container: &mut C) -> Option<T>;

    fn top(container: &C) -> Option<&T>;

    fn top_mut(container: &mut C) -> Option<&mut T>;
}

/// Works at the back of the container, which must support [`PushBack`], [`PopBack`] and
/// [`BackAccess`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Back;

/// Works at the front of the container, which must support [`PushFront`], [`PopFront`] and
/// [`FrontAccess`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Front;

impl<T, C: PushBack<T> + PopBack<T> + BackAccess<T>> StackEnd<T, C> for Back {
    fn push(container: &mut C, value: T) -> Result<&mut T, PushError> {
        container.try_push_back(value)
    }

    fn pop(container: &mut C) -> Option<T> {
        container.pop_back()
    }

    fn top(container: &C) -> Option<&T> {
        container.back()
    }

    fn top_mut(container: &mut C) -> Option<&mut T> {
        container.back_mut()
    }
}

impl<T, C: PushFront<T> + PopFront<T> + FrontAccess<T>> StackEnd<T, C> for Front {
    fn push(container: &mut C, value: T) -> Result<&mut T, PushError> {
        container.try_push_front(value)
    }

    fn pop(container: &mut C) -> Option<T> {
        container.pop_front()
    }

    fn top(container: &C) -> Option<&T> {
        container.front()
    }

    fn top_mut(container: &mut C) -> Option<&mut T> {
        container.front_mut()
    }
}

/// A last-in, first-out adaptor over any container that can push, pop and peek at one end.
///
/// # Examples
/// ```
/// # use dsa_collections::collections::adaptors::{Front, Stack};
/// # use dsa_collections::collections::linked::LinkedList;
/// let mut stack: Stack<_> = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Some(2));
///
/// // A singly linked list can only pop from the front.
/// let mut linked: Stack<_, LinkedList<_>, Front> = Stack::new();
/// linked.push('a');
/// linked.push('b');
/// assert_eq!(linked.top(), Some(&'b'));
/// assert_eq!(linked.into_inner().front(), Some(&'b'));
/// ```
pub struct Stack<T, C = DynamicArray<T>, E = Back> {
    pub(crate) container: C,
    pub(crate) _phantom: PhantomData<(T, E)>,
}

impl<T, C: Sequence + Default, E: StackEnd<T, C>> Stack<T, C, E> {
    /// Creates a new Stack over an empty container.
    pub fn new() -> Stack<T, C, E> {
        Stack::from_container(C::default())
    }

    /// Drops every element, by replacing the container with an empty one.
    pub fn clear(&mut self) {
        self.container = C::default();
    }
}

impl<T, C: Sequence, E: StackEnd<T, C>> Stack<T, C, E> {
    /// Creates a Stack over an existing container. The selected end of the container becomes the
    /// top of the stack.
    pub const fn from_container(container: C) -> Stack<T, C, E> {
        Stack {
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

    /// Pushes `value` onto the top of the stack, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the container can't hold another element.
    pub fn push(&mut self, value: T) -> &mut T {
        self.try_push(value).throw()
    }

    /// Pushes `value` onto the top of the stack, returning an [`Err`] if the container can't hold
    /// another element.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, PushError> {
        E::push(&mut self.container, value)
    }

    /// Removes the top element and returns it, if the stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        E::pop(&mut self.container)
    }

    /// Removes the top element and returns it, or an [`Err`] if the stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    pub fn top(&self) -> Option<&T> {
        E::top(&self.container)
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        E::top_mut(&mut self.container)
    }

    /// Returns a reference to the underlying container.
    pub const fn underlying(&self) -> &C {
        &self.container
    }

    /// Consumes the Stack, returning the underlying container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C: Sequence + Default, E: StackEnd<T, C>> Default for Stack<T, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone, E> Clone for Stack<T, C, E> {
    fn clone(&self) -> Self {
        Stack {
            container: self.container.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: PartialEq, E> PartialEq for Stack<T, C, E> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq, E> Eq for Stack<T, C, E> {}

impl<T, C: Debug, E> Debug for Stack<T, C, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}
