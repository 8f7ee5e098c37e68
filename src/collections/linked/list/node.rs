use std::ptr::NonNull;

pub(crate) type ForwardLink<T> = Option<ForwardRef<T>>;

/// A copyable handle to a heap allocated [`ForwardNode`], which only knows its successor.
///
/// The same ownership rules as the doubly linked [`NodeRef`](crate::collections::linked::node::NodeRef)
/// apply: the owning list frees each node exactly once, and never uses a handle afterwards.
#[derive(Debug)]
pub(crate) struct ForwardRef<T>(pub NonNull<ForwardNode<T>>);

pub(crate) struct ForwardNode<T> {
    pub value: T,
    pub next: ForwardLink<T>,
}

impl<T> ForwardRef<T> {
    /// Allocates a node holding `value`, followed by `next`.
    pub fn new(value: T, next: ForwardLink<T>) -> ForwardRef<T> {
        ForwardRef(NonNull::from(Box::leak(Box::new(ForwardNode { value, next }))))
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live while any ForwardRef to it is in use.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is live, and the owning list is mutably borrowed.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn next<'a>(&self) -> &'a ForwardLink<T> {
        // SAFETY: The node is live while any ForwardRef to it is in use.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut ForwardLink<T> {
        // SAFETY: Links are only rewritten while the owning list is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Frees the node, moving its contents out.
    pub fn take_node(self) -> ForwardNode<T> {
        // SAFETY: The pointer was created by Box::leak in new, and each node is only taken once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for ForwardRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardRef<T> {}

impl<T> PartialEq for ForwardRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for ForwardRef<T> {}
