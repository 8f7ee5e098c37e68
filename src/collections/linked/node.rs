use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a heap allocated [`Node`], linked in both directions.
///
/// Nodes are allocated through [`Box`] and only ever freed by [`take_node`](NodeRef::take_node).
/// The owning collection is responsible for making sure that no NodeRef is used after its node has
/// been freed, and that the references handed out by these accessors don't outlive the borrow of
/// the collection they were obtained through.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Creates a node holding `value` with no links.
    pub fn unlinked(value: T) -> NodeRef<T> {
        NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        })
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live while any NodeRef to it is in use.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is live, and the owning collection is mutably borrowed.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while any NodeRef to it is in use.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten while the owning collection is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live while any NodeRef to it is in use.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten while the owning collection is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Frees the node, moving its contents out. Every other NodeRef to it becomes dangling.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node, and each node is only taken
        // once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Links `self` and `next` together, in that order.
    pub fn link_to(self, next: NodeRef<T>) {
        *self.next_mut() = Some(next);
        *next.prev_mut() = Some(self);
    }

    /// Removes the node from between its neighbours, joining them to each other. The node's own
    /// links are left untouched.
    pub fn unlink(self) {
        if let Some(prev) = self.prev() {
            *prev.next_mut() = *self.next();
        }
        if let Some(next) = self.next() {
            *next.prev_mut() = *self.prev();
        }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
