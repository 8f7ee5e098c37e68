//! Linked collection types: the singly linked [`LinkedList`] and the [`DoublyLinkedList`].
//!
//! Both store each element in its own heap allocation. The doubly linked node type is shared
//! with [`SegmentedList`](crate::collections::segmented::SegmentedList), which links blocks of
//! elements instead of single values.

pub mod doubly;
pub mod list;
pub(crate) mod node;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use list::LinkedList;
