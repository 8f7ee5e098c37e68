//! A module containing the singly linked [`LinkedList`] and its iterators.

mod iter;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
