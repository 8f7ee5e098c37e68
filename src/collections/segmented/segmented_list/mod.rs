//! A module containing [`SegmentedList`], its iterators and the iterator over its blocks.

mod iter;
mod segmented_list;

pub use iter::*;
pub use segmented_list::*;
