//! Block based list types, currently just [`SegmentedList`].

pub mod segmented_list;

#[doc(inline)]
pub use segmented_list::SegmentedList;
