//! Block-based collection types, currently just [`TieredArray`].

pub mod tiered_array;

#[doc(inline)]
pub use tiered_array::TieredArray;
