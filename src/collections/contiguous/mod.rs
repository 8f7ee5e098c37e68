//! Contiguous collection types: [`DynamicArray`], which grows as elements are pushed, and
//! [`FixedArray`], whose length is chosen once when it is created.

pub mod dynamic_array;
pub mod fixed_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
#[doc(inline)]
pub use fixed_array::FixedArray;
