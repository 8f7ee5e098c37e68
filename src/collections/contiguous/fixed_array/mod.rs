//! A module containing [`FixedArray`], a contiguous collection with a length chosen once at
//! runtime.
//!
//! Owned iteration reuses [`IntoIter`](crate::collections::contiguous::dynamic_array::IntoIter)
//! from the DynamicArray module, while [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`FixedArray`] is also re-exported under the parent module.

mod fixed_array;
mod iter;
mod tests;

pub use fixed_array::*;
