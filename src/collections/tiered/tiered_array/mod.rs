//! A module containing [`TieredArray`] and its iterators.
//!
//! [`TieredArray`] is also re-exported under the parent module.

mod iter;
mod tiered_array;

pub use iter::*;
pub use tiered_array::*;
