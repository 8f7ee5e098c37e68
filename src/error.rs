//! Error types returned by the `try_*` methods of this crate's collections.
//!
//! Each error kind is its own small type implementing [`Error`](std::error::Error). Operations
//! that can fail in more than one way return an enum over those kinds instead, which converts from
//! each of them with [`From`] and back with [`TryInto`].

#[doc(inline)]
pub use crate::util::error::*;
