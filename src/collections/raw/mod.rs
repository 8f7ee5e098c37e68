//! A module containing [`RawStorage`], the block of uninitialized slots that every array-based
//! collection in this crate is built on.

mod raw_storage;
mod tests;

pub use raw_storage::*;
