//! A library of sequence containers written from scratch on top of raw allocations.
//!
//! # Purpose
//! Each container here is a study of a particular trade-off between contiguous storage and
//! linking: fixed and doubling arrays, a circular buffer, a triangular "rootish" array of arrays,
//! linked lists and a linked list of fixed-size blocks. Stack, queue and deque adaptors sit on top and
//! can be backed by any container exposing the right ends.
//!
//! # Method
//! Every array-like container is built on [`RawStorage`](collections::raw::RawStorage), a block of
//! uninitialized slots that never constructs or destroys anything on its own. Owners decide
//! exactly when a value is alive, which lets elements be relocated by move without requiring
//! [`Default`] or [`Clone`].
//!
//! # Error Handling
//! Fallible operations come in pairs. `try_*` methods return a strongly typed [`Result`], using
//! enums for static dispatch when more than one thing can go wrong. The plain method of the same
//! name panics with the error's message instead. Popping from an empty container returns [`None`]
//! rather than an error, and every failed operation leaves the container as it was.
//!
//! # Dependencies
//! Beyond `std`, this crate only depends on `derive_more` for error and state enum derives. It
//! doesn't use [`Vec`] or any of the [`std::collections`] types internally.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub mod error;

pub(crate) mod util;
