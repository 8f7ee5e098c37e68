//! Adaptors that restrict a container to a single discipline: [`Stack`], [`Queue`] and [`Deque`].
//!
//! Each adaptor is generic over its backing container and only requires the
//! [capabilities](crate::collections::traits) it actually uses. [`Stack`] and [`Queue`] pick the
//! ends of the container they work at through a marker type, while [`Deque`] is built from two
//! back-ended stacks and so can sit on top of containers that only grow at one end.

mod deque;
mod queue;
mod stack;
mod tests;

pub use deque::*;
pub use queue::*;
pub use stack::*;
