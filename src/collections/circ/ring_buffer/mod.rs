//! A module containing [`RingBuffer`], its configuration policies and iterators.

mod iter;
mod policy;
mod ring_buffer;
mod tests;

pub use iter::*;
pub use policy::*;
pub use ring_buffer::*;
