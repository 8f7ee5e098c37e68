//! Circular collection types, currently just [`RingBuffer`] and the policies that configure it.

pub mod ring_buffer;

#[doc(inline)]
pub use ring_buffer::{BufferPolicy, CapacityPolicy, OverflowPolicy, ResizePolicy, RingBuffer};
