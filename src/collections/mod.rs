//! Generic container types, grouped by how they lay out their elements.
//!
//! # Layout
//! Every array-based container is built on [`RawStorage`](raw::RawStorage), a fixed block of
//! uninitialized slots. [`DynamicArray`](contiguous::DynamicArray) and
//! [`FixedArray`](contiguous::FixedArray) deref to a slice, which saves them from reimplementing
//! the more repetitive functionality, while
//! [`RingBuffer`](circ::RingBuffer) and [`TieredArray`](tiered::TieredArray) map logical indices
//! onto their storage themselves. The linked containers share a single node type, which
//! [`SegmentedList`](segmented::SegmentedList) reuses with a [`RingBuffer`](circ::RingBuffer) in
//! each node.
//!
//! # Features
//! Each family sits behind a feature of the same name, all of which are enabled by default
//! through `collections-all`. The [`adaptors`] are written against the capability
//! [`traits`], so they work over any container that provides the operations they need.

pub mod raw;

#[cfg(feature = "adaptors")]
pub mod adaptors;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "segmented")]
pub mod segmented;
#[cfg(feature = "tiered")]
pub mod tiered;
#[cfg(feature = "traits")]
pub mod traits;
