use derive_more::IsVariant;

/// Whether a [`RingBuffer`](super::RingBuffer) is allowed to change its own capacity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum CapacityPolicy {
    /// The capacity only changes through an explicit [`resize`](super::RingBuffer::resize).
    #[default]
    Fixed,
    /// The capacity doubles when pushing onto a full buffer and halves when a removal leaves the
    /// buffer exactly a quarter full.
    Dynamic,
}

/// What happens when pushing onto a full buffer with a [`Fixed`](CapacityPolicy::Fixed) capacity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum OverflowPolicy {
    /// The element at the opposite end to the push is overwritten. Pushing to the back replaces
    /// the oldest element, pushing to the front replaces the newest.
    #[default]
    ReplaceOnFull,
    /// The push fails with a [`FullCollection`](crate::error::FullCollection) error.
    ThrowOnFull,
}

/// Which elements are dropped when [`resize`](super::RingBuffer::resize) shrinks a buffer below
/// its length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ResizePolicy {
    /// Drop elements from the front.
    #[default]
    DiscardOld,
    /// Drop elements from the back.
    DiscardNew,
}

/// The complete configuration of a [`RingBuffer`](super::RingBuffer).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferPolicy {
    pub capacity: CapacityPolicy,
    pub overflow: OverflowPolicy,
}

impl BufferPolicy {
    /// A fixed capacity policy with the provided overflow behavior.
    pub const fn fixed(overflow: OverflowPolicy) -> BufferPolicy {
        BufferPolicy {
            capacity: CapacityPolicy::Fixed,
            overflow,
        }
    }

    /// A dynamic capacity policy. The overflow policy has no effect while the capacity is dynamic,
    /// but is kept in case the policy is later changed with
    /// [`set_policy`](super::RingBuffer::set_policy).
    pub const fn dynamic() -> BufferPolicy {
        BufferPolicy {
            capacity: CapacityPolicy::Dynamic,
            overflow: OverflowPolicy::ReplaceOnFull,
        }
    }
}
