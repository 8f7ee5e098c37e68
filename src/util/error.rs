use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided index doesn't refer to an element (or, for insertion, a gap) of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A value was requested from a collection that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// A fixed capacity collection configured to reject overflow is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection is full, with a fixed capacity of {cap}!")]
pub struct FullCollection {
    pub cap: usize,
}

/// A fixed capacity collection has no room for any elements and isn't allowed to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Can't store elements in a fixed collection with zero capacity!")]
pub struct ZeroCapacity;

/// A block size was requested that is too small to keep blocks balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Block size {size} is less than the minimum of {min}!")]
pub struct BlockSizeTooSmall {
    pub size: usize,
    pub min: usize,
}

/// The memory layout of a collection would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Errors that can occur when pushing onto either end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PushError {
    Full(FullCollection),
    ZeroCapacity(ZeroCapacity),
}

/// Errors that can occur when inserting at an arbitrary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    Full(FullCollection),
    ZeroCapacity(ZeroCapacity),
}

impl From<PushError> for InsertError {
    fn from(value: PushError) -> Self {
        match value {
            PushError::Full(err) => InsertError::Full(err),
            PushError::ZeroCapacity(err) => InsertError::ZeroCapacity(err),
        }
    }
}
