#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(any(
    feature = "circ",
    feature = "contiguous",
    feature = "linked",
    feature = "tiered"
))]
pub mod fmt;
#[cfg(any(feature = "linked", feature = "tiered"))]
pub mod option;
pub mod panic;
pub mod result;
