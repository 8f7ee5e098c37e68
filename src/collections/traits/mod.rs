//! Capability traits describing which operations a sequence container supports.
//!
//! Each container implements only the traits it can support efficiently, so that the
//! [`adaptors`](crate::collections::adaptors) can require exactly the operations they use. A
//! [`Stack`](crate::collections::adaptors::Stack) backed by a
//! [`DynamicArray`](crate::collections::contiguous::DynamicArray) works at the back, while one
//! backed by a [`LinkedList`](crate::collections::linked::LinkedList) has to work at the front.
//!
//! | Container | Sequence | PushBack | PopBack | PushFront | PopFront | Front/BackAccess | IndexedAccess |
//! |-|-|-|-|-|-|-|-|
//! | DynamicArray | yes | yes | yes | no | no | yes | yes |
//! | FixedArray | yes | no | no | no | no | yes | yes |
//! | RingBuffer | yes | yes | yes | yes | yes | yes | yes |
//! | TieredArray | yes | yes | yes | no | no | yes | yes |
//! | SegmentedList | yes | yes | yes | yes | yes | yes | yes |
//! | LinkedList | yes | yes | no | yes | yes | yes | yes |
//! | DoublyLinkedList | yes | yes | yes | yes | yes | yes | yes |

mod impls;
pub mod sequence;

#[doc(inline)]
pub use sequence::*;
