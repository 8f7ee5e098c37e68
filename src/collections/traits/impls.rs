//! Capability implementations for each container, following the table in the module docs.
//!
//! Every method forwards to the inherent method of the same meaning, named by path so that it
//! can't resolve back to the trait.

/// Implements every capability for a list that can grow without limit at either end.
#[allow(unused_macros)]
macro_rules! double_ended {
    ($name:ident) => {
        impl<T> Sequence for $name<T> {
            fn len(&self) -> usize {
                $name::len(self)
            }
        }

        impl<T> IndexedAccess<T> for $name<T> {
            fn get(&self, index: usize) -> Option<&T> {
                $name::get(self, index)
            }

            fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                $name::get_mut(self, index)
            }
        }

        impl<T> PushBack<T> for $name<T> {
            fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
                Ok($name::push_back(self, value))
            }
        }

        impl<T> PushFront<T> for $name<T> {
            fn try_push_front(&mut self, value: T) -> Result<&mut T, PushError> {
                Ok($name::push_front(self, value))
            }
        }

        impl<T> PopBack<T> for $name<T> {
            fn pop_back(&mut self) -> Option<T> {
                $name::pop_back(self)
            }
        }

        impl<T> PopFront<T> for $name<T> {
            fn pop_front(&mut self) -> Option<T> {
                $name::pop_front(self)
            }
        }

        impl<T> FrontAccess<T> for $name<T> {
            fn front(&self) -> Option<&T> {
                $name::front(self)
            }

            fn front_mut(&mut self) -> Option<&mut T> {
                $name::front_mut(self)
            }
        }

        impl<T> BackAccess<T> for $name<T> {
            fn back(&self) -> Option<&T> {
                $name::back(self)
            }

            fn back_mut(&mut self) -> Option<&mut T> {
                $name::back_mut(self)
            }
        }
    };
}

#[cfg(feature = "contiguous")]
mod contiguous {
    use crate::collections::contiguous::{DynamicArray, FixedArray};
    use crate::collections::traits::{
        BackAccess, FrontAccess, IndexedAccess, PopBack, PushBack, Sequence,
    };
    use crate::util::error::PushError;

    impl<T> Sequence for DynamicArray<T> {
        fn len(&self) -> usize {
            DynamicArray::len(self)
        }
    }

    impl<T> IndexedAccess<T> for DynamicArray<T> {
        fn get(&self, index: usize) -> Option<&T> {
            <[T]>::get(self, index)
        }

        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            <[T]>::get_mut(self, index)
        }
    }

    impl<T> PushBack<T> for DynamicArray<T> {
        fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
            Ok(DynamicArray::push(self, value))
        }
    }

    impl<T> PopBack<T> for DynamicArray<T> {
        fn pop_back(&mut self) -> Option<T> {
            DynamicArray::pop(self)
        }
    }

    impl<T> FrontAccess<T> for DynamicArray<T> {
        fn front(&self) -> Option<&T> {
            DynamicArray::front(self)
        }

        fn front_mut(&mut self) -> Option<&mut T> {
            DynamicArray::front_mut(self)
        }
    }

    impl<T> BackAccess<T> for DynamicArray<T> {
        fn back(&self) -> Option<&T> {
            DynamicArray::back(self)
        }

        fn back_mut(&mut self) -> Option<&mut T> {
            DynamicArray::back_mut(self)
        }
    }

    impl<T> Sequence for FixedArray<T> {
        fn len(&self) -> usize {
            FixedArray::len(self)
        }
    }

    impl<T> IndexedAccess<T> for FixedArray<T> {
        fn get(&self, index: usize) -> Option<&T> {
            <[T]>::get(self, index)
        }

        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            <[T]>::get_mut(self, index)
        }
    }

    impl<T> FrontAccess<T> for FixedArray<T> {
        fn front(&self) -> Option<&T> {
            <[T]>::first(self)
        }

        fn front_mut(&mut self) -> Option<&mut T> {
            <[T]>::first_mut(self)
        }
    }

    impl<T> BackAccess<T> for FixedArray<T> {
        fn back(&self) -> Option<&T> {
            <[T]>::last(self)
        }

        fn back_mut(&mut self) -> Option<&mut T> {
            <[T]>::last_mut(self)
        }
    }
}

#[cfg(feature = "tiered")]
mod tiered {
    use crate::collections::tiered::TieredArray;
    use crate::collections::traits::{
        BackAccess, FrontAccess, IndexedAccess, PopBack, PushBack, Sequence,
    };
    use crate::util::error::PushError;

    impl<T> Sequence for TieredArray<T> {
        fn len(&self) -> usize {
            TieredArray::len(self)
        }
    }

    impl<T> IndexedAccess<T> for TieredArray<T> {
        fn get(&self, index: usize) -> Option<&T> {
            TieredArray::get(self, index)
        }

        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            TieredArray::get_mut(self, index)
        }
    }

    impl<T> PushBack<T> for TieredArray<T> {
        fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
            Ok(TieredArray::push(self, value))
        }
    }

    impl<T> PopBack<T> for TieredArray<T> {
        fn pop_back(&mut self) -> Option<T> {
            TieredArray::pop(self)
        }
    }

    impl<T> FrontAccess<T> for TieredArray<T> {
        fn front(&self) -> Option<&T> {
            TieredArray::front(self)
        }

        fn front_mut(&mut self) -> Option<&mut T> {
            TieredArray::front_mut(self)
        }
    }

    impl<T> BackAccess<T> for TieredArray<T> {
        fn back(&self) -> Option<&T> {
            TieredArray::back(self)
        }

        fn back_mut(&mut self) -> Option<&mut T> {
            TieredArray::back_mut(self)
        }
    }
}

#[cfg(feature = "linked")]
mod linked {
    use crate::collections::linked::{DoublyLinkedList, LinkedList};
    use crate::collections::traits::{
        BackAccess, FrontAccess, IndexedAccess, PopBack, PopFront, PushBack, PushFront, Sequence,
    };
    use crate::util::error::PushError;

    impl<T> Sequence for LinkedList<T> {
        fn len(&self) -> usize {
            LinkedList::len(self)
        }
    }

    impl<T> IndexedAccess<T> for LinkedList<T> {
        fn get(&self, index: usize) -> Option<&T> {
            LinkedList::get(self, index)
        }

        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            LinkedList::get_mut(self, index)
        }
    }

    impl<T> PushBack<T> for LinkedList<T> {
        fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
            Ok(LinkedList::push_back(self, value))
        }
    }

    impl<T> PushFront<T> for LinkedList<T> {
        fn try_push_front(&mut self, value: T) -> Result<&mut T, PushError> {
            Ok(LinkedList::push_front(self, value))
        }
    }

    impl<T> PopFront<T> for LinkedList<T> {
        fn pop_front(&mut self) -> Option<T> {
            LinkedList::pop_front(self)
        }
    }

    impl<T> FrontAccess<T> for LinkedList<T> {
        fn front(&self) -> Option<&T> {
            LinkedList::front(self)
        }

        fn front_mut(&mut self) -> Option<&mut T> {
            LinkedList::front_mut(self)
        }
    }

    impl<T> BackAccess<T> for LinkedList<T> {
        fn back(&self) -> Option<&T> {
            LinkedList::back(self)
        }

        fn back_mut(&mut self) -> Option<&mut T> {
            LinkedList::back_mut(self)
        }
    }

    double_ended!(DoublyLinkedList);
}

#[cfg(feature = "circ")]
mod circ {
    use crate::collections::circ::RingBuffer;
    use crate::collections::traits::{
        BackAccess, FrontAccess, IndexedAccess, PopBack, PopFront, PushBack, PushFront, Sequence,
    };
    use crate::util::error::PushError;

    impl<T> Sequence for RingBuffer<T> {
        fn len(&self) -> usize {
            RingBuffer::len(self)
        }
    }

    impl<T> IndexedAccess<T> for RingBuffer<T> {
        fn get(&self, index: usize) -> Option<&T> {
            RingBuffer::get(self, index)
        }

        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            RingBuffer::get_mut(self, index)
        }
    }

    impl<T> PushBack<T> for RingBuffer<T> {
        fn try_push_back(&mut self, value: T) -> Result<&mut T, PushError> {
            RingBuffer::try_push_back(self, value)
        }
    }

    impl<T> PushFront<T> for RingBuffer<T> {
        fn try_push_front(&mut self, value: T) -> Result<&mut T, PushError> {
            RingBuffer::try_push_front(self, value)
        }
    }

    impl<T> PopBack<T> for RingBuffer<T> {
        fn pop_back(&mut self) -> Option<T> {
            RingBuffer::pop_back(self)
        }
    }

    impl<T> PopFront<T> for RingBuffer<T> {
        fn pop_front(&mut self) -> Option<T> {
            RingBuffer::pop_front(self)
        }
    }

    impl<T> FrontAccess<T> for RingBuffer<T> {
        fn front(&self) -> Option<&T> {
            RingBuffer::front(self)
        }

        fn front_mut(&mut self) -> Option<&mut T> {
            RingBuffer::front_mut(self)
        }
    }

    impl<T> BackAccess<T> for RingBuffer<T> {
        fn back(&self) -> Option<&T> {
            RingBuffer::back(self)
        }

        fn back_mut(&mut self) -> Option<&mut T> {
            RingBuffer::back_mut(self)
        }
    }
}

#[cfg(feature = "segmented")]
mod segmented {
    use crate::collections::segmented::SegmentedList;
    use crate::collections::traits::{
        BackAccess, FrontAccess, IndexedAccess, PopBack, PopFront, PushBack, PushFront, Sequence,
    };
    use crate::util::error::PushError;

    double_ended!(SegmentedList);
}
