use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};
use std::slice;

#[cfg(debug_assertions)]
use std::iter;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed number of allocated but uninitialized slots for values of type `T`.
///
/// RawStorage owns its allocation, but never constructs or destroys a `T` on its own. Each slot is
/// either vacant or occupied, and it is entirely up to the owner to track which is which, using
/// [`construct`](RawStorage::construct) to fill a slot and [`destroy`](RawStorage::destroy) or
/// [`take`](RawStorage::take) to empty it again. Dropping a RawStorage deallocates the block
/// without dropping anything inside it, so any slot that is still occupied at that point is
/// leaked.
///
/// No bounds checks are performed by this type, all of its accessors trust their callers. In
/// debug builds an occupancy bitmap is kept alongside the allocation and every unsafe accessor
/// asserts that it is being used on a slot in the right state.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the RawStorage.
///
/// | Method | Complexity |
/// |-|-|
/// | `construct` | `O(1)` |
/// | `destroy` | `O(1)` |
/// | `take` | `O(1)` |
/// | `at` | `O(1)` |
/// | `relocate` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `rotate_left` | `O(n)` |
///
/// \* The global allocator might be able to resize the allocation in place.
pub struct RawStorage<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) size: usize,
    #[cfg(debug_assertions)]
    pub(crate) occupied: Box<[bool]>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Allocates a new RawStorage with `size` vacant slots.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::raw::RawStorage;
    /// let mut storage = RawStorage::new(3);
    /// assert_eq!(storage.size(), 3);
    ///
    /// // SAFETY: Slot 1 is in bounds and vacant.
    /// unsafe { storage.construct(1, String::from("hello")); }
    /// // SAFETY: Slot 1 was just constructed.
    /// assert_eq!(unsafe { storage.take(1) }, "hello");
    /// ```
    pub fn new(size: usize) -> RawStorage<T> {
        Self::try_new(size).throw()
    }

    /// Allocates a new RawStorage with `size` vacant slots, returning an [`Err`] rather than
    /// panicking if the layout would be too large.
    pub fn try_new(size: usize) -> Result<RawStorage<T>, CapacityOverflow> {
        let layout = Self::make_layout(size)?;

        Ok(RawStorage {
            ptr: Self::make_ptr(layout),
            size,
            #[cfg(debug_assertions)]
            occupied: iter::repeat_n(false, size).collect(),
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the RawStorage, occupied or not.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns a raw pointer to the first slot.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    /// Returns a raw mutable pointer to the first slot.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Moves `value` into the slot at `index`, returning a reference to it.
    ///
    /// # Safety
    /// `index` must be less than [`size`](RawStorage::size) and the slot must be vacant.
    /// Constructing into an occupied slot leaks the previous value and is asserted against in
    /// debug builds.
    pub unsafe fn construct(&mut self, index: usize, value: T) -> &mut T {
        self.debug_mark(index, true);
        // SAFETY: The caller guarantees that index is in bounds of the allocation.
        unsafe { self.ptr.add(index).as_mut().write(value) }
    }

    /// Drops the value in the slot at `index` in place, leaving the slot vacant.
    ///
    /// # Safety
    /// `index` must be less than [`size`](RawStorage::size) and the slot must be occupied.
    pub unsafe fn destroy(&mut self, index: usize) {
        self.debug_mark(index, false);
        // SAFETY: The caller guarantees that index is in bounds and initialized, so the value is
        // valid to drop. The slot is considered vacant from now on.
        unsafe { self.ptr.add(index).as_mut().assume_init_drop() }
    }

    /// Moves the value out of the slot at `index`, leaving the slot vacant.
    ///
    /// # Safety
    /// `index` must be less than [`size`](RawStorage::size) and the slot must be occupied.
    pub unsafe fn take(&mut self, index: usize) -> T {
        self.debug_mark(index, false);
        // SAFETY: The caller guarantees that index is in bounds and initialized. We are making a
        // bitwise copy of the value and from now on treating the slot as vacant, which is as close
        // as we can get to moving the value out.
        unsafe { self.ptr.add(index).read().assume_init() }
    }

    /// Returns a reference to the value in the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than [`size`](RawStorage::size) and the slot must be occupied.
    pub unsafe fn at(&self, index: usize) -> &T {
        self.debug_check(index, true);
        // SAFETY: The caller guarantees that index is in bounds and initialized.
        unsafe { self.ptr.add(index).as_ref().assume_init_ref() }
    }

    /// Returns a mutable reference to the value in the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than [`size`](RawStorage::size) and the slot must be occupied.
    pub unsafe fn at_mut(&mut self, index: usize) -> &mut T {
        self.debug_check(index, true);
        // SAFETY: The caller guarantees that index is in bounds and initialized.
        unsafe { self.ptr.add(index).as_mut().assume_init_mut() }
    }

    /// Moves the value in slot `src` into slot `dst`, leaving `src` vacant. Relocating a slot onto
    /// itself does nothing.
    ///
    /// # Safety
    /// Both indices must be less than [`size`](RawStorage::size), `src` must be occupied and `dst`
    /// must be vacant, unless they are the same slot.
    pub unsafe fn relocate(&mut self, src: usize, dst: usize) {
        if src == dst {
            self.debug_check(src, true);
            return;
        }

        self.debug_mark(src, false);
        self.debug_mark(dst, true);
        // SAFETY: Both indices are in bounds and distinct, so the slots don't overlap. The value
        // in src is bitwise moved and src is considered vacant from now on.
        unsafe {
            ptr::copy_nonoverlapping(
                self.ptr.add(src).as_ptr().cast_const(),
                self.ptr.add(dst).as_ptr(),
                1,
            );
        }
    }

    /// Returns a slice over `len` occupied slots, starting at `start`.
    ///
    /// # Safety
    /// `start + len` must not exceed [`size`](RawStorage::size) and every slot in the range must be
    /// occupied.
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        #[cfg(debug_assertions)]
        debug_assert!(
            self.occupied[start..start + len].iter().all(|o| *o),
            "All slots within a slice should be occupied."
        );
        // SAFETY: The range is in bounds of a single allocation that is properly aligned, and all
        // of its values are initialized. The borrow checker prevents mutation throughout 'a.
        unsafe { slice::from_raw_parts(self.ptr.add(start).as_ptr().cast_const().cast(), len) }
    }

    /// Returns a mutable slice over `len` occupied slots, starting at `start`.
    ///
    /// # Safety
    /// `start + len` must not exceed [`size`](RawStorage::size) and every slot in the range must be
    /// occupied.
    pub unsafe fn slice_mut(&mut self, start: usize, len: usize) -> &mut [T] {
        #[cfg(debug_assertions)]
        debug_assert!(
            self.occupied[start..start + len].iter().all(|o| *o),
            "All slots within a slice should be occupied."
        );
        // SAFETY: The range is in bounds of a single allocation that is properly aligned, and all
        // of its values are initialized. The borrow checker prevents access throughout 'a.
        unsafe { slice::from_raw_parts_mut(self.ptr.add(start).as_ptr().cast(), len) }
    }

    /// Rotates every slot left by `mid`, so that the slot previously at `mid` becomes the first.
    /// Occupied slots stay occupied and vacant slots stay vacant, they just move together.
    ///
    /// # Panics
    /// Panics if `mid` is greater than [`size`](RawStorage::size).
    pub fn rotate_left(&mut self, mid: usize) {
        // SAFETY: MaybeUninit<T> has no validity requirements, so the whole allocation can always
        // be viewed as a slice of them. Rotating only moves values bitwise.
        let slots = unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) };
        slots.rotate_left(mid);

        #[cfg(debug_assertions)]
        self.occupied.rotate_left(mid);
    }

    /// Resizes the allocation to hold `new_size` slots. Slots below both the old and new size keep
    /// their state, any additional slots are vacant.
    ///
    /// # Safety
    /// All slots at or above `new_size` must be vacant, otherwise their values are leaked.
    ///
    /// # Panics
    /// Panics if the memory layout size of the new allocation would exceed [`isize::MAX`].
    pub unsafe fn realloc(&mut self, new_size: usize) {
        let old_layout = Self::make_layout(self.size).throw();
        let new_layout = Self::make_layout(new_size).throw();

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and matching sizes never need to touch the allocator.
            (old, new) if old == new => self.ptr,
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated with old_layout, which has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };

                NonNull::new(raw_ptr.cast()).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                )
            },
        };

        #[cfg(debug_assertions)]
        {
            let keep = self.size.min(new_size);
            debug_assert!(
                self.occupied[keep..].iter().all(|o| !o),
                "Slots being deallocated should be vacant."
            );

            let mut occupied: Box<[bool]> = iter::repeat_n(false, new_size).collect();
            occupied[..keep].copy_from_slice(&self.occupied[..keep]);
            self.occupied = occupied;
        }

        self.ptr = new_ptr;
        self.size = new_size;
    }

    /// Returns true if the slot at `index` is currently occupied. Only available in debug builds,
    /// where occupancy is tracked.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[cfg(debug_assertions)]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied[index]
    }

    /// A helper function to create a [`Layout`] for `size` slots.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    fn debug_mark(&mut self, index: usize, occupied: bool) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(index < self.size, "Slot {index} is out of bounds of {}.", self.size);
            debug_assert!(
                self.occupied[index] != occupied,
                "Slot {index} is already {}.",
                if occupied { "occupied" } else { "vacant" },
            );
            self.occupied[index] = occupied;
        }
    }

    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    fn debug_check(&self, index: usize, occupied: bool) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(index < self.size, "Slot {index} is out of bounds of {}.", self.size);
            debug_assert!(
                self.occupied[index] == occupied,
                "Slot {index} should be {}.",
                if occupied { "occupied" } else { "vacant" },
            );
        }
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        if !std::thread::panicking() {
            debug_assert!(
                self.occupied.iter().all(|o| !o),
                "All slots should be vacant when dropping storage."
            );
        }

        // The layout was valid when allocated, so it is valid now.
        if let Ok(layout) = Self::make_layout(self.size)
            && layout.size() != 0
        {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: RawStorage uniquely owns its allocation, so it is safe to send when T is.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: RawStorage only hands out shared references through &self, so no interior mutability
// occurs.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> Debug for RawStorage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("RawStorage");
        debug.field("size", &self.size);
        #[cfg(debug_assertions)]
        debug.field("occupied", &self.occupied.iter().filter(|o| **o).count());
        debug.finish()
    }
}
