use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::DynamicArray;
use crate::collections::raw::RawStorage;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A contiguous collection with a length that is fixed when it is created, based on
/// [`RawStorage<T>`]. Similar to a [`Box<[T]>`](Box<T>).
///
/// Every slot of the underlying storage is occupied for the whole life of the FixedArray, so
/// elements can be read and replaced but never added or removed. A FixedArray can be moved
/// cheaply and cloned element by element. [`FixedArray::default`] produces an empty array, which
/// is also what a FixedArray is left as after being taken with [`mem::take`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the FixedArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `sized` | `O(n)` |
/// | `from_fn` | `O(n)` |
/// | `from(DynamicArray)` | `O(1)`*, `O(n)` |
///
/// \* Converting a DynamicArray that has no spare capacity doesn't reallocate.
pub struct FixedArray<T> {
    pub(crate) storage: RawStorage<T>,
}

impl<T> FixedArray<T> {
    /// Creates a new FixedArray with length 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::contiguous::FixedArray;
    /// let arr: FixedArray<u8> = FixedArray::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> FixedArray<T> {
        FixedArray {
            storage: RawStorage::new(0),
        }
    }

    /// Creates a new FixedArray of length `len`, calling `f` with each index in turn to produce
    /// the element stored there.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`]. If `f` panics, the elements that were
    /// already produced are dropped.
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::contiguous::FixedArray;
    /// let arr = FixedArray::from_fn(4, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, f: F) -> FixedArray<T> {
        Self::try_from_fn(len, f).throw()
    }

    /// Creates a new FixedArray of length `len` using `f`, returning an [`Err`] rather than
    /// panicking if the allocation would be too large.
    pub fn try_from_fn<F: FnMut(usize) -> T>(
        len: usize,
        mut f: F,
    ) -> Result<FixedArray<T>, CapacityOverflow> {
        // Building through a DynamicArray drops the constructed prefix if f panics.
        let mut arr = DynamicArray {
            storage: RawStorage::try_new(len)?,
            len: 0,
        };
        for i in 0..len {
            arr.push(f(i));
        }
        Ok(FixedArray::from(arr))
    }

    /// Returns the length of the FixedArray.
    pub const fn len(&self) -> usize {
        self.storage.size()
    }

    /// Returns true if the FixedArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at the provided index, or an [`Err`] if it is out of
    /// bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at the provided index, or an [`Err`] if it is
    /// out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Replaces the element at the provided index with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index with `new_value`, returning an [`Err`] rather
    /// than panicking if the index is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Converts the FixedArray into a [`DynamicArray`] holding the same elements, with capacity
    /// equal to its length. The allocation is reused.
    pub fn into_dynamic(mut self) -> DynamicArray<T> {
        let len = self.len();
        // The FixedArray is left with empty storage, so dropping it destroys nothing.
        DynamicArray {
            storage: mem::take(&mut self.storage),
            len,
        }
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Default> FixedArray<T> {
    /// Creates a new FixedArray of length `len`, with every element set to the default value of
    /// `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_collections::collections::contiguous::FixedArray;
    /// let arr: FixedArray<u8> = FixedArray::sized(3);
    /// assert_eq!(&*arr, &[0, 0, 0]);
    /// ```
    pub fn sized(len: usize) -> FixedArray<T> {
        Self::from_fn(len, |_| T::default())
    }
}

impl<T> From<DynamicArray<T>> for FixedArray<T> {
    /// Freezes a DynamicArray, releasing any spare capacity first.
    fn from(mut value: DynamicArray<T>) -> Self {
        value.shrink_to_fit();
        // The array is left with no elements, so dropping it only drops the empty storage.
        value.len = 0;
        FixedArray {
            storage: mem::take(&mut value.storage),
        }
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        FixedArray::from(value.into_iter().collect::<DynamicArray<T>>())
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for FixedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for FixedArray<T> {
    fn drop(&mut self) {
        for i in 0..self.len() {
            // SAFETY: Every slot of the storage is occupied.
            unsafe { self.storage.destroy(i); }
        }
    }
}

impl<T> Deref for FixedArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Every slot of the storage is occupied.
        unsafe { self.storage.slice(0, self.len()) }
    }
}

impl<T> DerefMut for FixedArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Every slot of the storage is occupied.
        unsafe { self.storage.slice_mut(0, self.len()) }
    }
}

impl<T> AsRef<[T]> for FixedArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for FixedArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for FixedArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for FixedArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        FixedArray::from_fn(self.len(), |i| self[i].clone())
    }
}

impl<T: PartialEq> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for FixedArray<T> {}

impl<T: Hash> Hash for FixedArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for FixedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for FixedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
