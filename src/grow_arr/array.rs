use core::fmt;
use core::mem;
use core::ops;
use core::slice;

use super::raw_buf::RawBuf;
use crate::types::AltAllocator;
use crate::types::ErrorReason;
use crate::types::Event;
use crate::types::Global;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::LengthType;
use crate::types::NoopObserver;
use crate::types::Observer;

/// A contiguous growable array.
///
/// `GrowArr` owns one block of storage. Slots `0..len()` hold live values and
/// the rest, up to `capacity()`, are uninitialized. Growth is 1.5x, or straight
/// to the requested capacity when that is larger, and the capacity never shrinks.
///
/// Every operation that may allocate returns a `Result`. When it fails the
/// container is left exactly as it was.
///
/// `GrowArr` is move only. It is not `Clone`, a deep copy is made explicitly with
/// [`GrowArr::try_clone`].
///
/// The generics are:
/// * `A` the allocator backing the storage, `Global` unless given.
/// * `L` the type of the length, capacity and indices. Narrower types make the
///   container smaller.
/// * `O` an [`Observer`] told about growth, resizes, and the final release.
pub struct GrowArr<T, A: AltAllocator = Global, L: LengthType = usize, O: Observer = NoopObserver> {
    buf:      RawBuf<T, L>,
    len:      L,
    alloc:    A,
    observer: O,
}

impl<T> GrowArr<T> {
    /// Creates an empty array on the global allocator. Nothing is allocated.
    pub const fn new() -> Self {
        return Self::new_in(Global, NoopObserver);
    }
}

impl<T: Default> GrowArr<T> {
    /// Creates an array on the global allocator holding `len` default values.
    pub fn with_len(len: usize) -> GrowArrResult<Self> {
        return Self::with_len_in(Global, NoopObserver, len);
    }
}

impl<T: Default, O: Observer> GrowArr<T, Global, usize, O> {
    /// Like [`GrowArr::with_len`] but reports its events to `observer`.
    pub fn with_observer(observer: O, len: usize) -> GrowArrResult<Self> {
        return Self::with_len_in(Global, observer, len);
    }
}

impl<T, A: AltAllocator, L: LengthType, O: Observer> GrowArr<T, A, L, O> {
    /// Creates an empty array. Nothing is allocated until the first growth.
    pub const fn new_in(alloc: A, observer: O) -> Self {
        return Self {
            buf:      RawBuf::dangling(),
            len:      L::ZERO_VALUE,
            alloc:    alloc,
            observer: observer,
        };
    }

    /// Creates an empty array with exactly `capacity` slots.
    pub fn with_capacity_in(alloc: A, observer: O, capacity: L) -> GrowArrResult<Self> {
        let mut arr = Self::new_in(alloc, observer);
        arr.reserve(capacity)?;
        return Ok(arr);
    }

    /// Creates an array holding `len` default values.
    ///
    /// This is the same as creating an empty array and calling `resize(len)`,
    /// so the capacity afterwards is exactly `len`.
    pub fn with_len_in(alloc: A, observer: O, len: L) -> GrowArrResult<Self>
    where
        T: Default,
    {
        let mut arr = Self::new_in(alloc, observer);
        arr.resize(len)?;
        return Ok(arr);
    }

    /// Makes sure there are at least `requested` slots.
    ///
    /// Nothing happens if the capacity is already large enough. Otherwise the
    /// new capacity is `capacity + capacity / 2`, or `requested` if that is
    /// still too small. A new block is allocated, every live value is moved
    /// into it in index order, and the old block is released.
    ///
    /// The new block is obtained before any value moves. If the allocation
    /// fails the array is untouched.
    pub fn reserve(&mut self, requested: L) -> GrowArrResult<()> {
        let old_cap = self.buf.capacity();
        if requested <= old_cap {
            return Ok(());
        }

        let new_cap = old_cap.grown().max(requested);
        let mut fresh = RawBuf::<T, L>::allocate_in(&self.alloc, new_cap)?;

        let len = self.len.as_usize();
        for idx in 0..len {
            // Safety: idx is live in the old block and both blocks hold at least len slots.
            unsafe {
                let value = self.buf.take_at(idx);
                fresh.construct_at(idx, value);
            }
        }

        let old = mem::replace(&mut self.buf, fresh);
        // Safety: every live value was moved out above.
        unsafe { old.release_in(&self.alloc) };

        self.observer.notify(Event::Grow {
            from:      old_cap.as_usize(),
            to:        new_cap.as_usize(),
            relocated: len,
        });
        return Ok(());
    }

    /// Sets the length to `new_len`.
    ///
    /// Growing fills the new slots with `T::default()`. Shrinking drops exactly
    /// the values past `new_len`. The capacity never shrinks.
    pub fn resize(&mut self, new_len: L) -> GrowArrResult<()>
    where
        T: Default,
    {
        return self.resize_with(new_len, T::default);
    }

    /// Like `resize` but fills new slots with values made by `f`.
    ///
    /// If `f` panics, the values it already produced stay in the array.
    pub fn resize_with<F>(&mut self, new_len: L, mut f: F) -> GrowArrResult<()>
    where
        F: FnMut() -> T,
    {
        let old_len = self.len;
        if new_len == old_len {
            return Ok(());
        }
        self.reserve(new_len)?;

        if new_len > old_len {
            for idx in old_len.as_usize()..new_len.as_usize() {
                let value = f();
                // Safety: idx < new_len <= capacity and is past the live values.
                unsafe { self.buf.construct_at(idx, value) };
                self.len += L::ONE_VALUE;
            }
        } else {
            self.shrink_len(new_len);
        }

        self.notify_resize(old_len);
        return Ok(());
    }

    /// Like `resize_with`, but the values are made by a fallible `f`.
    ///
    /// When `f` fails, every value this call produced is dropped, the
    /// length goes back to what it was, and the error is returned. Capacity
    /// that was already reserved is kept.
    pub fn try_resize_with<F, E>(&mut self, new_len: L, mut f: F) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
        E: From<GrowArrErr>,
    {
        let old_len = self.len;
        if new_len == old_len {
            return Ok(());
        }
        self.reserve(new_len)?;

        if new_len > old_len {
            for idx in old_len.as_usize()..new_len.as_usize() {
                let value = match f() {
                    Ok(value) => value,
                    Err(err) => {
                        self.shrink_len(old_len);
                        return Err(err);
                    }
                };
                // Safety: idx < new_len <= capacity and is past the live values.
                unsafe { self.buf.construct_at(idx, value) };
                self.len += L::ONE_VALUE;
            }
        } else {
            self.shrink_len(new_len);
        }

        self.notify_resize(old_len);
        return Ok(());
    }

    /// Drops every value at or past `len`. Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: L) {
        self.shrink_len(len);
    }

    fn shrink_len(&mut self, new_len: L) {
        let old_len = self.len;
        if new_len >= old_len {
            return;
        }
        // The length is lowered first so a panicking drop can't cause a double drop.
        self.len = new_len;
        unsafe { self.buf.destroy_range(new_len.as_usize(), old_len.as_usize()) };
    }

    fn notify_resize(&self, old_len: L) {
        self.observer.notify(Event::Resize {
            from:     old_len.as_usize(),
            to:       self.len.as_usize(),
            capacity: self.buf.capacity().as_usize(),
        });
    }

    /// Reserves room for one more value and returns what the length will be
    /// once it is written.
    fn reserve_one(&mut self) -> GrowArrResult<L> {
        let Some(new_len) = self.len.checked_add(L::ONE_VALUE) else {
            return Err(GrowArrErr::new(ErrorReason::CapacityOverflow));
        };
        self.reserve(new_len)?;
        return Ok(new_len);
    }

    /// Appends `value` to the end, growing if needed.
    ///
    /// Appending is amortized O(1).
    pub fn emplace_back(&mut self, value: T) -> GrowArrResult<()> {
        let new_len = self.reserve_one()?;
        // Safety: reserve_one made slot `len` available.
        unsafe { self.buf.construct_at(self.len.as_usize(), value) };
        self.len = new_len;
        return Ok(());
    }

    /// Appends the value made by `f`.
    ///
    /// The room is reserved before `f` runs. If `f` panics the length is
    /// unchanged, though the capacity may have grown.
    pub fn emplace_back_with<F>(&mut self, f: F) -> GrowArrResult<()>
    where
        F: FnOnce() -> T,
    {
        let new_len = self.reserve_one()?;
        let value = f();
        unsafe { self.buf.construct_at(self.len.as_usize(), value) };
        self.len = new_len;
        return Ok(());
    }

    /// Appends the value made by a fallible `f`.
    ///
    /// If `f` fails the length is unchanged and its error is returned. The
    /// capacity may still have grown.
    pub fn try_emplace_back_with<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<GrowArrErr>,
    {
        let new_len = self.reserve_one()?;
        let value = f()?;
        unsafe { self.buf.construct_at(self.len.as_usize(), value) };
        self.len = new_len;
        return Ok(());
    }

    /// Moves the last value out of the array. The capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == L::ZERO_VALUE {
            return None;
        }
        self.len -= L::ONE_VALUE;
        // Safety: the old last slot was live and is now past the length.
        return Some(unsafe { self.buf.take_at(self.len.as_usize()) });
    }

    /// The number of slots the current block holds, live or not.
    #[inline]
    pub const fn capacity(&self) -> L {
        return self.buf.capacity();
    }

    /// The number of live values.
    #[inline]
    pub const fn len(&self) -> L {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == L::ZERO_VALUE;
    }

    /// Returns the value at `idx` without any bounds check.
    ///
    /// # Safety
    /// `idx` must be less than `len()`. Debug builds assert this.
    #[inline]
    pub unsafe fn at(&mut self, idx: L) -> &mut T {
        debug_assert!(idx < self.len, "index {idx:?} out of bounds for length {:?}", self.len);
        return unsafe { &mut *self.buf.as_ptr().add(idx.as_usize()) };
    }

    /// Returns the last value without checking the array is non-empty.
    ///
    /// # Safety
    /// The array must not be empty. Debug builds assert this.
    #[inline]
    pub unsafe fn back_unchecked(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_unchecked on an empty array");
        let last = self.len.as_usize().wrapping_sub(1);
        return unsafe { &mut *self.buf.as_ptr().add(last) };
    }

    #[inline]
    pub fn get(&self, idx: L) -> Option<&T> {
        if idx >= self.len {
            return None;
        }
        return Some(unsafe { &*self.buf.as_ptr().add(idx.as_usize()) });
    }

    #[inline]
    pub fn get_mut(&mut self, idx: L) -> Option<&mut T> {
        if idx >= self.len {
            return None;
        }
        return Some(unsafe { &mut *self.buf.as_ptr().add(idx.as_usize()) });
    }

    /// The last value, or `None` if the array is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        return self.as_slice().last();
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        return self.as_mut_slice().last_mut();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len.as_usize()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len.as_usize()) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.buf.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.buf.as_ptr();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        return self.as_mut_slice().iter_mut();
    }

    pub fn observer(&self) -> &O {
        return &self.observer;
    }

    /// Makes a deep copy with a block of exactly `len()` slots.
    ///
    /// The allocator and the observer are cloned too.
    pub fn try_clone(&self) -> GrowArrResult<Self>
    where
        T: Clone,
        A: Clone,
        O: Clone,
    {
        let mut arr = Self::with_capacity_in(self.alloc.clone(), self.observer.clone(), self.len)?;
        for item in self.iter() {
            arr.emplace_back(item.clone())?;
        }
        return Ok(arr);
    }
}

impl<T, A: AltAllocator, L: LengthType, O: Observer> Drop for GrowArr<T, A, L, O> {
    fn drop(&mut self) {
        let len = self.len.as_usize();
        self.len = L::ZERO_VALUE;
        // Safety: 0..len are exactly the live slots.
        unsafe { self.buf.destroy_range(0, len) };

        let buf = mem::replace(&mut self.buf, RawBuf::dangling());
        let released = buf.is_allocated();
        let capacity = buf.capacity().as_usize();
        // Safety: nothing is live anymore and the block came from self.alloc.
        unsafe { buf.release_in(&self.alloc) };

        if released {
            self.observer.notify(Event::Release { capacity: capacity });
        }
    }
}

impl<T, A: AltAllocator, L: LengthType, O: Observer> ops::Index<L> for GrowArr<T, A, L, O> {
    type Output = T;

    #[inline]
    fn index(&self, idx: L) -> &T {
        let Some(item) = self.get(idx) else {
            panic!("index {idx:?} out of bounds for length {:?}", self.len);
        };
        return item;
    }
}

impl<T, A: AltAllocator, L: LengthType, O: Observer> ops::IndexMut<L> for GrowArr<T, A, L, O> {
    #[inline]
    fn index_mut(&mut self, idx: L) -> &mut T {
        let len = self.len;
        let Some(item) = self.get_mut(idx) else {
            panic!("index {idx:?} out of bounds for length {len:?}");
        };
        return item;
    }
}

impl<T: fmt::Debug, A: AltAllocator, L: LengthType, O: Observer> fmt::Debug for GrowArr<T, A, L, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: PartialEq, A: AltAllocator, L: LengthType, O: Observer> PartialEq<[T]> for GrowArr<T, A, L, O> {
    fn eq(&self, other: &[T]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq, A: AltAllocator, L: LengthType, O: Observer, const N: usize> PartialEq<[T; N]>
    for GrowArr<T, A, L, O>
{
    fn eq(&self, other: &[T; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

/// Arrays compare by their live values only. The allocator, length type,
/// observer, and capacity may all differ.
impl<T, A1, L1, O1, A2, L2, O2> PartialEq<GrowArr<T, A2, L2, O2>> for GrowArr<T, A1, L1, O1>
where
    T: PartialEq,
    A1: AltAllocator,
    L1: LengthType,
    O1: Observer,
    A2: AltAllocator,
    L2: LengthType,
    O2: Observer,
{
    fn eq(&self, other: &GrowArr<T, A2, L2, O2>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: AltAllocator, L: LengthType, O: Observer> Eq for GrowArr<T, A, L, O> {}

impl<'a, T, A: AltAllocator, L: LengthType, O: Observer> IntoIterator for &'a GrowArr<T, A, L, O> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, T, A: AltAllocator, L: LengthType, O: Observer> IntoIterator for &'a mut GrowArr<T, A, L, O> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}

// Safety: the block is owned exclusively, so sending the array sends its values.
unsafe impl<T: Send, A: AltAllocator + Send, L: LengthType + Send, O: Observer + Send> Send for GrowArr<T, A, L, O> {}

// Safety: shared access only ever hands out shared references to the values.
unsafe impl<T: Sync, A: AltAllocator + Sync, L: LengthType + Sync, O: Observer + Sync> Sync for GrowArr<T, A, L, O> {}
