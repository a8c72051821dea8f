use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr;
use core::ptr::NonNull;

use crate::types::AltAllocator;
use crate::types::ErrorReason;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::LengthType;

fn layout_array<T>(length: usize) -> GrowArrResult<Layout> {
    let lay = Layout::new::<T>().pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, lay.align()) else {
        return Err(GrowArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// A fixed size block of uninitialized slots for `capacity` values of `T`.
///
/// `RawBuf` knows nothing about which slots are live, that is tracked by the
/// owner. It does not own its allocator either, so it has no `Drop`. The owner
/// must hand it back to the allocator it came from with `release_in`.
///
/// When `capacity` is zero, or `T` is zero sized, no block is allocated and the
/// pointer is dangling.
pub(crate) struct RawBuf<T, L: LengthType> {
    ptr:      NonNull<T>,
    capacity: L,
    _ph:      PhantomData<T>,
}

impl<T, L: LengthType> RawBuf<T, L> {
    pub(crate) const fn dangling() -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: L::ZERO_VALUE,
            _ph:      PhantomData,
        };
    }

    /// Gets a fresh block with room for exactly `capacity` values.
    ///
    /// Nothing is allocated for an empty layout.
    pub(crate) fn allocate_in<A: AltAllocator>(alloc: &A, capacity: L) -> GrowArrResult<Self> {
        let Some(cap) = capacity.to_usize() else {
            return Err(GrowArrErr::new(ErrorReason::UsizeOverflow));
        };
        let layout = layout_array::<T>(cap)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr:      NonNull::dangling(),
                capacity: capacity,
                _ph:      PhantomData,
            });
        }

        let Ok(ptr) = alloc.allocate(layout) else {
            return Err(GrowArrErr::new(ErrorReason::AllocFailure));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            _ph:      PhantomData,
        });
    }

    /// Hands the block back to `alloc`.
    ///
    /// # Safety
    /// `alloc` must be the allocator the block came from, and no slot may
    /// still hold a live value.
    pub(crate) unsafe fn release_in<A: AltAllocator>(self, alloc: &A) {
        let Ok(layout) = layout_array::<T>(self.capacity.as_usize()) else {
            // The same layout was built when the block was allocated.
            return;
        };
        if layout.size() == 0 {
            return;
        }
        unsafe { alloc.deallocate(self.ptr.cast(), layout) };
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    /// True when a real block backs this buffer.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        return self.capacity != L::ZERO_VALUE && size_of::<T>() != 0;
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        return self.ptr.as_ptr();
    }

    /// Moves `value` into slot `idx`, making it live.
    ///
    /// # Safety
    /// `idx` must be below the capacity and the slot must not be live.
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, idx: usize, value: T) {
        debug_assert!(idx < self.capacity.as_usize());
        unsafe { ptr::write(self.as_ptr().add(idx), value) };
    }

    /// Moves the value out of slot `idx`, leaving the slot uninitialized.
    ///
    /// # Safety
    /// `idx` must be below the capacity and the slot must be live.
    #[inline]
    pub(crate) unsafe fn take_at(&mut self, idx: usize) -> T {
        debug_assert!(idx < self.capacity.as_usize());
        return unsafe { ptr::read(self.as_ptr().add(idx)) };
    }

    /// Drops the values in slots `start..end` in index order.
    ///
    /// # Safety
    /// `start..end` must be within the capacity and every slot in it must be
    /// live. They are all uninitialized afterwards.
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.capacity.as_usize());
        let slice = ptr::slice_from_raw_parts_mut(unsafe { self.as_ptr().add(start) }, end - start);
        unsafe { ptr::drop_in_place(slice) };
    }
}
