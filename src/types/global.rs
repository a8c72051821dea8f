use alloc::alloc::alloc;
use alloc::alloc::dealloc;
use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use super::AltAllocator;

/// The global heap, reached through `alloc::alloc::alloc` and `dealloc`.
///
/// This is the allocation strategy every `GrowArr` uses unless told
/// otherwise.
#[derive(Debug, Default, Copy, Clone)]
pub struct Global;

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // Zero sized blocks are never requested by a GrowArr, and alloc()
        // may not be handed one.
        let size = layout.size();
        if size == 0 {
            return Err(AllocError);
        }
        // Safety: size is non-zero.
        let raw = unsafe { alloc(layout) };
        return NonNull::new(raw)
            .map(|ptr| NonNull::slice_from_raw_parts(ptr, size))
            .ok_or(AllocError);
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { dealloc(ptr.as_ptr(), layout) };
    }
}
