use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The source of raw storage blocks for a `GrowArr`.
///
/// It is a cut down version of the unstable `Allocator` trait. Only `allocate`
/// and `deallocate` are needed, since a `GrowArr` never asks the allocator to
/// grow a block in place. Growth always allocates a fresh block and relocates the
/// live elements one at a time.
///
/// This mirrors the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
pub unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// On success it returns a pointer to the allocated memory. The memory is
    /// uninitialized.
    ///
    /// If the allocation fails it must return an `AllocError` and must not
    /// have any other observable effect.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}
