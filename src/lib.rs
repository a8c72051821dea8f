//! # Growable Array
//!
//! The `grow_array` crate provides a `#[no_std]` growable array, `GrowArr`, built
//! directly on raw allocation rather than on top of `Vec`.
//!
//! `GrowArr` uses fallible allocations, meaning that instead of panicking on allocation failure,
//! it returns an error, and leaves the array exactly as it was before the call.
//!
//! Growth follows a fixed protocol. When more room is needed the capacity becomes
//! `capacity + capacity / 2`, or the requested capacity when that is larger. A fresh block
//! is allocated first, then the live values are moved over one at a time, and only then
//! is the old block released. Capacity never shrinks.
//!
//! The type used for the length, capacity, and indices is a generic (see `LengthType`). It
//! also bounds how many values an array can ever hold, a `GrowArr<T, Global, u8>` refuses
//! to grow past 255 values instead of wrapping.
//!
//! Diagnostics are opt in per array. Pass an `Observer` when constructing one and it is told
//! about every growth, resize, and the final release.
//!
//! # Feature Flags
//! * `alloc_api2` - Implements `AltAllocator` for every `allocator_api2` `Allocator`.
//!
//! * `log` - Enables `LogObserver`, which forwards the events of an array to the `log` crate.
//!
//! # Example
//! ```
//! use grow_array::GrowArr;
//!
//! let mut arr = GrowArr::<i32>::with_len(4).unwrap();
//! assert_eq!(arr.capacity(), 4);
//!
//! arr.emplace_back(7).unwrap();
//! assert_eq!(arr.capacity(), 6);
//! assert_eq!(arr.back(), Some(&7));
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod grow_arr;
pub mod types;

pub use grow_arr::GrowArr;
