//! Supporting types for `GrowArr`: the `AltAllocator` trait and its `Global`
//! implementation, the error types, the `LengthType` trait, and the
//! diagnostic `Observer` hooks.
//!
//! If built with the `alloc_api2` feature, `AltAllocator` is implemented for every
//! type implementing `allocator_api2::alloc::Allocator`.
//!
//! If built with the `log` feature, `LogObserver` forwards container events to the
//! `log` facade.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
mod errors;
mod global;
mod len_type;
mod observer;

pub use alt_alloc::AltAllocator;
pub use errors::*;
pub use global::Global;
pub use len_type::LengthType;
#[cfg(feature = "log")]
pub use observer::LogObserver;
pub use observer::Event;
pub use observer::NoopObserver;
pub use observer::Observer;
