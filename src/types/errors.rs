use core::error::Error;
use core::fmt;

/// Reported by an `AltAllocator` when it cannot hand out a block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("the allocator has no block of the requested layout");
    }
}

/// Why a `GrowArr` refused to grow.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// The length type can not represent the required length or capacity.
    CapacityOverflow = 1,
    /// A length did not fit in a `usize`, or the byte size of the block overflowed.
    UsizeOverflow,
    /// The block would be larger than `isize::MAX` bytes.
    LayoutFailure,
    /// The allocator refused to hand out a block.
    AllocFailure,
}

impl ErrorReason {
    /// A short lowercase sentence fragment, as used by `Display`.
    pub const fn describe(self) -> &'static str {
        return match self {
            Self::CapacityOverflow => "the length type can not count past its maximum",
            Self::UsizeOverflow => "the grown capacity does not fit in usize bytes",
            Self::LayoutFailure => "the grown block would exceed isize::MAX bytes",
            Self::AllocFailure => "the allocator refused the block for the grown capacity",
        };
    }
}

/// A type alias for `Result<T, GrowArrErr>`
pub type GrowArrResult<T> = Result<T, GrowArrErr>;

/// Returned when a `GrowArr` could not make room.
///
/// Whenever one of these is returned the container is exactly as it was
/// before the call.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrowArrErr(ErrorReason);

impl GrowArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<AllocError> for GrowArrErr {
    fn from(_: AllocError) -> Self {
        return Self(ErrorReason::AllocFailure);
    }
}

impl Error for GrowArrErr {}

impl fmt::Display for GrowArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "could not grow the array: {}", self.0.describe());
    }
}
