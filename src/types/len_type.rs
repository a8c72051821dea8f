use core::cmp;
use core::fmt;
use core::ops;

/// The unsigned integer type a `GrowArr` uses for its length, its capacity, and
/// its indices.
///
/// A narrower type than `usize` makes the container smaller, and caps how many
/// elements it can ever hold. Growth never wraps, every step that could
/// overflow goes through the checked or saturating methods below.
///
/// It's marked as unsafe since your type must be continuous and ordered
/// under common operations like the built in unsigned integers are.
pub unsafe trait LengthType
where
    Self: Copy,
    Self: fmt::Debug,
    Self: cmp::Ord,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Shr<Output = Self>,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: From<u8>,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Converts to a `usize`, truncating. Only call this on values already
    /// known to fit, such as a length that is backed by an allocation.
    fn as_usize(self) -> usize;
    fn to_usize(self) -> Option<usize>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn saturating_add(self, rhs: Self) -> Self;

    /// The next capacity in the 1.5x growth sequence, `self + self / 2`,
    /// saturated at `MAX_VALUE`.
    #[inline]
    fn grown(self) -> Self {
        return self.saturating_add(self >> Self::ONE_VALUE);
    }
}

macro_rules! impl_length_type {
    ($($typ:ty),*) => {$(
        unsafe impl LengthType for $typ {
            const MAX_VALUE: Self = Self::MAX;
            const ONE_VALUE: Self = 1;
            const ZERO_VALUE: Self = 0;

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }
            #[inline]
            fn to_usize(self) -> Option<usize> {
                return usize::try_from(self).ok();
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                return <$typ>::checked_add(self, rhs);
            }
            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                return <$typ>::saturating_add(self, rhs);
            }
        }
    )*};
}

impl_length_type!(usize, u8, u16, u32, u64, u128);
