//! Unsigned integer abstraction for curve arithmetic.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, BitAnd, BitXor, Div, Mul};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer width usable for grid sides, coordinates and distances.
///
/// The caller picks the width: it must hold `side * side` for the largest
/// grid it intends to address. Implemented for `u8`, `u16`, `u32`, `u64`,
/// `u128` and `usize`.
pub trait CurveInt:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + sealed::Sealed
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const FOUR: Self;
    /// Width of the type in bits.
    const BITS: u32;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_shl(self, shift: u32) -> Option<Self>;
    fn is_power_of_two(self) -> bool;
    fn trailing_zeros(self) -> u32;

    /// `1` when `bit` is set, `0` otherwise.
    fn from_bit(bit: bool) -> Self;

    /// Lossless widening for diagnostics and size arithmetic.
    fn to_u128(self) -> u128;

    /// Narrowing conversion; `None` when the value does not fit.
    fn from_u128(value: u128) -> Option<Self>;
}

macro_rules! impl_curve_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl CurveInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const THREE: Self = 3;
                const FOUR: Self = 4;
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline(always)]
                fn checked_shl(self, shift: u32) -> Option<Self> {
                    // `checked_shl` only rejects shifts >= BITS; bits shifted
                    // out of the top must count as overflow too.
                    if shift >= <$t>::BITS || self.leading_zeros() < shift {
                        None
                    } else {
                        Some(self << shift)
                    }
                }

                #[inline(always)]
                fn is_power_of_two(self) -> bool {
                    <$t>::is_power_of_two(self)
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline(always)]
                fn from_bit(bit: bool) -> Self {
                    <$t>::from(bit)
                }

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_u128(value: u128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_curve_int!(u8, u16, u32, u64, u128, usize);
