//! Storage-word abstraction for bit-packed structures.
//!
//! [`Word`] is a sealed trait implemented for `u32` and `u64`, the two
//! register widths the packed order supports. It exposes the handful of
//! constants and conversions the bit algebra needs so that
//! [`PackedOrder`](crate::order::PackedOrder) and the [`bits`](crate::bits)
//! codec can be written once over both widths.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned machine word usable as a packed-field register.
///
/// Implemented for `u32` and `u64` only; the trait is sealed because the
/// field algebra assumes exactly these widths (a wider register gains
/// nothing for capacities of at most 16).
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Default
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Sub<Output = Self>
{
    /// Width of the word in bits.
    const BITS: u32;
    /// The all-zeros word.
    const ZERO: Self;
    /// The word with value one.
    const ONE: Self;
    /// The all-ones word.
    const MAX: Self;

    /// Converts a slot index into the word domain.
    fn from_index(index: usize) -> Self;

    /// Converts a decoded field back into a slot index.
    fn to_index(self) -> usize;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn from_index(index: usize) -> Self {
                    index as $ty
                }

                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_word!(u32, u64);
