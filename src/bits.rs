//! Generic bit-field splice codec.
//!
//! [`insert`] splices an `nb_bits`-wide field into a register at an arbitrary
//! bit offset, shifting everything above the offset out of the way;
//! [`remove`] is the inverse, closing the gap and zero-filling the top.
//!
//! These are standalone, reusable primitives. The packed order register in
//! [`order`](crate::order) deliberately does **not** call them: its
//! operations inline equivalent algebra specialized for fixed-width fields,
//! where the insert and remove offsets are known to line up on field
//! boundaries.
//!
//! ## Preconditions
//!
//! Both functions are branch-free over valid inputs and do not validate their
//! arguments in release builds:
//!
//! - `nb_bits` must be in `1..W::BITS`. A full-register splice
//!   (`nb_bits == W::BITS`) is rejected rather than given a meaning, since it
//!   would require a full-width shift. Debug builds assert.
//! - `insert_at` / `remove_at` must be below `W::BITS`. Debug builds assert.
//! - `bits_to_insert` must be less than `2^nb_bits`. A wider value smears
//!   into the neighboring fields and produces an unspecified (but memory-safe)
//!   result; this is not asserted, matching the documented caller contract.
//!
//! ## Example
//!
//! ```
//! use waytrack::bits;
//!
//! // Splice a nibble into the middle of a register.
//! assert_eq!(bits::insert(0x8765_4321_u32, 0xa, 16, 4), 0x765a_4321);
//!
//! // Removing it restores the low half; the nibble shifted off the top
//! // during insertion is gone.
//! assert_eq!(bits::remove(0x765a_4321_u32, 16, 4), 0x0765_4321);
//! ```

use crate::word::Word;

/// Splices `bits_to_insert` into `value` as an `nb_bits`-wide field at bit
/// offset `insert_at`.
///
/// Bits below `insert_at` are preserved; bits at or above it shift left by
/// `nb_bits` to make room, with the topmost `nb_bits` of the register
/// discarded.
///
/// # Example
///
/// ```
/// use waytrack::bits;
///
/// assert_eq!(bits::insert(0u32, 0x1, 0, 1), 0x0000_0001);
/// assert_eq!(bits::insert(0u32, 0x1, 1, 1), 0x0000_0002);
/// assert_eq!(bits::insert(0x8765_4321_u32, 0xa, 0, 4), 0x7654_321a);
/// ```
#[inline]
pub fn insert<W: Word>(value: W, bits_to_insert: W, insert_at: u32, nb_bits: u32) -> W {
    debug_assert!(
        nb_bits >= 1 && nb_bits < W::BITS,
        "nb_bits {nb_bits} out of range 1..{}",
        W::BITS
    );
    debug_assert!(
        insert_at < W::BITS,
        "insert_at {insert_at} exceeds register width {}",
        W::BITS
    );
    let preserved = (W::ONE << insert_at) - W::ONE;
    (value & preserved) | ((value & !preserved) << nb_bits) | (bits_to_insert << insert_at)
}

/// Deletes the `nb_bits`-wide field at bit offset `remove_at` from `value`.
///
/// Bits below `remove_at` are preserved; bits above the removed field shift
/// down by `nb_bits`, and the vacated top bits are zero-filled.
///
/// # Example
///
/// ```
/// use waytrack::bits;
///
/// assert_eq!(bits::remove(0x8765_4321_u32, 0, 4), 0x0876_5432);
/// assert_eq!(bits::remove(0x8765_4321_u32, 28, 4), 0x0765_4321);
/// ```
#[inline]
pub fn remove<W: Word>(value: W, remove_at: u32, nb_bits: u32) -> W {
    debug_assert!(
        nb_bits >= 1 && nb_bits < W::BITS,
        "nb_bits {nb_bits} out of range 1..{}",
        W::BITS
    );
    debug_assert!(
        remove_at < W::BITS,
        "remove_at {remove_at} exceeds register width {}",
        W::BITS
    );
    let preserved = (W::ONE << remove_at) - W::ONE;
    (value & preserved) | ((value >> nb_bits) & !preserved)
}
