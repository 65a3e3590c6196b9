#![no_main]

use libfuzzer_sys::fuzz_target;
use waytrack::bits;

// Fuzz the generic bit-splice codec.
//
// Checks that insert places the field at the requested offset, preserves
// the bits below it, and that remove is the exact inverse whenever the
// displaced top bits were zero.
fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let value = u64::from_le_bytes(data[..8].try_into().unwrap());
    let nb_bits = (data[8] % 63) as u32 + 1;
    let insert_at = (data[9] as u32) % (64 - nb_bits + 1);

    let field_mask = (1u64 << nb_bits) - 1;
    let field = value.rotate_left(17) & field_mask;

    // Lossless round trip: clear the top nb_bits so nothing is shifted out.
    let trimmed = value >> nb_bits;
    let spliced = bits::insert(trimmed, field, insert_at, nb_bits);

    // Field lands at the offset.
    assert_eq!((spliced >> insert_at) & field_mask, field);

    // Low bits untouched.
    if insert_at > 0 {
        let low_mask = (1u64 << insert_at) - 1;
        assert_eq!(spliced & low_mask, trimmed & low_mask);
    }

    // Remove undoes insert.
    assert_eq!(bits::remove(spliced, insert_at, nb_bits), trimmed);

    // Removing from an arbitrary value zero-fills the top nb_bits.
    let removed = bits::remove(value, insert_at, nb_bits);
    assert_eq!(removed >> (64 - nb_bits), 0);
});
