// ==============================================
// CROSS-CAPACITY INVARIANT TESTS (integration)
// ==============================================
//
// Drives every supported (word, capacity) pairing through long random
// operation sequences and compares the packed register against a Vec
// reference model after every step. These sweep across instantiations and
// belong here rather than in the order module itself.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use waytrack::order::PackedOrder;
use waytrack::word::Word;

// Reference model: a Vec of indices in MRU order.

fn reference_evict(model: &mut Vec<usize>) -> usize {
    let victim = model.pop().unwrap();
    model.insert(0, victim);
    victim
}

fn reference_evict_at(model: &mut Vec<usize>, insert_pos: usize) -> usize {
    let victim = model.pop().unwrap();
    model.insert(insert_pos, victim);
    victim
}

fn reference_move_to(model: &mut Vec<usize>, index: usize, insert_pos: usize) {
    let pos = model.iter().position(|&i| i == index).unwrap();
    let index = model.remove(pos);
    model.insert(insert_pos, index);
}

fn drive<W: Word, const N: usize>(steps: usize, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut order: PackedOrder<W, N> = PackedOrder::new();
    let mut model: Vec<usize> = (0..N).collect();

    for step in 0..steps {
        match rng.gen_range(0..4) {
            0 => assert_eq!(order.evict(), reference_evict(&mut model)),
            1 => {
                let pos = rng.gen_range(0..N);
                assert_eq!(order.evict_at(pos), reference_evict_at(&mut model, pos));
            }
            2 => {
                let index = rng.gen_range(0..N);
                order.move_to_front(index);
                reference_move_to(&mut model, index, 0);
            }
            _ => {
                let index = rng.gen_range(0..N);
                let pos = rng.gen_range(0..N);
                order.move_to(index, pos);
                reference_move_to(&mut model, index, pos);
            }
        }

        assert_eq!(
            order.to_vec_mru(),
            model,
            "order diverged from reference model at step {step}"
        );
        order.check_invariants().unwrap();
    }
}

#[test]
fn u32_capacities_track_reference_model() {
    drive::<u32, 1>(500, 0xC0FFEE_01);
    drive::<u32, 2>(500, 0xC0FFEE_02);
    drive::<u32, 3>(500, 0xC0FFEE_03);
    drive::<u32, 4>(500, 0xC0FFEE_04);
    drive::<u32, 5>(500, 0xC0FFEE_05);
    drive::<u32, 6>(500, 0xC0FFEE_06);
    drive::<u32, 7>(500, 0xC0FFEE_07);
    drive::<u32, 8>(500, 0xC0FFEE_08);
}

#[test]
fn u64_capacities_track_reference_model() {
    drive::<u64, 1>(500, 0xFACADE_01);
    drive::<u64, 2>(500, 0xFACADE_02);
    drive::<u64, 3>(500, 0xFACADE_03);
    drive::<u64, 4>(500, 0xFACADE_04);
    drive::<u64, 5>(500, 0xFACADE_05);
    drive::<u64, 6>(500, 0xFACADE_06);
    drive::<u64, 7>(500, 0xFACADE_07);
    drive::<u64, 8>(500, 0xFACADE_08);
    drive::<u64, 9>(500, 0xFACADE_09);
    drive::<u64, 10>(500, 0xFACADE_0A);
    drive::<u64, 11>(500, 0xFACADE_0B);
    drive::<u64, 12>(500, 0xFACADE_0C);
    drive::<u64, 13>(500, 0xFACADE_0D);
    drive::<u64, 14>(500, 0xFACADE_0E);
    drive::<u64, 15>(500, 0xFACADE_0F);
    drive::<u64, 16>(500, 0xFACADE_10);
}

// ==============================================
// Raw-register persistence
// ==============================================
//
// The register is the wire format: storing raw() and restoring with
// from_raw() must reproduce the order exactly, at any reachable state.

#[test]
fn raw_register_survives_persistence_at_every_state() {
    let mut rng = SmallRng::seed_from_u64(0xDEAD_10CC);
    let mut order: PackedOrder<u64, 16> = PackedOrder::new();

    for _ in 0..1_000 {
        match rng.gen_range(0..4) {
            0 => {
                order.evict();
            }
            1 => {
                order.evict_at(rng.gen_range(0..16));
            }
            2 => order.move_to_front(rng.gen_range(0..16)),
            _ => order.move_to(rng.gen_range(0..16), rng.gen_range(0..16)),
        }

        let restored = PackedOrder::<u64, 16>::from_raw(order.raw());
        assert_eq!(restored, order);
        assert_eq!(restored.to_vec_mru(), order.to_vec_mru());
        restored.check_invariants().unwrap();
    }
}

#[test]
fn raw_encoding_is_stable_for_identity() {
    // Identity permutations have a fixed bit pattern per (word, capacity):
    // each position holds its own index.
    assert_eq!(PackedOrder::<u32, 2>::new().raw(), 0b10);
    assert_eq!(PackedOrder::<u32, 4>::new().raw(), 0b11_10_01_00);
    assert_eq!(PackedOrder::<u32, 8>::new().raw(), 0o76543210);
    assert_eq!(
        PackedOrder::<u64, 16>::new().raw(),
        0xFEDC_BA98_7654_3210
    );
}
