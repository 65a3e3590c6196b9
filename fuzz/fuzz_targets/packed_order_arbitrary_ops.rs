#![no_main]

use libfuzzer_sys::fuzz_target;
use waytrack::order::PackedOrder;

// Fuzz arbitrary operation sequences against a Vec reference model.
//
// Byte 0 selects the capacity; each following byte encodes one operation
// (2 bits of opcode, the rest operands). After every operation the packed
// register must decode to the same MRU order as the model and the
// permutation invariant must hold.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] % 16) as usize + 1;
    match capacity {
        1 => run_ops::<1>(&data[1..]),
        2 => run_ops::<2>(&data[1..]),
        3 => run_ops::<3>(&data[1..]),
        4 => run_ops::<4>(&data[1..]),
        5 => run_ops::<5>(&data[1..]),
        6 => run_ops::<6>(&data[1..]),
        7 => run_ops::<7>(&data[1..]),
        8 => run_ops::<8>(&data[1..]),
        9 => run_ops::<9>(&data[1..]),
        10 => run_ops::<10>(&data[1..]),
        11 => run_ops::<11>(&data[1..]),
        12 => run_ops::<12>(&data[1..]),
        13 => run_ops::<13>(&data[1..]),
        14 => run_ops::<14>(&data[1..]),
        15 => run_ops::<15>(&data[1..]),
        _ => run_ops::<16>(&data[1..]),
    }
});

fn run_ops<const N: usize>(data: &[u8]) {
    let mut order: PackedOrder<u64, N> = PackedOrder::new();
    let mut model: Vec<usize> = (0..N).collect();

    for &byte in data {
        let opcode = byte & 0b11;
        let operand = (byte >> 2) as usize;
        let index = operand % N;
        let pos = (operand / N) % N;

        match opcode {
            0 => {
                let victim = model.pop().unwrap();
                model.insert(0, victim);
                assert_eq!(order.evict(), victim);
            }
            1 => {
                let victim = model.pop().unwrap();
                model.insert(pos, victim);
                assert_eq!(order.evict_at(pos), victim);
            }
            2 => {
                let found = model.iter().position(|&i| i == index).unwrap();
                let moved = model.remove(found);
                model.insert(0, moved);
                order.move_to_front(index);
            }
            _ => {
                let found = model.iter().position(|&i| i == index).unwrap();
                let moved = model.remove(found);
                model.insert(pos, moved);
                order.move_to(index, pos);
            }
        }

        assert_eq!(order.to_vec_mru(), model);
        order.check_invariants().unwrap();
    }
}
