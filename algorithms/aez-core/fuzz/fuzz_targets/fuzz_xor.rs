#![no_main]

use aez_core::{xor2, xor3, xor4, Block};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Four 16-byte blocks from the raw input
    if data.len() < 64 {
        return;
    }
    let mut blocks = [[0u8; 16]; 4];
    for (i, block) in blocks.iter_mut().enumerate() {
        block.copy_from_slice(&data[i * 16..(i + 1) * 16]);
    }
    let [a, b, c, d]: [Block; 4] = blocks;

    // =============================================================================
    // 1. ALGEBRAIC LAWS
    // =============================================================================

    assert_eq!(xor2(&a, &b), xor2(&b, &a), "xor2 not commutative");
    assert_eq!(xor2(&a, &a), [0u8; 16], "a ^ a not zero");
    assert_eq!(xor2(&a, &[0u8; 16]), a, "a ^ 0 not a");

    assert_eq!(
        xor3(&a, &b, &c),
        xor2(&xor2(&a, &b), &c),
        "xor3 disagrees with chained xor2"
    );
    assert_eq!(
        xor4(&a, &b, &c, &d),
        xor2(&xor2(&a, &b), &xor2(&c, &d)),
        "xor4 disagrees with chained xor2"
    );

    // =============================================================================
    // 2. BACKEND EQUIVALENCE
    // =============================================================================

    use aez_core::kernels::portable;
    assert_eq!(xor2(&a, &b), portable::xor2(&a, &b));
    assert_eq!(xor3(&a, &b, &c), portable::xor3(&a, &b, &c));
    assert_eq!(xor4(&a, &b, &c, &d), portable::xor4(&a, &b, &c, &d));
});
