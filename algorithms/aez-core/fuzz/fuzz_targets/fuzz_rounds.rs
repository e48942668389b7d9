#![no_main]

use aez_core::{aes10, aes4, Block, KeyMaterial};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // 16-byte state plus 48 bytes of key material
    if data.len() < 64 {
        return;
    }
    let mut state = [0u8; 16];
    state.copy_from_slice(&data[0..16]);
    let mut keys: KeyMaterial = [0u8; 48];
    keys.copy_from_slice(&data[16..64]);

    // =============================================================================
    // 1. DETERMINISM
    // =============================================================================

    let run = |input: &Block, ten_rounds: bool| -> Block {
        let mut s = *input;
        if ten_rounds {
            aes10(&mut s, &keys);
        } else {
            aes4(&mut s, &keys);
        }
        s
    };

    assert_eq!(run(&state, false), run(&state, false), "aes4 not deterministic");
    assert_eq!(run(&state, true), run(&state, true), "aes10 not deterministic");

    // =============================================================================
    // 2. BACKEND EQUIVALENCE
    // =============================================================================

    use aez_core::kernels::portable;

    let mut reference = state;
    portable::aes4(&mut reference, &keys);
    assert_eq!(run(&state, false), reference, "aes4 backend divergence");

    let mut reference = state;
    portable::aes10(&mut reference, &keys);
    assert_eq!(run(&state, true), reference, "aes10 backend divergence");
});
