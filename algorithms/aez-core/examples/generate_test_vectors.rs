//! Generator for the canonical primitive test vectors
//!
//! Emits the JSON consumed by `tests/vectors.rs`. To refresh the checked-in
//! file run:
//!
//! `cargo run --example generate_test_vectors > tests/test_vectors.json`

#![allow(clippy::unwrap_used)]

use aez_core::{aes10, aes4, xor2, xor3, xor4, Block, KeyMaterial};
use serde_json::json;

fn entry(name: &str, op: &str, inputs: Vec<String>, expect: Block) -> serde_json::Value {
    json!({
        "name": name,
        "op": op,
        "inputs": inputs,
        "expect": hex::encode(expect),
    })
}

fn main() {
    let zero: Block = [0x00u8; 16];
    let ones: Block = [0xFFu8; 16];
    let low_nibbles: Block = [0x0Fu8; 16];
    let high_nibbles: Block = [0xF0u8; 16];
    let ramp: Block = core::array::from_fn(|i| i as u8);

    let mut vectors = Vec::new();

    // =========================================================================
    // 1. XOR COMBINERS
    // =========================================================================

    vectors.push(entry(
        "xor2_zero_ones",
        "xor2",
        vec![hex::encode(zero), hex::encode(ones)],
        xor2(&zero, &ones),
    ));

    // XOR with all-ones complements every nibble
    let nibble_walk: Block = {
        let pair = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        core::array::from_fn(|i| pair[i % 8])
    };
    vectors.push(entry(
        "xor2_complement",
        "xor2",
        vec![hex::encode(nibble_walk), hex::encode(ones)],
        xor2(&nibble_walk, &ones),
    ));

    vectors.push(entry(
        "xor2_identity",
        "xor2",
        vec![hex::encode(ramp), hex::encode(zero)],
        xor2(&ramp, &zero),
    ));

    let a5: Block = [0xA5u8; 16];
    vectors.push(entry(
        "xor3_self_absorbing",
        "xor3",
        vec![hex::encode(a5), hex::encode(a5), hex::encode(a5)],
        xor3(&a5, &a5, &a5),
    ));

    vectors.push(entry(
        "xor3_nibble_split",
        "xor3",
        vec![
            hex::encode(ones),
            hex::encode(low_nibbles),
            hex::encode(high_nibbles),
        ],
        xor3(&ones, &low_nibbles, &high_nibbles),
    ));

    let dead: Block = {
        let word = [0xDE, 0xAD, 0xBE, 0xEF];
        core::array::from_fn(|i| word[i % 4])
    };
    let cafe: Block = {
        let word = [0xCA, 0xFE, 0xBA, 0xBE];
        core::array::from_fn(|i| word[i % 4])
    };
    vectors.push(entry(
        "xor4_pairwise_cancel",
        "xor4",
        vec![
            hex::encode(dead),
            hex::encode(dead),
            hex::encode(cafe),
            hex::encode(cafe),
        ],
        xor4(&dead, &dead, &cafe, &cafe),
    ));

    vectors.push(entry(
        "xor4_nibble_merge",
        "xor4",
        vec![
            hex::encode(high_nibbles),
            hex::encode(low_nibbles),
            hex::encode(zero),
            hex::encode(zero),
        ],
        xor4(&high_nibbles, &low_nibbles, &zero, &zero),
    ));

    // =========================================================================
    // 2. ROUND FUNCTIONS
    // =========================================================================

    let zero_keys: KeyMaterial = [0x00u8; 48];
    let uniform_keys: KeyMaterial = [0x01u8; 48];

    let mut state = zero;
    aes4(&mut state, &zero_keys);
    vectors.push(entry(
        "aes4_zero",
        "aes4",
        vec![hex::encode(zero), hex::encode(zero_keys)],
        state,
    ));

    let mut state = zero;
    aes10(&mut state, &zero_keys);
    vectors.push(entry(
        "aes10_zero",
        "aes10",
        vec![hex::encode(zero), hex::encode(zero_keys)],
        state,
    ));

    let mut state = zero;
    aes4(&mut state, &uniform_keys);
    vectors.push(entry(
        "aes4_uniform_key",
        "aes4",
        vec![hex::encode(zero), hex::encode(uniform_keys)],
        state,
    ));

    let mut state = zero;
    aes10(&mut state, &uniform_keys);
    vectors.push(entry(
        "aes10_uniform_key",
        "aes10",
        vec![hex::encode(zero), hex::encode(uniform_keys)],
        state,
    ));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
