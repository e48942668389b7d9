//! Portable fallback kernels.
//!
//! Byte-loop XOR combiners and a table-driven AES round, producing
//! byte-identical results to the AES-NI backend on every input.

use self::utils::aesenc;
use crate::kernels::constants::{BLOCK_SIZE, I_OFFSET, J_OFFSET, L_OFFSET};
use crate::types::{Block, KeyMaterial};

mod utils;

// =============================================================================
// XOR COMBINERS
// =============================================================================

/// `a ^ b`.
#[must_use]
pub fn xor2(a: &Block, b: &Block) -> Block {
    core::array::from_fn(|i| a[i] ^ b[i])
}

/// `a ^ b ^ c`.
#[must_use]
pub fn xor3(a: &Block, b: &Block, c: &Block) -> Block {
    core::array::from_fn(|i| a[i] ^ b[i] ^ c[i])
}

/// `(a ^ b) ^ (c ^ d)`.
#[must_use]
pub fn xor4(a: &Block, b: &Block, c: &Block, d: &Block) -> Block {
    core::array::from_fn(|i| (a[i] ^ b[i]) ^ (c[i] ^ d[i]))
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Four full AES rounds in place, round keys J, I, L, then the all-zero block.
pub fn aes4(state: &mut Block, key_material: &KeyMaterial) {
    let (i, j, l) = split_keys(key_material);
    aesenc(state, &j);
    aesenc(state, &i);
    aesenc(state, &l);
    aesenc(state, &[0u8; BLOCK_SIZE]);
}

/// Ten full AES rounds in place, round keys cycling I, J, L and closing
/// with I.
pub fn aes10(state: &mut Block, key_material: &KeyMaterial) {
    let (i, j, l) = split_keys(key_material);
    for _ in 0..3 {
        aesenc(state, &i);
        aesenc(state, &j);
        aesenc(state, &l);
    }
    aesenc(state, &i);
}

/// Splits the 48-byte round-key material into its (I, J, L) blocks.
fn split_keys(key_material: &KeyMaterial) -> (Block, Block, Block) {
    let mut i = [0u8; BLOCK_SIZE];
    let mut j = [0u8; BLOCK_SIZE];
    let mut l = [0u8; BLOCK_SIZE];
    i.copy_from_slice(&key_material[I_OFFSET..I_OFFSET + BLOCK_SIZE]);
    j.copy_from_slice(&key_material[J_OFFSET..J_OFFSET + BLOCK_SIZE]);
    l.copy_from_slice(&key_material[L_OFFSET..L_OFFSET + BLOCK_SIZE]);
    (i, j, l)
}
