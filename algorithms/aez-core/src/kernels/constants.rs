//! Core Layout Constants
//!
//! Sizes and offsets of the block and round-key material layout shared by
//! every kernel. The 48 bytes of round-key material are three contiguous
//! 16-byte blocks, interpreted positionally as (I, J, L).

use static_assertions::const_assert_eq;

// =============================================================================
// BLOCK LAYOUT
// =============================================================================

/// Size of a single state block in bytes (128 bits).
pub const BLOCK_SIZE: usize = 16;

/// Size of the round-key material in bytes: three contiguous blocks (I, J, L).
pub const KEY_MATERIAL_SIZE: usize = 3 * BLOCK_SIZE;

/// Byte offset of the I block within the round-key material.
pub const I_OFFSET: usize = 0;

/// Byte offset of the J block within the round-key material.
pub const J_OFFSET: usize = BLOCK_SIZE;

/// Byte offset of the L block within the round-key material.
pub const L_OFFSET: usize = 2 * BLOCK_SIZE;

// =============================================================================
// GF(2^8) ARITHMETIC
// =============================================================================

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
pub const GF_POLY: u8 = 0x1b;

// =============================================================================
// COMPILE-TIME LAYOUT CHECKS
// =============================================================================

const_assert_eq!(KEY_MATERIAL_SIZE, 48);
const_assert_eq!(L_OFFSET + BLOCK_SIZE, KEY_MATERIAL_SIZE);
