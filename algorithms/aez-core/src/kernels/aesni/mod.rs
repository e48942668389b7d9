//! AES-NI Kernel Module
//!
//! Single-instruction AES rounds (`_mm_aesenc_si128`) and SSE2 XOR combiners
//! over unaligned 16-byte blocks.
//!
//! Every function requires the caller to have confirmed CPU support through
//! the CPUID probe; the dispatcher's safe wrappers are the only
//! crate-internal entry points.

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_setzero_si128, _mm_storeu_si128, _mm_xor_si128,
};

use crate::kernels::constants::{BLOCK_SIZE, I_OFFSET, J_OFFSET, L_OFFSET};
use crate::types::{Block, KeyMaterial};

// =============================================================================
// LOAD / STORE
// =============================================================================

/// Unaligned 128-bit load from a 16-byte block.
// SAFETY: a &Block is always valid for 16 readable bytes; no alignment needed.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn load(block: &Block) -> __m128i {
    _mm_loadu_si128(block.as_ptr().cast())
}

/// Unaligned 128-bit store into a 16-byte block.
// SAFETY: a &mut Block is always valid for 16 writable bytes.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn store(block: &mut Block, v: __m128i) {
    _mm_storeu_si128(block.as_mut_ptr().cast(), v);
}

/// Loads the (I, J, L) round-key blocks from the 48-byte key material.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn load_keys(key_material: &KeyMaterial) -> (__m128i, __m128i, __m128i) {
    let ptr = key_material.as_ptr();
    (
        _mm_loadu_si128(ptr.add(I_OFFSET).cast()),
        _mm_loadu_si128(ptr.add(J_OFFSET).cast()),
        _mm_loadu_si128(ptr.add(L_OFFSET).cast()),
    )
}

// =============================================================================
// XOR COMBINERS
// =============================================================================

/// `a ^ b` in one 128-bit lane.
///
/// # Safety
/// Requires SSE2, confirmed through the CPUID probe (or compile-time target
/// features) before the call.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
#[must_use]
pub unsafe fn xor2(a: &Block, b: &Block) -> Block {
    let v = _mm_xor_si128(load(a), load(b));
    let mut dst = [0u8; BLOCK_SIZE];
    store(&mut dst, v);
    dst
}

/// `a ^ b ^ c` in one 128-bit lane.
///
/// # Safety
/// Same contract as [`xor2`].
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
#[must_use]
pub unsafe fn xor3(a: &Block, b: &Block, c: &Block) -> Block {
    let v = _mm_xor_si128(_mm_xor_si128(load(a), load(b)), load(c));
    let mut dst = [0u8; BLOCK_SIZE];
    store(&mut dst, v);
    dst
}

/// `(a ^ b) ^ (c ^ d)` in one 128-bit lane.
///
/// # Safety
/// Same contract as [`xor2`].
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
#[must_use]
pub unsafe fn xor4(a: &Block, b: &Block, c: &Block, d: &Block) -> Block {
    let v = _mm_xor_si128(
        _mm_xor_si128(load(a), load(b)),
        _mm_xor_si128(load(c), load(d)),
    );
    let mut dst = [0u8; BLOCK_SIZE];
    store(&mut dst, v);
    dst
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Four full AES rounds in place, round keys J, I, L, then the all-zero
/// block.
///
/// # Safety
/// Requires AES-NI and SSE2, confirmed through the CPUID probe before the
/// call.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn aes4(state: &mut Block, key_material: &KeyMaterial) {
    let (i, j, l) = load_keys(key_material);

    let mut s = load(state);
    s = _mm_aesenc_si128(s, j);
    s = _mm_aesenc_si128(s, i);
    s = _mm_aesenc_si128(s, l);
    s = _mm_aesenc_si128(s, _mm_setzero_si128());
    store(state, s);
}

/// Ten full AES rounds in place, round keys cycling I, J, L and closing
/// with I.
///
/// # Safety
/// Same contract as [`aes4`].
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn aes10(state: &mut Block, key_material: &KeyMaterial) {
    let (i, j, l) = load_keys(key_material);

    let mut s = load(state);
    s = _mm_aesenc_si128(s, i);
    s = _mm_aesenc_si128(s, j);
    s = _mm_aesenc_si128(s, l);
    s = _mm_aesenc_si128(s, i);
    s = _mm_aesenc_si128(s, j);
    s = _mm_aesenc_si128(s, l);
    s = _mm_aesenc_si128(s, i);
    s = _mm_aesenc_si128(s, j);
    s = _mm_aesenc_si128(s, l);
    s = _mm_aesenc_si128(s, i);
    store(state, s);
}
