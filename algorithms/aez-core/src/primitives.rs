//! Primitive API Layer
//!
//! Free functions over borrowed fixed-size buffers, routed through the kernel
//! table the dispatcher picked for this CPU. Results are identical across
//! backends, so callers never need to know which one is active.

use crate::engine::dispatcher;
use crate::types::{Block, CpuFeatureError, KeyMaterial};
use subtle::ConstantTimeEq;

// =============================================================================
// XOR COMBINERS
// =============================================================================

/// `a ^ b` over 16-byte blocks.
///
/// The result is returned by value, so the destination may be one of the
/// sources: `acc = xor2(&acc, &delta)` is well-defined.
///
/// # Example
/// ```rust
/// let a = [0u8; 16];
/// let b = [0xFFu8; 16];
/// assert_eq!(aez_core::xor2(&a, &b), [0xFFu8; 16]);
/// ```
#[must_use]
#[inline]
pub fn xor2(a: &Block, b: &Block) -> Block {
    (dispatcher::active_kernel().xor2)(a, b)
}

/// `a ^ b ^ c` over 16-byte blocks.
#[must_use]
#[inline]
pub fn xor3(a: &Block, b: &Block, c: &Block) -> Block {
    (dispatcher::active_kernel().xor3)(a, b, c)
}

/// `(a ^ b) ^ (c ^ d)` over 16-byte blocks.
///
/// # Example
/// ```rust
/// let a = [0x55u8; 16];
/// let b = [0xAAu8; 16];
/// // Duplicated operands cancel.
/// assert_eq!(aez_core::xor4(&a, &a, &b, &b), [0u8; 16]);
/// ```
#[must_use]
#[inline]
pub fn xor4(a: &Block, b: &Block, c: &Block, d: &Block) -> Block {
    (dispatcher::active_kernel().xor4)(a, b, c, d)
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Four full AES forward rounds in place, round keys J, I, L, then the
/// all-zero block.
///
/// `state` is read once and overwritten with the result. `key_material` holds
/// the (I, J, L) blocks at offsets 0, 16, and 32 and is never modified.
///
/// # Example
/// ```rust
/// let key_material = [0u8; 48];
/// let mut state = [0u8; 16];
/// aez_core::aes4(&mut state, &key_material);
/// assert_eq!(state, [0x76u8; 16]);
/// ```
#[inline]
pub fn aes4(state: &mut Block, key_material: &KeyMaterial) {
    (dispatcher::active_kernel().aes4)(state, key_material);
}

/// Ten full AES forward rounds in place, round keys cycling I, J, L and
/// closing with I.
///
/// Same layout contract as [`aes4`].
///
/// # Example
/// ```rust
/// let key_material = [0u8; 48];
/// let mut state = [0u8; 16];
/// aez_core::aes10(&mut state, &key_material);
/// assert_eq!(state, [0x36u8; 16]);
/// ```
#[inline]
pub fn aes10(state: &mut Block, key_material: &KeyMaterial) {
    (dispatcher::active_kernel().aes10)(state, key_material);
}

// =============================================================================
// CONSTANT-TIME COMPARISON
// =============================================================================

/// Constant-time equality over byte strings (timing attack resistant).
///
/// Returns `false` for length mismatches without examining contents.
///
/// # Example
/// ```rust
/// assert!(aez_core::ct_equal(b"tag", b"tag"));
/// assert!(!aez_core::ct_equal(b"tag", b"tab"));
/// ```
#[must_use]
pub fn ct_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

// =============================================================================
// FEATURE GATING
// =============================================================================

/// Confirms the accelerated backend is usable on this CPU.
///
/// The dispatched functions above fall back to the portable kernel on their
/// own and never need this check. It exists for callers that insist on the
/// AES-NI path, for example before invoking the raw kernels directly.
///
/// # Errors
/// Returns [`CpuFeatureError`] naming the missing capability when AES-NI
/// cannot be used.
pub fn require_accel() -> Result<(), CpuFeatureError> {
    dispatcher::accelerated_kernel().map(|_| ())
}
