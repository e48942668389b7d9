#![cfg_attr(not(feature = "std"), no_std)]

//! # AEZ Core
//!
//! Hardware-accelerated primitive core of the AEZ wide-block construction:
//! the `aes4`/`aes10` round functions, 2/3/4-operand 16-byte XOR combiners,
//! and the CPUID feature probe, with a bit-identical portable fallback.

//! # Usage
//! ```rust
//! // 1. Block XOR
//! let delta = aez_core::xor2(&[0u8; 16], &[0xFF; 16]);
//! assert_eq!(delta, [0xFF; 16]);
//!
//! // 2. Keyed rounds ((I, J, L) packed as 48 bytes)
//! let key_material = [0x2Au8; 48];
//! let mut state = [0u8; 16];
//! aez_core::aes10(&mut state, &key_material);
//!
//! // 3. Which backend is doing the work?
//! println!("{}", aez_core::active_backend());
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod cpuid;
mod engine;
#[cfg(feature = "std")]
mod ffi;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
mod primitives;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, KEY_MATERIAL_SIZE};
pub use primitives::{aes10, aes4, ct_equal, require_accel, xor2, xor3, xor4};
pub use types::{Block, CpuFeatureError, KeyMaterial};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name().trim_end_matches('\0')
}
