//! Shared types used across the aez-core library.

use crate::kernels::constants::{BLOCK_SIZE, KEY_MATERIAL_SIZE};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// OPERAND TYPES
// =============================================================================

/// A single 16-byte state block, the operand unit of every primitive.
pub type Block = [u8; BLOCK_SIZE];

/// Round-key material: 48 bytes holding the (I, J, L) blocks back to back.
pub type KeyMaterial = [u8; KEY_MATERIAL_SIZE];

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Two-operand combiner signature: `a ^ b`.
pub type Xor2Fn = fn(&Block, &Block) -> Block;

/// Three-operand combiner signature: `a ^ b ^ c`.
pub type Xor3Fn = fn(&Block, &Block, &Block) -> Block;

/// Four-operand combiner signature: `(a ^ b) ^ (c ^ d)`.
pub type Xor4Fn = fn(&Block, &Block, &Block, &Block) -> Block;

/// Keyed round function signature: the state block is rewritten in place.
pub type RoundFn = fn(&mut Block, &KeyMaterial);

/// One complete backend: the five primitive operations plus a display name.
///
/// Both backends (AES-NI and portable) populate this same table so the
/// dispatcher can swap them behind a single cached pointer.
pub struct Kernel {
    /// Backend name, NUL-terminated for the C API.
    pub name: &'static str,
    /// Two-operand XOR.
    pub xor2: Xor2Fn,
    /// Three-operand XOR.
    pub xor3: Xor3Fn,
    /// Four-operand XOR.
    pub xor4: Xor4Fn,
    /// Four-round AES function (round keys J, I, L, zero).
    pub aes4: RoundFn,
    /// Ten-round AES function (round keys cycling I, J, L, closing with I).
    pub aes10: RoundFn,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for unsupported CPU features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU feature '{}' required. The accelerated backend needs AES-NI \
             with OS XSAVE support on x86-64.",
            self.missing
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}
