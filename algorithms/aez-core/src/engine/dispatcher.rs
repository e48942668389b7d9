//! Hardware Dispatcher
//!
//! Selects the AES-NI kernel table when the CPUID probe allows it, the
//! portable table otherwise. Under `std` the probe runs once and the chosen
//! table is cached for the process lifetime; `no_std` builds resolve the
//! backend at compile time from the enabled target features.

use crate::kernels;
use crate::types::{CpuFeatureError, Kernel};

// =============================================================================
// KERNEL TABLES
// =============================================================================

/// Portable backend table.
static PORTABLE: Kernel = Kernel {
    name: "Portable\0",
    xor2: kernels::portable::xor2,
    xor3: kernels::portable::xor3,
    xor4: kernels::portable::xor4,
    aes4: kernels::portable::aes4,
    aes10: kernels::portable::aes10,
};

/// AES-NI backend table.
#[cfg(target_arch = "x86_64")]
static AESNI: Kernel = Kernel {
    name: "AES-NI\0",
    xor2: safe_xor2_wrapper,
    xor3: safe_xor3_wrapper,
    xor4: safe_xor4_wrapper,
    aes4: safe_aes4_wrapper,
    aes10: safe_aes10_wrapper,
};

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the kernel table for this CPU.
#[must_use]
#[allow(unreachable_code)]
pub fn active_kernel() -> &'static Kernel {
    // 1. Runtime Dispatch (Std-only): probe once, cache process-wide
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        use std::sync::OnceLock;
        static ACTIVE: OnceLock<&'static Kernel> = OnceLock::new();
        return *ACTIVE.get_or_init(|| {
            if crate::cpuid::supports_accel() {
                &AESNI
            } else {
                &PORTABLE
            }
        });
    }

    // 2. Compile-Time Dispatch (no_std)
    #[cfg(all(
        not(feature = "std"),
        target_arch = "x86_64",
        target_feature = "aes",
        target_feature = "sse2"
    ))]
    return &AESNI;

    // 3. Portable Fallback
    &PORTABLE
}

/// Returns the accelerated kernel table, or an error naming the missing CPU
/// feature.
pub fn accelerated_kernel() -> Result<&'static Kernel, CpuFeatureError> {
    #[cfg(target_arch = "x86_64")]
    {
        if crate::cpuid::supports_accel() {
            Ok(&AESNI)
        } else {
            Err(CpuFeatureError::new("aes"))
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    Err(CpuFeatureError::new("x86_64"))
}

/// Returns the name of the active hardware backend (NUL-terminated).
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    active_kernel().name
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AES-NI `xor2` behind the safe kernel-table signature.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_xor2_wrapper(a: &crate::types::Block, b: &crate::types::Block) -> crate::types::Block {
    // SAFETY: Only reachable after the dispatcher confirmed SSE2/AES-NI
    // support (runtime CPUID probe under std, target features under no_std).
    unsafe { kernels::aesni::xor2(a, b) }
}

/// AES-NI `xor3` behind the safe kernel-table signature.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_xor3_wrapper(
    a: &crate::types::Block,
    b: &crate::types::Block,
    c: &crate::types::Block,
) -> crate::types::Block {
    // SAFETY: Only reachable after the dispatcher confirmed SSE2/AES-NI support.
    unsafe { kernels::aesni::xor3(a, b, c) }
}

/// AES-NI `xor4` behind the safe kernel-table signature.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_xor4_wrapper(
    a: &crate::types::Block,
    b: &crate::types::Block,
    c: &crate::types::Block,
    d: &crate::types::Block,
) -> crate::types::Block {
    // SAFETY: Only reachable after the dispatcher confirmed SSE2/AES-NI support.
    unsafe { kernels::aesni::xor4(a, b, c, d) }
}

/// AES-NI `aes4` behind the safe kernel-table signature.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_aes4_wrapper(state: &mut crate::types::Block, key_material: &crate::types::KeyMaterial) {
    // SAFETY: Only reachable after the dispatcher confirmed AES-NI support.
    unsafe { kernels::aesni::aes4(state, key_material) }
}

/// AES-NI `aes10` behind the safe kernel-table signature.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn safe_aes10_wrapper(state: &mut crate::types::Block, key_material: &crate::types::KeyMaterial) {
    // SAFETY: Only reachable after the dispatcher confirmed AES-NI support.
    unsafe { kernels::aesni::aes10(state, key_material) }
}
