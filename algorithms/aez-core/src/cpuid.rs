//! CPU Feature Probe
//!
//! Raw CPUID access plus the capability predicate that gates the AES-NI
//! backend. `query` hands back the four result registers verbatim; which
//! leaves, subleaves, and bits are meaningful is the caller's business.
//!
//! On targets other than `x86_64` the raw query is absent and the probe
//! reports no acceleration.

// =============================================================================
// FEATURE BITS (CPUID leaf 1, ECX)
// =============================================================================

/// AES-NI instruction support flag in CPUID leaf 1, ECX.
pub const AESNI_BIT: u32 = 1 << 25;

/// OSXSAVE flag in CPUID leaf 1, ECX. Set when the OS has enabled XSAVE,
/// which the accelerated backend requires alongside the instructions.
pub const OSXSAVE_BIT: u32 = 1 << 27;

// =============================================================================
// RAW QUERY
// =============================================================================

/// The four CPUID result registers for one `(leaf, subleaf)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct CpuidWords {
    /// EAX output register.
    pub eax: u32,
    /// EBX output register.
    pub ebx: u32,
    /// ECX output register.
    pub ecx: u32,
    /// EDX output register.
    pub edx: u32,
}

/// Executes CPUID for `(leaf, subleaf)` and returns the result registers
/// uninterpreted.
///
/// Deterministic for a given pair on a given machine; repeated calls return
/// identical words.
#[cfg(target_arch = "x86_64")]
#[must_use]
#[allow(unsafe_code)]
pub fn query(leaf: u32, subleaf: u32) -> CpuidWords {
    // SAFETY: the CPUID instruction is unprivileged and always present on
    // x86_64.
    let r = unsafe { core::arch::x86_64::__cpuid_count(leaf, subleaf) };
    CpuidWords {
        eax: r.eax,
        ebx: r.ebx,
        ecx: r.ecx,
        edx: r.edx,
    }
}

// =============================================================================
// CAPABILITY PREDICATE
// =============================================================================

/// Returns `true` when the accelerated backend is usable: CPUID leaf 1 ECX
/// reports both AES-NI and OSXSAVE. Always `false` off `x86_64`.
#[must_use]
pub fn supports_accel() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "x86_64")] {
            let words = query(1, 0);
            words.ecx & AESNI_BIT != 0 && words.ecx & OSXSAVE_BIT != 0
        } else {
            false
        }
    }
}
