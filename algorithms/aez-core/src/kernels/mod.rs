//! Backend Kernels
//!
//! Hardware-specific and portable implementations of the primitive set.

#[cfg(target_arch = "x86_64")]
pub mod aesni;
pub mod constants;
pub mod portable;
