//! C-API Bindings
//!
//! Exposes the primitive set to C/C++ via FFI with pointer safety and panic
//! boundaries. The XOR entry points read every source block before the
//! destination is written, so passing the destination as one of the sources
//! is supported; partially overlapping regions are not.

#![allow(unsafe_code)]

use crate::kernels::constants::{BLOCK_SIZE, KEY_MATERIAL_SIZE};

use std::ptr;
use std::slice;

/// Copies a 16-byte block from a raw pointer.
///
/// # Safety
/// `src` must be valid for [`BLOCK_SIZE`] readable bytes.
unsafe fn read_block(src: *const u8) -> crate::Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(slice::from_raw_parts(src, BLOCK_SIZE));
    block
}

// =============================================================================
// FEATURE PROBE
// =============================================================================

/// Raw CPUID query.
///
/// Writes the four result registers to `out_words` in the order EAX, EBX,
/// ECX, EDX, with no interpretation.
///
/// # Safety
/// - `out_words` must be valid for 4 writable `u32` values
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[cfg(target_arch = "x86_64")]
#[no_mangle]
pub unsafe extern "C" fn aez_core_cpuid(leaf: u32, subleaf: u32, out_words: *mut u32) -> i32 {
    if out_words.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let words = crate::cpuid::query(leaf, subleaf);
        let out = slice::from_raw_parts_mut(out_words, 4);
        out[0] = words.eax;
        out[1] = words.ebx;
        out[2] = words.ecx;
        out[3] = words.edx;
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Reports whether the accelerated backend is usable on this CPU.
///
/// # Safety
/// No pointer arguments; always safe to call.
///
/// # Returns
/// - `1`: AES-NI backend available
/// - `0`: Portable fallback only
#[no_mangle]
pub unsafe extern "C" fn aez_core_accel_available() -> i32 {
    i32::from(crate::cpuid::supports_accel())
}

// =============================================================================
// XOR COMBINERS
// =============================================================================

/// 16-byte XOR: `dst = a ^ b`.
///
/// `dst` may equal `a` or `b`.
///
/// # Safety
/// - `a`, `b` must be valid for 16 readable bytes
/// - `dst` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_xor2(a: *const u8, b: *const u8, dst: *mut u8) -> i32 {
    if a.is_null() || b.is_null() || dst.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let out = crate::xor2(&read_block(a), &read_block(b));
        ptr::copy_nonoverlapping(out.as_ptr(), dst, BLOCK_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// 16-byte XOR: `dst = a ^ b ^ c`.
///
/// `dst` may equal any source.
///
/// # Safety
/// - `a`, `b`, `c` must be valid for 16 readable bytes
/// - `dst` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_xor3(
    a: *const u8,
    b: *const u8,
    c: *const u8,
    dst: *mut u8,
) -> i32 {
    if a.is_null() || b.is_null() || c.is_null() || dst.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let out = crate::xor3(&read_block(a), &read_block(b), &read_block(c));
        ptr::copy_nonoverlapping(out.as_ptr(), dst, BLOCK_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// 16-byte XOR: `dst = (a ^ b) ^ (c ^ d)`.
///
/// `dst` may equal any source.
///
/// # Safety
/// - `a`, `b`, `c`, `d` must be valid for 16 readable bytes
/// - `dst` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_xor4(
    a: *const u8,
    b: *const u8,
    c: *const u8,
    d: *const u8,
    dst: *mut u8,
) -> i32 {
    if a.is_null() || b.is_null() || c.is_null() || d.is_null() || dst.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let out = crate::xor4(
            &read_block(a),
            &read_block(b),
            &read_block(c),
            &read_block(d),
        );
        ptr::copy_nonoverlapping(out.as_ptr(), dst, BLOCK_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Four full AES rounds in place (round keys J, I, L, zero).
///
/// # Safety
/// - `state` must be valid for 16 readable and writable bytes
/// - `key_material` must be valid for 48 readable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_aes4(state: *mut u8, key_material: *const u8) -> i32 {
    if state.is_null() || key_material.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let mut block = read_block(state);
        let mut keys = [0u8; KEY_MATERIAL_SIZE];
        keys.copy_from_slice(slice::from_raw_parts(key_material, KEY_MATERIAL_SIZE));
        crate::aes4(&mut block, &keys);
        ptr::copy_nonoverlapping(block.as_ptr(), state, BLOCK_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Ten full AES rounds in place (round keys cycling I, J, L, closing with I).
///
/// # Safety
/// - `state` must be valid for 16 readable and writable bytes
/// - `key_material` must be valid for 48 readable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_aes10(state: *mut u8, key_material: *const u8) -> i32 {
    if state.is_null() || key_material.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let mut block = read_block(state);
        let mut keys = [0u8; KEY_MATERIAL_SIZE];
        keys.copy_from_slice(slice::from_raw_parts(key_material, KEY_MATERIAL_SIZE));
        crate::aes10(&mut block, &keys);
        ptr::copy_nonoverlapping(block.as_ptr(), state, BLOCK_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

// =============================================================================
// CONSTANT-TIME COMPARISON
// =============================================================================

/// Constant-time equality of two `len`-byte strings.
///
/// # Safety
/// - `a`, `b` must be valid for `len` readable bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aez_core_ct_equal(a: *const u8, b: *const u8, len: usize) -> i32 {
    if a.is_null() || b.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let lhs = slice::from_raw_parts(a, len);
        let rhs = slice::from_raw_parts(b, len);
        crate::ct_equal(lhs, rhs)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => -2,
    }
}

// =============================================================================
// INTROSPECTION
// =============================================================================

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, null-terminated C string (e.g. `"AES-NI"`). Must
/// NOT be freed by the caller.
///
/// # Safety
/// The returned pointer is always valid and statically allocated.
#[no_mangle]
pub unsafe extern "C" fn aez_core_backend_name() -> *const std::os::raw::c_char {
    let name = crate::engine::dispatcher::active_kernel().name;
    // Backend name strings are static and null-terminated
    name.as_ptr().cast::<std::os::raw::c_char>()
}
