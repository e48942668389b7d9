//! Portable software implementation of the AES forward round.

use crate::kernels::constants::GF_POLY;
use crate::types::Block;

// AES S-Box
#[rustfmt::skip]
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16
];

/// GF(2^8) multiplication by 2 (used in `MixColumns`).
/// Branchless: `b >> 7` extracts the MSB as 0 or 1; multiplying by `GF_POLY`
/// produces the conditional reduction polynomial without a data-dependent branch.
const fn gf_double(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * GF_POLY)
}

/// AES `MixColumns` on a single 4-byte column.
fn mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    c[0] = gf_double(t[0] ^ t[1]) ^ t[1] ^ t[2] ^ t[3];
    c[1] = gf_double(t[1] ^ t[2]) ^ t[2] ^ t[3] ^ t[0];
    c[2] = gf_double(t[2] ^ t[3]) ^ t[3] ^ t[0] ^ t[1];
    c[3] = gf_double(t[3] ^ t[0]) ^ t[0] ^ t[1] ^ t[2];
}

/// One full AES forward round in place: SubBytes, ShiftRows, MixColumns,
/// AddRoundKey. Bit-identical to `_mm_aesenc_si128`, including for rounds
/// where standard AES-128 would skip `MixColumns`.
pub fn aesenc(state: &mut Block, key: &Block) {
    let s = state;

    // SubBytes
    for b in s.iter_mut() {
        *b = SBOX[*b as usize];
    }

    // ShiftRows (column-major layout: row r occupies indices r, r+4, r+8, r+12)
    // Row 0: No shift
    // Row 1: Shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: Shift left 2
    let tmp1 = s[2];
    let tmp2 = s[6];
    s[2] = s[10];
    s[6] = s[14];
    s[10] = tmp1;
    s[14] = tmp2;
    // Row 3: Shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;

    // MixColumns
    mix_column(&mut s[0..4]);
    mix_column(&mut s[4..8]);
    mix_column(&mut s[8..12]);
    mix_column(&mut s[12..16]);

    // AddRoundKey
    for (b, k) in s.iter_mut().zip(key.iter()) {
        *b ^= k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox_spot_values() {
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x53], 0xed);
        assert_eq!(SBOX[0xff], 0x16);
    }

    #[test]
    fn test_mix_column_fips_vectors() {
        // Worked MixColumns examples from FIPS-197.
        let mut col = [0xdb, 0x13, 0x53, 0x45];
        mix_column(&mut col);
        assert_eq!(col, [0x8e, 0x4d, 0xa1, 0xbc]);

        let mut col = [0xf2, 0x0a, 0x22, 0x5c];
        mix_column(&mut col);
        assert_eq!(col, [0x9f, 0xdc, 0x58, 0x9d]);
    }

    #[test]
    fn test_aesenc_zero_state_zero_key() {
        // A uniform state is invariant under ShiftRows, and MixColumns maps a
        // uniform column to itself, so only SubBytes acts: 0x00 -> 0x63.
        let mut state = [0u8; 16];
        aesenc(&mut state, &[0u8; 16]);
        assert_eq!(state, [0x63u8; 16]);
    }

    #[test]
    fn test_aesenc_single_byte_lands_in_one_column() {
        // One round confines a single-byte difference to one MixColumns
        // column. A flip at index 5 moves to index 1 under ShiftRows, so only
        // column 0 (bytes 0..4) may change, and all four of its bytes must:
        // the column delta is (2d, d, d, 3d) for a nonzero SubBytes delta d.
        let key: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(31));
        let mut base: Block = core::array::from_fn(|i| i as u8);
        let mut tweaked = base;
        tweaked[5] ^= 0x80;

        aesenc(&mut base, &key);
        aesenc(&mut tweaked, &key);

        for idx in 0..4 {
            assert_ne!(base[idx], tweaked[idx], "column byte {idx} unchanged");
        }
        assert_eq!(base[4..], tweaked[4..]);
    }
}
