//! Forward and inverse S-boxes derived from field inversion.

use crate::gf;

/// Additive constant of the S-box affine transform.
const AFFINE_CONSTANT: u8 = 0x63;

/// Affine transform over GF(2): `b ^ rotl(b,1) ^ rotl(b,2) ^ rotl(b,3) ^ rotl(b,4) ^ 0x63`.
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[x] = affine(gf::inverse(x as u8));
        x += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[forward[x] as usize] = x as u8;
        x += 1;
    }
    table
}

const fn mutually_inverse(forward: &[u8; 256], inverse: &[u8; 256]) -> bool {
    let mut x = 0usize;
    while x < 256 {
        if inverse[forward[x] as usize] as usize != x || forward[inverse[x] as usize] as usize != x
        {
            return false;
        }
        x += 1;
    }
    true
}

/// Forward substitution table.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table, the positional inverse of [`SBOX`].
pub const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);

const _: () = assert!(mutually_inverse(&SBOX, &INV_SBOX));

/// Looks up `x` in the forward S-box.
#[inline]
pub fn sbox(x: u8) -> u8 {
    SBOX[x as usize]
}

/// Looks up `x` in the inverse S-box.
#[inline]
pub fn inv_sbox(x: u8) -> u8 {
    INV_SBOX[x as usize]
}
