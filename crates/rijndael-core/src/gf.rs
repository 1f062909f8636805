//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! All functions are `const` so the substitution tables and round constants
//! can be derived at compile time.

/// Low byte of the reduction polynomial (0x11B without the x^8 term).
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by x, reducing on overflow past bit 7.
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Carry-less (peasant) multiplication of two field elements.
#[inline]
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
pub const fn inverse(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    result
}
