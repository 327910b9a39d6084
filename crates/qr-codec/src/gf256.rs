//! Arithmetic over GF(256), the finite field used by the Reed-Solomon encoder.
//!
//! The field is defined by the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//! (0x11D) with generator element alpha = 2. Addition in this field is XOR;
//! multiplication is implemented via precomputed log/exponent tables rather
//! than recomputed per call, so `gf_mul` is a pair of table lookups.

const PRIMITIVE_POLY: u16 = 0x11D;

/// `EXP[i] == alpha^i`. Doubled to 512 entries so that `EXP[log(a) + log(b)]`
/// never needs a modulo-255 reduction.
pub static EXP: [u8; 512] = build_exp_table();

/// `LOG[a] == i` such that `alpha^i == a`, for `a` in `1..=255`. `LOG[0]` is
/// unused (0 is not a power of alpha) and left as 0.
pub static LOG: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 512] {
    let mut exp = [0u8; 512];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // Mirror the first period so callers can index with log(a) + log(b)
    // (up to 254 + 254) without wrapping.
    i = 255;
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    exp
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        log[exp[i] as usize] = i as u8;
        i += 1;
    }
    log
}

/// Multiplies two field elements. Returns 0 if either operand is 0.
pub const fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        let i = LOG[a as usize] as usize + LOG[b as usize] as usize;
        EXP[i]
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn multiply_by_zero_is_zero() {
        assert_eq!(0, gf_mul(0, 200));
        assert_eq!(0, gf_mul(200, 0));
    }

    #[test]
    fn multiply_by_one_is_identity() {
        for a in 1..=255u8 {
            assert_eq!(a, gf_mul(a, 1));
        }
    }

    #[test]
    fn multiplication_is_commutative() {
        for a in [1u8, 3, 17, 200, 255] {
            for b in [1u8, 2, 9, 128, 254] {
                assert_eq!(gf_mul(a, b), gf_mul(b, a));
            }
        }
    }

    #[test]
    fn exp_and_log_are_inverses() {
        for i in 0..255usize {
            let a = EXP[i];
            assert_eq!(i as u8, LOG[a as usize]);
        }
    }

    #[test]
    fn matches_known_product() {
        // alpha^1 * alpha^1 == alpha^2, a textbook GF(256)/0x11D check.
        assert_eq!(EXP[2], gf_mul(EXP[1], EXP[1]));
    }
}
