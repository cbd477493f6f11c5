//! Base-2 radical inverses (van der Corput, Sobol', Larcher &
//! Pillichshammer) from "Efficient Multidimensional Sampling" by
//! Alexander Keller, plus a direct radical inverse for any base.

// mcqmc
use crate::core::mcqmc::{bits_to_unit, Float};

/// The bits of an integer quantity can be efficiently reversed with a
/// series of logical bit operations.
pub fn reverse_bits_32(n: u32) -> u32 {
    let mut n = (n << 16) | (n >> 16);
    n = ((n & 0x00ff_00ff) << 8) | ((n & 0xff00_ff00) >> 8);
    n = ((n & 0x0f0f_0f0f) << 4) | ((n & 0xf0f0_f0f0) >> 4);
    n = ((n & 0x3333_3333) << 2) | ((n & 0xcccc_cccc) >> 2);
    n = ((n & 0x5555_5555) << 1) | ((n & 0xaaaa_aaaa) >> 1);
    n
}

/// Base-2 van der Corput sequence, scrambled by XOR with *r*.
pub fn van_der_corput(i: u32, r: u32) -> Float {
    bits_to_unit(reverse_bits_32(i) ^ r)
}

/// First dimension of the Sobol' sequence, scrambled by *r*.
pub fn sobol(i: u32, r: u32) -> Float {
    let mut i: u32 = i;
    let mut r: u32 = r;
    let mut v: u32 = 1_u32 << 31;
    while i != 0 {
        if i & 1 != 0 {
            r ^= v;
        }
        i >>= 1;
        v ^= v >> 1;
    }
    bits_to_unit(r)
}

/// Larcher & Pillichshammer sequence, scrambled by *r*. Same bit scan
/// as [sobol] but the direction number is OR-folded.
pub fn larcher_pillichshammer(i: u32, r: u32) -> Float {
    let mut i: u32 = i;
    let mut r: u32 = r;
    let mut v: u32 = 1_u32 << 31;
    while i != 0 {
        if i & 1 != 0 {
            r ^= v;
        }
        i >>= 1;
        v |= v >> 1;
    }
    bits_to_unit(r)
}

/// Direct evaluation of the radical inverse of *a* in *base*, in
/// double precision. Digits are consumed least significant first.
pub fn radical_inverse(base: u32, a: u64) -> f64 {
    assert!(base >= 2, "radical inverse needs a base >= 2, got {}", base);
    let inv_base: f64 = 1.0 / base as f64;
    let mut factor: f64 = inv_base;
    let mut value: f64 = 0.0;
    let mut a: u64 = a; // shadowing input parameter
    while a != 0_u64 {
        let next: u64 = a / base as u64;
        let digit: u64 = a - next * base as u64;
        value += digit as f64 * factor;
        factor *= inv_base;
        a = next;
    }
    value
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reverse_bits() {
        assert_eq!(reverse_bits_32(0), 0);
        assert_eq!(reverse_bits_32(1), 0x8000_0000);
        assert_eq!(reverse_bits_32(0x8000_0000), 1);
        assert_eq!(reverse_bits_32(0x0000_00f0), 0x0f00_0000);
        assert_eq!(reverse_bits_32(reverse_bits_32(0x1234_5678)), 0x1234_5678);
    }

    #[test]
    fn van_der_corput_known_values() {
        assert_eq!(van_der_corput(0, 0), 0.0);
        assert_eq!(van_der_corput(1, 0), 0.5);
        assert_eq!(van_der_corput(2, 0), 0.25);
        assert_eq!(van_der_corput(3, 0), 0.75);
        assert_eq!(van_der_corput(1 << 31, 0) as f64, 2.0_f64.powi(-32));
        // scramble flips the leading bit
        assert_eq!(van_der_corput(0, 1 << 31), 0.5);
    }

    #[test]
    fn van_der_corput_matches_base_two_radical_inverse() {
        for i in 0..4096_u32 {
            assert_relative_eq!(
                van_der_corput(i, 0) as f64,
                radical_inverse(2, i as u64),
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn sobol_first_points() {
        let expected: [Float; 8] = [0.0, 0.5, 0.75, 0.25, 0.625, 0.125, 0.375, 0.875];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(sobol(i as u32, 0), *e);
        }
    }

    #[test]
    fn larcher_pillichshammer_first_points() {
        // direction numbers 1/2, 3/4, 7/8, ...
        let expected: [Float; 8] = [0.0, 0.5, 0.75, 0.25, 0.875, 0.375, 0.125, 0.625];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(larcher_pillichshammer(i as u32, 0), *e);
        }
    }

    #[test]
    fn outputs_stay_in_unit_interval() {
        for i in [0_u32, 1, 0xffff_ffff, 0x8000_0001, 12_345_678].iter() {
            for r in [0_u32, 0xffff_ffff, 0xdead_beef].iter() {
                for v in [
                    van_der_corput(*i, *r),
                    sobol(*i, *r),
                    larcher_pillichshammer(*i, *r),
                ]
                .iter()
                {
                    assert!(*v >= 0.0 && *v <= 1.0);
                }
            }
        }
    }

    #[test]
    fn radical_inverse_base_three() {
        assert_relative_eq!(radical_inverse(3, 0), 0.0);
        assert_relative_eq!(radical_inverse(3, 1), 1.0 / 3.0);
        assert_relative_eq!(radical_inverse(3, 3), 1.0 / 9.0);
        // 5 = 12 in base 3
        assert_relative_eq!(radical_inverse(3, 5), 2.0 / 3.0 + 1.0 / 9.0);
    }
}
