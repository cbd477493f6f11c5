//! Type definitions of Float, the 32-bit to unit interval scale and
//! small helpers (hashing, primes) which are used by the sequence
//! generators and by callers decorrelating their sample streams.

// others
use byteorder::{ByteOrder, LittleEndian};
use hexf::*;

pub type Float = f32;

/// Converts a 32-bit unsigned integer to the unit interval (2^-32).
pub const MULT_RATIO: f64 = hexf64!("0x1.0p-32");

/// Largest representable [Float] below one.
pub const ONE_MINUS_EPSILON: Float = hexf32!("0x1.fffffep-1");

pub const FNV1_32_INIT: u32 = 0x811c_9dc5;
pub const FNV_32_PRIME: u32 = 0x0100_0193;

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Scale a 32-bit pattern to [0, 1] in double precision before
/// narrowing to [Float].
#[inline]
pub fn bits_to_unit(bits: u32) -> Float {
    clamp_t((bits as f64 * MULT_RATIO) as Float, 0.0 as Float, 1.0 as Float)
}

/// The FNV-1a hash (Fowler/Noll/Vo) unrolled for the special case of
/// a single 32-bit unsigned integer.
///
/// The four bytes of *value* are extracted in **little-endian** order
/// (least significant byte first) independent of the host, so the
/// hash of a given integer is the same on every platform.
///
/// See [http://www.isthe.com/chongo/tech/comp/fnv/](http://www.isthe.com/chongo/tech/comp/fnv/)
pub fn fnv1a_hash32(value: u32) -> u32 {
    let mut bytes: [u8; 4] = [0_u8; 4];
    LittleEndian::write_u32(&mut bytes, value);
    let mut hash: u32 = FNV1_32_INIT;
    for byte in bytes.iter() {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(FNV_32_PRIME);
    }
    hash
}

/// Trial division by odd numbers up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut dv: i64 = 3;
    while dv * dv <= n {
        if n % dv == 0 {
            return false;
        }
        dv += 2;
    }
    true
}

/// Returns the smallest prime strictly greater than *last_prime*.
/// Successive Halton dimensions use successive primes as bases.
///
/// `i32::MAX` is prime, so there is no answer for it and the call
/// panics.
pub fn next_prime(last_prime: i32) -> i32 {
    assert!(
        last_prime < i32::MAX,
        "no prime above {} fits in an i32",
        last_prime
    );
    if last_prime < 2 {
        return 2;
    }
    // first odd candidate above last_prime
    let mut new_prime: i64 = last_prime as i64 + (last_prime as i64 & 1) + 1;
    while !is_prime(new_prime) {
        new_prime += 2;
    }
    new_prime as i32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fnv1a_golden_values() {
        assert_eq!(fnv1a_hash32(0), 0x4b95_f515);
        assert_eq!(fnv1a_hash32(1), 0xfb69_b604);
        assert_eq!(fnv1a_hash32(0xdead_beef), 0x9087_9fcb);
    }

    #[test]
    fn fnv1a_is_pure() {
        for v in [0_u32, 7, 65_535, u32::MAX].iter() {
            assert_eq!(fnv1a_hash32(*v), fnv1a_hash32(*v));
        }
        assert_ne!(fnv1a_hash32(1), fnv1a_hash32(256));
    }

    #[test]
    fn next_prime_small_values() {
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(3), 5);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(23), 29);
        assert_eq!(next_prime(89), 97);
    }

    #[test]
    fn next_prime_near_i32_max() {
        assert_eq!(next_prime(i32::MAX - 1), i32::MAX);
        assert_eq!(next_prime(2_147_483_629), i32::MAX);
        assert_eq!(next_prime(2_147_483_628), 2_147_483_629);
    }

    #[test]
    #[should_panic]
    fn next_prime_of_i32_max_panics() {
        next_prime(i32::MAX);
    }

    #[test]
    fn prime_chain_for_halton_bases() {
        let mut p: i32 = 2;
        let mut bases: Vec<i32> = vec![p];
        for _ in 0..9 {
            p = next_prime(p);
            bases.push(p);
        }
        assert_eq!(bases, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn bits_to_unit_bounds() {
        assert_eq!(bits_to_unit(0), 0.0);
        assert_eq!(bits_to_unit(1 << 31), 0.5);
        assert!(bits_to_unit(u32::MAX) <= 1.0);
    }
}
