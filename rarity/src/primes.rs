//! Deterministic primality for `u64`.
//!
//! Trial division by the first twelve primes, then Miller–Rabin with those
//! same twelve primes as bases. That base set has no strong pseudoprime
//! below 3.3 × 10^24, so the test is exact for every `u64`.

const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Every composite below this has a prime factor in `BASES`.
const TRIAL_DIVISION_BOUND: u64 = 37 * 37;

/// Whether `n` is prime. 0 and 1 are not.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &BASES {
        if n % p == 0 {
            return n == p;
        }
    }
    if n < TRIAL_DIVISION_BOUND {
        return true;
    }

    let n_minus_one = n - 1;
    let s = n_minus_one.trailing_zeros();
    let d = n_minus_one >> s;
    BASES.iter().all(|&a| passes_strong_test(a, d, s, n))
}

/// Strong probable-prime test of `n` to base `a`, with `n - 1 = d * 2^s`.
fn passes_strong_test(a: u64, d: u64, s: u32, n: u64) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut acc = 1u64 % modulus;
    let mut base = base % modulus;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    acc
}
