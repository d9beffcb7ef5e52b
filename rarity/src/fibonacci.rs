//! Exact Fibonacci membership for `u64`.

/// Whether `n` appears in `0, 1, 1, 2, 3, 5, 8, ...`.
///
/// Uses the identity: `n` is Fibonacci iff `5n² + 4` or `5n² − 4` is a perfect
/// square, evaluated in u128. For `n` large enough that `5n² + 4` overflows
/// u128 the sequence is walked instead (at most 93 terms fit in a u64).
pub fn is_fibonacci(n: u64) -> bool {
    let n = n as u128;
    let five_n_squared = n.checked_mul(n).and_then(|sq| sq.checked_mul(5));
    match five_n_squared.and_then(|v| v.checked_add(4)) {
        Some(plus_four) => {
            is_perfect_square(plus_four)
                || (n > 0 && is_perfect_square(plus_four - 8))
        }
        None => walk_sequence(n as u64),
    }
}

fn walk_sequence(n: u64) -> bool {
    let (mut a, mut b) = (0u64, 1u64);
    while b < n {
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => return false,
        }
    }
    b == n || a == n
}

fn is_perfect_square(n: u128) -> bool {
    let root = isqrt(n);
    root * root == n
}

/// Floor square root by Newton's method, starting above the root.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fibonacci_numbers() -> Vec<u64> {
        let mut seq = vec![0u64, 1];
        while let Some(next) = seq[seq.len() - 1].checked_add(seq[seq.len() - 2]) {
            seq.push(next);
        }
        seq
    }

    #[test]
    fn known_values() {
        assert!(is_fibonacci(0));
        assert!(is_fibonacci(1));
        assert!(is_fibonacci(2));
        assert!(is_fibonacci(13));
        assert!(!is_fibonacci(4));
        assert!(!is_fibonacci(14));
    }

    #[test]
    fn every_u64_fibonacci_number_is_recognised() {
        let seq = fibonacci_numbers();
        assert_eq!(seq.len(), 94);
        for f in seq {
            assert!(is_fibonacci(f), "{f}");
        }
    }

    #[test]
    fn neighbours_of_fibonacci_numbers_are_not() {
        for f in fibonacci_numbers().into_iter().filter(|&f| f > 5) {
            assert!(!is_fibonacci(f - 1), "{}", f - 1);
            assert!(!is_fibonacci(f + 1), "{}", f + 1);
        }
    }

    #[test]
    fn walk_and_square_test_agree_on_small_values() {
        for n in 0u64..5_000 {
            assert_eq!(walk_sequence(n), is_fibonacci(n), "{n}");
        }
    }

    #[test]
    fn huge_values_take_the_walking_path() {
        assert!(!is_fibonacci(u64::MAX));
        assert!(is_fibonacci(12_200_160_415_121_876_738)); // F(93)
        assert!(!is_fibonacci(12_200_160_415_121_876_739));
    }

    #[test]
    fn isqrt_is_floor() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }
}
