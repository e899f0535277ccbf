//! Counting functions used for length computation and unranking.
//!
//! All of these use the multiplicative formulas, so they cost `O(r)` big
//! integer operations rather than computing full factorials.

use ibig::ops::UnsignedAbs;
use ibig::{ibig, ubig, IBig, UBig};

/// Number of ordered selections of `r` out of `n`: `n! / (n - r)!`.
///
/// Zero if `r > n`.
pub fn n_p_r(n: &UBig, r: usize) -> UBig {
    if UBig::from(r) > *n {
        return ubig!(0);
    }
    let mut result = ubig!(1);
    for i in 0..r {
        result *= n - UBig::from(i);
    }
    result
}

/// Number of `r`-subsets of `n` elements.
///
/// Zero if `r > n`.
pub fn n_c_r(n: &UBig, r: usize) -> UBig {
    let r_big = UBig::from(r);
    if r_big > *n {
        return ubig!(0);
    }
    // C(n, r) == C(n, n - r); the smaller one means fewer steps
    let rest = n - &r_big;
    let k = if rest < r_big {
        // rest < r, so it fits
        usize::try_from(&rest).unwrap_or(r)
    } else {
        r
    };
    let base = n - UBig::from(k);
    let mut result = ubig!(1);
    for i in 1..=k {
        let i = UBig::from(i);
        // result is C(base + i - 1, i - 1) here, so this division is exact
        result = result * (&base + &i) / i;
    }
    result
}

/// Number of `r`-multisets drawn from `n` elements: `C(n + r - 1, r)`.
pub fn n_c_r_r(n: &UBig, r: usize) -> UBig {
    if *n == ubig!(0) {
        return if r == 0 { ubig!(1) } else { ubig!(0) };
    }
    n_c_r(&(n + UBig::from(r) - ubig!(1)), r)
}

/// Number of terms of the progression `start, start + step, ...` strictly
/// before `stop`, i.e. `max(0, ceil((stop - start) / step))`.
///
/// `step` must not be zero.
pub fn progression_length(start: &IBig, stop: &IBig, step: &IBig) -> UBig {
    let distance = stop - start;
    let zero = ibig!(0);
    // the progression only has terms if it moves towards stop
    if distance == zero || (distance > zero) != (*step > zero) {
        return ubig!(0);
    }
    let distance = distance.unsigned_abs();
    let step = step.unsigned_abs();
    (distance + &step - ubig!(1)) / step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: u64) -> UBig {
        (1..=n).fold(ubig!(1), |acc, i| acc * UBig::from(i))
    }

    #[test]
    fn test_n_p_r() {
        assert_eq!(n_p_r(&ubig!(5), 2), ubig!(20));
        assert_eq!(n_p_r(&ubig!(5), 0), ubig!(1));
        assert_eq!(n_p_r(&ubig!(5), 5), ubig!(120));
        assert_eq!(n_p_r(&ubig!(5), 6), ubig!(0));
        assert_eq!(n_p_r(&ubig!(0), 0), ubig!(1));
    }

    #[test]
    fn test_n_c_r_matches_factorial_formula() {
        for n in 0..12u64 {
            for r in 0..=n as usize {
                let expected =
                    factorial(n) / (factorial(r as u64) * factorial(n - r as u64));
                assert_eq!(n_c_r(&UBig::from(n), r), expected, "C({}, {})", n, r);
            }
        }
    }

    #[test]
    fn test_n_c_r_too_large() {
        assert_eq!(n_c_r(&ubig!(3), 4), ubig!(0));
    }

    #[test]
    fn test_n_c_r_big() {
        // C(100, 50)
        let expected: UBig = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(n_c_r(&ubig!(100), 50), expected);
    }

    #[test]
    fn test_n_c_r_r() {
        assert_eq!(n_c_r_r(&ubig!(3), 2), ubig!(6));
        assert_eq!(n_c_r_r(&ubig!(5), 3), ubig!(35));
        assert_eq!(n_c_r_r(&ubig!(0), 0), ubig!(1));
        assert_eq!(n_c_r_r(&ubig!(0), 2), ubig!(0));
        assert_eq!(n_c_r_r(&ubig!(1), 4), ubig!(1));
    }

    #[test]
    fn test_progression_length() {
        assert_eq!(progression_length(&ibig!(0), &ibig!(10), &ibig!(1)), ubig!(10));
        assert_eq!(progression_length(&ibig!(0), &ibig!(10), &ibig!(3)), ubig!(4));
        assert_eq!(progression_length(&ibig!(0), &ibig!(-10), &ibig!(-1)), ubig!(10));
        assert_eq!(progression_length(&ibig!(0), &ibig!(-10), &ibig!(1)), ubig!(0));
        assert_eq!(progression_length(&ibig!(5), &ibig!(5), &ibig!(1)), ubig!(0));
        assert_eq!(progression_length(&ibig!(10), &ibig!(0), &ibig!(-4)), ubig!(3));
    }
}
