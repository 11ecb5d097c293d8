//! Predicate Suite
//!
//! Pure, total classification predicates over non-negative integer
//! magnitudes, plus the decimal digit-sum. No I/O, no shared state; every
//! function is safely reentrant.

/// Integer square root, exact for all `u64` (float sqrt alone drifts for
/// magnitudes past 2^53, so the estimate is corrected with checked integer
/// arithmetic).
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).is_none_or(|sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}

/// Primality by 6k±1 trial division up to the integer square root.
///
/// 0 and 1 are not prime; 2 and 3 are; multiples of 2 or 3 are composite;
/// every remaining candidate divisor has the form 6k-1 or 6k+1.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let bound = isqrt(n);
    let mut i = 5;
    while i <= bound {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Perfection via paired proper divisors: each divisor i ≤ √n contributes
/// its partner n/i, so the scan stays O(√n). A divisor sum that overflows
/// already exceeds n, so it can never match and the scan stops at false.
pub fn is_perfect(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    // 1 divides every n > 1; its partner n is not a proper divisor.
    let mut sum: u64 = 1;
    let bound = isqrt(n);
    for i in 2..=bound {
        if n % i == 0 {
            let Some(next) = sum.checked_add(i) else {
                return false;
            };
            sum = next;
            let partner = n / i;
            if partner != i {
                let Some(next) = sum.checked_add(partner) else {
                    return false;
                };
                sum = next;
            }
        }
    }
    sum == n
}

/// An Armstrong (narcissistic) number equals the sum of its decimal digits
/// each raised to the digit count. Overflow in the power sum means the total
/// cannot equal `n`, so checked arithmetic short-circuits to false.
pub fn is_armstrong(n: u64) -> bool {
    let digits = decimal_digits(n);
    let d = digits.len() as u32;
    let mut sum: u64 = 0;
    for digit in digits {
        let Some(power) = digit.checked_pow(d) else {
            return false;
        };
        let Some(next) = sum.checked_add(power) else {
            return false;
        };
        sum = next;
    }
    sum == n
}

/// Parity of an integer magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

pub fn parity(n: u64) -> Parity {
    if n % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Sum of decimal digits.
pub fn digit_sum(n: u64) -> u32 {
    decimal_digits(n).iter().map(|&d| d as u32).sum()
}

fn decimal_digits(mut n: u64) -> Vec<u64> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(n % 10);
        n /= 10;
    }
    digits
}
