//! Multiplicative functions computed from a factorization.

use super::factorization::Factorization;

/// Euler's totient of `n` from its factorization.
///
/// Applies `result = result * (p - 1) / p` for each distinct prime. The
/// multiplication happens first in `u128`, and `p` always divides the
/// running result, so each division is exact.
pub fn totient(n: u64, factors: &Factorization) -> u64 {
    let result = factors.primes().fold(u128::from(n), |result, p| {
        let p = u128::from(p);
        result * (p - 1) / p
    });
    // phi(n) <= n, so the value always fits back into u64
    result as u64
}

/// Sum of the positive divisors of the factored integer.
///
/// Each prime power contributes the geometric series
/// `(p^(a+1) - 1) / (p - 1)`.
pub fn divisor_sum(factors: &Factorization) -> u128 {
    factors
        .iter()
        .map(|(p, a)| prime_power_divisor_sum(p, a))
        .product()
}

fn prime_power_divisor_sum(p: u64, a: u32) -> u128 {
    let p = u128::from(p);
    (p.pow(a + 1) - 1) / (p - 1)
}
