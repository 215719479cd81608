//! Prime factorization by trial division.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Prime factorization of a positive integer as a prime → exponent map.
///
/// Primes are kept in ascending order so reports render deterministically.
/// The factorization of 1 is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Factorization {
    factors: BTreeMap<u64, u32>,
}

impl Factorization {
    /// Factor `n` by trial division with divisors 2, 3, 4, ...
    ///
    /// Composite divisors never divide the remaining value because their
    /// prime factors have already been removed, so every recorded key is
    /// prime. Whatever remains above 1 once `d * d` exceeds it is itself
    /// prime and is recorded with exponent 1.
    pub fn of(n: u64) -> Self {
        let mut factors = BTreeMap::new();
        let mut remaining = n;
        let mut d: u64 = 2;

        // d <= remaining / d is d * d <= remaining without overflow
        while d <= remaining / d {
            while remaining % d == 0 {
                *factors.entry(d).or_insert(0) += 1;
                remaining /= d;
            }
            d += 1;
        }

        if remaining > 1 {
            *factors.entry(remaining).or_insert(0) += 1;
        }

        Self { factors }
    }

    /// Iterate over `(prime, exponent)` pairs in ascending prime order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.factors.iter().map(|(&p, &a)| (p, a))
    }

    /// Distinct primes dividing n.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.factors.keys().copied()
    }

    /// Exponent of `prime`, or `None` if it does not divide n.
    pub fn exponent(&self, prime: u64) -> Option<u32> {
        self.factors.get(&prime).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Multiply the prime powers back together.
    pub fn product(&self) -> u128 {
        self.iter()
            .map(|(p, a)| u128::from(p).pow(a))
            .product()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (p, a)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}: {a}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: u64) -> Vec<(u64, u32)> {
        Factorization::of(n).iter().collect()
    }

    #[test]
    fn test_one_has_no_factors() {
        let f = Factorization::of(1);
        assert!(f.is_empty());
        assert_eq!(f.product(), 1);
        assert_eq!(f.to_string(), "{}");
    }

    #[test]
    fn test_small_composites() {
        assert_eq!(pairs(2), vec![(2, 1)]);
        assert_eq!(pairs(4), vec![(2, 2)]);
        assert_eq!(pairs(12), vec![(2, 2), (3, 1)]);
        assert_eq!(pairs(28), vec![(2, 2), (7, 1)]);
        assert_eq!(pairs(945), vec![(3, 3), (5, 1), (7, 1)]);
    }

    #[test]
    fn test_large_prime_remainder() {
        // 8128 = 2^6 * 127, the 127 is left over after trial division
        assert_eq!(pairs(8128), vec![(2, 6), (127, 1)]);
        assert_eq!(pairs(2 * 1_000_000_007), vec![(2, 1), (1_000_000_007, 1)]);
    }

    #[test]
    fn test_prime_power_square() {
        assert_eq!(pairs(49), vec![(7, 2)]);
        assert_eq!(pairs(1 << 40), vec![(2, 40)]);
    }

    #[test]
    fn test_display_and_exponent() {
        let f = Factorization::of(15015);
        assert_eq!(f.to_string(), "{3: 1, 5: 1, 7: 1, 11: 1, 13: 1}");
        assert_eq!(f.exponent(11), Some(1));
        assert_eq!(f.exponent(2), None);
        assert_eq!(f.len(), 5);
    }

    #[test]
    fn test_i64_max_reconstructs() {
        let n = i64::MAX as u64;
        let f = Factorization::of(n);
        assert_eq!(f.product(), u128::from(n));
    }
}
