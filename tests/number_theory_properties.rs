//! Property-based tests for the integer analyzer
//!
//! These tests verify invariants that should hold for all positive inputs:
//! - The factorization multiplies back to n and contains only primes
//! - 1 <= phi(n) <= n and sigma(n) >= n
//! - phi and sigma are multiplicative over coprime factors
//! - Derived ratios agree with the cached integers

use proptest::prelude::*;
use tpepmap::{IntegerAnalyzer, TpepError};

fn is_prime(p: u64) -> bool {
    p >= 2 && (2..).take_while(|d| d * d <= p).all(|d| p % d != 0)
}

fn next_prime(n: u64) -> u64 {
    (n..).find(|&p| is_prime(p)).expect("primes are unbounded")
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

proptest! {
    #[test]
    fn prop_factorization_reconstructs_n(n in 1i64..=10_000_000) {
        let analyzer = IntegerAnalyzer::new(n).unwrap();
        prop_assert_eq!(analyzer.factors().product(), n as u128);
        for (p, a) in analyzer.factors().iter() {
            prop_assert!(is_prime(p), "{} is not prime", p);
            prop_assert!(a >= 1);
        }
    }

    #[test]
    fn prop_totient_bounds(n in 1i64..=10_000_000) {
        let analyzer = IntegerAnalyzer::new(n).unwrap();
        prop_assert!(analyzer.phi() >= 1);
        prop_assert!(analyzer.phi() <= analyzer.n());
        let density = analyzer.totient_density();
        prop_assert!(density > 0.0 && density <= 1.0);
    }

    #[test]
    fn prop_divisor_sum_bounds(n in 1i64..=10_000_000) {
        let analyzer = IntegerAnalyzer::new(n).unwrap();
        prop_assert!(analyzer.sigma() >= n as u128);
        prop_assert!(analyzer.perfection_ratio() >= 1.0);
    }

    #[test]
    fn prop_multiplicative_over_coprimes(a in 1i64..=50_000, b in 1i64..=50_000) {
        prop_assume!(gcd(a, b) == 1);
        let x = IntegerAnalyzer::new(a).unwrap();
        let y = IntegerAnalyzer::new(b).unwrap();
        let xy = IntegerAnalyzer::new(a * b).unwrap();
        prop_assert_eq!(xy.phi(), x.phi() * y.phi());
        prop_assert_eq!(xy.sigma(), x.sigma() * y.sigma());
    }

    #[test]
    fn prop_prime_values(start in 2u64..=1_000_000) {
        let p = next_prime(start);
        let analyzer = IntegerAnalyzer::new(p as i64).unwrap();
        prop_assert_eq!(analyzer.factors().len(), 1);
        prop_assert_eq!(analyzer.factors().exponent(p), Some(1));
        prop_assert_eq!(analyzer.phi(), p - 1);
        prop_assert_eq!(analyzer.sigma(), u128::from(p) + 1);
    }

    #[test]
    fn prop_ratios_follow_cached_values(n in 1i64..=10_000_000) {
        let analyzer = IntegerAnalyzer::new(n).unwrap();
        let tpep = analyzer.tpep_ratio().unwrap();
        prop_assert_eq!(tpep, analyzer.sigma() as f64 / analyzer.phi() as f64);
        prop_assert_eq!(
            analyzer.mirror_gap(),
            analyzer.perfection_ratio() + analyzer.totient_density()
        );
    }

    #[test]
    fn prop_non_positive_is_rejected(n in i64::MIN..=0) {
        prop_assert!(matches!(
            IntegerAnalyzer::new(n),
            Err(TpepError::InvalidArgument(_))
        ));
    }
}
