//! Algebraic laws of continued fraction arithmetic
//!
//! Results are compared as reconstructed rationals, since coefficient lists
//! may differ by a trailing stutter.

use core::iter;
use num_bigint::BigInt;
use num_cfrac::cont_frac::{canonical, reconstruct, Euclid};
use num_cfrac::matter::Tally;
use num_cfrac::{Approximation, ContinuedFraction, EngineConfig, Error, Matter, Stream, Value};
use num_rational::Ratio;
use proptest::prelude::*;

fn rational(n: i64, d: i64) -> ContinuedFraction {
    ContinuedFraction::rational(n, d).unwrap()
}

fn exact(x: &ContinuedFraction) -> Ratio<BigInt> {
    match x.to_rational(10_000).unwrap() {
        Approximation::Exact(r) => r,
        Approximation::Approximated(r) => panic!("expected a finite expansion, got {}", r),
    }
}

/// `[a0; p, p, p, ..]`, an irrational quadratic number
fn periodic(a0: i64, p: i64) -> ContinuedFraction {
    let terms = iter::once(a0).chain(iter::repeat(p)).map(BigInt::from).map(Ok);
    ContinuedFraction::from_stream(Stream::new(terms))
}

fn numerator() -> impl Strategy<Value = i64> {
    -2_000i64..2_000
}

fn denominator() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..500, -500i64..-1]
}

proptest! {
    #[test]
    fn rational_reconstruction(n in -1_000_000i64..1_000_000, d in denominator()) {
        let terms = rational(n, d).take_terms(usize::MAX).unwrap();
        let expected = Ratio::new(BigInt::from(n), BigInt::from(d));
        prop_assert_eq!(reconstruct(&terms), Some(expected.clone()));
        prop_assert_eq!(canonical(terms.clone()), terms.clone());
        prop_assert!(terms.iter().skip(1).all(|a| *a >= BigInt::from(1)));
        prop_assert_eq!(exact(&ContinuedFraction::from(expected.clone())), expected);
    }

    #[test]
    fn cross_backend_equality(n in 0i64..3_000, d in 1i64..3_000, m in 0i64..3_000) {
        let tally = |v| Value::from(Tally::unsigned(v).unwrap());
        prop_assert_eq!(tally(n).magnitude(), Value::from(n).magnitude());
        prop_assert_eq!(tally(n).is_zero(), Value::from(n).is_zero());

        let from_tally = ContinuedFraction::rational(tally(n), tally(d)).unwrap();
        let from_int = rational(n, d);
        let mixed = ContinuedFraction::rational(tally(n), d).unwrap();
        prop_assert_eq!(from_tally.take_terms(usize::MAX), from_int.take_terms(usize::MAX));
        prop_assert_eq!(mixed.take_terms(usize::MAX), from_int.take_terms(usize::MAX));

        let tally_sum = ContinuedFraction::rational(tally(m), 1).unwrap() + from_tally;
        let int_sum = rational(m, 1) + from_int;
        prop_assert_eq!(exact(&tally_sum), exact(&int_sum));

        let product = tally(n).mul(&tally(m)).unwrap();
        prop_assert_eq!(product, Value::from(n * m));
    }

    #[test]
    fn additive_identity(n in numerator(), d in denominator(), a0 in -5i64..5, p in 1i64..6) {
        let x = rational(n, d);
        let sum = x.clone() + 0;
        prop_assert_eq!(
            canonical(sum.take_terms(usize::MAX).unwrap()),
            canonical(x.take_terms(usize::MAX).unwrap())
        );

        let y = periodic(a0, p);
        prop_assert_eq!((y.clone() + 0).take_terms(12).unwrap(), y.take_terms(12).unwrap());
    }

    #[test]
    fn commutativity(a in numerator(), b in denominator(), c in numerator(), d in denominator()) {
        let (x, y) = (rational(a, b), rational(c, d));
        prop_assert_eq!(exact(&(&x + &y)), exact(&(&y + &x)));
        prop_assert_eq!(exact(&(&x * &y)), exact(&(&y * &x)));

        let expected = Ratio::new(BigInt::from(a), BigInt::from(b))
            + Ratio::new(BigInt::from(c), BigInt::from(d));
        prop_assert_eq!(exact(&(&x + &y)), expected);
    }

    #[test]
    fn associativity(
        a in numerator(), b in denominator(),
        c in numerator(), d in denominator(),
        e in numerator(), f in denominator(),
    ) {
        let (x, y, z) = (rational(a, b), rational(c, d), rational(e, f));
        prop_assert_eq!(exact(&(&(&x + &y) + &z)), exact(&(&x + &(&y + &z))));
        prop_assert_eq!(exact(&(&(&x * &y) * &z)), exact(&(&x * &(&y * &z))));
    }

    #[test]
    fn hurwitz_termination(a in -5_000i64..5_000, b in -5_000i64..5_000, c in -500i64..500, d in -500i64..500) {
        use num_cfrac::matter::gaussian::norm;
        use num_complex::Complex;

        prop_assume!(c != 0 || d != 0);
        let numer = Complex::new(BigInt::from(a), BigInt::from(b));
        let denom = Complex::new(BigInt::from(c), BigInt::from(d));
        let mut gen = Euclid::hurwitz(numer, denom).unwrap();

        let mut last = norm(&gen.state().1.to_gaussian().unwrap());
        let mut steps = 0;
        while let Some(term) = gen.next() {
            prop_assert!(term.is_ok());
            let current = norm(&gen.state().1.to_gaussian().unwrap());
            prop_assert!(current < last);
            last = current;
            steps += 1;
        }
        prop_assert!(steps > 0);
        prop_assert_eq!(last, BigInt::from(0));
    }

    #[test]
    fn self_division(a0 in -5i64..5, p in 1i64..6, n in 1i64..300, d in 1i64..300) {
        let config = EngineConfig::default().with_ingest_ceiling(60);

        let x = periodic(a0, p).with_config(config);
        prop_assert_eq!(
            (x.clone() / x).take_terms(1),
            Err(Error::DeadlockDetected { cycles: 61, ceiling: 60 })
        );

        let r = rational(n, d).with_config(config);
        prop_assert_eq!(exact(&(r.clone() / r)), Ratio::from_integer(BigInt::from(1)));
    }
}
