#![allow(clippy::unwrap_used, clippy::float_cmp)]

use calculator_sdk::Operation;

use super::error::{DIVIDE_BY_ZERO, DomainError, NEGATIVE_RADICAND};
use super::service::Service;

const SAMPLES: [f64; 14] = [
    -1.0e12, -12_345.678, -7.5, -3.0, -1.0, -0.25, 0.0, 0.125, 1.0, 2.0, 3.5, 97.0, 1_024.0,
    6.02e23,
];

fn approx_eq(actual: f64, expected: f64) -> bool {
    let scale = expected.abs().max(1.0);
    (actual - expected).abs() <= 1e-9 * scale
}

/// Ground truth: full trial division with no shortcuts.
fn naive_is_prime(n: i64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn basic_arithmetic() {
    let svc = Service::new();
    assert_eq!(svc.add(2.0, 3.0), 5.0);
    assert_eq!(svc.add(-1.0, 1.0), 0.0);
    assert_eq!(svc.subtract(3.0, 2.0), 1.0);
    assert_eq!(svc.subtract(0.0, 5.0), -5.0);
    assert_eq!(svc.multiply(3.0, -5.0), -15.0);
    assert_eq!(svc.multiply(-2.0, -3.0), 6.0);
    assert_eq!(svc.multiply(4.0, 0.0), 0.0);
    assert_eq!(svc.power(2.0, 10.0), 1024.0);
    assert_eq!(svc.percentage(200.0, 15.0), 30.0);
}

#[test]
fn division() {
    let svc = Service::new();
    assert_eq!(svc.divide(6.0, 3.0).unwrap(), 2.0);
    assert_eq!(svc.divide(5.0, 2.0).unwrap(), 2.5);
    assert_eq!(svc.divide(-6.0, 3.0).unwrap(), -2.0);
}

#[test]
fn ieee_semantics_propagate() {
    let svc = Service::new();
    assert!(svc.add(f64::NAN, 1.0).is_nan());
    assert_eq!(svc.add(f64::INFINITY, 1.0), f64::INFINITY);
    assert!(svc.subtract(f64::INFINITY, f64::INFINITY).is_nan());
    assert!(svc.multiply(0.0, f64::INFINITY).is_nan());
    assert_eq!(svc.divide(1.0, f64::INFINITY).unwrap(), 0.0);
    assert!(svc.divide(1.0, f64::NAN).unwrap().is_nan());
}

#[test]
fn power_follows_powf() {
    let svc = Service::new();
    assert_eq!(svc.power(4.0, 0.5), 2.0);
    assert_eq!(svc.power(2.0, -2.0), 0.25);
    assert_eq!(svc.power(0.0, 0.0), 1.0);
    assert!(svc.power(-8.0, 1.0 / 3.0).is_nan());
}

#[test]
fn divide_then_multiply_round_trips() {
    let svc = Service::new();
    for &a in &SAMPLES {
        for &b in SAMPLES.iter().filter(|b| **b != 0.0) {
            let back = svc.divide(svc.multiply(a, b), b).unwrap();
            assert!(approx_eq(back, a), "divide(multiply({a}, {b}), {b}) = {back}");
        }
    }
}

#[test]
fn divide_by_zero_is_rejected_for_every_dividend() {
    let svc = Service::new();
    let dividends = SAMPLES
        .iter()
        .copied()
        .chain([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
    for a in dividends {
        for zero in [0.0, -0.0] {
            let err = svc.divide(a, zero).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidArgument {
                    operation: Operation::Divide,
                    message: DIVIDE_BY_ZERO.to_owned(),
                }
            );
        }
    }
}

#[test]
fn square_root_domain() {
    let svc = Service::new();
    for &a in SAMPLES.iter().filter(|a| **a < 0.0) {
        let err = svc.square_root(a).unwrap_err();
        assert_eq!(err.to_string(), NEGATIVE_RADICAND);
    }
    assert!(svc.square_root(f64::NEG_INFINITY).is_err());
    assert!(svc.square_root(f64::NAN).unwrap().is_nan());
}

#[test]
fn square_root_squares_back() {
    let svc = Service::new();
    for &a in SAMPLES.iter().filter(|a| **a >= 0.0) {
        let root = svc.square_root(a).unwrap();
        assert!(root >= 0.0);
        assert!(approx_eq(root * root, a), "sqrt({a})^2 = {}", root * root);
    }
    assert_eq!(svc.square_root(9.0).unwrap(), 3.0);
}

#[test]
fn primality_examples() {
    let svc = Service::new();
    assert!(svc.is_prime(2));
    assert!(svc.is_prime(3));
    assert!(svc.is_prime(97));
    assert!(!svc.is_prime(1));
    assert!(!svc.is_prime(0));
    assert!(!svc.is_prime(-7));
    assert!(!svc.is_prime(9));
    assert!(!svc.is_prime(25));
}

#[test]
fn primality_matches_ground_truth() {
    let svc = Service::new();
    for n in -10..=10_000 {
        assert_eq!(svc.is_prime(n), naive_is_prime(n), "n = {n}");
    }
}

#[test]
fn primality_near_i64_limits() {
    let svc = Service::new();
    assert!(svc.is_prime(1_000_000_007));
    // 2^63 - 1 = 7^2 * 73 * 127 * 337 * 92737 * 649657
    assert!(!svc.is_prime(i64::MAX));
    assert!(!svc.is_prime(i64::MIN));
}

#[test]
fn evaluate_dispatches_every_operation() {
    let svc = Service::new();
    let cases = [
        (Operation::Add, 2.0, 3.0, 5.0),
        (Operation::Subtract, 3.0, 2.0, 1.0),
        (Operation::Multiply, 3.0, -5.0, -15.0),
        (Operation::Divide, 6.0, 3.0, 2.0),
        (Operation::Power, 2.0, 10.0, 1024.0),
        (Operation::Percentage, 50.0, 10.0, 5.0),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(svc.evaluate(op, a, Some(b)).unwrap(), expected, "{op}");
    }
    assert_eq!(svc.evaluate(Operation::SquareRoot, 16.0, None).unwrap(), 4.0);
    assert_eq!(
        svc.evaluate(Operation::SquareRoot, 16.0, Some(123.0)).unwrap(),
        4.0
    );
}

#[test]
fn evaluate_requires_second_operand_for_binary_operations() {
    let svc = Service::new();
    for op in Operation::ALL.into_iter().filter(|op| !op.is_unary()) {
        let err = svc.evaluate(op, 1.0, None).unwrap_err();
        assert!(
            matches!(&err, DomainError::Validation { field, .. } if field == "b"),
            "{op}: {err}"
        );
    }
}

#[test]
fn evaluate_surfaces_domain_errors() {
    let svc = Service::new();
    assert!(matches!(
        svc.evaluate(Operation::Divide, 1.0, Some(0.0)),
        Err(DomainError::InvalidArgument {
            operation: Operation::Divide,
            ..
        })
    ));
    assert!(matches!(
        svc.evaluate(Operation::SquareRoot, -4.0, None),
        Err(DomainError::InvalidArgument {
            operation: Operation::SquareRoot,
            ..
        })
    ));
}

#[test]
fn service_is_shareable_across_threads() {
    let svc = std::sync::Arc::new(Service::new());
    let handles: Vec<_> = (0..4_i64)
        .map(|t| {
            let svc = std::sync::Arc::clone(&svc);
            std::thread::spawn(move || (t * 250..(t + 1) * 250).filter(|n| svc.is_prime(*n)).count())
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    // pi(1000) = 168
    assert_eq!(total, 168);
}
