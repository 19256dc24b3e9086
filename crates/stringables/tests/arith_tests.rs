/// Arithmetic on numbers and relative `+=`/`-=` adjustments.
use stringables::arith::{self, parse_arithmetic_operator, Adjustment};
use stringables::{Input, Number, NumberKind, NumberOptions, PrefixMode, Stringable, StringableError};

fn num(value: impl Into<Input>) -> Number {
    Number::new(value, NumberOptions::default()).unwrap()
}

fn int(value: impl Into<Input>) -> Number {
    Number::integer(value, NumberOptions::default()).unwrap()
}

// ============================================================================
// Metadata propagation
// ============================================================================

#[test]
fn unit_survives_division() {
    let n = Number::new(5, NumberOptions::default().unit("X")).unwrap();
    let r = arith::div(&n, 100).unwrap();
    assert_eq!(r, 0.05);
    assert_eq!(r.unit(), Some("X"));
    assert_eq!(r.kind(), NumberKind::Float);
}

#[test]
fn prefix_survives_multiplication() {
    let n = Number::new(5, NumberOptions::default().prefix(PrefixMode::Binary)).unwrap();
    let r = arith::mul(&n, 1024).unwrap();
    assert_eq!(r, 5120.0);
    assert_eq!(r.prefix(), PrefixMode::Binary);
    assert_eq!(r.to_string(), "5Ki");
}

#[test]
fn left_operand_wins_prefix_and_unit() {
    let a = Number::new(
        10,
        NumberOptions::default().unit("X").prefix(PrefixMode::Binary),
    )
    .unwrap();
    let b = Number::new(
        1014,
        NumberOptions::default().unit("X").prefix(PrefixMode::Metric),
    )
    .unwrap();

    let r = arith::add(&a, &b).unwrap();
    assert_eq!(r, 1024.0);
    assert_eq!(r.unit(), Some("X"));
    assert_eq!(r.prefix(), PrefixMode::Binary);

    let r = arith::add(&b, &a).unwrap();
    assert_eq!(r.prefix(), PrefixMode::Metric);
}

#[test]
fn hide_unit_propagates() {
    let n = Number::new(2, NumberOptions::default().unit("B").hide_unit(true)).unwrap();
    let r = arith::mul(&n, 3).unwrap();
    assert!(r.hide_unit());
    assert_eq!(r.to_string(), "6");
}

#[test]
fn unitless_right_operand_adopts_left_unit() {
    let a = Number::new(3, NumberOptions::default().unit("B")).unwrap();
    let b = num(4);
    let r = arith::add(&a, &b).unwrap();
    assert_eq!(r, 7.0);
    assert_eq!(r.unit(), Some("B"));
}

#[test]
fn right_operand_is_converted_to_left_unit() {
    let bytes = Number::new(1, NumberOptions::default().unit("B")).unwrap();
    let bits = Number::new(8, NumberOptions::default().unit("b")).unwrap();
    let r = arith::add(&bytes, &bits).unwrap();
    assert_eq!(r, 2.0);
    assert_eq!(r.unit(), Some("B"));
}

#[test]
fn incompatible_units_fail() {
    let a = Number::new(5, NumberOptions::default().unit("X")).unwrap();
    let b = Number::new(100, NumberOptions::default().unit("z")).unwrap();
    let err = arith::add(&a, &b).unwrap_err();
    assert!(matches!(err, StringableError::UnitConversion { .. }), "{err:?}");
}

// ============================================================================
// Result kind
// ============================================================================

#[test]
fn whole_result_is_integer() {
    let r = arith::mul(&num(5), 3000).unwrap();
    assert_eq!(r, 15000.0);
    assert_eq!(r.kind(), NumberKind::Integer);

    let r = arith::mul(&num(0.5), 4).unwrap();
    assert_eq!(r.kind(), NumberKind::Integer);
}

#[test]
fn fractional_result_is_float() {
    let r = arith::div(&int(7), 2).unwrap();
    assert_eq!(r, 3.5);
    assert_eq!(r.kind(), NumberKind::Float);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn subtraction_and_pow() {
    assert_eq!(arith::sub(&int(10), 3).unwrap(), 7.0);
    assert_eq!(arith::pow(&int(2), 10).unwrap(), 1024.0);
    let half = arith::pow(&int(2), -1).unwrap();
    assert_eq!(half, 0.5);
    assert_eq!(half.kind(), NumberKind::Float);
}

#[test]
fn floor_division_and_modulo_follow_divisor_sign() {
    assert_eq!(arith::floordiv(&int(7), 2).unwrap(), 3.0);
    assert_eq!(arith::floordiv(&int(-7), 2).unwrap(), -4.0);
    assert_eq!(arith::modulo(&int(-7), 3).unwrap(), 2.0);
    assert_eq!(arith::modulo(&int(7), -3).unwrap(), -2.0);
    assert_eq!(arith::modulo(&int(6), 3).unwrap(), 0.0);
}

#[test]
fn divmod_returns_both_parts() {
    let (q, r) = arith::divmod(&int(7), 2).unwrap();
    assert_eq!(q, 3.0);
    assert_eq!(r, 1.0);
}

#[test]
fn division_by_zero_fails() {
    for result in [
        arith::div(&int(1), 0),
        arith::floordiv(&int(1), 0),
        arith::modulo(&int(1), 0),
    ] {
        assert!(matches!(result, Err(StringableError::Arithmetic(_))));
    }
    assert!(arith::divmod(&int(1), 0).is_err());
}

#[test]
fn zero_to_negative_power_fails() {
    let err = arith::pow(&int(0), -1).unwrap_err();
    assert!(matches!(err, StringableError::Arithmetic(_)));
}

#[test]
fn rounding() {
    assert_eq!(arith::floor(&num(2.7)).unwrap(), 2.0);
    assert_eq!(arith::floor(&num(-2.1)).unwrap(), -3.0);
    assert_eq!(arith::ceil(&num(2.1)).unwrap(), 3.0);
    assert_eq!(arith::round(&num(2.5), None).unwrap(), 2.0);
    assert_eq!(arith::round(&num(3.5), None).unwrap(), 4.0);
    assert_eq!(arith::round(&num(1.234), Some(2)).unwrap(), 1.23);

    let floored = arith::floor(&num(2.7)).unwrap();
    assert_eq!(floored.kind(), NumberKind::Integer);
}

#[test]
fn infinity_absorbs_operations() {
    let inf = num("inf");
    assert!(arith::add(&inf, 5).unwrap().is_infinite());
    assert!(arith::sub(&inf, 5).unwrap().is_infinite());
    assert!(arith::mul(&inf, 0).unwrap().is_infinite());
    assert!(arith::div(&inf, 2).unwrap().is_infinite());
    assert!(arith::floor(&inf).unwrap().is_infinite());
}

#[test]
fn infinite_right_operand_absorbs_nan() {
    let inf = Number::float("inf", NumberOptions::default()).unwrap();
    let r = arith::mul(&int(0), &inf).unwrap();
    assert_eq!(r.value(), f64::INFINITY);
    assert_eq!(r.kind(), NumberKind::Float);
}

#[test]
fn negative_infinity_absorbs_operations() {
    let neg = Number::float("-inf", NumberOptions::default()).unwrap();
    let inf = Number::float("inf", NumberOptions::default()).unwrap();
    assert_eq!(arith::mul(&neg, 0).unwrap().value(), f64::NEG_INFINITY);
    assert_eq!(arith::add(&neg, &inf).unwrap().value(), f64::NEG_INFINITY);
    assert_eq!(arith::ceil(&neg).unwrap().value(), f64::NEG_INFINITY);
}

#[test]
fn result_is_checked_against_left_bounds() {
    let bounded = Number::new(90, NumberOptions::default().max(100.0)).unwrap();
    let err = arith::add(&bounded, 20).unwrap_err();
    assert!(err.to_string().starts_with("Too big"));

    let clamped = Number::new(90, NumberOptions::default().max(100.0).autolimit(true)).unwrap();
    assert_eq!(arith::add(&clamped, 20).unwrap(), 100.0);
}

#[test]
fn operands_are_not_modified() {
    let a = int(10);
    let b = int(4);
    let _ = arith::sub(&a, &b).unwrap();
    assert_eq!(a, 10.0);
    assert_eq!(b, 4.0);
}

// ============================================================================
// Relative adjustments
// ============================================================================

fn adjust(current: &Number, new: impl Into<Input>) -> Number {
    match parse_arithmetic_operator(current, new).unwrap() {
        Adjustment::Applied(n) => n,
        other => panic!("expected an applied adjustment, got {other:?}"),
    }
}

#[test]
fn plus_equals_adds() {
    assert_eq!(adjust(&int(10), "+=5"), 15.0);
    assert_eq!(adjust(&int(10), "+=0.5"), 10.5);
}

#[test]
fn minus_equals_subtracts() {
    assert_eq!(adjust(&int(10), "-=3"), 7.0);
}

#[test]
fn minus_equals_below_zero_means_unlimited() {
    assert!(adjust(&int(5), "-=10").is_infinite());
    assert!(adjust(&int(10), "-=10").is_infinite());
}

#[test]
fn minus_equals_ignores_min_bound_on_underflow() {
    let current = Number::integer(5, NumberOptions::default().min(0.0)).unwrap();
    assert!(adjust(&current, "-=10").is_infinite());
}

#[test]
fn minus_equals_ignores_max_bound_on_underflow() {
    let current = Number::integer(5, NumberOptions::default().max(100.0)).unwrap();
    let r = adjust(&current, "-=10");
    assert_eq!(r.value(), f64::INFINITY);
    assert_eq!(r.to_string(), "∞");

    let clamped = Number::integer(5, NumberOptions::default().max(100.0).autolimit(true)).unwrap();
    assert_eq!(adjust(&clamped, "-=10").value(), f64::INFINITY);
}

#[test]
fn infinite_current_counts_as_zero() {
    let current = Number::new("inf", NumberOptions::default().unit("B")).unwrap();
    let r = adjust(&current, "+=5");
    assert_eq!(r, 5.0);
    assert_eq!(r.unit(), Some("B"));
}

#[test]
fn adjustment_keeps_unit_and_prefix() {
    let current = Number::new("1Ki", NumberOptions::default().unit("B")).unwrap();
    let r = adjust(&current, "+=1024");
    assert_eq!(r, 2048.0);
    assert_eq!(r.to_string(), "2KiB");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(adjust(&int(10), " +=5 "), 15.0);
}

#[test]
fn absolute_values_pass_through() {
    let current = int(10);
    for new in [Input::from("42"), Input::from(42), Input::from("+="), Input::from(true)] {
        let adj = parse_arithmetic_operator(&current, new.clone()).unwrap();
        assert_eq!(adj, Adjustment::Passthrough(new));
    }
}

#[test]
fn passthrough_returns_input_for_kind_constructor() {
    let current = int(10);
    let adj = parse_arithmetic_operator(&current, "42").unwrap();
    assert!(adj.applied().is_none());
    let next = Number::integer(adj.into_input(), NumberOptions::default()).unwrap();
    assert_eq!(next, 42.0);
}

#[test]
fn remainder_must_be_plain_decimal() {
    let current = int(10);
    for bad in ["+=5k", "+=abc", "-=1.2.3", "+=-5", "+=."] {
        let err = parse_arithmetic_operator(&current, bad).unwrap_err();
        assert!(err.to_string().contains("Not a number"), "{bad}: {err}");
    }
}
