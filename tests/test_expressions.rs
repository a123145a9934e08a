//! Expression battery for shunt
//!
//! Whole-line evaluation through the public surface: tokenizer,
//! registry, and reduction engine together.

use shunt::eval;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_basic_arithmetic() {
    assert_eq!(eval("1 + 2").unwrap(), 3.0);
    assert_eq!(eval("10 - 4").unwrap(), 6.0);
    assert_eq!(eval("6 * 7").unwrap(), 42.0);
    assert_eq!(eval("15 / 4").unwrap(), 3.75);
    assert_eq!(eval("12 % 5").unwrap(), 2.0);
}

#[test]
fn test_precedence() {
    assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
    assert_eq!(eval("( 1 + 2 ) * 3").unwrap(), 9.0);
    assert_eq!(eval("2 * 3 + 4 * 5").unwrap(), 26.0);
    assert_eq!(eval("2 ^ 3 * 2").unwrap(), 16.0);
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10 - 3 - 2").unwrap(), 5.0);
    assert_eq!(eval("100 / 10 / 5").unwrap(), 2.0);
    assert_eq!(eval("10 - 3 + 2").unwrap(), 9.0);
}

#[test]
fn test_nested_groups() {
    assert_eq!(eval("( ( 1 + 2 ) * ( 3 + 4 ) )").unwrap(), 21.0);
    assert_eq!(eval("( 1.2 * 3.4 ) - ( 1.2 * 3.4 )").unwrap(), 0.0);
}

#[test]
fn test_max_min_pow() {
    assert_eq!(eval("3 MAX 7").unwrap(), 7.0);
    assert_eq!(eval("3 MIN 7").unwrap(), 3.0);
    assert_eq!(eval("-0.2 MAX -0.1").unwrap(), -0.1);
    assert_eq!(eval("2 ^ 10").unwrap(), 1024.0);
}

#[test]
fn test_sqrt() {
    assert_eq!(eval("SQRT( 16 )").unwrap(), 4.0);
    assert_eq!(eval("SQRT( 2 * 8 )").unwrap(), 4.0);
}

#[test]
fn test_floor_ceiling_boundaries() {
    assert_eq!(eval("FLOOR( 1.5 )").unwrap(), 1.0);
    assert_eq!(eval("FLOOR( -1.5 )").unwrap(), -2.0);
    assert_eq!(eval("CEILING( 1.4 )").unwrap(), 2.0);
    assert_eq!(eval("CEILING( -1.4 )").unwrap(), -1.0);
}

#[test]
fn test_round_half_away_from_zero() {
    assert_eq!(eval("ROUND( 1.4 )").unwrap(), 1.0);
    assert_eq!(eval("ROUND( 1.5 )").unwrap(), 2.0);
    assert_eq!(eval("ROUND( -1.5 )").unwrap(), -2.0);
}

#[test]
fn test_trunc_toward_zero() {
    assert_eq!(eval("TRUNC( 1.9 )").unwrap(), 1.0);
    assert_eq!(eval("TRUNC( -1.9 )").unwrap(), -1.0);
}

#[test]
fn test_sign() {
    assert_eq!(eval("SIGN( -2 )").unwrap(), -1.0);
    assert_eq!(eval("SIGN( 0 )").unwrap(), 0.0);
    assert_eq!(eval("SIGN( 2 )").unwrap(), 1.0);
}

#[test]
fn test_abs() {
    assert_eq!(eval("ABS( 10 )").unwrap(), 10.0);
    assert_eq!(eval("ABS( -10 )").unwrap(), 10.0);
}

#[test]
fn test_degrees_radians() {
    assert_close(eval("D2R( 180 )").unwrap(), std::f64::consts::PI);
    assert_close(eval("R2D( PI )").unwrap(), 180.0);
}

#[test]
fn test_degree_radian_round_trip() {
    for x in [0.0, 1.0, 45.0, 90.0, 123.456, -30.0] {
        let line = format!("R2D( D2R( {} ) )", x);
        assert_close(eval(&line).unwrap(), x);
    }
}

#[test]
fn test_trigonometry() {
    assert_close(eval("SIN( PI / 2 )").unwrap(), 1.0);
    assert_close(eval("COS( 0 )").unwrap(), 1.0);
    assert_close(eval("TAN( 1 )").unwrap(), 1f64.tan());
    assert_close(eval("ASIN( 1 )").unwrap(), 1f64.asin());
    assert_close(eval("ACOS( 1 )").unwrap(), 0.0);
    assert_close(eval("ATAN( 1 )").unwrap(), 1f64.atan());
}

#[test]
fn test_hyperbolics() {
    assert_close(eval("HSIN( 1 )").unwrap(), 1f64.sinh());
    assert_close(eval("HCOS( 1 )").unwrap(), 1f64.cosh());
    assert_close(eval("HTAN( 1 )").unwrap(), 1f64.tanh());
}

#[test]
fn test_logarithms() {
    assert_close(eval("LOG( 100 )").unwrap(), 100f64.ln());
    assert_close(eval("LOG10( 100 )").unwrap(), 2.0);
    assert_close(eval("EXP( 0.1 )").unwrap(), 0.1f64.exp());
    assert_close(eval("LOG( E )").unwrap(), 1.0);
}

#[test]
fn test_functions_compose() {
    assert_eq!(eval("SQRT( ABS( -16 ) )").unwrap(), 4.0);
    assert_close(eval("SIN( D2R( 90 ) )").unwrap(), 1.0);
    assert_eq!(eval("FLOOR( 1.5 ) + CEILING( 1.5 )").unwrap(), 3.0);
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(eval("sqrt( 16 )").unwrap(), 4.0);
    assert_eq!(eval("3 max 7").unwrap(), 7.0);
    assert_close(eval("r2d( pi )").unwrap(), 180.0);
}

#[test]
fn test_ideographic_space_separator() {
    assert_eq!(eval("1\u{3000}+\u{3000}2").unwrap(), 3.0);
}

#[test]
fn test_signed_literals() {
    assert_eq!(eval("-3 + 5").unwrap(), 2.0);
    assert_eq!(eval("2 * -3").unwrap(), -6.0);
}
