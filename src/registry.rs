//! Keyword registry
//!
//! Maps keyword text to a ready-made item. Lookup trims surrounding
//! whitespace and is case-insensitive; anything not in the table falls
//! back to numeric-literal parsing. Unary function keywords include
//! their opening paren (`SQRT(`) and act as function-bearing `(`
//! markers on the operator stack.
//!
//! Priorities:
//! ```text
//!  0   ( SQRT( FLOOR( CEILING( ROUND( SIGN( ABS( ...
//! 10   + -
//! 20   * / %
//! 30   MAX MIN ^
//! ```

use std::f64::consts;

use crate::item::{Item, Operator, PRIORITY_ADD, PRIORITY_FUNC, PRIORITY_MUL};

/// Resolve a single token to an item.
///
/// Returns `None` when the token is neither a known keyword nor a
/// numeric literal. All arithmetic is IEEE-754 `f64`: division by
/// zero and domain errors produce infinities/NaN, never a failure.
pub fn resolve(token: &str) -> Option<Item> {
    let keyword = token.trim().to_uppercase();

    let item = match keyword.as_str() {
        "(" => Item::Operator(Operator::open()),
        ")" => Item::Operator(Operator::close()),

        "+" => Item::Operator(Operator::binary("+", PRIORITY_ADD, |a, b| a + b)),
        "-" => Item::Operator(Operator::binary("-", PRIORITY_ADD, |a, b| a - b)),

        "*" => Item::Operator(Operator::binary("*", PRIORITY_MUL, |a, b| a * b)),
        "/" => Item::Operator(Operator::binary("/", PRIORITY_MUL, |a, b| a / b)),
        "%" => Item::Operator(Operator::binary("%", PRIORITY_MUL, |a, b| a % b)),

        "MAX" => Item::Operator(Operator::binary("MAX", PRIORITY_FUNC, f64::max)),
        "MIN" => Item::Operator(Operator::binary("MIN", PRIORITY_FUNC, f64::min)),
        "^" => Item::Operator(Operator::binary("^", PRIORITY_FUNC, f64::powf)),

        "SQRT(" => Item::Operator(Operator::function("SQRT(", f64::sqrt)),
        "FLOOR(" => Item::Operator(Operator::function("FLOOR(", f64::floor)),
        "CEILING(" => Item::Operator(Operator::function("CEILING(", f64::ceil)),
        // f64::round is half-away-from-zero, matching ROUND's contract
        "ROUND(" => Item::Operator(Operator::function("ROUND(", f64::round)),
        "TRUNC(" => Item::Operator(Operator::function("TRUNC(", f64::trunc)),
        "SIGN(" => Item::Operator(Operator::function("SIGN(", sign)),
        "ABS(" => Item::Operator(Operator::function("ABS(", f64::abs)),
        "SIN(" => Item::Operator(Operator::function("SIN(", f64::sin)),
        "COS(" => Item::Operator(Operator::function("COS(", f64::cos)),
        "TAN(" => Item::Operator(Operator::function("TAN(", f64::tan)),
        "ASIN(" => Item::Operator(Operator::function("ASIN(", f64::asin)),
        "ACOS(" => Item::Operator(Operator::function("ACOS(", f64::acos)),
        "ATAN(" => Item::Operator(Operator::function("ATAN(", f64::atan)),
        "HSIN(" => Item::Operator(Operator::function("HSIN(", f64::sinh)),
        "HCOS(" => Item::Operator(Operator::function("HCOS(", f64::cosh)),
        "HTAN(" => Item::Operator(Operator::function("HTAN(", f64::tanh)),
        "LOG(" => Item::Operator(Operator::function("LOG(", f64::ln)),
        "LOG10(" => Item::Operator(Operator::function("LOG10(", f64::log10)),
        "EXP(" => Item::Operator(Operator::function("EXP(", f64::exp)),
        "D2R(" => Item::Operator(Operator::function("D2R(", f64::to_radians)),
        "R2D(" => Item::Operator(Operator::function("R2D(", f64::to_degrees)),

        "PI" => Item::Value(consts::PI),
        "E" => Item::Value(consts::E),

        _ => return token.trim().parse::<f64>().ok().map(Item::Value),
    };

    Some(item)
}

/// Sign of a number: -1, 0, or 1. NaN passes through.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        x
    }
}
