//! Item model for shunt
//!
//! An item is one element of an expression: either a number or an
//! operator. Operators carry a priority (higher binds tighter) and a
//! reduction rule that runs against the value stack.

use crate::calc::CalcError;
use crate::stack::ValueStack;

/// Additive class: + -
pub const PRIORITY_ADD: i32 = 10;
/// Multiplicative class: * / %
pub const PRIORITY_MUL: i32 = 20;
/// Function-style binary keywords: MAX MIN ^
pub const PRIORITY_FUNC: i32 = 30;

/// Structural classification of an operator.
///
/// `Open` and `Close` bound a sub-expression; everything else is an
/// ordinary infix operator subject to priority comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Operator,
    Open,
    Close,
}

/// One element of a token stream
#[derive(Debug, Clone)]
pub enum Item {
    /// A number (literals, named constants, provider results)
    Value(f64),
    /// An operator, structural marker, or unary function
    Operator(Operator),
}

impl Item {
    /// Binding priority; plain values report 0.
    pub fn priority(&self) -> i32 {
        match self {
            Item::Value(_) => 0,
            Item::Operator(op) => op.priority(),
        }
    }
}

/// The reduction rule an operator applies to the value stack.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Structural markers reduce nothing ( `(` and `)` )
    Structural,
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

/// An operator item: name, structural kind, priority, reduction rule.
///
/// Operators are stateless; a single instance may be applied against
/// any stack any number of times.
#[derive(Debug, Clone)]
pub struct Operator {
    name: &'static str,
    kind: OperatorKind,
    priority: i32,
    rule: Rule,
}

impl Operator {
    /// A plain opening parenthesis. Acts as a priority barrier on the
    /// operator stack; applying it is a no-op.
    pub fn open() -> Self {
        Operator {
            name: "(",
            kind: OperatorKind::Open,
            priority: 0,
            rule: Rule::Structural,
        }
    }

    /// A closing parenthesis. Maximum priority so ordinary comparison
    /// never defers it; the engine handles it structurally instead of
    /// ever pushing it.
    pub fn close() -> Self {
        Operator {
            name: ")",
            kind: OperatorKind::Close,
            priority: i32::MAX,
            rule: Rule::Structural,
        }
    }

    /// A binary infix operator.
    /// Usage: Operator::binary("+", PRIORITY_ADD, |a, b| a + b)
    pub fn binary(name: &'static str, priority: i32, f: fn(f64, f64) -> f64) -> Self {
        Operator {
            name,
            kind: OperatorKind::Operator,
            priority,
            rule: Rule::Binary(f),
        }
    }

    /// A unary function keyword written with its opening paren, e.g.
    /// `SQRT(`. Behaves like `(` on the operator stack, but applies
    /// the function when the matching `)` drains it.
    pub fn function(name: &'static str, f: fn(f64) -> f64) -> Self {
        Operator {
            name,
            kind: OperatorKind::Open,
            priority: 0,
            rule: Rule::Unary(f),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Apply this operator's reduction rule to the value stack.
    ///
    /// Binary rules pop the right-hand operand first, then the left,
    /// preserving source order. The result is pushed as a fresh value;
    /// popped operands are never written back in place.
    pub fn apply(&self, values: &mut ValueStack) -> Result<(), CalcError> {
        match self.rule {
            Rule::Structural => Ok(()),
            Rule::Unary(f) => {
                let v = values
                    .pop()
                    .ok_or_else(|| CalcError::StackUnderflow(self.name.to_string()))?;
                values.push(f(v));
                Ok(())
            }
            Rule::Binary(f) => {
                let rhs = values
                    .pop()
                    .ok_or_else(|| CalcError::StackUnderflow(self.name.to_string()))?;
                let lhs = values
                    .pop()
                    .ok_or_else(|| CalcError::StackUnderflow(self.name.to_string()))?;
                values.push(f(lhs, rhs));
                Ok(())
            }
        }
    }
}
