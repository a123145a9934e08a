//! shunt - an incremental two-stack infix calculator
//!
//! # Overview
//!
//! shunt evaluates arithmetic expressions supplied incrementally as a
//! token stream. Tokens arrive one at a time (or as a whitespace
//! delimited line) and are reduced on the fly by operator priority on
//! a pair of stacks, so no parse tree is ever built.
//!
//! ```text
//! tokens -> keyword registry (or item provider) -> items -> reduction -> answer
//! ```
//!
//! # Core concepts
//!
//! ## Incremental entry
//!
//! ```text
//! 1 + 2 * 3            # -> 7 (priority defers the +)
//! ( 1 + 2 ) * 3        # -> 9 (parentheses are priority barriers)
//! 10 - 3 - 2           # -> 5 (ties reduce left first)
//! ```
//!
//! ## Function keywords
//!
//! Unary functions are written with their opening paren and close like
//! any other group:
//!
//! ```text
//! SQRT( 2 * 8 )        # -> 4
//! R2D( PI )            # -> 180
//! ```
//!
//! ## External items
//!
//! Tokens starting with `@` bypass the registry and are resolved by a
//! host-registered provider, which can hand back any ready-made item.
//!
//! # Example
//!
//! ```rust
//! use shunt::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.entry_line("( 1 + 2 ) * 3").unwrap();
//! assert_eq!(calc.get_answer().unwrap(), 9.0);
//!
//! calc.clear();
//! calc.entry_token("12").unwrap();
//! calc.entry_token("%").unwrap();
//! calc.entry_token("5").unwrap();
//! assert_eq!(calc.get_answer().unwrap(), 2.0);
//! ```

pub mod calc;
pub mod item;
pub mod lexer;
pub mod registry;
pub mod stack;

// Re-export commonly used items
pub use calc::{CalcError, Calculator, ItemProvider, PROVIDER_MARKER};
pub use item::{Item, Operator, OperatorKind, PRIORITY_ADD, PRIORITY_FUNC, PRIORITY_MUL};
pub use lexer::tokenize;
pub use stack::{OpStack, ValueStack};

/// Convenience function to evaluate a whole expression line
pub fn eval(line: &str) -> Result<f64, CalcError> {
    let mut calc = Calculator::new();
    calc.entry_line(line)?;
    calc.get_answer()
}
