//! The reduction engine for shunt
//!
//! `Calculator` consumes items one at a time and maintains two stacks:
//! values and pending operators. Reduction is immediate or deferred per
//! operator priority, so the final answer is produced without ever
//! building a parse tree:
//! - Values push to the value stack
//! - Open markers (plain or function-bearing) push to the operator stack
//! - A close marker drains operators back to the matching open
//! - A binary operator defers when it binds tighter than the pending
//!   top, otherwise it reduces the top first (ties reduce: left
//!   associativity)
//!
//! Tokens the registry cannot resolve may be served by a host-supplied
//! item provider, selected by the `@` marker prefix.

use thiserror::Error;

use crate::item::{Item, Operator, OperatorKind};
use crate::lexer::tokenize;
use crate::registry;
use crate::stack::{OpStack, ValueStack};

/// Tokens starting with this character bypass the keyword registry and
/// go to the external item provider.
pub const PROVIDER_MARKER: char = '@';

/// Host-supplied callback resolving marker-prefixed tokens.
pub type ItemProvider = Box<dyn Fn(&str) -> Option<Item>>;

#[derive(Error, Debug)]
pub enum CalcError {
    /// Token is neither a keyword nor a number
    #[error("Unresolved token: {0}")]
    UnresolvedToken(String),
    /// An operator needed more operands than the value stack holds
    #[error("Stack underflow: {0} is missing an operand")]
    StackUnderflow(String),
    /// A close marker arrived with no matching open on the stack
    #[error("Unbalanced parentheses: ')' without a matching '('")]
    UnbalancedParentheses,
    /// The expression did not reduce to exactly one value
    #[error("Unbalanced expression: {0}")]
    UnbalancedExpression(String),
    /// A marker-prefixed token with no provider registered, or the
    /// provider declined it
    #[error("External token {0} could not be resolved by an item provider")]
    MissingProvider(String),
}

/// The incremental operator-precedence calculator.
///
/// An instance is cheap to construct and owns all of its state, so it
/// can be reused across expressions via [`clear`](Calculator::clear)
/// or created per expression. It is synchronous and not internally
/// synchronized.
///
/// ```
/// use shunt::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.entry_line("1 + 2 * 3").unwrap();
/// assert_eq!(calc.get_answer().unwrap(), 7.0);
/// ```
#[derive(Default)]
pub struct Calculator {
    values: ValueStack,
    operators: OpStack,
    provider: Option<ItemProvider>,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            values: ValueStack::new(),
            operators: OpStack::new(),
            provider: None,
        }
    }

    /// Empty both stacks. Idempotent; required between expressions and
    /// after any error. The provider registration survives.
    pub fn clear(&mut self) {
        self.values.clear();
        self.operators.clear();
    }

    /// Register the external item provider invoked for `@`-prefixed
    /// tokens. Only one provider is meaningful; a second call replaces
    /// the first.
    pub fn set_item_provider<F>(&mut self, provider: F)
    where
        F: Fn(&str) -> Option<Item> + 'static,
    {
        self.provider = Some(Box::new(provider));
    }

    /// Enter one item, in expression order.
    pub fn entry(&mut self, item: Item) -> Result<(), CalcError> {
        let op = match item {
            Item::Value(value) => {
                self.values.push(value);
                return Ok(());
            }
            Item::Operator(op) => op,
        };

        match op.kind() {
            OperatorKind::Open => {
                self.operators.push(op);
                Ok(())
            }
            OperatorKind::Close => self.close_group(),
            OperatorKind::Operator => self.entry_binary(op),
        }
    }

    /// Enter a batch of items; equivalent to sequential [`entry`](Calculator::entry) calls.
    pub fn entry_all<I>(&mut self, items: I) -> Result<(), CalcError>
    where
        I: IntoIterator<Item = Item>,
    {
        for item in items {
            self.entry(item)?;
        }
        Ok(())
    }

    /// Resolve one token and enter it.
    ///
    /// `@`-prefixed tokens go to the registered item provider; all
    /// others through the keyword registry with its numeric fallback.
    pub fn entry_token(&mut self, token: &str) -> Result<(), CalcError> {
        let token = token.trim();

        let item = if token.starts_with(PROVIDER_MARKER) {
            let provider = self
                .provider
                .as_ref()
                .ok_or_else(|| CalcError::MissingProvider(token.to_string()))?;
            provider(token).ok_or_else(|| CalcError::MissingProvider(token.to_string()))?
        } else {
            registry::resolve(token).ok_or_else(|| CalcError::UnresolvedToken(token.to_string()))?
        };

        self.entry(item)
    }

    /// Tokenize a whitespace-delimited line and enter each token in
    /// order.
    /// Usage: calc.entry_line("( 1 + 2 ) * 3")
    pub fn entry_line(&mut self, line: &str) -> Result<(), CalcError> {
        for token in tokenize(line) {
            self.entry_token(token)?;
        }
        Ok(())
    }

    /// Drain the pending operators and return the final answer.
    ///
    /// Fails with `UnbalancedExpression` when an open marker was never
    /// closed or the value stack does not end up holding exactly one
    /// value. Does not clear the stacks; call
    /// [`clear`](Calculator::clear) before reuse.
    pub fn get_answer(&mut self) -> Result<f64, CalcError> {
        while let Some(op) = self.operators.pop() {
            if op.kind() == OperatorKind::Open {
                return Err(CalcError::UnbalancedExpression(format!(
                    "{} was never closed",
                    op.name()
                )));
            }
            op.apply(&mut self.values)?;
        }

        let count = self.values.len();
        match self.values.pop() {
            Some(answer) if count == 1 => Ok(answer),
            _ => Err(CalcError::UnbalancedExpression(format!(
                "{} values left on the stack",
                count
            ))),
        }
    }

    /// Drain back to the matching open marker, applying each popped
    /// operator. The open's own rule runs last: a no-op for `(`, the
    /// function application for a unary opener like `SQRT(`.
    fn close_group(&mut self) -> Result<(), CalcError> {
        loop {
            let op = self
                .operators
                .pop()
                .ok_or(CalcError::UnbalancedParentheses)?;
            op.apply(&mut self.values)?;

            if op.kind() == OperatorKind::Open {
                return Ok(());
            }
        }
    }

    /// Priority step for a binary operator: defer when it binds
    /// strictly tighter than the pending top, otherwise reduce the top
    /// first. Equal priorities reduce, which is what makes `a - b - c`
    /// evaluate as `(a - b) - c`. Open markers sit at priority 0, so
    /// nothing deferred above them ever reduces past the barrier.
    fn entry_binary(&mut self, op: Operator) -> Result<(), CalcError> {
        let defer = match self.operators.peek() {
            Some(top) => op.priority() > top.priority(),
            None => true,
        };

        if !defer {
            if let Some(pending) = self.operators.pop() {
                pending.apply(&mut self.values)?;
            }
        }

        self.operators.push(op);
        Ok(())
    }
}
