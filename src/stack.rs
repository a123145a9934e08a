//! Value and operator stacks
//!
//! Both stacks are strict LIFO: push, pop, and peek at the tail only.
//! Emptiness is an observable state the engine uses for control
//! decisions, so `pop` and `peek` return `Option` rather than failing.

use crate::item::Operator;

/// Stack of operand values awaiting reduction
#[derive(Debug, Default)]
pub struct ValueStack {
    items: Vec<f64>,
}

impl ValueStack {
    pub fn new() -> Self {
        ValueStack { items: Vec::new() }
    }

    pub fn push(&mut self, value: f64) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<f64> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<f64> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Stack of pending operators
#[derive(Debug, Default)]
pub struct OpStack {
    items: Vec<Operator>,
}

impl OpStack {
    pub fn new() -> Self {
        OpStack { items: Vec::new() }
    }

    pub fn push(&mut self, op: Operator) {
        self.items.push(op);
    }

    pub fn pop(&mut self) -> Option<Operator> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&Operator> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
