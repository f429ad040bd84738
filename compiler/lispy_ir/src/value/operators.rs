//! Numeric arithmetic on resolved operands.
//!
//! `Int op Int` stays integral and is overflow-checked; as soon as a float
//! is involved the result is a float. Any other operand kind is a
//! [`EvalError::TypeMismatch`].

use super::Value;
use crate::{EvalError, EvalResult};

/// Arithmetic operators the language evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Mul,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Mul => '*',
        }
    }

    /// Apply to two resolved operands.
    pub fn apply(self, lhs: &Value, rhs: &Value) -> EvalResult {
        match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => self
                .apply_int(*a, *b)
                .map(Value::Int)
                .ok_or(EvalError::IntegerOverflow { op: self.symbol() }),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(self.apply_float(*a, *b))),
            (Value::Int(a), Value::Float(b)) => {
                Ok(Value::Float(self.apply_float(int_to_float(*a), *b)))
            }
            (Value::Float(a), Value::Int(b)) => {
                Ok(Value::Float(self.apply_float(*a, int_to_float(*b))))
            }
            _ => Err(EvalError::TypeMismatch {
                op: self.symbol(),
                left: lhs.kind_name(),
                right: rhs.kind_name(),
            }),
        }
    }

    fn apply_int(self, a: i64, b: i64) -> Option<i64> {
        match self {
            ArithOp::Add => a.checked_add(b),
            ArithOp::Mul => a.checked_mul(b),
        }
    }

    fn apply_float(self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Mul => a * b,
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "mixed int/float arithmetic promotes to float"
)]
fn int_to_float(n: i64) -> f64 {
    n as f64
}
