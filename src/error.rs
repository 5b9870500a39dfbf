//! Field error types

use std::fmt;
use thiserror::Error;

/// Binary operation that was attempted on a pair of field elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOp {
    Add,
    Sub,
}

impl fmt::Display for FieldOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldOp::Add => write!(f, "add"),
            FieldOp::Sub => write!(f, "sub"),
        }
    }
}

/// Errors raised while constructing or combining field elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The value does not lie in `[0, modulus)`
    #[error("Num {value} not in field range 0 to {}", upper_bound(.modulus))]
    OutOfRange { value: i64, modulus: i64 },

    /// The operands belong to fields with different moduli
    #[error("Cannot {op} two numbers in different Fields")]
    FieldMismatch { op: FieldOp, left: i64, right: i64 },
}

// Widened so that `i64::MIN - 1` still renders.
fn upper_bound(modulus: &i64) -> i128 {
    i128::from(*modulus) - 1
}
