//! Runtime error type.
//!
//! The semantic core (`batteries_core`) owns the taxonomy ([`ErrorKind`]) and the canonical message text. This module
//! wraps them into a `Result`-friendly error that carries the operation name and, where one exists, the 1-based
//! position of the offending argument.

use batteries_core::ErrorKind;
use batteries_core::errors as msg;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BatteriesError>;

/// Errors surfaced by list operations and the operator table.
///
/// ## Notes
/// - The shape-mismatch outcome of `shape` is not an error; it is reported as a `Nil` result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BatteriesError {
    #[error("{message}")]
    #[diagnostic(code(batteries::contract_violation))]
    ContractViolation {
        op: String,
        position: Option<usize>,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(batteries::type_mismatch))]
    TypeMismatch {
        op: String,
        position: Option<usize>,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(
        code(batteries::no_such_operation),
        help("legacy list operations are unavailable when BATTERIES_DEPRECATE=remove")
    )]
    NoSuchOperation { name: String, message: String },
}

impl BatteriesError {
    /// A bad argument at `position` (1-based) of `op`.
    pub fn bad_argument(op: &str, position: usize, expected: &str, got: impl std::fmt::Display) -> Self {
        BatteriesError::ContractViolation {
            op: op.to_string(),
            position: Some(position),
            message: msg::bad_argument(op, position, msg::expected_got(expected, &got.to_string())),
        }
    }

    /// An argument count that `op` does not accept.
    pub fn wrong_arity(op: &str, expected: impl std::fmt::Display, got: usize) -> Self {
        BatteriesError::ContractViolation {
            op: op.to_string(),
            position: None,
            message: msg::wrong_arity(op, &expected.to_string(), got),
        }
    }

    /// An operand of `op` at `position` that the operator cannot work with.
    pub fn type_mismatch(op: &str, position: usize, detail: String) -> Self {
        BatteriesError::TypeMismatch {
            op: op.to_string(),
            position: Some(position),
            message: msg::bad_argument(op, position, detail),
        }
    }

    pub fn no_such_operation(name: &str) -> Self {
        BatteriesError::NoSuchOperation {
            name: name.to_string(),
            message: msg::no_such_operation(name),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BatteriesError::ContractViolation { .. } => ErrorKind::ContractViolation,
            BatteriesError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            BatteriesError::NoSuchOperation { .. } => ErrorKind::NoSuchOperation,
        }
    }

    /// Return the 1-based argument position this error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            BatteriesError::ContractViolation { position, .. } | BatteriesError::TypeMismatch { position, .. } => {
                *position
            }
            BatteriesError::NoSuchOperation { .. } => None,
        }
    }

    /// Renumber the argument position of a contract violation raised by `op` itself.
    ///
    /// Implementations number arguments receiver-first. Legacy free-function spellings that take the list last
    /// (`filter(p, l)`) use this to report positions in the order the caller actually wrote them.
    pub(crate) fn renumber(self, op: &str, map: impl Fn(usize) -> usize) -> Self {
        match self {
            BatteriesError::ContractViolation {
                op: raised_by,
                position: Some(p),
                message,
            } if raised_by == op => {
                let np = map(p);
                let message = message.replacen(&format!("#{p} "), &format!("#{np} "), 1);
                BatteriesError::ContractViolation {
                    op: raised_by,
                    position: Some(np),
                    message,
                }
            }
            other => other,
        }
    }
}
