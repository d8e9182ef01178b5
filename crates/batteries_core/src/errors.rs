//! Error taxonomy and canonical user-facing messages.
//!
//! The runtime wraps these into its own error type; keeping the wording here means every call path (method style,
//! free-function style, operator table) reports the same text for the same mistake.

use core::fmt;

/// Classify a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller broke an operation's contract (non-sequence argument, negative repeat count, wrong arity).
    ContractViolation,
    /// An operator received operands it cannot combine (arithmetic on strings, ordering a number against a list).
    TypeMismatch,
    /// An operation name did not resolve in the dispatch table it was looked up in.
    NoSuchOperation,
}

impl ErrorKind {
    /// Return the canonical spelling of this kind.
    pub fn as_str(self) -> &'static str {
        crate::lang::errors::as_str(self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a bad-argument message.
///
/// ## Parameters
/// - `op`: operation name as the caller spelled it.
/// - `position`: 1-based argument position (the receiver of a free-function call is position 1).
/// - `detail`: what was expected and what was received.
///
/// ## Examples
/// ```rust
/// use batteries_core::errors::bad_argument;
///
/// assert_eq!(
///     bad_argument("rep", 2, "non-negative integer expected, got -1"),
///     "bad argument #2 to 'rep' (non-negative integer expected, got -1)"
/// );
/// ```
pub fn bad_argument(op: &str, position: usize, detail: impl fmt::Display) -> String {
    format!("bad argument #{position} to '{op}' ({detail})")
}

/// Format an "expected X, got Y" detail for [`bad_argument`].
pub fn expected_got(expected: &str, got: &str) -> String {
    format!("{expected} expected, got {got}")
}

/// Format an argument-count mismatch.
pub fn wrong_arity(op: &str, expected: &str, got: usize) -> String {
    format!("wrong number of arguments to '{op}' (expected {expected}, got {got})")
}

/// Format an arithmetic type mismatch for the operand that is not a number.
pub fn arithmetic_on(type_name: &str) -> String {
    format!("attempt to perform arithmetic on a {type_name} value")
}

/// Format an ordering type mismatch.
pub fn compare_between(lhs: &str, rhs: &str) -> String {
    if lhs == rhs {
        format!("attempt to compare two {lhs} values")
    } else {
        format!("attempt to compare {lhs} with {rhs}")
    }
}

/// Format an indexing type mismatch.
pub fn index_into(type_name: &str) -> String {
    format!("attempt to index a {type_name} value")
}

/// Format an unresolved operation name.
pub fn no_such_operation(name: &str) -> String {
    format!("no operation named '{name}'")
}
