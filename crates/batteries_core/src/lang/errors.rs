//! Error-kind vocabulary.
//!
//! Lets docs and diagnostics treat the error taxonomy as named vocabulary, the same way operators and list operations
//! are.

use crate::errors::ErrorKind;

use super::registry::{LangItemInfo, Stability};

/// Metadata for an error kind.
pub type ErrorKindInfo = LangItemInfo<ErrorKind>;

/// Registry of error kinds.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    info(
        ErrorKind::ContractViolation,
        "ContractViolation",
        "Raised when a caller passes a non-sequence where a sequence is required, an out-of-domain argument \
         (such as a negative repeat count) or the wrong number of arguments.",
    ),
    info(
        ErrorKind::TypeMismatch,
        "TypeMismatch",
        "Raised when an operator receives operands it cannot combine, such as arithmetic on non-numbers.",
    ),
    info(
        ErrorKind::NoSuchOperation,
        "NoSuchOperation",
        "Raised when an operation name is not present in the dispatch table it is looked up in.",
    ),
];

/// Return the canonical spelling for an error kind.
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Resolve an error-kind spelling.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    super::registry::from_str_impl(ERROR_KINDS, name)
}

/// Return the full metadata entry for an error kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (this indicates a programming error).
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    ERROR_KINDS
        .iter()
        .find(|e| e.id == kind)
        .expect("error kind info missing")
}

const fn info(id: ErrorKind, canonical: &'static str, description: &'static str) -> ErrorKindInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since: "0.1.0",
        stability: Stability::Stable,
    }
}
