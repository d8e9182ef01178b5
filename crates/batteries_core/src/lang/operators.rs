//! Operator vocabulary.
//!
//! This module defines the canonical operator set exposed by the operator table: every built-in infix/prefix operator
//! gets a stable [`OperatorId`], a function-style name (`"sum"`) and the symbol it mirrors (`"+"`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and accepts either spelling.
//! - Word operators (`and`, `or`, `not`) are spelled as keywords; [`OperatorInfo::is_keyword_spelling`] marks them.
//!
//! ## Examples
//! ```rust
//! use batteries_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("and"), Some(OperatorId::Conj));
//! assert_eq!(operators::info_for(OperatorId::Neg).fixity, Fixity::Prefix);
//! assert_eq!(operators::symbol(OperatorId::Concat), "..");
//! ```

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

impl Fixity {
    /// Number of operands the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            Fixity::Infix => 2,
            Fixity::Prefix => 1,
        }
    }
}

/// Group operators by the semantics family they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// Numeric operators; non-numeric operands are a type mismatch.
    Arithmetic,
    /// Truthiness-based operators; return operand values, accept the absent value.
    Logical,
    /// Equality and ordering; ordering defers to an operand's own relation when it has one.
    Relational,
    /// Textual concatenation.
    String,
    /// Keyed lookup.
    Access,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // String / access
    Concat,
    Deref,

    // Arithmetic
    Sum,
    Diff,
    Prod,
    Quot,
    Mod,
    Pow,

    // Logical
    Conj,
    Disj,
    Neg,

    // Relational
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    /// Function-style name used as the operator table key.
    pub name: &'static str,
    /// The built-in operator this entry mirrors.
    pub symbol: &'static str,
    pub fixity: Fixity,
    pub category: OperatorCategory,
    pub is_keyword_spelling: bool,
    pub description: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(
        OperatorId::Concat,
        "concat",
        "..",
        Fixity::Infix,
        OperatorCategory::String,
        "Join the textual representations of both operands; lists concatenate instead.",
    ),
    op(
        OperatorId::Deref,
        "deref",
        "[]",
        Fixity::Infix,
        OperatorCategory::Access,
        "Look a key up in a container, yielding nil when the container or the key is absent.",
    ),
    op(
        OperatorId::Sum,
        "sum",
        "+",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Add two numbers; a list on the left appends the right operand.",
    ),
    op(
        OperatorId::Diff,
        "diff",
        "-",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Subtract the right number from the left.",
    ),
    op(
        OperatorId::Prod,
        "prod",
        "*",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Multiply two numbers.",
    ),
    op(
        OperatorId::Quot,
        "quot",
        "/",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Divide two numbers; the result is always a float.",
    ),
    op(
        OperatorId::Mod,
        "mod",
        "%",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Floored modulo; the result takes the sign of the divisor.",
    ),
    op(
        OperatorId::Pow,
        "pow",
        "^",
        Fixity::Infix,
        OperatorCategory::Arithmetic,
        "Raise the left number to the power of the right one.",
    ),
    word(
        OperatorId::Conj,
        "conj",
        "and",
        Fixity::Infix,
        "Return the left operand if it is falsy, otherwise the right operand.",
    ),
    word(
        OperatorId::Disj,
        "disj",
        "or",
        Fixity::Infix,
        "Return the left operand if it is truthy, otherwise the right operand.",
    ),
    word(
        OperatorId::Neg,
        "neg",
        "not",
        Fixity::Prefix,
        "Logical negation of the operand's truthiness.",
    ),
    op(
        OperatorId::Eq,
        "eq",
        "==",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Value equality; containers compare by their own equality relation.",
    ),
    op(
        OperatorId::Neq,
        "neq",
        "~=",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Negated value equality.",
    ),
    op(
        OperatorId::Lt,
        "lt",
        "<",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Strictly less than, deferring to the left operand's own ordering.",
    ),
    op(
        OperatorId::Lte,
        "lte",
        "<=",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Less than or equal, deferring to the left operand's own ordering.",
    ),
    op(
        OperatorId::Gt,
        "gt",
        ">",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Strictly greater than; evaluated as `<` with swapped operands.",
    ),
    op(
        OperatorId::Gte,
        "gte",
        ">=",
        Fixity::Infix,
        OperatorCategory::Relational,
        "Greater than or equal; evaluated as `<=` with swapped operands.",
    ),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the function-style name of an operator (`"sum"`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).name
}

/// Return the symbol an operator mirrors (`"+"`).
pub fn symbol(id: OperatorId) -> &'static str {
    info_for(id).symbol
}

/// Resolve either a function-style name or a symbol to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.name == spelling || o.symbol == spelling)
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    name: &'static str,
    symbol: &'static str,
    fixity: Fixity,
    category: OperatorCategory,
    description: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        id,
        name,
        symbol,
        fixity,
        category,
        is_keyword_spelling: false,
        description,
    }
}

const fn word(
    id: OperatorId,
    name: &'static str,
    symbol: &'static str,
    fixity: Fixity,
    description: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        id,
        name,
        symbol,
        fixity,
        category: OperatorCategory::Logical,
        is_keyword_spelling: true,
        description,
    }
}
