//! Vocabulary registries.
//!
//! This module is the “front door” for named things the runtime exposes: operators, list operations and error kinds.
//! Callers work with **stable IDs** (`OperatorId`, `ListOpId`, `ErrorKind`) and look up spellings and metadata via the
//! registry tables instead of matching on strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no runtime values, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use batteries_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Sum));
//! assert_eq!(operators::from_str("sum"), Some(OperatorId::Sum));
//! assert_eq!(operators::as_str(OperatorId::Sum), "sum");
//! ```

pub mod errors;
pub mod list_ops;
pub mod operators;
pub mod registry;
