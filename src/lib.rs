#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
//! Batteries for a dynamic value model.
//!
//! This crate provides two things on top of [`Value`]:
//! - the **operator table** ([`ops`]): every built-in operator as a named, first-class function;
//! - the **List** type ([`List`]): an immutable, 1-indexed sequence with structural comparison and operator
//!   overloads, cloned from a shared [`Prototype`] and callable in method style ([`List::call`]) or free-function
//!   style ([`ListModule::call`]).
//!
//! Legacy list operations remain reachable under both spellings through the [`deprecation`] shim, controlled by
//! [`Config`] (`BATTERIES_DEPRECATE=warn|silent|remove`).
//!
//! ## Panic Policy
//!
//! - **Library code**: errors are returned as [`BatteriesError`] and propagated with `?`. `unwrap()` is denied
//!   outside tests.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups that can only fail on a programming error use `.expect()` with a reason.

pub mod capability;
pub mod config;
pub mod deprecation;
pub mod errors;
pub mod function;
pub mod list;
pub mod module;
pub mod ops;
pub mod prelude;
pub mod table;
pub mod value;

pub use batteries_core::ErrorKind;

pub use capability::{Appendable, Capability, Concatenable, Orderable};
pub use config::{Config, DeprecationMode};
pub use errors::{BatteriesError, Result};
pub use function::Function;
pub use list::{List, Prototype, Sequence};
pub use module::ListModule;
pub use table::{Key, Table};
pub use value::Value;
