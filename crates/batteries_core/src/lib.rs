//! Provide shared, pure semantic helpers and canonical vocabulary for the `batteries` runtime.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic pieces that every layer of the
//! runtime must agree on:
//! - the operator vocabulary (names, symbols, fixity) behind the operator table,
//! - the list-operation vocabulary, including which spellings are deprecated and how legacy call forms map onto the
//!   canonical implementations,
//! - the error taxonomy and its canonical messages,
//! - 1-based index normalization for sub-ranging.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no runtime value types.

pub mod errors;
pub mod index;
pub mod lang;

pub use errors::ErrorKind;
