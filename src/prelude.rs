//! Prelude module for common imports.
//!
//! ```rust
//! use batteries::prelude::*;
//!
//! let l = list![1, 2];
//! assert_eq!(l.append(3).len(), 3);
//! ```

pub use crate::capability::{Appendable, Concatenable, Orderable};
pub use crate::errors::{BatteriesError, Result};
pub use crate::function::Function;
pub use crate::list;
pub use crate::list::{List, Sequence};
pub use crate::module::ListModule;
pub use crate::table::{Key, Table};
pub use crate::value::Value;
