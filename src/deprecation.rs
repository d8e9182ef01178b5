//! Deprecation advisories for legacy operations.
//!
//! A [`Notice`] describes one legacy spelling: its advisory name (`List:filter`, `list.filter`), the release that
//! deprecated it, and how to migrate. Emitting a notice logs a `WARN` event on the `batteries::deprecation` target,
//! at most once per advisory name for the lifetime of the process. Emission never changes what the wrapped
//! operation returns.
//!
//! ## Examples
//!
//! ```rust
//! use batteries::deprecation::{Notice, deprecated};
//! use batteries::{Function, Value};
//!
//! let double = Function::new("double", |args| batteries::ops::sum(&args[0], &args[0]));
//! let twice = deprecated(Notice::new("mylib.twice", "1.0.0", "use 'mylib.double' instead"), double);
//! assert_eq!(twice.call(&[Value::Int(4)]).unwrap(), Value::Int(8));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};

use batteries_core::lang::list_ops::{self, ListOpInfo, Migration};

use crate::function::Function;
use crate::list::dispatch::Convention;

/// Target of every advisory event.
pub const TARGET: &str = "batteries::deprecation";

static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// One deprecated spelling and its migration path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    name: String,
    since: &'static str,
    migration: String,
}

impl Notice {
    pub fn new(name: impl Into<String>, since: &'static str, migration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            since,
            migration: migration.into(),
        }
    }

    /// The notice for a registry operation under `convention`, or `None` if the operation is not deprecated.
    ///
    /// Operations superseded outright point at their replacement under the same convention
    /// (`use 'List:sub' instead`); the others carry the registry's migration hint.
    pub fn for_operation(info: &ListOpInfo, convention: Convention) -> Option<Self> {
        let deprecation = info.deprecation?;
        let migration = match deprecation.migration {
            Migration::Superseded(by) => {
                format!("use '{}' instead", convention.spelling(list_ops::info_for(by)))
            }
            Migration::Hint(hint) => hint.to_string(),
        };
        Some(Self::new(convention.spelling(info), deprecation.since, migration))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn since(&self) -> &'static str {
        self.since
    }

    pub fn migration(&self) -> &str {
        &self.migration
    }

    /// Emit the advisory unless this name has already been reported.
    ///
    /// Returns whether this call emitted it.
    pub fn emit(&self) -> bool {
        let first = WARNED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.name.clone());
        if first {
            tracing::warn!(
                target: TARGET,
                name = %self.name,
                since = self.since,
                migration = %self.migration,
                "{}",
                self
            );
        }
        first
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} was deprecated in release {}, and will be removed in a future release; {}",
            self.name, self.since, self.migration
        )
    }
}

/// Whether an advisory for `name` has been emitted in this process.
pub fn has_warned(name: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(name)
}

/// Wrap `target` so that calling it first emits `notice`.
///
/// The wrapper keeps `target`'s name and forwards arguments and results untouched.
pub fn deprecated(notice: Notice, target: Function) -> Function {
    let name = target.name().to_string();
    Function::new(name, move |args| {
        notice.emit();
        target.call(args)
    })
}
