//! The free-function convention: `list.op(l, args...)`.
//!
//! A [`ListModule`] pairs a List prototype with the free-function dispatch table built from the same configuration.
//! Lists it constructs carry that prototype, so the method table they see (`l.call(..)`) matches the module's
//! function table operation for operation.

use std::sync::Arc;

use crate::config::Config;
use crate::deprecation;
use crate::errors::{BatteriesError, Result};
use crate::function::Function;
use crate::list::dispatch::{Convention, DispatchTable, Entry};
use crate::list::{List, Prototype};
use crate::value::Value;

/// Named list operations callable with the list as an explicit argument.
///
/// ## Examples
///
/// ```rust
/// use batteries::{ListModule, Value, list};
///
/// let module = ListModule::default();
/// let l = Value::from(list![1, 2, 3]);
/// assert_eq!(module.call("sub", &[l.clone(), Value::Int(2)]).unwrap(), Value::from(list![2, 3]));
///
/// let tail = module.function("tail").unwrap();
/// assert_eq!(tail.call(&[l]).unwrap(), Value::from(list![2, 3]));
/// ```
#[derive(Clone)]
pub struct ListModule {
    proto: Arc<Prototype>,
    functions: Arc<DispatchTable>,
}

impl ListModule {
    /// Build a module (and its own prototype) from `config`.
    pub fn new(config: Config) -> Self {
        Self::for_prototype(Prototype::new(config))
    }

    fn for_prototype(proto: Arc<Prototype>) -> Self {
        let functions = DispatchTable::build(Convention::Free, proto.config());
        tracing::debug!(
            functions = functions.len(),
            deprecation = %proto.config().deprecation,
            "built list module"
        );
        Self {
            proto,
            functions: Arc::new(functions),
        }
    }

    pub fn prototype(&self) -> &Arc<Prototype> {
        &self.proto
    }

    pub fn config(&self) -> &Config {
        self.proto.config()
    }

    /// A new list on this module's prototype.
    pub fn list<V: Into<Value>>(&self, values: impl IntoIterator<Item = V>) -> List {
        let items: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.proto.clone_with(&items)
    }

    /// Names resolvable through [`ListModule::call`].
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.names()
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.functions
            .get(name)
            .ok_or_else(|| BatteriesError::no_such_operation(name))
    }

    /// Invoke an operation by name, free-function style.
    ///
    /// Canonical operations take the list first. Legacy operations keep their historical argument order
    /// (`filter(p, l)`, `foldl(f, [init,] l)`) and emit a one-time advisory unless the module is silent.
    ///
    /// ## Errors
    /// - `NoSuchOperation` if `name` is unknown, or legacy and removed by configuration.
    /// - `ContractViolation` for a wrong argument count, a missing list, or a malformed argument.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let entry = self.entry(name)?;
        entry.advise();
        entry.invoke_free(&self.proto, args)
    }

    /// The operation as a first-class function value.
    ///
    /// Legacy operations come wrapped by [`deprecation::deprecated`], so the advisory fires when the function is
    /// called rather than when it is looked up.
    pub fn function(&self, name: &str) -> Result<Function> {
        let entry = self.entry(name)?.clone();
        let notice = entry.notice().cloned();
        let proto = Arc::clone(&self.proto);
        let raw = Function::new(entry.info().free_spelling(), move |args| entry.invoke_free(&proto, args));
        Ok(match notice {
            Some(notice) => deprecation::deprecated(notice, raw),
            None => raw,
        })
    }
}

/// The module over the shared prototype.
impl Default for ListModule {
    fn default() -> Self {
        Self::for_prototype(Prototype::shared())
    }
}
