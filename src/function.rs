//! First-class native functions.

use std::fmt;
use std::sync::Arc;

use crate::errors::Result;
use crate::value::Value;

type Callback = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A named, callable value.
///
/// ## Notes
/// - Equality is identity: two `Function`s are equal only if they share the same callback allocation.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    callback: Arc<Callback>,
}

impl Function {
    pub fn new(name: impl AsRef<str>, callback: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            callback: Arc::new(callback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.callback)(args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function: {}", self.name)
    }
}
