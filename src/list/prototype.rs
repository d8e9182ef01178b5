//! The List prototype.
//!
//! New lists are produced by cloning a prototype with an initializer sequence. The prototype carries everything
//! the instances share: the type tag, the capability set, and the method table used by [`List::call`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::capability::Capability;
use crate::config::Config;

use super::dispatch::{Convention, DispatchTable};
use super::{List, Sequence};

const LIST_CAPABILITIES: &[Capability] = &[
    Capability::Clonable,
    Capability::Appendable,
    Capability::Concatenable,
    Capability::Orderable,
];

static SHARED: LazyLock<Arc<Prototype>> = LazyLock::new(|| Prototype::new(Config::from_env()));

/// Shared template for List instances.
pub struct Prototype {
    type_name: &'static str,
    capabilities: &'static [Capability],
    methods: DispatchTable,
    config: Config,
}

impl Prototype {
    /// Build a prototype whose method table follows `config`.
    pub fn new(config: Config) -> Arc<Self> {
        let methods = DispatchTable::build(Convention::Method, &config);
        tracing::debug!(
            methods = methods.len(),
            deprecation = %config.deprecation,
            "built List prototype"
        );
        Arc::new(Self {
            type_name: "List",
            capabilities: LIST_CAPABILITIES,
            methods,
            config,
        })
    }

    /// The process-wide default prototype, configured from the environment on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Produce a new instance holding a shallow copy of `init`'s elements.
    pub fn clone_with(self: &Arc<Self>, init: &(impl Sequence + ?Sized)) -> List {
        List::with_prototype(Arc::clone(self), init.elements().to_vec())
    }

    pub fn empty(self: &Arc<Self>) -> List {
        List::with_prototype(Arc::clone(self), Vec::new())
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn capabilities(&self) -> &[Capability] {
        self.capabilities
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn methods(&self) -> &DispatchTable {
        &self.methods
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype")
            .field("type_name", &self.type_name)
            .field("capabilities", &self.capabilities)
            .field("methods", &self.methods.len())
            .field("config", &self.config)
            .finish()
    }
}
