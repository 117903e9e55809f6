// Named-function registry for rule tables.
//
// Rule tables refer to guards, suggestion/message generators and
// disambiguation functions by name. The registry resolves those names to
// closures once, at rule compile time; an unknown name neutralizes the
// referring action with a warning instead of failing the whole load.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::context::EvalCtx;
use crate::disambig::DisambigContext;
use crate::fault::EvalError;

/// Condition evaluated against a match before an action runs.
pub type GuardFn =
    Arc<dyn Fn(&EvalCtx<'_>, &DisambigContext) -> Result<bool, EvalError> + Send + Sync>;

/// Text generator: suggestion lists (pipe-joined), messages, rewrite
/// replacements.
pub type TextFn = Arc<dyn Fn(&EvalCtx<'_>) -> Result<String, EvalError> + Send + Sync>;

/// Disambiguation step run against the sentence-local tag store.
pub type DisambigFn =
    Arc<dyn Fn(&EvalCtx<'_>, &mut DisambigContext) -> Result<(), EvalError> + Send + Sync>;

/// Name to closure bindings used when compiling rule tables.
#[derive(Default)]
pub struct Registry {
    guards: HashMap<String, GuardFn>,
    texts: HashMap<String, TextFn>,
    disambigs: HashMap<String, DisambigFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guard<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: Fn(&EvalCtx<'_>, &DisambigContext) -> Result<bool, EvalError> + Send + Sync + 'static,
    {
        self.guards.insert(name.to_string(), Arc::new(f));
        self
    }

    pub fn text<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: Fn(&EvalCtx<'_>) -> Result<String, EvalError> + Send + Sync + 'static,
    {
        self.texts.insert(name.to_string(), Arc::new(f));
        self
    }

    pub fn disambig<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: Fn(&EvalCtx<'_>, &mut DisambigContext) -> Result<(), EvalError> + Send + Sync + 'static,
    {
        self.disambigs.insert(name.to_string(), Arc::new(f));
        self
    }

    pub(crate) fn lookup_guard(&self, name: &str) -> Option<GuardFn> {
        self.guards.get(name).cloned()
    }

    pub(crate) fn lookup_text(&self, name: &str) -> Option<TextFn> {
        self.texts.get(name).cloned()
    }

    pub(crate) fn lookup_disambig(&self, name: &str) -> Option<DisambigFn> {
        self.disambigs.get(name).cloned()
    }
}
