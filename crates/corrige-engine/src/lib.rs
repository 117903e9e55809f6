// corrige-engine: rule-based proofreading engine.
//
// A small interpreter over a declarative rule table: a paragraph is scanned
// by an ordered partition of paragraph rules, rewritten in place (length
// preserved), segmented into sentences, and each sentence is scanned by the
// sentence partition with a fresh disambiguation context. Rule content,
// the dictionary and the inflection tables are injected collaborators.
//
// The engine is single-threaded and synchronous. A `Proofreader` instance
// caches morphology lookups with interior mutability and therefore must not
// be shared across threads; build one instance per worker.

pub mod buffer;
pub mod checker;
pub mod context;
pub mod disambig;
mod dispatch;
pub mod fault;
pub mod morphology;
pub mod report;
mod rewrite;
pub mod rules;
pub mod segment;
pub mod suggest;

pub use checker::{CheckReport, Proofreader};
pub use context::EvalCtx;
pub use disambig::DisambigContext;
pub use fault::{EvalError, RuleFault};
pub use morphology::{Dictionary, Morphology};
pub use report::{ErrorRenderer, HostRenderer, StructuredRenderer};
pub use rules::registry::Registry;
pub use rules::{ActionSpec, RuleSet, RuleSpec};
pub use suggest::{Conjugation, IrregularForms, Lexicon, PhoneticIndex};
