// corrige-core: shared types for the corrige proofreading engine.
//
// Holds the public data types exchanged between the rule engine and its
// callers: error records in both output encodings, the option store, the
// ignored-rule set, case helpers and the morphology tag-string convention.

pub mod case;
pub mod error;
pub mod options;
pub mod tags;
