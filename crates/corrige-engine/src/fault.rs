// Evaluation fault types.
//
// Load-time problems (bad pattern, unknown action or function name) are
// absorbed during rule compilation: the offending rule or action is
// neutralized with a warning and loading continues. Faults raised while a
// guard or action runs are the only condition surfaced to the caller; they
// carry the owning rule id so the caller can disable that rule and retry.

use thiserror::Error;

/// A fault raised while evaluating a guard, suggestion, rewrite or
/// disambiguation function against a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An action referenced a capture group the pattern did not bind.
    #[error("capture group {0} did not participate in the match")]
    MissingGroup(usize),

    /// A rewrite produced more characters than the span it must fill.
    #[error("replacement `{replacement}` longer than the {span} character span")]
    ReplacementOverflow { replacement: String, span: usize },

    /// A function-specific failure reported by rule code.
    #[error("{0}")]
    Function(String),
}

/// An [`EvalError`] wrapped with the id of the rule that raised it.
///
/// The dispatcher contains faults at single-rule granularity: the faulting
/// rule's remaining matches are abandoned, the fault is recorded, and the
/// scan continues with the next rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule `{rule_id}`: {cause}")]
pub struct RuleFault {
    pub rule_id: String,
    pub cause: EvalError,
}

impl RuleFault {
    pub fn new(rule_id: &str, cause: EvalError) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            cause,
        }
    }
}
