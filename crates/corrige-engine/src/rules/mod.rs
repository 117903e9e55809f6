// Rule model and compiler.
//
// A rule couples one regular expression with an ordered list of actions:
// flagging an error, rewriting the matched span in place, or running a
// disambiguation step. Rules are compiled once against a registry of named
// functions; load-time problems never abort the load. A bad pattern
// neutralizes the rule (its pattern is replaced with one that cannot
// match), an unknown function name drops the referring action, both with a
// warning.

pub mod registry;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::rewrite::ReplSpec;
use registry::{DisambigFn, GuardFn, Registry, TextFn};

/// Suggestion spec `_` means "flag without suggestions".
const NO_SUGGESTION: &str = "_";

/// Pattern that never matches anything, standing in for a rejected one.
static NEVER_MATCH: Lazy<Regex> = Lazy::new(|| Regex::new("a^").unwrap());

/// One rule as loaded from a rule table, before compilation.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// Stable identifier, reported with errors and used for ignoring.
    pub id: String,
    /// Option gating the rule, `None` for always-on.
    pub option: Option<String>,
    /// Regular expression the rule scans with.
    pub pattern: String,
    /// Capitalize generated replacements and suggestions after an
    /// uppercase match.
    pub preserve_case: bool,
    pub actions: Vec<ActionSpec>,
}

/// One action of a rule, in table form.
///
/// `guard` names a registered condition; `group` selects the capture the
/// action applies to (0 for the whole match). Text-valued fields starting
/// with `=` name a registered generator, `=@` a mask-padded one.
#[derive(Debug, Clone)]
pub enum ActionSpec {
    Flag {
        guard: Option<String>,
        group: usize,
        suggestion: String,
        message: String,
        url: Option<String>,
    },
    Rewrite {
        guard: Option<String>,
        group: usize,
        replacement: String,
    },
    Disambiguate {
        guard: Option<String>,
        func: String,
    },
}

/// Compiled suggestion source of a flag action.
pub(crate) enum SuggSpec {
    None,
    Text(String),
    Func(TextFn),
}

/// Compiled message source of a flag action.
pub(crate) enum MsgSpec {
    Text(String),
    Func(TextFn),
}

pub(crate) enum ActionKind {
    Flag {
        group: usize,
        suggestion: SuggSpec,
        message: MsgSpec,
        url: String,
    },
    Rewrite {
        group: usize,
        replacement: ReplSpec,
    },
    Disambiguate(DisambigFn),
}

pub(crate) struct CompiledAction {
    pub guard: Option<GuardFn>,
    pub kind: ActionKind,
}

pub(crate) struct CompiledRule {
    pub id: String,
    pub option: Option<String>,
    pub regex: Regex,
    pub preserve_case: bool,
    pub actions: Vec<CompiledAction>,
}

/// The two compiled rule tables: paragraph pass, then sentence pass.
pub struct RuleSet {
    pub(crate) paragraph: Vec<CompiledRule>,
    pub(crate) sentence: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile both tables against a registry. Table order is preserved;
    /// it is the order rules apply in.
    pub fn compile(
        paragraph: Vec<RuleSpec>,
        sentence: Vec<RuleSpec>,
        registry: &Registry,
    ) -> RuleSet {
        RuleSet {
            paragraph: paragraph
                .into_iter()
                .map(|r| compile_rule(r, registry))
                .collect(),
            sentence: sentence
                .into_iter()
                .map(|r| compile_rule(r, registry))
                .collect(),
        }
    }

    pub fn paragraph_rule_count(&self) -> usize {
        self.paragraph.len()
    }

    pub fn sentence_rule_count(&self) -> usize {
        self.sentence.len()
    }
}

fn compile_rule(spec: RuleSpec, registry: &Registry) -> CompiledRule {
    let regex = match Regex::new(&spec.pattern) {
        Ok(re) => re,
        Err(err) => {
            warn!(rule = %spec.id, %err, "unparsable pattern, rule neutralized");
            NEVER_MATCH.clone()
        }
    };
    let actions = spec
        .actions
        .into_iter()
        .filter_map(|a| compile_action(&spec.id, a, registry))
        .collect();
    CompiledRule {
        id: spec.id,
        option: spec.option,
        regex,
        preserve_case: spec.preserve_case,
        actions,
    }
}

fn compile_action(rule_id: &str, spec: ActionSpec, registry: &Registry) -> Option<CompiledAction> {
    let guard_name = match &spec {
        ActionSpec::Flag { guard, .. }
        | ActionSpec::Rewrite { guard, .. }
        | ActionSpec::Disambiguate { guard, .. } => guard.clone(),
    };
    let guard = match guard_name {
        Some(name) => match registry.lookup_guard(&name) {
            Some(f) => Some(f),
            None => {
                warn!(rule = rule_id, guard = %name, "unknown guard, action dropped");
                return None;
            }
        },
        None => None,
    };
    let kind = match spec {
        ActionSpec::Flag {
            group,
            suggestion,
            message,
            url,
            ..
        } => {
            let suggestion = if suggestion == NO_SUGGESTION {
                SuggSpec::None
            } else if let Some(name) = suggestion.strip_prefix('=') {
                match registry.lookup_text(name) {
                    Some(f) => SuggSpec::Func(f),
                    None => {
                        warn!(rule = rule_id, func = name, "unknown suggester, action dropped");
                        return None;
                    }
                }
            } else {
                SuggSpec::Text(suggestion)
            };
            let message = if let Some(name) = message.strip_prefix('=') {
                match registry.lookup_text(name) {
                    Some(f) => MsgSpec::Func(f),
                    None => {
                        warn!(rule = rule_id, func = name, "unknown message function, action dropped");
                        return None;
                    }
                }
            } else {
                MsgSpec::Text(message)
            };
            ActionKind::Flag {
                group,
                suggestion,
                message,
                url: url.unwrap_or_default(),
            }
        }
        ActionSpec::Rewrite {
            group, replacement, ..
        } => match ReplSpec::parse(&replacement, |name| registry.lookup_text(name)) {
            Some(replacement) => ActionKind::Rewrite { group, replacement },
            None => {
                warn!(rule = rule_id, spec = %replacement, "unknown rewrite function, action dropped");
                return None;
            }
        },
        ActionSpec::Disambiguate { func, .. } => match registry.lookup_disambig(&func) {
            Some(f) => ActionKind::Disambiguate(f),
            None => {
                warn!(rule = rule_id, func = %func, "unknown disambiguator, action dropped");
                return None;
            }
        },
    };
    Some(CompiledAction { guard, kind })
}
