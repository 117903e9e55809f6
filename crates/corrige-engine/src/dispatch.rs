// Rule dispatcher: one scan of a rule table over one text unit.
//
// Rules apply in table order. For each rule the buffer is snapshotted
// once; every match and guard of that rule observes the snapshot, and any
// rewrite becomes visible to the following rule only. Matches apply left
// to right, their actions in listed order. A fault raised by a guard or
// action abandons that rule's remaining matches, is recorded, and the scan
// moves on to the next rule.

use corrige_core::error::CheckError;
use corrige_core::options::{IgnoreSet, Options};
use tracing::{debug, warn};

use crate::buffer::{CharMap, TextBuffer};
use crate::context::EvalCtx;
use crate::disambig::DisambigContext;
use crate::fault::RuleFault;
use crate::report;
use crate::rules::{ActionKind, CompiledRule};
use crate::suggest::Lexicon;

/// Option enabling rule-id suffixes on error messages.
pub(crate) const OPT_RULE_ID: &str = "idrule";

pub(crate) struct ScanOutcome {
    pub errors: Vec<CheckError>,
    pub faults: Vec<RuleFault>,
}

/// Run `rules` over `buf`.
///
/// `original` is the unit's text before any rewrite, used by guards that
/// inspect the raw input. `unit_offset` translates unit-local character
/// offsets to paragraph offsets.
pub(crate) fn scan(
    rules: &[CompiledRule],
    buf: &mut TextBuffer,
    original: &str,
    unit_offset: usize,
    dda: &mut DisambigContext,
    lex: &Lexicon,
    options: &Options,
    ignored: &IgnoreSet,
    country: &str,
) -> ScanOutcome {
    let mut errors = Vec::new();
    let mut faults = Vec::new();
    let append_id = options.is_set(OPT_RULE_ID);

    'rules: for rule in rules {
        if let Some(option) = &rule.option
            && !options.is_set(option)
        {
            continue;
        }
        if ignored.contains(&rule.id) {
            continue;
        }

        let snapshot = buf.snapshot().to_string();
        let map = CharMap::new(&snapshot);
        let matches: Vec<_> = rule.regex.captures_iter(&snapshot).collect();

        for caps in &matches {
            let ctx = EvalCtx::new(&snapshot, original, caps, &map, lex, country);
            for action in &rule.actions {
                if let Some(guard) = &action.guard {
                    match guard(&ctx, dda) {
                        Ok(true) => {}
                        Ok(false) => continue,
                        Err(cause) => {
                            warn!(rule = %rule.id, %cause, "guard fault, rule abandoned");
                            faults.push(RuleFault::new(&rule.id, cause));
                            continue 'rules;
                        }
                    }
                }
                let fault = match &action.kind {
                    ActionKind::Flag {
                        group,
                        suggestion,
                        message,
                        url,
                    } => match report::build_error(
                        &ctx,
                        rule,
                        *group,
                        suggestion,
                        message,
                        url,
                        unit_offset,
                        append_id,
                    ) {
                        Ok(err) => {
                            errors.push(err);
                            None
                        }
                        Err(cause) => Some(cause),
                    },
                    ActionKind::Rewrite { group, replacement } => {
                        match replacement.resolve(&ctx, *group, rule.preserve_case) {
                            Ok(text) => match ctx.char_span(*group) {
                                Some((start, end)) => {
                                    buf.splice(start, end, &text);
                                    debug!(rule = %rule.id, start, end, "span rewritten");
                                    None
                                }
                                None => Some(crate::fault::EvalError::MissingGroup(*group)),
                            },
                            Err(cause) => Some(cause),
                        }
                    }
                    ActionKind::Disambiguate(f) => match f(&ctx, dda) {
                        Ok(()) => {
                            debug!(rule = %rule.id, "disambiguation applied");
                            None
                        }
                        Err(cause) => Some(cause),
                    },
                };
                if let Some(cause) = fault {
                    warn!(rule = %rule.id, %cause, "action fault, rule abandoned");
                    faults.push(RuleFault::new(&rule.id, cause));
                    continue 'rules;
                }
            }
        }
    }

    ScanOutcome { errors, faults }
}
