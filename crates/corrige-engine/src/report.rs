// Error construction and rendering.
//
// Flag actions are resolved here into [`CheckError`] values with
// paragraph-absolute character offsets. A renderer then maps each error to
// the caller-facing shape: the structured form as-is, or the flat
// host-dictionary form some embedding hosts expect.

use corrige_core::case::{capitalize, starts_upper};
use corrige_core::error::{CATEGORY_UNTYPED, CheckError, HOST_ERROR_TYPE_PROOFREADING, HostError};

use crate::context::EvalCtx;
use crate::fault::EvalError;
use crate::rules::{CompiledRule, MsgSpec, SuggSpec};

/// Resolve one flag action against a match.
///
/// `unit_offset` is the character offset of the scanned unit within the
/// paragraph; `append_id` appends the rule id to the message for rule
/// debugging.
pub(crate) fn build_error(
    ctx: &EvalCtx<'_>,
    rule: &CompiledRule,
    group: usize,
    suggestion: &SuggSpec,
    message: &MsgSpec,
    url: &str,
    unit_offset: usize,
    append_id: bool,
) -> Result<CheckError, EvalError> {
    let (start, end) = ctx.char_span(group).ok_or(EvalError::MissingGroup(group))?;
    let matched = ctx.group_or_fault(group)?;
    let upper = rule.preserve_case && starts_upper(matched);

    let suggestions = match suggestion {
        SuggSpec::None => Vec::new(),
        SuggSpec::Text(template) => split_suggestions(&ctx.expand(template), upper),
        SuggSpec::Func(f) => split_suggestions(&f(ctx)?, upper),
    };
    let mut message = match message {
        MsgSpec::Text(template) => ctx.expand(template),
        MsgSpec::Func(f) => f(ctx)?,
    };
    if append_id {
        message.push_str("  # ");
        message.push_str(&rule.id);
    }

    Ok(CheckError {
        start: unit_offset + start,
        end: unit_offset + end,
        rule_id: rule.id.clone(),
        category: rule
            .option
            .clone()
            .unwrap_or_else(|| CATEGORY_UNTYPED.to_string()),
        suggestions,
        message,
        url: url.to_string(),
    })
}

fn split_suggestions(joined: &str, upper: bool) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined
        .split('|')
        .map(|s| {
            if upper {
                capitalize(s)
            } else {
                s.to_string()
            }
        })
        .collect()
}

/// Maps resolved errors to the caller-facing error shape.
pub trait ErrorRenderer {
    type Output;

    fn render(&self, err: CheckError) -> Self::Output;
}

/// Passes [`CheckError`] through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredRenderer;

impl ErrorRenderer for StructuredRenderer {
    type Output = CheckError;

    fn render(&self, err: CheckError) -> CheckError {
        err
    }
}

/// Flattens errors into the start/length dictionary shape of embedding
/// hosts, carrying the source URL as an extra property when present.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostRenderer;

impl ErrorRenderer for HostRenderer {
    type Output = HostError;

    fn render(&self, err: CheckError) -> HostError {
        let mut properties = Vec::new();
        if !err.url.is_empty() {
            properties.push(("FullCommentURL".to_string(), err.url));
        }
        HostError {
            error_start: err.start,
            error_length: err.end - err.start,
            error_type: HOST_ERROR_TYPE_PROOFREADING,
            rule_identifier: err.rule_id,
            suggestions: err.suggestions,
            short_comment: err.message.clone(),
            full_comment: err.message,
            properties,
        }
    }
}
