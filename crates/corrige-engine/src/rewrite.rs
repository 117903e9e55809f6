// In-place rewrite resolution.
//
// Rewrites replace a capture group's span with text of exactly the same
// character count, so that every offset computed before or after the
// rewrite stays valid. Four replacement forms exist: blanking, masking,
// indirect generation through a registered function (space- or
// mask-padded), and a literal template with back-reference expansion.

use corrige_core::case::{capitalize, starts_upper};

use crate::context::EvalCtx;
use crate::fault::EvalError;
use crate::rules::registry::TextFn;

/// Padding character appended to a short replacement.
const PAD_SPACE: char = ' ';
const PAD_MASK: char = '@';

/// Compiled form of a rewrite replacement.
pub(crate) enum ReplSpec {
    /// Overwrite the span with spaces.
    Blank,
    /// Overwrite the span with `@` so later token scans skip it.
    Mask,
    /// Generated replacement, padded with `pad` up to the span length.
    Func { f: TextFn, pad: char },
    /// Literal template with `$n` back-references, space-padded.
    Text(String),
}

impl ReplSpec {
    /// Parse a replacement directive from a rule table.
    pub(crate) fn parse(spec: &str, lookup: impl FnOnce(&str) -> Option<TextFn>) -> Option<Self> {
        match spec {
            "*" => Some(ReplSpec::Blank),
            "@" => Some(ReplSpec::Mask),
            _ => {
                if let Some(name) = spec.strip_prefix("=@") {
                    lookup(name).map(|f| ReplSpec::Func { f, pad: PAD_MASK })
                } else if let Some(name) = spec.strip_prefix('=') {
                    lookup(name).map(|f| ReplSpec::Func { f, pad: PAD_SPACE })
                } else {
                    Some(ReplSpec::Text(spec.to_string()))
                }
            }
        }
    }

    /// Resolve the replacement for `group`, with the same character count
    /// as the group's current text.
    pub(crate) fn resolve(
        &self,
        ctx: &EvalCtx<'_>,
        group: usize,
        preserve_case: bool,
    ) -> Result<String, EvalError> {
        let original = ctx.group_or_fault(group)?;
        let span = original.chars().count();
        match self {
            ReplSpec::Blank => Ok(PAD_SPACE.to_string().repeat(span)),
            ReplSpec::Mask => Ok(PAD_MASK.to_string().repeat(span)),
            ReplSpec::Func { f, pad } => {
                let mut text = f(ctx)?;
                if preserve_case && starts_upper(original) {
                    text = capitalize(&text);
                }
                pad_to(text, span, *pad)
            }
            ReplSpec::Text(template) => pad_to(ctx.expand(template), span, PAD_SPACE),
        }
    }
}

fn pad_to(mut text: String, span: usize, pad: char) -> Result<String, EvalError> {
    let len = text.chars().count();
    if len > span {
        return Err(EvalError::ReplacementOverflow {
            replacement: text,
            span,
        });
    }
    for _ in len..span {
        text.push(pad);
    }
    Ok(text)
}
