// Evaluation context handed to guards, suggestion functions and
// disambiguation functions.
//
// Bundles the rule-entry snapshot of the scanned unit, the original
// (pre-rewrite) text of the same span, the current match and the language
// resources. All matches and guard evaluations of one rule observe the
// buffer as it was when that rule's scan began; rewrites become visible to
// the next rule.
//
// Word helpers mirror the lookaround primitives rule guards are built
// from: next/previous word (optionally skipping a bounded number of
// words), plain pattern presence tests, and a pattern test whose first
// capture is then checked against the morphology.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::buffer::CharMap;
use crate::disambig::DisambigContext;
use crate::fault::EvalError;
use crate::morphology::WordAt;
use crate::suggest::Lexicon;

static NEXT_WORD1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ +(\w[\w-]*)").unwrap());
static PREV_WORD1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w[\w-]*) +$").unwrap());

/// Upper bound on the lookaround word skip; rule guards stay well below it.
const MAX_WORD_SKIP: usize = 8;

static NEXT_WORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=MAX_WORD_SKIP)
        .map(|n| Regex::new(&format!(r"^(?: +[\w%-]+){{{}}} +([\w%-]+)", n - 1)).unwrap())
        .collect()
});
static PREV_WORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=MAX_WORD_SKIP)
        .map(|n| Regex::new(&format!(r"([\w%-]+) +(?:[\w%-]+ +){{{}}}$", n - 1)).unwrap())
        .collect()
});

/// Context of one match during a rule scan.
pub struct EvalCtx<'a> {
    s: &'a str,
    sx: &'a str,
    caps: &'a Captures<'a>,
    map: &'a CharMap,
    /// Language resources (morphology facade and inflection tables).
    pub lex: &'a Lexicon,
    /// Country code the check was requested for (e.g. `"FR"`, `"CA"`).
    pub country: &'a str,
}

impl<'a> EvalCtx<'a> {
    pub(crate) fn new(
        s: &'a str,
        sx: &'a str,
        caps: &'a Captures<'a>,
        map: &'a CharMap,
        lex: &'a Lexicon,
        country: &'a str,
    ) -> Self {
        Self {
            s,
            sx,
            caps,
            map,
            lex,
            country,
        }
    }

    /// The scanned text as this rule sees it.
    pub fn text(&self) -> &'a str {
        self.s
    }

    /// The original text of the unit, before any rewrite.
    pub fn original(&self) -> &'a str {
        self.sx
    }

    /// Text of a capture group, `None` when the group did not participate.
    pub fn group(&self, i: usize) -> Option<&'a str> {
        self.caps.get(i).map(|m| m.as_str())
    }

    /// Text of a capture group, faulting when absent.
    pub fn group_or_fault(&self, i: usize) -> Result<&'a str, EvalError> {
        self.group(i).ok_or(EvalError::MissingGroup(i))
    }

    /// Byte span of a capture group within [`EvalCtx::text`].
    pub fn byte_span(&self, i: usize) -> Option<(usize, usize)> {
        self.caps.get(i).map(|m| (m.start(), m.end()))
    }

    /// Character span of a capture group within the scanned unit.
    pub fn char_span(&self, i: usize) -> Option<(usize, usize)> {
        self.caps
            .get(i)
            .map(|m| (self.map.char_of(m.start()), self.map.char_of(m.end())))
    }

    /// A capture group as a word under test: character offset plus surface.
    pub fn word(&self, i: usize) -> Result<WordAt<'a>, EvalError> {
        let m = self.caps.get(i).ok_or(EvalError::MissingGroup(i))?;
        Ok((self.map.char_of(m.start()), m.as_str()))
    }

    /// Like [`EvalCtx::word`] but `None` for a non-participating group.
    pub fn word_opt(&self, i: usize) -> Option<WordAt<'a>> {
        self.caps
            .get(i)
            .map(|m| (self.map.char_of(m.start()), m.as_str()))
    }

    /// Expand a replacement template (`$1`-style back-references) against
    /// the match.
    pub fn expand(&self, template: &str) -> String {
        let mut out = String::new();
        self.caps.expand(template, &mut out);
        out
    }

    /// Text before the whole match.
    pub fn before(&self) -> &'a str {
        match self.caps.get(0) {
            Some(m) => &self.s[..m.start()],
            None => self.s,
        }
    }

    /// Text after the whole match.
    pub fn after(&self) -> &'a str {
        match self.caps.get(0) {
            Some(m) => &self.s[m.end()..],
            None => "",
        }
    }

    fn match_end_byte(&self) -> usize {
        self.caps.get(0).map(|m| m.end()).unwrap_or(0)
    }

    /// First word after the match, separated by at least one space.
    pub fn next_word1(&self) -> Option<WordAt<'a>> {
        let base = self.match_end_byte();
        NEXT_WORD1.captures(self.after()).and_then(|c| {
            let m = c.get(1)?;
            Some((self.map.char_of(base + m.start()), &self.after()[m.start()..m.end()]))
        })
    }

    /// Last word before the match, separated by at least one space.
    pub fn prev_word1(&self) -> Option<WordAt<'a>> {
        PREV_WORD1.captures(self.before()).and_then(|c| {
            let m = c.get(1)?;
            Some((self.map.char_of(m.start()), &self.before()[m.start()..m.end()]))
        })
    }

    /// The nth word after the match (`1 <= n <= MAX_WORD_SKIP`), skipping
    /// `n - 1` words.
    pub fn next_word(&self, n: usize) -> Option<WordAt<'a>> {
        if n == 0 || n > MAX_WORD_SKIP {
            return None;
        }
        let base = self.match_end_byte();
        NEXT_WORDS[n - 1].captures(self.after()).and_then(|c| {
            let m = c.get(1)?;
            Some((self.map.char_of(base + m.start()), &self.after()[m.start()..m.end()]))
        })
    }

    /// The nth word before the match (`1 <= n <= MAX_WORD_SKIP`), skipping
    /// `n - 1` words.
    pub fn prev_word(&self, n: usize) -> Option<WordAt<'a>> {
        if n == 0 || n > MAX_WORD_SKIP {
            return None;
        }
        PREV_WORDS[n - 1].captures(self.before()).and_then(|c| {
            let m = c.get(1)?;
            Some((self.map.char_of(m.start()), &self.before()[m.start()..m.end()]))
        })
    }

    /// Search `pattern` in the text after the match and check the
    /// morphology of its first capture group: with `forbidden`, an
    /// exclusion test; otherwise a permissive tag test.
    pub fn look_group1_after(
        &self,
        dda: &DisambigContext,
        pattern: &Regex,
        tag: &Regex,
        forbidden: Option<&Regex>,
    ) -> bool {
        let Some(c) = pattern.captures(self.after()) else {
            return false;
        };
        let Some(m) = c.get(1) else {
            return false;
        };
        let base = self.match_end_byte();
        let word = (
            self.map.char_of(base + m.start()),
            &self.after()[m.start()..m.end()],
        );
        match forbidden {
            Some(neg) => self.lex.morpho.morphex(dda, Some(word), tag, neg, false),
            None => self.lex.morpho.morph(dda, Some(word), tag, false, false),
        }
    }
}

/// Seek `pattern` in `text`, rejecting when `forbidden` is present.
pub fn look(text: &str, pattern: &Regex, forbidden: Option<&Regex>) -> bool {
    if let Some(neg) = forbidden
        && neg.is_match(text)
    {
        return false;
    }
    pattern.is_match(text)
}
