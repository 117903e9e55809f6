// Paragraph checker: the two-pass pipeline behind `check_paragraph`.
//
// Pass one scans the paragraph rules over the whole paragraph; their
// rewrites (blanking, masking, normalizing spellings) reshape the working
// text without moving any character offset. The reshaped text is then
// split into sentences and each checkable sentence is normalized and
// scanned with the sentence rules, its disambiguation context cleared
// first. All reported offsets are character offsets into the paragraph as
// the caller passed it.

use corrige_core::error::CheckError;
use corrige_core::options::{IgnoreSet, Options};

use crate::buffer::{CharMap, TextBuffer};
use crate::disambig::DisambigContext;
use crate::dispatch;
use crate::fault::RuleFault;
use crate::report::ErrorRenderer;
use crate::rules::RuleSet;
use crate::segment;
use crate::suggest::Lexicon;

/// Default country code assumed when the caller states none.
const DEFAULT_COUNTRY: &str = "FR";

/// Outcome of one paragraph check.
///
/// `faults` lists rules that raised an evaluation fault and were abandoned
/// for this paragraph; their errors may be incomplete but every entry in
/// `errors` is trustworthy.
#[derive(Debug)]
pub struct CheckReport<E> {
    pub errors: Vec<E>,
    pub faults: Vec<RuleFault>,
}

/// Grammar checker for one language, one instance per worker.
pub struct Proofreader<R: ErrorRenderer> {
    rules: RuleSet,
    lexicon: Lexicon,
    options: Options,
    ignored: IgnoreSet,
    renderer: R,
    country: String,
}

impl<R: ErrorRenderer> Proofreader<R> {
    pub fn new(rules: RuleSet, lexicon: Lexicon, options: Options, renderer: R) -> Self {
        Self {
            rules,
            lexicon,
            options,
            ignored: IgnoreSet::new(),
            renderer,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Country the text is checked for; some rules key off it.
    pub fn set_country(&mut self, country: &str) {
        self.country = country.to_string();
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_option(&mut self, name: &str, value: bool) {
        self.options.set(name, value);
    }

    pub fn update_options<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        self.options.update(values);
    }

    pub fn reset_options(&mut self) {
        self.options.reset();
    }

    /// Suppress a rule by id until [`Proofreader::reset_ignored`].
    pub fn ignore_rule(&mut self, rule_id: &str) {
        self.ignored.ignore(rule_id);
    }

    pub fn reset_ignored(&mut self) {
        self.ignored.reset();
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Check one paragraph and report every detected error.
    pub fn check_paragraph(&self, text: &str) -> CheckReport<R::Output> {
        let mut errors: Vec<CheckError> = Vec::new();
        let mut faults: Vec<RuleFault> = Vec::new();
        let mut dda = DisambigContext::new();

        let mut buf = TextBuffer::new(text);
        let outcome = dispatch::scan(
            &self.rules.paragraph,
            &mut buf,
            text,
            0,
            &mut dda,
            &self.lexicon,
            &self.options,
            &self.ignored,
            &self.country,
        );
        errors.extend(outcome.errors);
        faults.extend(outcome.faults);

        // Rewrites preserve character counts, so sentence spans map onto
        // the original paragraph unchanged.
        let working = buf.into_string();
        let working_map = CharMap::new(&working);
        let original_map = CharMap::new(text);

        for span in segment::sentence_spans(&working) {
            if !segment::is_checkable(span) {
                continue;
            }
            let (start, end) = span;
            dda.clear();

            let wb = working_map.byte_of(start)..working_map.byte_of(end);
            let ob = original_map.byte_of(start)..original_map.byte_of(end);
            let mut sentence = TextBuffer::new(&working[wb]);
            sentence.normalize();

            let outcome = dispatch::scan(
                &self.rules.sentence,
                &mut sentence,
                &text[ob],
                start,
                &mut dda,
                &self.lexicon,
                &self.options,
                &self.ignored,
                &self.country,
            );
            errors.extend(outcome.errors);
            faults.extend(outcome.faults);
        }

        CheckReport {
            errors: errors.into_iter().map(|e| self.renderer.render(e)).collect(),
            faults,
        }
    }
}
