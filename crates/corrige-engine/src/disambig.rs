// Per-sentence disambiguation context.
//
// Maps a character offset to the narrowed candidate tag list for the word
// starting there. Dedicated rule actions refine it left to right within a
// sentence; tag tests then prefer the narrowed list over the raw dictionary
// tags. The context is cleared before every sentence pass and never shared
// across sentences.
//
// `select` and `exclude` may only shrink a candidate set, and never replace
// it with an empty one unless an explicit fallback is supplied; `define` is
// the single operation allowed to replace the set outright.

use hashbrown::HashMap;
use regex::Regex;

use crate::morphology::Morphology;

/// Offset-keyed narrowed candidate tag lists for one sentence.
#[derive(Debug, Default)]
pub struct DisambigContext {
    map: HashMap<usize, Vec<String>>,
}

impl DisambigContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrowed candidates at an offset, if any narrowing happened there.
    pub fn get(&self, pos: usize) -> Option<&[String]> {
        self.map.get(&pos).map(|v| v.as_slice())
    }

    /// Forget all narrowings; called before each sentence pass.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Restrict the candidates of `word` at `pos` to those matching
    /// `pattern`.
    ///
    /// No-op when the offset is already narrowed, the word is unknown or
    /// unambiguous, or the restriction would not change anything. When no
    /// candidate matches, `fallback` is installed if supplied, otherwise
    /// the set is left unchanged.
    pub fn select(
        &mut self,
        morpho: &Morphology,
        pos: usize,
        word: &str,
        pattern: &Regex,
        fallback: Option<Vec<String>>,
    ) {
        self.narrow(morpho, pos, word, pattern, fallback, true);
    }

    /// Symmetric to [`DisambigContext::select`]: keep the candidates that
    /// do **not** match `pattern`.
    pub fn exclude(
        &mut self,
        morpho: &Morphology,
        pos: usize,
        word: &str,
        pattern: &Regex,
        fallback: Option<Vec<String>>,
    ) {
        self.narrow(morpho, pos, word, pattern, fallback, false);
    }

    /// Unconditionally override the candidate set at an offset.
    pub fn define(&mut self, pos: usize, tags: Vec<String>) {
        self.map.insert(pos, tags);
    }

    fn narrow(
        &mut self,
        morpho: &Morphology,
        pos: usize,
        word: &str,
        pattern: &Regex,
        fallback: Option<Vec<String>>,
        keep_matching: bool,
    ) {
        if word.is_empty() || self.map.contains_key(&pos) {
            return;
        }
        let tags = morpho.raw_tags(word);
        if tags.len() <= 1 {
            return;
        }
        let kept: Vec<String> = tags
            .iter()
            .filter(|t| pattern.is_match(t) == keep_matching)
            .cloned()
            .collect();
        if !kept.is_empty() {
            if kept.len() != tags.len() {
                self.map.insert(pos, kept);
            }
        } else if let Some(fallback) = fallback {
            self.map.insert(pos, fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::testing::MapDictionary;

    fn morpho() -> Morphology {
        Morphology::new(Box::new(MapDictionary::new(&[
            ("porte", &[">porte :N:f:s", ">porter :V1:Ip:3s"]),
            ("chat", &[">chat :N:m:s"]),
        ])))
    }

    fn re(p: &str) -> Regex {
        Regex::new(p).unwrap()
    }

    #[test]
    fn select_shrinks_to_matching() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.select(&m, 5, "porte", &re(":V"), None);
        assert_eq!(dda.get(5).unwrap(), &[">porter :V1:Ip:3s".to_string()]);
    }

    #[test]
    fn exclude_keeps_non_matching() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.exclude(&m, 5, "porte", &re(":V"), None);
        assert_eq!(dda.get(5).unwrap(), &[">porte :N:f:s".to_string()]);
    }

    #[test]
    fn select_never_empties_without_fallback() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.select(&m, 5, "porte", &re(":X"), None);
        assert!(dda.get(5).is_none());
    }

    #[test]
    fn select_installs_fallback_when_nothing_matches() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        let fallback = vec![">porte :N:f:s".to_string()];
        dda.select(&m, 5, "porte", &re(":X"), Some(fallback.clone()));
        assert_eq!(dda.get(5).unwrap(), fallback.as_slice());
    }

    #[test]
    fn unambiguous_word_untouched() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.select(&m, 0, "chat", &re(":N"), None);
        assert!(dda.get(0).is_none());
    }

    #[test]
    fn already_narrowed_offset_is_a_noop() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.define(5, vec![">porte :N:f:s".to_string()]);
        dda.select(&m, 5, "porte", &re(":V"), None);
        assert_eq!(dda.get(5).unwrap(), &[">porte :N:f:s".to_string()]);
    }

    #[test]
    fn narrowing_is_monotonic() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        let before = m.raw_tags("porte").len();
        dda.select(&m, 5, "porte", &re(":V"), None);
        assert!(dda.get(5).unwrap().len() <= before);
    }

    #[test]
    fn define_replaces_outright() {
        let mut dda = DisambigContext::new();
        dda.define(2, vec![":G".to_string()]);
        dda.define(2, vec![":N:A:Q:e:i".to_string()]);
        assert_eq!(dda.get(2).unwrap(), &[":N:A:Q:e:i".to_string()]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut dda = DisambigContext::new();
        dda.define(2, vec![":G".to_string()]);
        dda.clear();
        assert!(dda.is_empty());
        assert!(dda.get(2).is_none());
    }

    #[test]
    fn unknown_word_is_a_noop() {
        let m = morpho();
        let mut dda = DisambigContext::new();
        dda.select(&m, 0, "xyzzy", &re(":N"), None);
        assert!(dda.is_empty());
    }
}
