// Morphology facade: dictionary collaborator plus lookup cache.
//
// Wraps the injected dictionary behind an append-only cache from word
// surface to raw tag-string list. An empty cached list means "looked up,
// unknown"; once a word is cached, repeated lookups are pure reads for the
// engine's lifetime. The cache is only discarded on an explicit dictionary
// reload.
//
// The cache uses interior mutability so that guards can trigger lazy
// population through a shared reference; this makes the facade unfit for
// concurrent use, matching the engine's one-instance-per-worker discipline.

use std::cell::RefCell;

use hashbrown::HashMap;
use regex::Regex;

use corrige_core::tags;

use crate::disambig::DisambigContext;

/// Lookup contract of the dictionary collaborator.
pub trait Dictionary {
    /// True if the word is a known surface form.
    fn is_valid(&self, word: &str) -> bool;
    /// True if the token is acceptable for spell-checking display purposes
    /// (a weaker test than `is_valid`, e.g. case-tolerant).
    fn is_valid_token(&self, token: &str) -> bool;
    /// All candidate tag strings for the word; empty when unknown.
    fn get_morph(&self, word: &str) -> Vec<String>;
}

/// A word under test: its character offset in the current text unit and its
/// surface form.
pub type WordAt<'a> = (usize, &'a str);

/// Dictionary facade with morphology caching and tag-pattern tests.
pub struct Morphology {
    dict: Box<dyn Dictionary>,
    cache: RefCell<HashMap<String, Vec<String>>>,
}

impl Morphology {
    pub fn new(dict: Box<dyn Dictionary>) -> Self {
        Self {
            dict,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Direct access to the dictionary collaborator.
    pub fn dictionary(&self) -> &dyn Dictionary {
        &*self.dict
    }

    /// Candidate tag strings for a word, populated from the dictionary on
    /// first use. Empty means the word is unknown.
    pub fn raw_tags(&self, word: &str) -> Vec<String> {
        if let Some(tags) = self.cache.borrow().get(word) {
            return tags.clone();
        }
        let tags = self.dict.get_morph(word);
        self.cache
            .borrow_mut()
            .insert(word.to_string(), tags.clone());
        tags
    }

    /// Candidate tags honoring a disambiguation override at the word's
    /// offset.
    fn effective_tags(&self, dda: &DisambigContext, word: WordAt<'_>) -> Vec<String> {
        match dda.get(word.0) {
            Some(narrowed) => narrowed.to_vec(),
            None => self.raw_tags(word.1),
        }
    }

    /// Tag-pattern test with disambiguation honored.
    ///
    /// `strict` requires every candidate to match; otherwise one match
    /// suffices. `if_absent` is returned when there is no word at all.
    /// Unknown words test false.
    pub fn morph(
        &self,
        dda: &DisambigContext,
        word: Option<WordAt<'_>>,
        pattern: &Regex,
        strict: bool,
        if_absent: bool,
    ) -> bool {
        let Some(word) = word else {
            return if_absent;
        };
        if self.raw_tags(word.1).is_empty() {
            return false;
        }
        let tags = self.effective_tags(dda, word);
        if tags.is_empty() {
            return false;
        }
        if strict {
            tags.iter().all(|t| pattern.is_match(t))
        } else {
            tags.iter().any(|t| pattern.is_match(t))
        }
    }

    /// Permissive tag-pattern test with an exclusion: false as soon as any
    /// candidate matches `forbidden`, else true if any candidate matches
    /// `pattern`.
    pub fn morphex(
        &self,
        dda: &DisambigContext,
        word: Option<WordAt<'_>>,
        pattern: &Regex,
        forbidden: &Regex,
        if_absent: bool,
    ) -> bool {
        let Some(word) = word else {
            return if_absent;
        };
        if self.raw_tags(word.1).is_empty() {
            return false;
        }
        let tags = self.effective_tags(dda, word);
        if tags.iter().any(|t| forbidden.is_match(t)) {
            return false;
        }
        tags.iter().any(|t| pattern.is_match(t))
    }

    /// Tag-pattern test with disambiguation ignored.
    pub fn analyse(&self, word: &str, pattern: &Regex, strict: bool) -> bool {
        let tags = self.raw_tags(word);
        if tags.is_empty() {
            return false;
        }
        if strict {
            tags.iter().all(|t| pattern.is_match(t))
        } else {
            tags.iter().any(|t| pattern.is_match(t))
        }
    }

    /// Exclusion variant of [`Morphology::analyse`].
    pub fn analysex(&self, word: &str, pattern: &Regex, forbidden: &Regex) -> bool {
        let tags = self.raw_tags(word);
        if tags.iter().any(|t| forbidden.is_match(t)) {
            return false;
        }
        tags.iter().any(|t| pattern.is_match(t))
    }

    /// Lexical stems of a flexion, one per candidate reading.
    pub fn stems(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }
        self.raw_tags(word)
            .iter()
            .map(|m| tags::lemma_of(m).to_string())
            .collect()
    }

    /// Discard every cached lookup. Only meaningful after the dictionary
    /// collaborator itself has been reloaded.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}
