// Suggestion generators and their collaborator tables.
//
// The generators are deterministic algorithms: a flexion plus a desired
// grammatical category yields zero or more candidate surface forms, built
// from the word's (possibly disambiguated) tags and the injected
// conjugation, irregular-form and phonetic tables. An empty result is a
// valid "no suggestion" outcome, never an error.
//
// Every generator keeps candidates in first-insertion order with duplicates
// and empty strings dropped, so identical input always yields the same
// pipe-joined output within one process run.

pub mod nominal;
pub mod phonet;
pub mod verb;

use crate::morphology::Morphology;

/// Conjugation table collaborator.
///
/// Tense and person arguments use the tag-code convention of
/// `corrige_core::tags`.
pub trait Conjugation {
    /// True if the table has any entry for this stem.
    fn knows_stem(&self, stem: &str) -> bool;
    /// True if the stem conjugates in the given tense/person slot.
    fn has_conj(&self, stem: &str, tense: &str, person: &str) -> bool;
    /// The conjugated form for the slot, when it exists.
    fn get_conj(&self, stem: &str, tense: &str, person: &str) -> Option<String>;
}

/// Irregular noun/adjective form collaborator.
pub trait IrregularForms {
    fn has_irregular_plural(&self, word: &str) -> bool;
    fn irregular_plurals(&self, word: &str) -> Vec<String>;
    /// True if `stem` is a feminine lemma with distinct masculine forms.
    fn is_feminine_form(&self, stem: &str) -> bool;
    /// Masculine singular or plural forms of a feminine lemma.
    fn masculine_forms(&self, stem: &str, plural: bool) -> Vec<String>;
}

/// Phonetic-similarity index collaborator.
///
/// `similar_words` must enumerate candidates in a stable order; the
/// suggestion output order follows it.
pub trait PhoneticIndex {
    fn has_similar(&self, word: &str) -> bool;
    fn similar_words(&self, word: &str) -> Vec<String>;
}

/// The language resources an engine instance works against: the morphology
/// facade plus the three inflection tables.
pub struct Lexicon {
    pub morpho: Morphology,
    pub conj: Box<dyn Conjugation>,
    pub irregular: Box<dyn IrregularForms>,
    pub phonet: Box<dyn PhoneticIndex>,
}

/// An ordered, duplicate-free candidate list.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    items: Vec<String>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate unless it is empty or already present.
    pub fn push(&mut self, candidate: String) {
        if !candidate.is_empty() && !self.items.contains(&candidate) {
            self.items.push(candidate);
        }
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, candidates: I) {
        for c in candidates {
            self.push(c);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Join candidates into the pipe-separated form used by suggestion specs.
pub fn pipe_join(candidates: &[String]) -> String {
    candidates.join("|")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use hashbrown::{HashMap, HashSet};

    pub struct MapConjugation {
        stems: HashSet<String>,
        forms: HashMap<(String, String, String), String>,
    }

    impl MapConjugation {
        pub fn new(forms: &[(&str, &str, &str, &str)]) -> Self {
            let mut stems = HashSet::new();
            let mut map = HashMap::new();
            for (stem, tense, person, form) in forms {
                stems.insert(stem.to_string());
                map.insert(
                    (stem.to_string(), tense.to_string(), person.to_string()),
                    form.to_string(),
                );
            }
            Self { stems, forms: map }
        }
    }

    impl Conjugation for MapConjugation {
        fn knows_stem(&self, stem: &str) -> bool {
            self.stems.contains(stem)
        }

        fn has_conj(&self, stem: &str, tense: &str, person: &str) -> bool {
            self.forms
                .contains_key(&(stem.to_string(), tense.to_string(), person.to_string()))
        }

        fn get_conj(&self, stem: &str, tense: &str, person: &str) -> Option<String> {
            self.forms
                .get(&(stem.to_string(), tense.to_string(), person.to_string()))
                .cloned()
        }
    }

    #[derive(Default)]
    pub struct MapIrregular {
        pub plurals: HashMap<String, Vec<String>>,
        pub feminines: HashMap<String, (Vec<String>, Vec<String>)>, // sing, plur
    }

    impl IrregularForms for MapIrregular {
        fn has_irregular_plural(&self, word: &str) -> bool {
            self.plurals.contains_key(word)
        }

        fn irregular_plurals(&self, word: &str) -> Vec<String> {
            self.plurals.get(word).cloned().unwrap_or_default()
        }

        fn is_feminine_form(&self, stem: &str) -> bool {
            self.feminines.contains_key(stem)
        }

        fn masculine_forms(&self, stem: &str, plural: bool) -> Vec<String> {
            match self.feminines.get(stem) {
                Some((sing, plur)) => {
                    if plural {
                        plur.clone()
                    } else {
                        sing.clone()
                    }
                }
                None => Vec::new(),
            }
        }
    }

    #[derive(Default)]
    pub struct MapPhonetic {
        pub similar: HashMap<String, Vec<String>>,
    }

    impl PhoneticIndex for MapPhonetic {
        fn has_similar(&self, word: &str) -> bool {
            self.similar.contains_key(word)
        }

        fn similar_words(&self, word: &str) -> Vec<String> {
            self.similar.get(word).cloned().unwrap_or_default()
        }
    }
}
