// Phonetic-similarity suggestions.
//
// Candidates come from the phonetic index collaborator; only those whose
// morphology matches the required tag pattern are kept. Output order
// follows the collaborator's enumeration order, so results are stable.

use regex::Regex;

use super::{Candidates, Lexicon};

/// True if the phonetic index knows neighbours for this word.
pub fn has_similar(lex: &Lexicon, word: &str) -> bool {
    lex.phonet.has_similar(word)
}

/// Phonetically close words whose tags match `pattern`.
pub fn sugg_similar(lex: &Lexicon, word: &str, pattern: &Regex) -> Vec<String> {
    let mut sugg = Candidates::new();
    for candidate in lex.phonet.similar_words(word) {
        let matches = lex
            .morpho
            .raw_tags(&candidate)
            .iter()
            .any(|t| pattern.is_match(t));
        if matches {
            sugg.push(candidate);
        }
    }
    sugg.into_vec()
}
