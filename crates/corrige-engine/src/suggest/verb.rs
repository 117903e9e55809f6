// Verb form suggestions.
//
// All algorithms work the same way: derive the lexical stems of the
// flexion, query the conjugation collaborator for the requested slot on
// each stem, union the results. The tense to request is read off the
// flexion's own tags: an infinitive-like marker stands for present,
// imperfect and simple past; a present-participle marker stands for
// present.

use once_cell::sync::Lazy;
use regex::Regex;

use corrige_core::tags;

use super::{Candidates, Lexicon};

/// Tense markers recognizable in a tag string.
static TENSE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":(?:Y|I[pqsf]|S[pq]|K|P)").unwrap());

/// Candidate tenses for a flexion, considering only the readings that
/// belong to `stem` (a flexion may resolve to several verbs).
fn tenses_of(lex: &Lexicon, flex: &str, stem: &str) -> Vec<String> {
    let mut tenses = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if tags::lemma_of(&morph) != stem {
            continue;
        }
        for marker in TENSE_MARKER.find_iter(&morph) {
            match marker.as_str() {
                tags::TENSE_INFINITIVE => {
                    tenses.push(tags::TENSE_PRESENT.to_string());
                    tenses.push(tags::TENSE_IMPERFECT.to_string());
                    tenses.push(tags::TENSE_SIMPLE_PAST.to_string());
                }
                tags::TENSE_PRESENT_PARTICIPLE => {
                    tenses.push(tags::TENSE_PRESENT.to_string());
                }
                other => tenses.push(other.to_string()),
            }
        }
    }
    tenses.into_vec()
}

/// Conjugated forms of `flex` for the requested person, in every tense the
/// flexion itself can express.
pub fn sugg_verb(lex: &Lexicon, flex: &str, who: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for stem in lex.morpho.stems(flex) {
        if !lex.conj.knows_stem(&stem) {
            continue;
        }
        for tense in tenses_of(lex, flex, &stem) {
            let person = if who == tags::PERSON_1S_ELIDED
                && !lex.conj.has_conj(&stem, &tense, who)
            {
                tags::PERSON_1S
            } else {
                who
            };
            if let Some(form) = lex.conj.get_conj(&stem, &tense, person) {
                sugg.push(form);
            }
        }
    }
    sugg.into_vec()
}

/// Past-participle forms agreeing with a gender/number target (`":m:s"`,
/// `":m:p"`, `":f:s"`, `":f:p"`), falling back to the masculine singular
/// when the specific agreement slot is absent. With no target, all four
/// slots are proposed.
pub fn sugg_verb_ppas(lex: &Lexicon, flex: &str, target: Option<&str>) -> Vec<String> {
    let mut sugg = Candidates::new();
    for stem in lex.morpho.stems(flex) {
        if !lex.conj.knows_stem(&stem) {
            continue;
        }
        let t = tags::TENSE_PAST_PARTICIPLE;
        match target {
            None => {
                for slot in [
                    tags::PPAS_MAS_SING,
                    tags::PPAS_MAS_PLUR,
                    tags::PPAS_FEM_SING,
                    tags::PPAS_FEM_PLUR,
                ] {
                    if let Some(form) = lex.conj.get_conj(&stem, t, slot) {
                        sugg.push(form);
                    }
                }
            }
            Some(spec) => {
                let slot = match spec {
                    ":m:s" => tags::PPAS_MAS_SING,
                    ":m:p" => tags::PPAS_MAS_PLUR,
                    ":f:s" => tags::PPAS_FEM_SING,
                    ":f:p" => tags::PPAS_FEM_PLUR,
                    _ => tags::PPAS_MAS_SING,
                };
                let form = lex
                    .conj
                    .get_conj(&stem, t, slot)
                    .or_else(|| lex.conj.get_conj(&stem, t, tags::PPAS_MAS_SING));
                if let Some(form) = form {
                    sugg.push(form);
                }
            }
        }
    }
    sugg.into_vec()
}

/// Imperative forms of the flexion where they exist: second singular,
/// first plural, second plural.
pub fn sugg_verb_imperative(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for stem in lex.morpho.stems(flex) {
        for person in [tags::PERSON_2S, tags::PERSON_1P, tags::PERSON_2P] {
            if let Some(form) = lex.conj.get_conj(&stem, tags::TENSE_IMPERATIVE, person) {
                sugg.push(form);
            }
        }
    }
    sugg.into_vec()
}

/// Conjugated forms for an explicit tense/person slot.
pub fn sugg_verb_tense(lex: &Lexicon, flex: &str, tense: &str, who: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for stem in lex.morpho.stems(flex) {
        if let Some(form) = lex.conj.get_conj(&stem, tense, who) {
            sugg.push(form);
        }
    }
    sugg.into_vec()
}

/// The infinitives behind a flexion.
pub fn sugg_verb_infinitive(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    sugg.extend(lex.morpho.stems(flex));
    sugg.into_vec()
}

const INDICATIVE_TENSES: [&str; 4] = [":Ip", ":Iq", ":Is", ":If"];
const SUBJUNCTIVE_TENSES: [&str; 2] = [":Sp", ":Sq"];

fn person_of_subject(subject: &str) -> Option<&'static str> {
    match subject.to_lowercase().as_str() {
        "je" | "j’" | "j’en" | "j’y" => Some(":1s"),
        "tu" => Some(":2s"),
        "il" | "on" | "elle" => Some(":3s"),
        "nous" => Some(":1p"),
        "vous" => Some(":2p"),
        "ils" | "elles" => Some(":3p"),
        _ => None,
    }
}

/// Forms of the flexion in a requested mood (`":I"` indicative, `":S"`
/// subjunctive, or one concrete tense of either), for the person implied by
/// the subject word. A lowercase non-pronoun subject yields nothing; a
/// capitalized one is read as third singular.
pub fn sugg_verb_mode(lex: &Lexicon, flex: &str, mode: &str, subject: &str) -> Vec<String> {
    let tenses: Vec<&str> = match mode {
        ":I" => INDICATIVE_TENSES.to_vec(),
        ":S" => SUBJUNCTIVE_TENSES.to_vec(),
        m if m.starts_with(":I") || m.starts_with(":S") => vec![mode],
        _ => return Vec::new(),
    };
    let who = match person_of_subject(subject) {
        Some(who) => who,
        None => {
            if subject.chars().next().is_some_and(|c| c.is_lowercase()) {
                return Vec::new();
            }
            tags::PERSON_3S
        }
    };
    let mut sugg = Candidates::new();
    for stem in lex.morpho.stems(flex) {
        if !lex.conj.knows_stem(&stem) {
            continue;
        }
        for tense in &tenses {
            if let Some(form) = lex.conj.get_conj(&stem, tense, who) {
                sugg.push(form);
            }
        }
    }
    sugg.into_vec()
}
