// Morphology tag-string convention.
//
// A dictionary analysis is an opaque tag string of the form
// `>lemma :CODE:CODE…`: the lemma introduced by `>`, then colon-prefixed
// codes describing part of speech, tense, person, gender and number for one
// candidate reading. The engine never enumerates the code set; it only
// pattern-matches against it. The constants below are the handful of codes
// the inflection-suggestion algorithms must interpret themselves.

/// Infinitive marker; implies present, imperfect and simple past when a
/// suggestion must pick a concrete tense.
pub const TENSE_INFINITIVE: &str = ":Y";
/// Present-participle marker; implies present tense.
pub const TENSE_PRESENT_PARTICIPLE: &str = ":P";
/// Indicative present.
pub const TENSE_PRESENT: &str = ":Ip";
/// Indicative imperfect.
pub const TENSE_IMPERFECT: &str = ":Iq";
/// Indicative simple past.
pub const TENSE_SIMPLE_PAST: &str = ":Is";
/// Participle slot used for past-participle conjugation lookups.
pub const TENSE_PAST_PARTICIPLE: &str = ":PQ";
/// Imperative mood.
pub const TENSE_IMPERATIVE: &str = ":E";

/// Past-participle agreement slots: masculine singular, masculine plural,
/// feminine singular, feminine plural.
pub const PPAS_MAS_SING: &str = ":Q1";
pub const PPAS_MAS_PLUR: &str = ":Q2";
pub const PPAS_FEM_SING: &str = ":Q3";
pub const PPAS_FEM_PLUR: &str = ":Q4";

/// Person codes for conjugation lookups.
pub const PERSON_2S: &str = ":2s";
pub const PERSON_1P: &str = ":1p";
pub const PERSON_2P: &str = ":2p";
/// Elided first-person singular; falls back to `:1s` when a verb has no
/// dedicated elided form.
pub const PERSON_1S_ELIDED: &str = ":1ś";
pub const PERSON_1S: &str = ":1s";
pub const PERSON_3S: &str = ":3s";

/// Gender codes: masculine, feminine, epicene.
pub const GENDER_MAS: &str = ":m";
pub const GENDER_FEM: &str = ":f";
pub const GENDER_EPI: &str = ":e";

/// Number codes: singular, plural.
pub const NUMBER_SING: &str = ":s";
pub const NUMBER_PLUR: &str = ":p";

/// Verb part-of-speech marker.
pub const POS_VERB: &str = ":V";

/// Extract the lemma from a tag string: the first whitespace-delimited
/// token with its leading `>` removed. Returns an empty string for a tag
/// string without a lemma token.
pub fn lemma_of(morph: &str) -> &str {
    let head = morph.split_whitespace().next().unwrap_or("");
    head.strip_prefix('>').unwrap_or(head)
}

/// Gender of a reading set: `":m"`, `":f"`, or `""` when undetermined.
/// Epicene readings count as both, so they leave the gender undetermined
/// unless every reading agrees.
pub fn gender_of(morphs: &[String]) -> &'static str {
    let mut mas = false;
    let mut fem = false;
    for m in morphs {
        if m.contains(GENDER_MAS) {
            mas = true;
        }
        if m.contains(GENDER_FEM) {
            fem = true;
        }
    }
    match (mas, fem) {
        (true, false) => GENDER_MAS,
        (false, true) => GENDER_FEM,
        _ => "",
    }
}
