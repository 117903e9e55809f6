// Noun and adjective inflection suggestions.
//
// Number and gender switches first try the regular suffix route (add or
// remove `-s`/`-x`, the closed `-al`/`-ail` → `-aux` family) and validate
// every candidate against the dictionary; words the suffix route cannot
// reach go through the irregular-form collaborator. Verb-derived
// adjectival readings are routed through the past-participle agreement
// generator instead.

use corrige_core::tags;

use super::verb::sugg_verb_ppas;
use super::{Candidates, Lexicon};

/// Plural forms, assuming `flex` is singular. When `to_agree` is given,
/// its gender decides between the masculine and feminine plural routes.
pub fn sugg_plural(lex: &Lexicon, flex: &str, to_agree: Option<&str>) -> Vec<String> {
    if let Some(other) = to_agree {
        let morphs = lex.morpho.raw_tags(other);
        return match tags::gender_of(&morphs) {
            tags::GENDER_MAS => sugg_mas_plur(lex, flex),
            tags::GENDER_FEM => sugg_fem_plur(lex, flex),
            _ => Vec::new(),
        };
    }
    let mut sugg = Candidates::new();
    if !flex.contains('-') {
        if let Some(base) = flex.strip_suffix("al") {
            let aux = format!("{base}aux");
            if !base.is_empty() && lex.morpho.dictionary().is_valid(&aux) {
                sugg.push(aux);
            }
        }
        if let Some(base) = flex.strip_suffix("ail") {
            let aux = format!("{base}aux");
            if !base.is_empty() && lex.morpho.dictionary().is_valid(&aux) {
                sugg.push(aux);
            }
        }
        for suffix in ["s", "x"] {
            let plural = format!("{flex}{suffix}");
            if lex.morpho.dictionary().is_valid(&plural) {
                sugg.push(plural);
            }
        }
    }
    if lex.irregular.has_irregular_plural(flex) {
        sugg.extend(lex.irregular.irregular_plurals(flex));
    }
    sugg.into_vec()
}

/// Singular forms, assuming `flex` is plural.
pub fn sugg_singular(lex: &Lexicon, flex: &str) -> Vec<String> {
    if flex.contains('-') {
        return Vec::new();
    }
    let mut sugg = Candidates::new();
    if let Some(base) = flex.strip_suffix("ux") {
        for tail in ["l", "il"] {
            let singular = format!("{base}{tail}");
            if lex.morpho.dictionary().is_valid(&singular) {
                sugg.push(singular);
            }
        }
    }
    let mut chars = flex.chars();
    if chars.next_back().is_some() {
        let stripped = chars.as_str();
        if !stripped.is_empty() && lex.morpho.dictionary().is_valid(stripped) {
            sugg.push(stripped.to_string());
        }
    }
    sugg.into_vec()
}

/// Masculine singular forms of a flexion.
pub fn sugg_mas_sing(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if !morph.contains(tags::POS_VERB) {
            if morph.contains(tags::GENDER_MAS) || morph.contains(tags::GENDER_EPI) {
                sugg.extend(sugg_singular(lex, flex));
            } else {
                let stem = tags::lemma_of(&morph);
                if lex.irregular.is_feminine_form(stem) {
                    sugg.extend(lex.irregular.masculine_forms(stem, false));
                }
            }
        } else {
            sugg.extend(sugg_verb_ppas(lex, flex, Some(":m:s")));
        }
    }
    sugg.into_vec()
}

/// Masculine plural forms of a flexion.
pub fn sugg_mas_plur(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if !morph.contains(tags::POS_VERB) {
            if morph.contains(tags::GENDER_MAS) || morph.contains(tags::GENDER_EPI) {
                sugg.extend(sugg_plural(lex, flex, None));
            } else {
                let stem = tags::lemma_of(&morph);
                if lex.irregular.is_feminine_form(stem) {
                    sugg.extend(lex.irregular.masculine_forms(stem, true));
                }
            }
        } else {
            sugg.extend(sugg_verb_ppas(lex, flex, Some(":m:p")));
        }
    }
    sugg.into_vec()
}

/// Feminine singular forms of a flexion.
pub fn sugg_fem_sing(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if !morph.contains(tags::POS_VERB) {
            if morph.contains(tags::GENDER_FEM) || morph.contains(tags::GENDER_EPI) {
                sugg.extend(sugg_singular(lex, flex));
            } else {
                let stem = tags::lemma_of(&morph);
                if lex.irregular.is_feminine_form(stem) {
                    sugg.push(stem.to_string());
                }
            }
        } else {
            sugg.extend(sugg_verb_ppas(lex, flex, Some(":f:s")));
        }
    }
    sugg.into_vec()
}

/// Feminine plural forms of a flexion.
pub fn sugg_fem_plur(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if !morph.contains(tags::POS_VERB) {
            if morph.contains(tags::GENDER_FEM) || morph.contains(tags::GENDER_EPI) {
                sugg.extend(sugg_plural(lex, flex, None));
            } else {
                let stem = tags::lemma_of(&morph);
                if lex.irregular.is_feminine_form(stem) {
                    sugg.push(format!("{stem}s"));
                }
            }
        } else {
            sugg.extend(sugg_verb_ppas(lex, flex, Some(":f:p")));
        }
    }
    sugg.into_vec()
}

/// Opposite-gender forms: same number when it is determined, otherwise
/// both numbers. `plural` forces the number of the result.
pub fn switch_gender(lex: &Lexicon, flex: &str, plural: Option<bool>) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        let fem = morph.contains(tags::GENDER_FEM);
        let mas = morph.contains(tags::GENDER_MAS);
        match plural {
            Some(true) => {
                if fem {
                    sugg.extend(sugg_mas_plur(lex, flex));
                } else if mas {
                    sugg.extend(sugg_fem_plur(lex, flex));
                }
            }
            Some(false) => {
                if fem {
                    sugg.extend(sugg_mas_sing(lex, flex));
                } else if mas {
                    sugg.extend(sugg_fem_sing(lex, flex));
                }
            }
            None => {
                if fem {
                    if morph.contains(tags::NUMBER_SING) {
                        sugg.extend(sugg_mas_sing(lex, flex));
                    } else if morph.contains(tags::NUMBER_PLUR) {
                        sugg.extend(sugg_mas_plur(lex, flex));
                    }
                } else if mas {
                    if morph.contains(tags::NUMBER_SING) {
                        sugg.extend(sugg_fem_sing(lex, flex));
                    } else if morph.contains(tags::NUMBER_PLUR) {
                        sugg.extend(sugg_fem_plur(lex, flex));
                    } else {
                        sugg.extend(sugg_fem_sing(lex, flex));
                        sugg.extend(sugg_fem_plur(lex, flex));
                    }
                }
            }
        }
    }
    sugg.into_vec()
}

/// Opposite-number forms: plural for singular readings and vice versa.
pub fn switch_number(lex: &Lexicon, flex: &str) -> Vec<String> {
    let mut sugg = Candidates::new();
    for morph in lex.morpho.raw_tags(flex) {
        if morph.contains(tags::NUMBER_SING) {
            sugg.extend(sugg_plural(lex, flex, None));
        } else if morph.contains(tags::NUMBER_PLUR) {
            sugg.extend(sugg_singular(lex, flex));
        }
    }
    sugg.into_vec()
}
