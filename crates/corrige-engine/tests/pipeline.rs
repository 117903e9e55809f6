//! End-to-end pipeline tests: a miniature French rule table checked
//! against in-memory language resources.
//!
//! Everything runs from fixtures; no dictionary files are needed.

use once_cell::sync::Lazy;
use regex::Regex;

use corrige_core::options::Options;
use corrige_engine::morphology::{Dictionary, Morphology};
use corrige_engine::report::{HostRenderer, StructuredRenderer};
use corrige_engine::rules::registry::Registry;
use corrige_engine::rules::{ActionSpec, RuleSet, RuleSpec};
use corrige_engine::suggest::{
    Conjugation, IrregularForms, Lexicon, PhoneticIndex, nominal::sugg_plural, pipe_join,
};
use corrige_engine::{CheckReport, Proofreader};

// ---------------------------------------------------------------------------
// Fixtures: dictionary, conjugation, irregular forms, phonetic index
// ---------------------------------------------------------------------------

struct FixtureDict;

impl Dictionary for FixtureDict {
    fn is_valid(&self, word: &str) -> bool {
        !self.get_morph(word).is_empty()
    }

    fn is_valid_token(&self, token: &str) -> bool {
        self.is_valid(token) || self.is_valid(&token.to_lowercase())
    }

    fn get_morph(&self, word: &str) -> Vec<String> {
        let tags: &[&str] = match word {
            "les" => &[">le :D:m:p", ">le :D:f:p"],
            "chat" => &[">chat :N:m:s"],
            "chats" => &[">chat :N:m:p"],
            "cheval" => &[">cheval :N:m:s"],
            "chevaux" => &[">cheval :N:m:p"],
            "mangent" => &[">manger :V1:Ip:3p"],
            "mange" => &[">manger :V1:Ip:1s", ">manger :V1:Ip:3s"],
            _ => &[],
        };
        tags.iter().map(|t| t.to_string()).collect()
    }
}

struct NoConjugation;

impl Conjugation for NoConjugation {
    fn knows_stem(&self, _stem: &str) -> bool {
        false
    }
    fn has_conj(&self, _stem: &str, _tense: &str, _person: &str) -> bool {
        false
    }
    fn get_conj(&self, _stem: &str, _tense: &str, _person: &str) -> Option<String> {
        None
    }
}

struct NoIrregular;

impl IrregularForms for NoIrregular {
    fn has_irregular_plural(&self, _word: &str) -> bool {
        false
    }
    fn irregular_plurals(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
    fn is_feminine_form(&self, _stem: &str) -> bool {
        false
    }
    fn masculine_forms(&self, _stem: &str, _plural: bool) -> Vec<String> {
        Vec::new()
    }
}

struct NoPhonetic;

impl PhoneticIndex for NoPhonetic {
    fn has_similar(&self, _word: &str) -> bool {
        false
    }
    fn similar_words(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

fn lexicon() -> Lexicon {
    Lexicon {
        morpho: Morphology::new(Box::new(FixtureDict)),
        conj: Box::new(NoConjugation),
        irregular: Box::new(NoIrregular),
        phonet: Box::new(NoPhonetic),
    }
}

// ---------------------------------------------------------------------------
// Rule table: one masking rule, one agreement rule, one gated typo rule
// ---------------------------------------------------------------------------

static NOUN_SING: Lazy<Regex> = Lazy::new(|| Regex::new(r":N.*:s\b").unwrap());

fn registry() -> Registry {
    let mut reg = Registry::new();
    reg.guard("noun_is_singular", |ctx, dda| {
        Ok(ctx
            .lex
            .morpho
            .morph(dda, ctx.word_opt(1), &NOUN_SING, false, false))
    });
    reg.text("plural_of_noun", |ctx| {
        let flex = ctx.group_or_fault(1)?;
        Ok(pipe_join(&sugg_plural(ctx.lex, flex, None)))
    });
    reg
}

fn rules() -> RuleSet {
    let mask_url = RuleSpec {
        id: "mask_url".to_string(),
        option: None,
        pattern: r"(https?://[\w./-]+)".to_string(),
        preserve_case: false,
        actions: vec![ActionSpec::Rewrite {
            guard: None,
            group: 1,
            replacement: "@".to_string(),
        }],
    };
    let agreement = RuleSpec {
        id: "agr_les_noun".to_string(),
        option: None,
        pattern: r"\b[Ll]es (\w+)".to_string(),
        preserve_case: true,
        actions: vec![ActionSpec::Flag {
            guard: Some("noun_is_singular".to_string()),
            group: 1,
            suggestion: "=plural_of_noun".to_string(),
            message: "Accord de nombre avec « les ».".to_string(),
            url: None,
        }],
    };
    let double_space = RuleSpec {
        id: "typo_double_space".to_string(),
        option: Some("typo".to_string()),
        pattern: r"\w(  +)\w".to_string(),
        preserve_case: false,
        actions: vec![ActionSpec::Flag {
            guard: None,
            group: 1,
            suggestion: " ".to_string(),
            message: "Espaces surnuméraires.".to_string(),
            url: None,
        }],
    };
    RuleSet::compile(vec![mask_url], vec![agreement, double_space], &registry())
}

fn checker(options: Options) -> Proofreader<StructuredRenderer> {
    Proofreader::new(rules(), lexicon(), options, StructuredRenderer)
}

fn check(text: &str) -> CheckReport<corrige_core::error::CheckError> {
    checker(Options::default()).check_paragraph(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn agreement_error_with_generated_suggestion() {
    let report = check("Les chat mangent.");
    assert_eq!(report.errors.len(), 1);
    let e = &report.errors[0];
    assert_eq!(e.rule_id, "agr_les_noun");
    assert_eq!((e.start, e.end), (4, 8));
    // preserve_case capitalizes nothing here: the flagged group is lowercase
    assert_eq!(e.suggestions, vec!["chats"]);
    assert_eq!(e.category, "notype");
    assert!(report.faults.is_empty());
}

#[test]
fn correct_sentence_is_clean() {
    let report = check("Les chats mangent.");
    assert!(report.errors.is_empty());
    assert!(report.faults.is_empty());
}

#[test]
fn masked_url_is_invisible_to_sentence_rules() {
    // Without masking, "les chat.fr" inside the URL would trip the
    // agreement rule.
    let report = check("Voir https://les-sites.fr/les chat mangent.");
    assert!(report.errors.is_empty());
}

#[test]
fn option_gated_rule_toggles() {
    let text = "Les chats  mangent.";
    let off = checker(Options::new([("typo".to_string(), false)]));
    assert!(off.check_paragraph(text).errors.is_empty());

    let on = checker(Options::new([("typo".to_string(), true)]));
    let report = on.check_paragraph(text);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].rule_id, "typo_double_space");
    assert_eq!(report.errors[0].suggestions, vec![" "]);
}

#[test]
fn rule_id_suffix_option() {
    let with_id = checker(Options::new([("idrule".to_string(), true)]));
    let report = with_id.check_paragraph("Les chat mangent.");
    assert_eq!(
        report.errors[0].message,
        "Accord de nombre avec « les ».  # agr_les_noun"
    );
}

#[test]
fn ignore_cycle() {
    let mut c = checker(Options::default());
    assert_eq!(c.check_paragraph("Les chat mangent.").errors.len(), 1);
    c.ignore_rule("agr_les_noun");
    assert!(c.check_paragraph("Les chat mangent.").errors.is_empty());
    c.reset_ignored();
    assert_eq!(c.check_paragraph("Les chat mangent.").errors.len(), 1);
}

#[test]
fn offsets_stay_valid_on_multibyte_text() {
    let report = check("Déjà vu : les cheval mangent.");
    assert_eq!(report.errors.len(), 1);
    let e = &report.errors[0];
    assert_eq!((e.start, e.end), (14, 20));
    assert_eq!(e.suggestions, vec!["chevaux"]);
}

#[test]
fn host_renderer_shape() {
    let host = Proofreader::new(rules(), lexicon(), Options::default(), HostRenderer);
    let report = host.check_paragraph("Les chat mangent.");
    assert_eq!(report.errors.len(), 1);
    let e = &report.errors[0];
    assert_eq!(e.error_start, 4);
    assert_eq!(e.error_length, 4);
    assert_eq!(e.rule_identifier, "agr_les_noun");
    assert_eq!(e.suggestions, vec!["chats"]);
}

#[test]
fn no_suggestion_spec_yields_empty_list() {
    let bare = RuleSpec {
        id: "style_tres_tres".to_string(),
        option: None,
        pattern: r"très très".to_string(),
        preserve_case: false,
        actions: vec![ActionSpec::Flag {
            guard: None,
            group: 0,
            suggestion: "_".to_string(),
            message: "Répétition.".to_string(),
            url: None,
        }],
    };
    let set = RuleSet::compile(vec![], vec![bare], &Registry::new());
    let c = Proofreader::new(set, lexicon(), Options::default(), StructuredRenderer);
    let report = c.check_paragraph("C’est très très bon.");
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].suggestions.is_empty());
}

#[test]
fn errors_serialize_for_headless_consumers() {
    let report = check("Les chat mangent.");
    let json = serde_json::to_string(&report.errors).unwrap();
    assert!(json.contains("\"rule_id\":\"agr_les_noun\""));
    assert!(json.contains("\"suggestions\":[\"chats\"]"));
}

#[test]
fn checking_is_repeatable() {
    let c = checker(Options::default());
    let first = c.check_paragraph("Les chat mangent.");
    let second = c.check_paragraph("Les chat mangent.");
    assert_eq!(first.errors, second.errors);
}
