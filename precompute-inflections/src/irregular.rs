//! Irregular form overrides, consulted before the regular generator.
//!
//! The data lives in plain static slices; [`IrregularTables::for_language`]
//! turns it into lookup maps once per run.

use std::collections::HashMap;

use language_utils::Language;

use crate::paradigm::Paradigm;

type VerbParadigms = &'static [(&'static str, &'static [&'static str])];
type WordPairs = &'static [(&'static str, &'static str)];

const GERMAN_PRESENT: VerbParadigms = &[
    ("sein", &["bin", "bist", "ist", "sind", "seid", "sind"]),
    ("haben", &["habe", "hast", "hat", "haben", "habt", "haben"]),
    ("werden", &["werde", "wirst", "wird", "werden", "werdet", "werden"]),
    ("gehen", &["gehe", "gehst", "geht", "gehen", "geht", "gehen"]),
    ("sehen", &["sehe", "siehst", "sieht", "sehen", "seht", "sehen"]),
    ("lesen", &["lese", "liest", "liest", "lesen", "lest", "lesen"]),
    ("sprechen", &["spreche", "sprichst", "spricht", "sprechen", "sprecht", "sprechen"]),
    ("nehmen", &["nehme", "nimmst", "nimmt", "nehmen", "nehmt", "nehmen"]),
];

const GERMAN_PRETERITE: VerbParadigms = &[
    ("sein", &["war", "warst", "war", "waren", "wart", "waren"]),
    ("haben", &["hatte", "hattest", "hatte", "hatten", "hattet", "hatten"]),
    ("werden", &["wurde", "wurdest", "wurde", "wurden", "wurdet", "wurden"]),
    ("gehen", &["ging", "gingst", "ging", "gingen", "gingt", "gingen"]),
    ("sehen", &["sah", "sahst", "sah", "sahen", "saht", "sahen"]),
    ("lesen", &["las", "last", "las", "lasen", "last", "lasen"]),
    ("sprechen", &["sprach", "sprachst", "sprach", "sprachen", "spracht", "sprachen"]),
    ("nehmen", &["nahm", "nahmst", "nahm", "nahmen", "nahmt", "nahmen"]),
    ("kommen", &["kam", "kamst", "kam", "kamen", "kamt", "kamen"]),
    ("trinken", &["trank", "trankst", "trank", "tranken", "trankt", "tranken"]),
];

const GERMAN_PARTICIPLE: WordPairs = &[
    ("sein", "gewesen"),
    ("haben", "gehabt"),
    ("werden", "geworden"),
    ("gehen", "gegangen"),
    ("lesen", "gelesen"),
    ("spielen", "gespielt"),
    ("machen", "gemacht"),
    ("sprechen", "gesprochen"),
    ("sehen", "gesehen"),
    ("nehmen", "genommen"),
    ("kommen", "gekommen"),
    ("trinken", "getrunken"),
];

// German nouns are left to the heuristics
const GERMAN_PLURAL: WordPairs = &[];

/// (lemma, present, preterite, past participle)
type EnglishVerb = (&'static str, [&'static str; 5], [&'static str; 5], &'static str);

const ENGLISH_VERBS: &[EnglishVerb] = &[
    ("be", ["am", "are", "is", "are", "are"], ["was", "were", "was", "were", "were"], "been"),
    ("have", ["have", "have", "has", "have", "have"], ["had"; 5], "had"),
    ("do", ["do", "do", "does", "do", "do"], ["did"; 5], "done"),
    ("go", ["go", "go", "goes", "go", "go"], ["went"; 5], "gone"),
    ("say", ["say", "say", "says", "say", "say"], ["said"; 5], "said"),
    ("make", ["make", "make", "makes", "make", "make"], ["made"; 5], "made"),
    ("know", ["know", "know", "knows", "know", "know"], ["knew"; 5], "known"),
    ("think", ["think", "think", "thinks", "think", "think"], ["thought"; 5], "thought"),
    ("take", ["take", "take", "takes", "take", "take"], ["took"; 5], "taken"),
    ("see", ["see", "see", "sees", "see", "see"], ["saw"; 5], "seen"),
    ("come", ["come", "come", "comes", "come", "come"], ["came"; 5], "come"),
    ("write", ["write", "write", "writes", "write", "write"], ["wrote"; 5], "written"),
    ("eat", ["eat", "eat", "eats", "eat", "eat"], ["ate"; 5], "eaten"),
    ("run", ["run", "run", "runs", "run", "run"], ["ran"; 5], "run"),
    ("give", ["give", "give", "gives", "give", "give"], ["gave"; 5], "given"),
    ("bring", ["bring", "bring", "brings", "bring", "bring"], ["brought"; 5], "brought"),
    ("buy", ["buy", "buy", "buys", "buy", "buy"], ["bought"; 5], "bought"),
    ("feel", ["feel", "feel", "feels", "feel", "feel"], ["felt"; 5], "felt"),
];

const ENGLISH_PLURAL: WordPairs = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
];

/// Which inflected form a lookup asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Present,
    Preterite,
    PastParticiple,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularForm<'a> {
    Paradigm(&'a Paradigm),
    Word(&'a str),
}

/// Irregular forms keyed by normalized lemma
#[derive(Debug, Clone, Default)]
pub struct IrregularTables {
    present: HashMap<String, Paradigm>,
    preterite: HashMap<String, Paradigm>,
    past_participle: HashMap<String, String>,
    plural: HashMap<String, String>,
}

impl IrregularTables {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::German => IrregularTables {
                present: paradigms(language, GERMAN_PRESENT),
                preterite: paradigms(language, GERMAN_PRETERITE),
                past_participle: words(GERMAN_PARTICIPLE),
                plural: words(GERMAN_PLURAL),
            },
            Language::English => {
                let mut tables = IrregularTables {
                    plural: words(ENGLISH_PLURAL),
                    ..Default::default()
                };
                for (lemma, present, preterite, participle) in ENGLISH_VERBS {
                    if let Some(paradigm) = Paradigm::from_forms(language, present) {
                        tables.present.insert(lemma.to_string(), paradigm);
                    }
                    if let Some(paradigm) = Paradigm::from_forms(language, preterite) {
                        tables.preterite.insert(lemma.to_string(), paradigm);
                    }
                    tables
                        .past_participle
                        .insert(lemma.to_string(), participle.to_string());
                }
                tables
            }
        }
    }

    /// Look up an irregular form; `None` means "use the regular generator".
    pub fn lookup(&self, kind: FormKind, lemma: &str) -> Option<IrregularForm<'_>> {
        match kind {
            FormKind::Present => self.present.get(lemma).map(IrregularForm::Paradigm),
            FormKind::Preterite => self.preterite.get(lemma).map(IrregularForm::Paradigm),
            FormKind::PastParticiple => self
                .past_participle
                .get(lemma)
                .map(|word| IrregularForm::Word(word)),
            FormKind::Plural => self.plural.get(lemma).map(|word| IrregularForm::Word(word)),
        }
    }
}

fn paradigms(language: Language, table: VerbParadigms) -> HashMap<String, Paradigm> {
    table
        .iter()
        .filter_map(|(lemma, forms)| {
            let paradigm = Paradigm::from_forms(language, forms);
            if paradigm.is_none() {
                log::warn!(
                    "Irregular paradigm for {lemma:?} does not match the {language} person labels"
                );
            }
            Some((lemma.to_string(), paradigm?))
        })
        .collect()
}

fn words(table: WordPairs) -> HashMap<String, String> {
    table
        .iter()
        .map(|(lemma, word)| (lemma.to_string(), word.to_string()))
        .collect()
}
