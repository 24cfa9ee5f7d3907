use language_utils::Language;
use language_utils::text_cleanup::{normalize_word, strip_determiner};

use crate::irregular::{FormKind, IrregularForm, IrregularTables};
use crate::paradigm::Paradigm;
use crate::regular::{RegularInflection, get_rules};
use crate::table::InflectionEntry;
use crate::vocabulary::WordClass;

/// Irregular tables first, regular rules otherwise
pub struct Inflector {
    language: Language,
    irregular: IrregularTables,
    rules: Box<dyn RegularInflection>,
}

impl Inflector {
    pub fn new(language: Language) -> Self {
        Inflector {
            language,
            irregular: IrregularTables::for_language(language),
            rules: get_rules(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_word(text, self.language)
    }

    pub fn present(&self, verb: &str, person: &str) -> String {
        let lemma = self.normalize(verb);
        if let Some(IrregularForm::Paradigm(paradigm)) =
            self.irregular.lookup(FormKind::Present, &lemma)
        {
            if let Some(form) = paradigm.get(person) {
                return form.to_string();
            }
        }
        self.rules.generate_present(&lemma, person)
    }

    pub fn preterite(&self, verb: &str, person: &str) -> String {
        let lemma = self.normalize(verb);
        if let Some(IrregularForm::Paradigm(paradigm)) =
            self.irregular.lookup(FormKind::Preterite, &lemma)
        {
            if let Some(form) = paradigm.get(person) {
                return form.to_string();
            }
        }
        self.rules.generate_preterite(&lemma, person)
    }

    pub fn past_participle(&self, verb: &str) -> String {
        let lemma = self.normalize(verb);
        match self.irregular.lookup(FormKind::PastParticiple, &lemma) {
            Some(IrregularForm::Word(participle)) => participle.to_string(),
            _ => self.rules.generate_past_participle(&lemma),
        }
    }

    pub fn plural(&self, noun: &str) -> String {
        match self.irregular.lookup(FormKind::Plural, &self.normalize(noun)) {
            Some(IrregularForm::Word(plural)) => plural.to_string(),
            _ => self.rules.generate_plural(noun),
        }
    }

    pub fn present_paradigm(&self, verb: &str) -> Paradigm {
        Paradigm::from_fn(self.language, |person| self.present(verb, person))
    }

    pub fn preterite_paradigm(&self, verb: &str) -> Paradigm {
        Paradigm::from_fn(self.language, |person| self.preterite(verb, person))
    }

    /// Build the full table for `word`: verbs get both paradigms and the
    /// participle, nouns a plural, anything else just its lemma.
    pub fn entry_for(&self, word: &str, pos: Option<WordClass>) -> InflectionEntry {
        let lemma = strip_determiner(word, self.language);
        let mut entry = InflectionEntry {
            base: word.to_string(),
            pos,
            lemma: lemma.to_string(),
            present: None,
            preterite: None,
            past_participle: None,
            plural: None,
            observed: Vec::new(),
        };
        match entry.pos {
            Some(WordClass::Verb) => {
                entry.present = Some(self.present_paradigm(lemma));
                entry.preterite = Some(self.preterite_paradigm(lemma));
                entry.past_participle = Some(self.past_participle(lemma));
            }
            Some(WordClass::Noun) => entry.plural = Some(self.plural(word)),
            _ => {}
        }
        entry
    }
}
