//! Suffix rules producing a best-effort form when no irregular entry exists.
//!
//! Everything here is pure and total over alphabetic input. Verb rules expect
//! a normalized lemma; noun rules take the surface noun and strip its article.

pub mod english;
pub mod german;

use language_utils::Language;

pub trait RegularInflection {
    fn generate_present(&self, lemma: &str, person: &str) -> String;
    fn generate_preterite(&self, lemma: &str, person: &str) -> String;
    fn generate_past_participle(&self, lemma: &str) -> String;
    fn generate_plural(&self, noun: &str) -> String;
}

/// Get the regular rules for a given language
pub fn get_rules(language: Language) -> Box<dyn RegularInflection> {
    match language {
        Language::German => Box::new(german::German),
        Language::English => Box::new(english::English),
    }
}
