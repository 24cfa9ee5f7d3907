use language_utils::Language;
use language_utils::text_cleanup::strip_determiner;

use super::RegularInflection;

const INSEPARABLE_PREFIXES: &[&str] = &["be", "emp", "ent", "er", "ver", "miss", "zer"];

/// Suffix rules for regular (weak) German verbs and nouns
pub struct German;

impl RegularInflection for German {
    fn generate_present(&self, lemma: &str, person: &str) -> String {
        generate_present(lemma, person)
    }

    fn generate_preterite(&self, lemma: &str, person: &str) -> String {
        generate_preterite(lemma, person)
    }

    fn generate_past_participle(&self, lemma: &str) -> String {
        generate_past_participle(lemma)
    }

    fn generate_plural(&self, noun: &str) -> String {
        pluralize_noun(noun)
    }
}

/// Strip the infinitive ending: "-en", otherwise "-n"
fn infinitive_stem(verb: &str) -> &str {
    verb.strip_suffix("en")
        .or_else(|| verb.strip_suffix('n'))
        .unwrap_or(verb)
}

pub fn generate_present(verb: &str, person: &str) -> String {
    let stem = infinitive_stem(verb);
    // "arbeiten" -> "du arbeitest", not "du arbeitst"
    let linking_e = if stem.ends_with(['t', 'd']) { "e" } else { "" };
    match person {
        "ich" => format!("{stem}e"),
        "du" => format!("{stem}{linking_e}st"),
        "wir" | "sie" => verb.to_string(),
        _ => format!("{stem}{linking_e}t"),
    }
}

pub fn generate_preterite(verb: &str, person: &str) -> String {
    let stem = infinitive_stem(verb);
    let ending = match person {
        "du" => "test",
        "wir" | "sie" => "ten",
        "ihr" => "tet",
        _ => "te",
    };
    format!("{stem}{ending}")
}

pub fn generate_past_participle(verb: &str) -> String {
    let stem = infinitive_stem(verb);
    let inseparable = INSEPARABLE_PREFIXES
        .iter()
        .any(|prefix| verb.starts_with(prefix) && verb.chars().count() > prefix.len() + 1);
    if inseparable {
        format!("{stem}t")
    } else {
        format!("ge{stem}t")
    }
}

/// Plural by the first matching rule. Keeps the noun's capitalisation.
pub fn pluralize_noun(noun: &str) -> String {
    let noun = strip_determiner(noun, Language::German);
    let lower = noun.to_lowercase();
    let length = noun.chars().count();

    if lower.ends_with("in") && length > 3 {
        // Lehrerin -> Lehrerinnen
        format!("{noun}nen")
    } else if noun.ends_with('e') {
        format!("{noun}n")
    } else if ["er", "el", "en"].iter().any(|suffix| noun.ends_with(suffix)) {
        noun.to_string()
    } else if length <= 3 {
        format!("{noun}er")
    } else {
        // Umlauts every a/o/u in the word, not just the stressed one
        format!("{noun}e")
            .chars()
            .map(|c| match c {
                'a' => 'ä',
                'o' => 'ö',
                'u' => 'ü',
                c => c,
            })
            .collect()
    }
}
