use language_utils::Language;
use language_utils::text_cleanup::strip_determiner;

use super::RegularInflection;

/// Standard English "-s"/"-ed" orthography
pub struct English;

impl RegularInflection for English {
    fn generate_present(&self, lemma: &str, person: &str) -> String {
        generate_present(lemma, person)
    }

    fn generate_preterite(&self, lemma: &str, _person: &str) -> String {
        generate_preterite(lemma)
    }

    /// Regular verbs share one form for the preterite and the participle
    fn generate_past_participle(&self, lemma: &str) -> String {
        generate_preterite(lemma)
    }

    fn generate_plural(&self, noun: &str) -> String {
        pluralize_noun(noun)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Last `N` characters, newest last; `None` if the word is shorter
fn tail<const N: usize>(word: &str) -> Option<[char; N]> {
    let mut chars = word.chars().rev();
    let mut tail = ['\0'; N];
    for slot in tail.iter_mut().rev() {
        *slot = chars.next()?;
    }
    Some(tail)
}

/// "fly" -> true, "play" -> false
fn ends_in_consonant_y(word: &str) -> bool {
    matches!(tail::<2>(word), Some([c, 'y']) if !is_vowel(c))
}

fn add_third_person_s(verb: &str) -> String {
    if ends_in_consonant_y(verb) {
        format!("{}ies", &verb[..verb.len() - 1])
    } else if ["o", "ch", "s", "sh", "x", "z"]
        .iter()
        .any(|suffix| verb.ends_with(suffix))
    {
        format!("{verb}es")
    } else {
        format!("{verb}s")
    }
}

/// Only the third person singular is marked
pub fn generate_present(verb: &str, person: &str) -> String {
    if person == "he" {
        add_third_person_s(verb)
    } else {
        verb.to_string()
    }
}

pub fn generate_preterite(verb: &str) -> String {
    if verb.ends_with('e') {
        return format!("{verb}d");
    }
    if ends_in_consonant_y(verb) {
        return format!("{}ied", &verb[..verb.len() - 1]);
    }
    // A short closed syllable doubles its final consonant: stop -> stopped
    if let Some([first, vowel, last]) = tail::<3>(verb) {
        let closed = !is_vowel(first) && is_vowel(vowel) && !is_vowel(last);
        if closed && !matches!(last, 'w' | 'x' | 'y') {
            return format!("{verb}{last}ed");
        }
    }
    format!("{verb}ed")
}

pub fn pluralize_noun(noun: &str) -> String {
    let noun = strip_determiner(noun, Language::English);
    if ends_in_consonant_y(noun) {
        format!("{}ies", &noun[..noun.len() - 1])
    } else if ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| noun.ends_with(suffix))
    {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}
