//! Language-specific text cleanup utilities
//!
//! This module turns vocabulary surface forms ("die Lampe", "The Dog") into
//! the bare lowercase keys used to look words up and to compare word forms.

use unicode_normalization::UnicodeNormalization;

use crate::Language;

impl Language {
    /// Articles that may prefix a vocabulary entry
    pub fn determiners(&self) -> &'static [&'static str] {
        match self {
            Language::German => &["der", "die", "das"],
            Language::English => &["the", "a", "an"],
        }
    }

    /// Whether `c` (already lowercased) belongs to the language's alphabet
    pub fn is_alphabet_char(&self, c: char) -> bool {
        match self {
            Language::German => c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'ü' | 'ß'),
            Language::English => c.is_ascii_lowercase(),
        }
    }
}

/// Strip a leading article from `text`
///
/// Only a whole first word is stripped, and only when whitespace follows it:
/// "The Dog" becomes "Dog" but "Theater" is left alone. The result is trimmed.
pub fn strip_determiner(text: &str, language: Language) -> &str {
    let trimmed = text.trim();
    if let Some((head, rest)) = trimmed.split_once(char::is_whitespace) {
        if language
            .determiners()
            .iter()
            .any(|determiner| determiner.eq_ignore_ascii_case(head))
        {
            return rest.trim();
        }
    }
    trimmed
}

/// Normalize a word or phrase into a lookup key
///
/// - Composes Unicode (NFC), so a decomposed umlaut counts as one letter
/// - Strips a leading article
/// - Converts to lowercase
/// - Removes every character outside the language's alphabet
pub fn normalize_word(text: &str, language: Language) -> String {
    let composed = text.nfc().collect::<String>();
    strip_determiner(&composed, language)
        .to_lowercase()
        .chars()
        .filter(|c| language.is_alphabet_char(*c))
        .collect()
}
