use indexmap::IndexMap;
use language_utils::Language;
use language_utils::features::{Number, Person};

/// The person/number labels every paradigm of `language` is keyed by, in output order
pub fn person_labels(language: Language) -> &'static [&'static str] {
    match language {
        Language::German => &["ich", "du", "er", "wir", "ihr", "sie"],
        Language::English => &["I", "you", "he", "we", "they"],
    }
}

/// Map a pipeline Person/Number pair onto the language's paradigm label.
///
/// Second person collapses onto the singular label regardless of number, and
/// a missing number reads as singular.
pub fn person_slot(language: Language, person: Person, number: Option<Number>) -> &'static str {
    let plural = number == Some(Number::Plural);
    match (language, person, plural) {
        (Language::German, Person::First, false) => "ich",
        (Language::German, Person::First, true) => "wir",
        (Language::German, Person::Second, _) => "du",
        (Language::German, Person::Third, false) => "er",
        (Language::German, Person::Third, true) => "sie",
        (Language::English, Person::First, false) => "I",
        (Language::English, Person::First, true) => "we",
        (Language::English, Person::Second, _) => "you",
        (Language::English, Person::Third, false) => "he",
        (Language::English, Person::Third, true) => "they",
    }
}

/// Inflected forms of one tense, one per person label of the language.
///
/// The label set is fixed at construction; [`Paradigm::set`] only replaces
/// existing slots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Paradigm(IndexMap<&'static str, String>);

impl Paradigm {
    pub fn from_fn(language: Language, mut form: impl FnMut(&'static str) -> String) -> Self {
        Paradigm(
            person_labels(language)
                .iter()
                .map(|person| (*person, form(person)))
                .collect(),
        )
    }

    /// Builds a paradigm from forms listed in label order; `None` if the count is wrong.
    pub fn from_forms(language: Language, forms: &[&str]) -> Option<Self> {
        let labels = person_labels(language);
        (labels.len() == forms.len()).then(|| {
            Paradigm(
                labels
                    .iter()
                    .zip(forms)
                    .map(|(person, form)| (*person, form.to_string()))
                    .collect(),
            )
        })
    }

    pub fn get(&self, person: &str) -> Option<&str> {
        self.0.get(person).map(String::as_str)
    }

    /// Replace the form at `person`. Returns false, changing nothing, for an unknown label.
    pub fn set(&mut self, person: &str, form: impl Into<String>) -> bool {
        match self.0.get_mut(person) {
            Some(slot) => {
                *slot = form.into();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn persons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}
