use indexmap::{IndexMap, IndexSet};
use language_utils::features::FeatureMap;
use language_utils::text_cleanup::normalize_word;
use language_utils::{DocToken, Language, PartOfSpeech};

use crate::nlp::MorphologyAnalyzer;
use crate::table::Observation;
use crate::vocabulary::{VocabularyEntry, WordClass};

/// A surface form and every distinct feature set it was seen with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedForm {
    pub form: String,
    pub features: IndexSet<FeatureMap>,
}

impl ObservedForm {
    /// The feature set the form was first seen with; later stages only use this one
    pub fn representative(&self) -> Option<&FeatureMap> {
        self.features.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedLemma {
    /// Lemma as the pipeline spelled it
    pub lemma: String,
    /// Class of the first token seen for this lemma
    pub pos: WordClass,
    pub forms: IndexMap<String, ObservedForm>,
}

impl ObservedLemma {
    /// One observation per surface form, in first-seen order
    pub fn observations(&self) -> Vec<Observation> {
        self.forms
            .values()
            .filter_map(|observed| {
                observed.representative().map(|features| Observation {
                    form: observed.form.clone(),
                    features: features.clone(),
                })
            })
            .collect()
    }
}

/// Observed forms grouped by normalized lemma, in first-observed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observations {
    lemmas: IndexMap<String, ObservedLemma>,
}

impl Observations {
    pub fn record(&mut self, language: Language, token: &DocToken) {
        if !token.is_alpha() {
            return;
        }
        let Some(pos) = observed_class(token.pos) else {
            return;
        };
        let lemma = if token.lemma.is_empty() {
            &token.text
        } else {
            &token.lemma
        };
        let lemma_key = normalize_word(lemma, language);
        if lemma_key.is_empty() {
            return;
        }

        let observed = self
            .lemmas
            .entry(lemma_key)
            .or_insert_with(|| ObservedLemma {
                lemma: lemma.clone(),
                pos,
                forms: IndexMap::new(),
            });
        observed
            .forms
            .entry(token.text.clone())
            .or_insert_with(|| ObservedForm {
                form: token.text.clone(),
                features: IndexSet::new(),
            })
            .features
            .insert(token.morph.clone());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObservedLemma)> {
        self.lemmas.iter().map(|(key, lemma)| (key.as_str(), lemma))
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

/// Only verbs, nouns and adjectives are worth observing
fn observed_class(pos: PartOfSpeech) -> Option<WordClass> {
    match pos {
        PartOfSpeech::Verb => Some(WordClass::Verb),
        PartOfSpeech::Noun => Some(WordClass::Noun),
        PartOfSpeech::Adj => Some(WordClass::Adjective),
        _ => None,
    }
}

/// Run every example sentence through `analyzer`, in vocabulary order
pub fn collect_observations<'a>(
    entries: impl IntoIterator<Item = &'a VocabularyEntry>,
    analyzer: &dyn MorphologyAnalyzer,
    language: Language,
) -> Observations {
    let mut observations = Observations::default();
    for example in entries.into_iter().filter_map(|entry| entry.example.as_deref()) {
        for token in analyzer.analyze(example) {
            observations.record(language, &token);
        }
    }
    observations
}
