use std::path::PathBuf;

use language_utils::Language;

use crate::config::JobConfig;
use crate::error::Result;
use crate::inflector::Inflector;
use crate::nlp::{MorphologyAnalyzer, load_analyzer};
use crate::observation::collect_observations;
use crate::reconcile::reconcile;
use crate::table::InflectionTable;
use crate::vocabulary::{VocabularyEntry, load_vocabulary};
use crate::writer::{InflectionDocument, META_KEY, write_document};

/// Generate every entry, then let observed forms override what they contradict
pub fn precompute(
    vocabulary: &[VocabularyEntry],
    language: Language,
    analyzer: &dyn MorphologyAnalyzer,
) -> InflectionDocument {
    let inflector = Inflector::new(language);
    let mut table = InflectionTable::default();
    let mut accepted = Vec::with_capacity(vocabulary.len());

    for word in vocabulary {
        if word.id == META_KEY {
            log::warn!("Skipping vocabulary entry with reserved id {META_KEY:?}");
            continue;
        }
        let entry = inflector.entry_for(&word.word, word.part_of_speech.clone());
        let lemma_key = inflector.normalize(&entry.lemma);
        if table.insert(&word.id, &lemma_key, entry) {
            accepted.push(word);
        } else {
            log::warn!("Duplicate vocabulary id {:?}, keeping the first entry", word.id);
        }
    }

    // Skipped entries contribute no examples either
    let observations = collect_observations(accepted, analyzer, language);
    log::info!("Observed {} lemmas in example sentences", observations.len());
    let irregular = reconcile(&observations, &mut table, &inflector);

    InflectionDocument::new(language, analyzer.is_available(), table, irregular)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub language: Language,
    pub vocabulary_entries: usize,
    pub inflection_entries: usize,
    pub irregular_verbs: usize,
    pub irregular_nouns: usize,
    pub nlp_available: bool,
    pub output: PathBuf,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wrote {} inflections for {} {} words to {} \
             ({} irregular verbs, {} irregular nouns, analysis {})",
            self.inflection_entries,
            self.vocabulary_entries,
            self.language,
            self.output.display(),
            self.irregular_verbs,
            self.irregular_nouns,
            if self.nlp_available { "used" } else { "unavailable" },
        )
    }
}

/// Load, inflect and write one vocabulary file.
///
/// A missing vocabulary or an unwritable output aborts the job; missing
/// annotations only disable the observation pass.
pub fn run_job(job: &JobConfig) -> Result<RunSummary> {
    let vocabulary = load_vocabulary(&job.vocabulary)?;
    log::info!(
        "Loaded {} {} vocabulary entries from {:?}",
        vocabulary.len(),
        job.language,
        job.vocabulary
    );

    let analyzer = load_analyzer(job.annotations.as_deref());
    let document = precompute(&vocabulary, job.language, analyzer.as_ref());
    write_document(&document, &job.output)?;

    let inflections = &document.inflections;
    Ok(RunSummary {
        language: job.language,
        vocabulary_entries: vocabulary.len(),
        inflection_entries: inflections.table.len(),
        irregular_verbs: inflections.irregular.verbs.len(),
        irregular_nouns: inflections.irregular.nouns.len(),
        nlp_available: document.meta.nlp_available,
        output: job.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{AnnotatedCorpus, Unavailable};
    use crate::vocabulary::WordClass;
    use language_utils::{DocToken, NlpAnalyzedSentence, PartOfSpeech};

    fn word(id: &str, word: &str, part_of_speech: Option<WordClass>) -> VocabularyEntry {
        VocabularyEntry {
            id: id.to_string(),
            word: word.to_string(),
            part_of_speech,
            example: None,
        }
    }

    #[test]
    fn test_precompute_without_analysis() {
        let vocabulary = [
            word("v1", "gehen", Some(WordClass::Verb)),
            word("n1", "die Lampe", Some(WordClass::Noun)),
            word("v1", "laufen", Some(WordClass::Verb)),
            word(META_KEY, "geheim", None),
        ];
        let document = precompute(&vocabulary, Language::German, &Unavailable);
        assert!(!document.meta.nlp_available);

        let table = &document.inflections.table;
        assert_eq!(table.len(), 2);
        let gehen = table.get("v1").unwrap();
        assert_eq!(gehen.present.as_ref().unwrap().get("er"), Some("geht"));
        assert_eq!(gehen.past_participle.as_deref(), Some("gegangen"));
        assert_eq!(table.get_by_lemma("lampe").unwrap().plural.as_deref(), Some("Lampen"));
        assert!(table.get_by_lemma("laufen").is_none());
        assert!(document.inflections.irregular.is_empty());
    }

    fn plural_noun(sentence: &str, text: &str, lemma: &str) -> NlpAnalyzedSentence {
        NlpAnalyzedSentence {
            sentence: sentence.to_string(),
            doc: vec![DocToken {
                text: text.to_string(),
                whitespace: String::new(),
                pos: PartOfSpeech::Noun,
                lemma: lemma.to_string(),
                morph: [("Number".to_string(), "Plur".to_string())].into(),
            }],
        }
    }

    #[test]
    fn test_skipped_entries_are_not_analysed() {
        let corpus = AnnotatedCorpus::from_sentences([
            plural_noun("Mäuse", "Mäuse", "Maus"),
            plural_noun("Häuser", "Häuser", "Haus"),
            plural_noun("Bäume", "Bäume", "Baum"),
        ]);
        let mut vocabulary = [
            word("n1", "die Maus", Some(WordClass::Noun)),
            word("n1", "das Haus", Some(WordClass::Noun)),
            word(META_KEY, "der Baum", Some(WordClass::Noun)),
        ];
        vocabulary[0].example = Some("Mäuse".to_string());
        vocabulary[1].example = Some("Häuser".to_string());
        vocabulary[2].example = Some("Bäume".to_string());

        let document = precompute(&vocabulary, Language::German, &corpus);
        let table = &document.inflections.table;
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("n1").unwrap().plural.as_deref(), Some("Mäuse"));
        assert!(table.get_by_lemma("haus").is_none());
        assert!(table.get_by_lemma("baum").is_none());
        let nouns: Vec<_> = document.inflections.irregular.nouns.keys().collect();
        assert_eq!(nouns, ["maus"]);
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            language: Language::English,
            vocabulary_entries: 3,
            inflection_entries: 4,
            irregular_verbs: 1,
            irregular_nouns: 0,
            nlp_available: true,
            output: PathBuf::from("out/en.json"),
        };
        assert_eq!(
            summary.to_string(),
            "Wrote 4 inflections for 3 English words to out/en.json \
             (1 irregular verbs, 0 irregular nouns, analysis used)"
        );
    }
}
