//! Access to the external morphological analysis.
//!
//! Sentences are analysed by a spaCy-style pipeline outside this tool; what
//! reaches us is its output, one [`NlpAnalyzedSentence`] per JSONL line. When
//! that output is missing or unreadable the run falls back to [`Unavailable`],
//! and every later stage treats it like any other analyzer that finds nothing.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use language_utils::{DocToken, NlpAnalyzedSentence};

pub trait MorphologyAnalyzer {
    /// Whether real analysis backs this analyzer; recorded in the output metadata.
    fn is_available(&self) -> bool;

    /// Tokens of `sentence` with lemma, POS and morphology. Empty if unknown.
    fn analyze(&self, sentence: &str) -> Vec<DocToken>;
}

/// No pipeline: every sentence yields no tokens
pub struct Unavailable;

impl MorphologyAnalyzer for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn analyze(&self, _sentence: &str) -> Vec<DocToken> {
        Vec::new()
    }
}

/// Pre-analysed sentences, looked up by their trimmed text
#[derive(Debug, Default)]
pub struct AnnotatedCorpus {
    sentences: HashMap<String, Vec<DocToken>>,
}

impl AnnotatedCorpus {
    pub fn from_sentences(sentences: impl IntoIterator<Item = NlpAnalyzedSentence>) -> Self {
        let mut corpus = AnnotatedCorpus::default();
        for sentence in sentences {
            corpus
                .sentences
                .entry(sentence.sentence.trim().to_string())
                .or_insert(sentence.doc);
        }
        corpus
    }

    pub fn from_jsonl(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).context(format!("Failed to open NLP file: {path:?}"))?;
        let reader = BufReader::new(file);

        let sentences: Vec<NlpAnalyzedSentence> = reader
            .lines()
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(line) if line.trim().is_empty()))
            .map(|(idx, line)| {
                let line = line.context(format!("Failed to read line {idx}"))?;
                serde_json::from_str::<NlpAnalyzedSentence>(&line)
                    .context(format!("Failed to deserialize line {idx}: {line}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(AnnotatedCorpus::from_sentences(sentences))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl MorphologyAnalyzer for AnnotatedCorpus {
    fn is_available(&self) -> bool {
        true
    }

    fn analyze(&self, sentence: &str) -> Vec<DocToken> {
        self.sentences
            .get(sentence.trim())
            .cloned()
            .unwrap_or_default()
    }
}

/// The one place the pipeline is set up. Any failure degrades to [`Unavailable`].
pub fn load_analyzer(annotations: Option<&Path>) -> Box<dyn MorphologyAnalyzer> {
    let Some(path) = annotations else {
        log::info!("No annotations configured, using heuristics only");
        return Box::new(Unavailable);
    };
    match AnnotatedCorpus::from_jsonl(path) {
        Ok(corpus) => {
            log::info!("Loaded {} analysed sentences from {path:?}", corpus.len());
            Box::new(corpus)
        }
        Err(e) => {
            log::warn!("Morphological analysis unavailable, using heuristics only: {e:#}");
            Box::new(Unavailable)
        }
    }
}
