use std::path::Path;

use serde::Deserialize;

use crate::error::{PrecomputeError, Result};

/// Coarse word class of a vocabulary entry or an observed token.
///
/// Anything the vocabulary spells differently is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WordClass {
    Verb,
    Noun,
    Adjective,
    Other(String),
}

impl WordClass {
    pub fn as_str(&self) -> &str {
        match self {
            WordClass::Verb => "verb",
            WordClass::Noun => "noun",
            WordClass::Adjective => "adjective",
            WordClass::Other(tag) => tag,
        }
    }
}

impl From<&str> for WordClass {
    fn from(tag: &str) -> Self {
        match tag {
            "verb" => WordClass::Verb,
            "noun" => WordClass::Noun,
            "adjective" => WordClass::Adjective,
            other => WordClass::Other(other.to_string()),
        }
    }
}

impl serde::Serialize for WordClass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub id: String,
    /// Surface word or phrase, possibly with an article ("die Lampe")
    pub word: String,
    pub part_of_speech: Option<WordClass>,
    pub example: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVocabularyEntry {
    id: Option<serde_json::Value>,
    word: Option<String>,
    part_of_speech: Option<String>,
    example: Option<String>,
}

impl RawVocabularyEntry {
    fn into_entry(self) -> Option<VocabularyEntry> {
        let id = match self.id? {
            serde_json::Value::String(id) => id,
            serde_json::Value::Number(id) => id.to_string(),
            _ => return None,
        };
        let word = self.word?;
        if id.is_empty() || word.is_empty() {
            return None;
        }
        Some(VocabularyEntry {
            id,
            word,
            part_of_speech: self.part_of_speech.as_deref().map(WordClass::from),
            example: self.example.filter(|example| !example.trim().is_empty()),
        })
    }
}

/// Parse the entries of a vocabulary document (`{"words": [...]}`).
///
/// Entries without an id or word, or with fields of the wrong type, are skipped.
pub fn parse_vocabulary(document: &serde_json::Value) -> Vec<VocabularyEntry> {
    let Some(words) = document.get("words").and_then(|words| words.as_array()) else {
        return Vec::new();
    };

    words
        .iter()
        .enumerate()
        .filter_map(|(index, word)| {
            let entry = serde_json::from_value::<RawVocabularyEntry>(word.clone())
                .ok()
                .and_then(RawVocabularyEntry::into_entry);
            if entry.is_none() {
                log::debug!("Skipping malformed vocabulary entry {index}: {word}");
            }
            entry
        })
        .collect()
}

pub fn load_vocabulary(path: &Path) -> Result<Vec<VocabularyEntry>> {
    if !path.exists() {
        return Err(PrecomputeError::MissingVocabulary(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| PrecomputeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| PrecomputeError::ParseVocabulary {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_vocabulary(&document))
}
