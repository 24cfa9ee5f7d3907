use indexmap::IndexMap;
use indexmap::map::Entry;
use language_utils::features::FeatureMap;

use crate::paradigm::Paradigm;
use crate::vocabulary::WordClass;

/// One observed surface form with the feature set it is reconciled by
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Observation {
    pub form: String,
    pub features: FeatureMap,
}

/// The inflection table of one word
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InflectionEntry {
    pub base: String,
    pub pos: Option<WordClass>,
    pub lemma: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present: Option<Paradigm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preterite: Option<Paradigm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_participle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observed: Vec<Observation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct VerbIrregularities {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub present: IndexMap<&'static str, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub preterite: IndexMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_participle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NounIrregularities {
    pub plural: String,
}

/// Slots where an observed form disagreed with the generated one, keyed by lemma
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct IrregularityReport {
    pub verbs: IndexMap<String, VerbIrregularities>,
    pub nouns: IndexMap<String, NounIrregularities>,
}

impl IrregularityReport {
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty() && self.nouns.is_empty()
    }

    pub fn record_present(&mut self, lemma: &str, person: &'static str, form: &str) {
        self.verb(lemma).present.insert(person, form.to_string());
    }

    pub fn record_preterite(&mut self, lemma: &str, person: &'static str, form: &str) {
        self.verb(lemma).preterite.insert(person, form.to_string());
    }

    pub fn record_past_participle(&mut self, lemma: &str, form: &str) {
        self.verb(lemma).past_participle = Some(form.to_string());
    }

    pub fn record_plural(&mut self, lemma: &str, form: &str) {
        self.nouns.insert(
            lemma.to_string(),
            NounIrregularities {
                plural: form.to_string(),
            },
        );
    }

    fn verb(&mut self, lemma: &str) -> &mut VerbIrregularities {
        self.verbs.entry(lemma.to_string()).or_default()
    }
}

#[derive(Debug, Clone)]
struct StoredEntry {
    /// `None` for entries synthesised from observations
    id: Option<String>,
    lemma_key: String,
    entry: InflectionEntry,
}

/// All inflection entries of a run.
///
/// Entries are stored once and reachable through two indexes: the vocabulary
/// id, and the normalized lemma. The first entry to claim a lemma keeps it.
#[derive(Debug, Clone, Default)]
pub struct InflectionTable {
    entries: Vec<StoredEntry>,
    by_id: IndexMap<String, usize>,
    by_lemma: IndexMap<String, usize>,
}

impl InflectionTable {
    /// Adds a vocabulary entry. Returns false, keeping the earlier one, for a duplicate id.
    pub fn insert(&mut self, id: &str, lemma_key: &str, entry: InflectionEntry) -> bool {
        let index = self.entries.len();
        match self.by_id.entry(id.to_string()) {
            Entry::Occupied(_) => return false,
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
        self.push(Some(id.to_string()), lemma_key, entry);
        true
    }

    /// The entry indexed under `lemma_key`, synthesising it with `create` if there is none
    pub fn lemma_entry_or_insert_with(
        &mut self,
        lemma_key: &str,
        create: impl FnOnce() -> InflectionEntry,
    ) -> &mut InflectionEntry {
        let index = match self.by_lemma.get(lemma_key).copied() {
            Some(index) => index,
            None => {
                self.push(None, lemma_key, create());
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].entry
    }

    pub fn get(&self, id: &str) -> Option<&InflectionEntry> {
        self.by_id.get(id).map(|index| &self.entries[*index].entry)
    }

    pub fn get_by_lemma(&self, lemma_key: &str) -> Option<&InflectionEntry> {
        self.by_lemma
            .get(lemma_key)
            .map(|index| &self.entries[*index].entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Output keys in document order: each id followed by its lemma alias,
    /// then entries that exist only under their lemma.
    ///
    /// A lemma alias that collides with a vocabulary id, or is empty, is left out.
    pub fn keyed_entries(&self) -> impl Iterator<Item = (&str, &InflectionEntry)> {
        self.entries
            .iter()
            .enumerate()
            .flat_map(move |(index, stored)| {
                let alias = (!stored.lemma_key.is_empty()
                    && self.by_lemma.get(&stored.lemma_key) == Some(&index)
                    && !self.by_id.contains_key(&stored.lemma_key))
                .then_some(stored.lemma_key.as_str());
                if alias.is_none() && stored.id.is_none() {
                    log::warn!(
                        "Observed lemma {:?} collides with a vocabulary id and is not written",
                        stored.lemma_key
                    );
                }
                stored
                    .id
                    .as_deref()
                    .into_iter()
                    .chain(alias)
                    .map(move |key| (key, &stored.entry))
            })
    }

    fn push(&mut self, id: Option<String>, lemma_key: &str, entry: InflectionEntry) {
        let index = self.entries.len();
        if !lemma_key.is_empty() {
            self.by_lemma.entry(lemma_key.to_string()).or_insert(index);
        }
        self.entries.push(StoredEntry {
            id,
            lemma_key: lemma_key.to_string(),
            entry,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(base: &str) -> InflectionEntry {
        InflectionEntry {
            base: base.to_string(),
            pos: Some(WordClass::Noun),
            lemma: base.to_string(),
            present: None,
            preterite: None,
            past_participle: None,
            plural: Some(format!("{base}s")),
            observed: Vec::new(),
        }
    }

    fn keys(table: &InflectionTable) -> Vec<&str> {
        table.keyed_entries().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_id_then_lemma_alias() {
        let mut table = InflectionTable::default();
        table.insert("n1", "cat", entry("cat"));
        table.insert("n2", "dog", entry("dog"));
        assert_eq!(keys(&table), ["n1", "cat", "n2", "dog"]);
        assert_eq!(table.get_by_lemma("dog"), table.get("n2"));
    }

    #[test]
    fn test_first_entry_keeps_lemma() {
        let mut table = InflectionTable::default();
        table.insert("n1", "see", entry("der See"));
        table.insert("n2", "see", entry("die See"));
        assert_eq!(keys(&table), ["n1", "see", "n2"]);
        assert_eq!(table.get_by_lemma("see").unwrap().base, "der See");
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut table = InflectionTable::default();
        assert!(table.insert("n1", "cat", entry("cat")));
        assert!(!table.insert("n1", "dog", entry("dog")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_by_lemma("dog"), None);
    }

    #[test]
    fn test_alias_colliding_with_id_is_dropped() {
        let mut table = InflectionTable::default();
        table.insert("cat", "katze", entry("Katze"));
        table.insert("n2", "cat", entry("cat"));
        assert_eq!(keys(&table), ["cat", "katze", "n2"]);
    }

    #[test]
    fn test_synthesised_entries_come_last() {
        let mut table = InflectionTable::default();
        table.insert("n1", "cat", entry("cat"));
        table.lemma_entry_or_insert_with("mouse", || entry("mouse"));
        let existing = table.lemma_entry_or_insert_with("cat", || entry("unused"));
        existing.plural = Some("kittens".to_string());
        assert_eq!(keys(&table), ["n1", "cat", "mouse"]);
        assert_eq!(table.get("n1").unwrap().plural.as_deref(), Some("kittens"));
    }

    #[test]
    fn test_report_groups_by_lemma() {
        let mut report = IrregularityReport::default();
        assert!(report.is_empty());
        report.record_present("swim", "he", "swims");
        report.record_preterite("swim", "he", "swam");
        report.record_past_participle("swim", "swum");
        report.record_plural("child", "children");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "verbs": {"swim": {
                    "present": {"he": "swims"},
                    "preterite": {"he": "swam"},
                    "past_participle": "swum"
                }},
                "nouns": {"child": {"plural": "children"}}
            })
        );
    }
}
