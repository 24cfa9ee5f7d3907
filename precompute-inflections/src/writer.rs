use std::path::Path;

use language_utils::Language;
use serde::ser::SerializeMap;

use crate::error::{PrecomputeError, Result};
use crate::table::{InflectionTable, IrregularityReport};

/// Reserved key holding the irregularity report inside `inflections`
pub const META_KEY: &str = "__meta";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DocumentMeta {
    /// Whether morphological analysis ran; the front end reads this key as `spaCy`
    #[serde(rename = "spaCy")]
    pub nlp_available: bool,
    pub language: &'static str,
}

/// Every entry under its id and lemma alias, then the report if there is one
#[derive(Debug, Clone)]
pub struct Inflections {
    pub table: InflectionTable,
    pub irregular: IrregularityReport,
}

#[derive(serde::Serialize)]
struct ReportMeta<'a> {
    irregular: &'a IrregularityReport,
}

impl serde::Serialize for Inflections {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, entry) in self.table.keyed_entries() {
            map.serialize_entry(key, entry)?;
        }
        if !self.irregular.is_empty() {
            map.serialize_entry(
                META_KEY,
                &ReportMeta {
                    irregular: &self.irregular,
                },
            )?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct InflectionDocument {
    pub meta: DocumentMeta,
    pub inflections: Inflections,
}

impl InflectionDocument {
    pub fn new(
        language: Language,
        nlp_available: bool,
        table: InflectionTable,
        irregular: IrregularityReport,
    ) -> Self {
        InflectionDocument {
            meta: DocumentMeta {
                nlp_available,
                language: language.iso_639_1(),
            },
            inflections: Inflections { table, irregular },
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Write `document` to `path`, creating parent directories as needed
pub fn write_document(document: &InflectionDocument, path: &Path) -> Result<()> {
    let json = document.to_json_string()?;
    let write_error = |source| PrecomputeError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, json).map_err(write_error)
}
