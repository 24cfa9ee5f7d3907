use std::path::{Path, PathBuf};

use language_utils::Language;
use serde::{Deserialize, Deserializer};

use crate::error::{PrecomputeError, Result};

/// One vocabulary file to inflect
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    #[serde(deserialize_with = "deserialize_language")]
    pub language: Language,
    pub vocabulary: PathBuf,
    pub output: PathBuf,
    /// JSONL of analysed example sentences; heuristics only without it
    #[serde(default)]
    pub annotations: Option<PathBuf>,
}

impl JobConfig {
    /// The app's own layout: `src/data` in, `public/data` out
    pub fn default_for(language: Language) -> Self {
        let code = language.iso_639_1();
        JobConfig {
            language,
            vocabulary: PathBuf::from(format!("src/data/vocabulary-{code}.json")),
            output: PathBuf::from(format!("public/data/vocabulary-{code}-inflections.json")),
            annotations: Some(PathBuf::from(format!(
                "src/data/vocabulary-{code}-annotations.jsonl"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrecomputeConfig {
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl Default for PrecomputeConfig {
    fn default() -> Self {
        PrecomputeConfig {
            jobs: Language::ALL.into_iter().map(JobConfig::default_for).collect(),
        }
    }
}

impl PrecomputeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| PrecomputeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| PrecomputeError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn deserialize_language<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Language, D::Error> {
    let code = String::deserialize(deserializer)?;
    Language::from_code(&code)
        .ok_or_else(|| serde::de::Error::custom(format!("unsupported language {code:?}")))
}
