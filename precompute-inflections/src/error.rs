use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrecomputeError {
    #[error("vocabulary file not found at {}", .0.display())]
    MissingVocabulary(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary {}: {source}", path.display())]
    ParseVocabulary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize inflections: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = PrecomputeError> = std::result::Result<T, E>;
