//! Precomputed verb conjugations and noun plurals for the vocabulary of each
//! course language.
//!
//! Every entry is first generated from the irregular tables and the regular
//! rules. When analysed example sentences are available, observed forms that
//! contradict the generated ones replace them and are reported as irregular.

pub mod config;
pub mod error;
pub mod inflector;
pub mod irregular;
pub mod nlp;
pub mod observation;
pub mod paradigm;
pub mod pipeline;
pub mod reconcile;
pub mod regular;
pub mod table;
pub mod vocabulary;
pub mod writer;

pub use config::{JobConfig, PrecomputeConfig};
pub use error::{PrecomputeError, Result};
pub use pipeline::{RunSummary, precompute, run_job};
