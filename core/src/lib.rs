//! Lexical document search: TF-IDF weighting with cosine ranking over a small,
//! fixed, in-memory collection.

pub mod config;
pub mod document;
pub mod engine;
pub mod index;
pub mod loader;
pub mod search;
pub mod tokenizer;

pub use config::IndexConfig;
pub use document::{builtin_collection, DocId, Document};
pub use engine::{IndexStats, SearchEngine};
pub use index::{TermId, TermWeightMatrix, TfIdfIndex, Vocabulary};
pub use loader::{load_collection, load_or_empty, LoadError};
pub use search::{rank, search, SearchHit, DEFAULT_TOP_K};
pub use tokenizer::{tokenize, StopWords, Tokenizer};
