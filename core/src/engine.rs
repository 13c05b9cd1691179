use crate::config::IndexConfig;
use crate::document::{builtin_collection, DocId, Document};
use crate::index::TfIdfIndex;
use crate::search::{search, SearchHit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub num_terms: usize,
    /// Documents left with no indexed terms; they can never match.
    pub empty_docs: usize,
}

/// A document collection together with the index built over it.
///
/// Construct once at startup and pass by reference; nothing here mutates after `new`.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    documents: Vec<Document>,
    index: TfIdfIndex,
    config: IndexConfig,
}

impl SearchEngine {
    pub fn new(documents: Vec<Document>, config: IndexConfig) -> Self {
        let bodies: Vec<&str> = documents.iter().map(|d| d.content.as_str()).collect();
        let index = TfIdfIndex::build(&bodies, &config);
        Self { documents, index, config }
    }

    /// Engine over the built-in demo collection.
    pub fn builtin(config: IndexConfig) -> Self { Self::new(builtin_collection(), config) }

    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        search(&self.documents, &self.index, query, top_k)
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.documents.iter().find(|d| d.id == id) }

    pub fn index(&self) -> &TfIdfIndex { &self.index }

    pub fn config(&self) -> &IndexConfig { &self.config }

    pub fn stats(&self) -> IndexStats {
        let empty_docs = self.index.matrix().rows().filter(|r| r.iter().all(|w| *w == 0.0)).count();
        IndexStats { num_docs: self.documents.len(), num_terms: self.index.vocabulary().len(), empty_docs }
    }
}
