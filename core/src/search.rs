use crate::document::{DocId, Document};
use crate::index::{dot, TfIdfIndex};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result cap used when the caller does not pick one.
pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: DocId,
    pub title: String,
    pub content: String,
    /// Cosine similarity in (0, 1].
    pub score: f32,
}

/// Score every document row against `query` and return `(row, score)` pairs,
/// best first, keeping only positive scores and at most `top_k` of them.
///
/// Equal scores keep collection order.
pub fn rank(index: &TfIdfIndex, query: &str, top_k: usize) -> Vec<(usize, f32)> {
    if top_k == 0 {
        return Vec::new();
    }
    let query_vec = index.vectorize(query);
    if query_vec.iter().all(|w| *w == 0.0) {
        tracing::debug!(query, "query has no indexed terms");
        return Vec::new();
    }

    let mut scored: Vec<(usize, f32)> = index
        .matrix()
        .rows()
        .enumerate()
        .map(|(doc, row)| (doc, dot(row, &query_vec).min(1.0)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    let total_hits = scored.len();
    // sort_by is stable
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(top_k);
    tracing::debug!(query, total_hits, returned = scored.len(), "ranked documents");
    scored
}

/// Rank `documents` (the collection `index` was built from, in the same order)
/// and materialize the hits.
pub fn search(documents: &[Document], index: &TfIdfIndex, query: &str, top_k: usize) -> Vec<SearchHit> {
    rank(index, query, top_k)
        .into_iter()
        .filter_map(|(row, score)| {
            documents.get(row).map(|doc| SearchHit {
                id: doc.id,
                title: doc.title.clone(),
                content: doc.content.clone(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;

    fn index(bodies: &[&str]) -> TfIdfIndex { TfIdfIndex::build(bodies, &IndexConfig::default()) }

    #[test]
    fn ties_keep_collection_order() {
        let idx = index(&["rust", "rust", "python"]);
        let ranked = rank(&idx, "rust", 10);
        assert_eq!(ranked.iter().map(|(d, _)| *d).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(ranked[0].1, ranked[1].1);
    }

    #[test]
    fn zero_top_k_returns_nothing() {
        let idx = index(&["rust"]);
        assert!(rank(&idx, "rust", 0).is_empty());
    }

    #[test]
    fn whitespace_query_returns_nothing() {
        let idx = index(&["rust"]);
        assert!(rank(&idx, "   \t", 3).is_empty());
    }

    #[test]
    fn higher_overlap_ranks_first() {
        let idx = index(&["rust language", "rust systems programming language", "cooking recipes"]);
        let ranked = rank(&idx, "systems programming", 3);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, 1);
    }

    #[test]
    fn english_stop_words_never_match() {
        let idx = index(&["system design", "network design"]);
        assert!(rank(&idx, "system", 3).is_empty());
        assert_eq!(idx.idf_of("system"), None);
    }
}
