use crate::config::IndexConfig;
use crate::tokenizer::Tokenizer;
use std::collections::{BTreeSet, HashMap};

pub type TermId = u32;

/// Term to column mapping. Columns follow lexicographic term order, so two
/// builds over the same documents agree regardless of hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let ids = terms.iter().enumerate().map(|(i, t)| (t.clone(), i as TermId)).collect();
        Self { terms, ids }
    }

    pub fn get(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> { self.terms.get(id as usize).map(String::as_str) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Terms in column order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> + '_ {
        self.terms.iter().enumerate().map(|(i, t)| (i as TermId, t.as_str()))
    }
}

/// Dense document-by-term weights, one unit-length (or all-zero) row per document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeightMatrix {
    rows: Vec<Vec<f32>>,
    num_cols: usize,
}

impl TermWeightMatrix {
    pub fn num_rows(&self) -> usize { self.rows.len() }

    pub fn num_cols(&self) -> usize { self.num_cols }

    pub fn row(&self, doc: usize) -> Option<&[f32]> { self.rows.get(doc).map(Vec::as_slice) }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ { self.rows.iter().map(Vec::as_slice) }
}

/// `ln((1 + n) / (1 + df)) + 1`. The `+1` in the ratio acts as if one extra
/// document contained every term, so the value stays finite and positive.
pub fn smoothed_idf(num_docs: usize, doc_freq: u32) -> f32 {
    (((1 + num_docs) as f64 / (1 + doc_freq) as f64).ln() + 1.0) as f32
}

pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for w in v.iter_mut() { *w /= norm; }
    }
}

/// Vocabulary, IDF weights and document matrix for a fixed collection.
///
/// Built once and never mutated; share it by reference (or `Arc`) between callers.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    tokenizer: Tokenizer,
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    matrix: TermWeightMatrix,
}

impl TfIdfIndex {
    /// Build the index over document bodies. Row `i` of the matrix describes `bodies[i]`.
    pub fn build<S: AsRef<str>>(bodies: &[S], config: &IndexConfig) -> Self {
        let tokenizer = Tokenizer::from_config(config);
        let tokenized: Vec<Vec<String>> = bodies.iter().map(|b| tokenizer.tokenize(b.as_ref())).collect();

        let vocabulary = Vocabulary::from_terms(tokenized.iter().flatten().cloned().collect());

        let tf_counts: Vec<HashMap<TermId, u32>> = tokenized
            .iter()
            .map(|tokens| count_terms(&vocabulary, tokens.iter().map(String::as_str)))
            .collect();

        let mut df = vec![0u32; vocabulary.len()];
        for counts in &tf_counts {
            for tid in counts.keys() {
                df[*tid as usize] += 1;
            }
        }
        let idf: Vec<f32> = df.iter().map(|&d| smoothed_idf(bodies.len(), d)).collect();

        let rows: Vec<Vec<f32>> = tf_counts.iter().map(|counts| weigh(counts, &idf)).collect();
        let empty_rows = tf_counts.iter().filter(|c| c.is_empty()).count();
        tracing::info!(num_docs = bodies.len(), num_terms = vocabulary.len(), empty_rows, "built tf-idf index");

        let matrix = TermWeightMatrix { rows, num_cols: vocabulary.len() };
        Self { tokenizer, vocabulary, idf, matrix }
    }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn idf(&self) -> &[f32] { &self.idf }

    /// IDF of a term, or `None` if the term never occurs in the collection.
    pub fn idf_of(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|tid| self.idf[tid as usize])
    }

    pub fn matrix(&self) -> &TermWeightMatrix { &self.matrix }

    pub fn num_docs(&self) -> usize { self.matrix.num_rows() }

    /// Project free text into the document space: same tokenizer, same IDF,
    /// unit length. Out-of-vocabulary terms are dropped, so text with no known
    /// terms yields the zero vector.
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = self.tokenizer.tokenize(text);
        let counts = count_terms(&self.vocabulary, tokens.iter().map(String::as_str));
        weigh(&counts, &self.idf)
    }
}

fn count_terms<'a>(vocabulary: &Vocabulary, tokens: impl Iterator<Item = &'a str>) -> HashMap<TermId, u32> {
    let mut counts: HashMap<TermId, u32> = HashMap::new();
    for token in tokens {
        if let Some(tid) = vocabulary.get(token) {
            *counts.entry(tid).or_insert(0) += 1;
        }
    }
    counts
}

fn weigh(counts: &HashMap<TermId, u32>, idf: &[f32]) -> Vec<f32> {
    let mut row = vec![0.0f32; idf.len()];
    for (&tid, &tf) in counts {
        row[tid as usize] = tf as f32 * idf[tid as usize];
    }
    l2_normalize(&mut row);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(bodies: &[&str]) -> TfIdfIndex { TfIdfIndex::build(bodies, &IndexConfig::default()) }

    #[test]
    fn vocabulary_is_sorted_and_complete() {
        let index = build(&["zebra apple", "mango apple"]);
        let terms: Vec<&str> = index.vocabulary().iter().map(|(_, t)| t).collect();
        assert_eq!(terms, vec!["apple", "mango", "zebra"]);
        assert_eq!(index.vocabulary().get("mango"), Some(1));
        assert_eq!(index.vocabulary().term(2), Some("zebra"));
    }

    #[test]
    fn matrix_shape_matches_collection() {
        let index = build(&["zebra apple", "mango apple", "the of"]);
        assert_eq!(index.matrix().num_rows(), 3);
        assert_eq!(index.matrix().num_cols(), 3);
        assert!(index.matrix().rows().flatten().all(|w| *w >= 0.0));
    }

    #[test]
    fn rows_are_unit_length_or_zero() {
        let index = build(&["rust rust systems", "the and of"]);
        let norm = |r: &[f32]| dot(r, r).sqrt();
        assert!((norm(index.matrix().row(0).unwrap()) - 1.0).abs() < 1e-6);
        assert_eq!(norm(index.matrix().row(1).unwrap()), 0.0);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let index = build(&["common rare", "common", "common"]);
        assert!(index.idf_of("rare").unwrap() > index.idf_of("common").unwrap());
        // Term in every document: ln(4/4) + 1
        assert_eq!(index.idf_of("common"), Some(1.0));
        assert_eq!(index.idf_of("absent"), None);
    }

    #[test]
    fn empty_collection_builds() {
        let index = build(&[]);
        assert!(index.vocabulary().is_empty());
        assert_eq!(index.matrix().num_rows(), 0);
        assert!(index.vectorize("anything").is_empty());
    }

    #[test]
    fn unknown_query_terms_vectorize_to_zero() {
        let index = build(&["rust systems"]);
        assert!(index.vectorize("python haskell").iter().all(|w| *w == 0.0));
    }
}
