use docsearch_core::{Document, IndexConfig, IndexStats, SearchHit, TfIdfIndex};
use std::fmt::Write;

pub fn results(query: &str, hits: &[SearchHit]) -> String {
    let mut out = format!("Results for: {query}\n\n");
    if hits.is_empty() {
        out.push_str("No matching documents found.\n");
        return out;
    }
    for hit in hits {
        let _ = writeln!(out, "{}\n{}\nRelevance score: {:.4}\n", hit.title, hit.content, hit.score);
    }
    out
}

pub fn collection(documents: &[Document]) -> String {
    let mut out = format!("Collection ({} documents):\n", documents.len());
    for doc in documents {
        let _ = writeln!(out, "  [{}] {}", doc.id, doc.title);
    }
    out
}

pub fn vocabulary(index: &TfIdfIndex) -> String {
    let mut out = String::new();
    for (tid, term) in index.vocabulary().iter() {
        let _ = writeln!(out, "{term}\t{:.4}", index.idf()[tid as usize]);
    }
    out
}

pub fn stats(stats: &IndexStats, config: &IndexConfig) -> String {
    format!(
        "documents:     {}\nterms:         {}\nempty docs:    {}\nstop words:    {:?}\nmin token len: {}\n",
        stats.num_docs, stats.num_terms, stats.empty_docs, config.stop_words, config.min_token_len
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_core::{SearchEngine, StopWords};

    #[test]
    fn renders_cards_with_four_decimal_scores() {
        let hits = vec![SearchHit { id: 1, title: "Rust".into(), content: "systems".into(), score: 0.123456 }];
        let out = results("rust", &hits);
        assert!(out.starts_with("Results for: rust"));
        assert!(out.contains("Relevance score: 0.1235"));
    }

    #[test]
    fn renders_notice_when_nothing_matches() {
        assert!(results("zzz", &[]).contains("No matching documents found."));
    }

    #[test]
    fn lists_titles_and_terms() {
        let docs = vec![Document::new(7, "Cosine", "cosine similarity")];
        assert!(collection(&docs).contains("[7] Cosine"));
        let index = TfIdfIndex::build(&["cosine similarity"], &IndexConfig::default());
        let vocab = vocabulary(&index);
        assert_eq!(vocab.lines().count(), 2);
        assert!(vocab.starts_with("cosine\t1.0000"));
    }

    #[test]
    fn stats_report_counts_and_settings() {
        let config = IndexConfig { stop_words: StopWords::Indonesian, min_token_len: 3 };
        let docs = vec![Document::new(1, "a", "mesin pencari"), Document::new(2, "b", "dan yang")];
        let engine = SearchEngine::new(docs, config);
        let out = stats(&engine.stats(), engine.config());
        assert!(out.contains("documents:     2"));
        assert!(out.contains("terms:         2"));
        assert!(out.contains("empty docs:    1"));
        assert!(out.contains("stop words:    Indonesian"));
        assert!(out.contains("min token len: 3"));
    }
}
