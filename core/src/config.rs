use crate::tokenizer::StopWords;
use serde::{Deserialize, Serialize};

/// Shortest token kept by default. Single letters rarely carry meaning.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Knobs that shape the term space. Changing any of them changes the vocabulary,
/// so an index must be rebuilt rather than reconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub stop_words: StopWords,
    pub min_token_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { stop_words: StopWords::default(), min_token_len: DEFAULT_MIN_TOKEN_LEN }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: IndexConfig = serde_json::from_str(r#"{"stop_words":"indonesian"}"#).unwrap();
        assert_eq!(config.stop_words, StopWords::Indonesian);
        assert_eq!(config.min_token_len, DEFAULT_MIN_TOKEN_LEN);
    }
}
