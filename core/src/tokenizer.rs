use crate::config::IndexConfig;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","across","after","afterwards","again","against","all","almost","alone","along","already","also","although","always","am","among","amongst","amoungst","amount","an","and","another","any","anyhow","anyone","anything","anyway","anywhere","are","around","as","at",
            "back","be","became","because","become","becomes","becoming","been","before","beforehand","behind","being","below","beside","besides","between","beyond","bill","both","bottom","but","by",
            "call","can","cannot","cant","co","con","could","couldnt","cry",
            "de","describe","detail","do","done","down","due","during",
            "each","eg","eight","either","eleven","else","elsewhere","empty","enough","etc","even","ever","every","everyone","everything","everywhere","except",
            "few","fifteen","fifty","fill","find","fire","first","five","for","former","formerly","forty","found","four","from","front","full","further",
            "get","give","go",
            "had","has","hasnt","have","he","hence","her","here","hereafter","hereby","herein","hereupon","hers","herself","him","himself","his","how","however","hundred",
            "i","ie","if","in","inc","indeed","interest","into","is","it","its","itself",
            "keep",
            "last","latter","latterly","least","less","ltd",
            "made","many","may","me","meanwhile","might","mill","mine","more","moreover","most","mostly","move","much","must","my","myself",
            "name","namely","neither","never","nevertheless","next","nine","no","nobody","none","noone","nor","not","nothing","now","nowhere",
            "of","off","often","on","once","one","only","onto","or","other","others","otherwise","our","ours","ourselves","out","over","own",
            "part","per","perhaps","please","put",
            "rather","re",
            "same","see","seem","seemed","seeming","seems","serious","several","she","should","show","side","since","sincere","six","sixty","so","some","somehow","someone","something","sometime","sometimes","somewhere","still","such","system",
            "take","ten","than","that","the","their","them","themselves","then","thence","there","thereafter","thereby","therefore","therein","thereupon","these","they","thick","thin","third","this","those","though","three","through","throughout","thru","thus","to","together","too","top","toward","towards","twelve","twenty","two",
            "un","under","until","up","upon","us",
            "very","via",
            "was","we","well","were","what","whatever","when","whence","whenever","where","whereafter","whereas","whereby","wherein","whereupon","wherever","whether","which","while","whither","who","whoever","whole","whom","whose","why","will","with","within","without","would",
            "yet","you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
    static ref INDONESIAN: HashSet<&'static str> = {
        let words: &[&str] = &[
            "ada","adalah","agar","akan","aku","anda","antara","apa","apabila","atas","atau",
            "bagaimana","bagi","bahwa","banyak","beberapa","begitu","belum","berbagai","bila","bisa","boleh","bukan",
            "dalam","dan","dapat","dari","daripada","demikian","dengan","di","dia","diri","dong",
            "guna","hanya","harus","hingga","ia","ialah","ini","itu",
            "jadi","jika","juga","kalau","kami","kamu","karena","ke","kemudian","kepada","ketika","kita",
            "lagi","lain","lalu","lebih","maka","masih","melalui","memang","mereka","merupakan","meski","mungkin",
            "namun","nya","oleh","pada","para","pernah","pula","pun",
            "saat","saja","sama","sambil","sampai","sangat","saya","se","sebagai","sebelum","sebuah","secara","sedang","sehingga","sejak","selain","selama","seluruh","semua","sendiri","seperti","serta","sesudah","setelah","setiap","sudah",
            "tanpa","tapi","telah","tentang","terhadap","tersebut","tetapi","tidak",
            "untuk","walau","yaitu","yakni","yang"
        ];
        words.iter().copied().collect()
    };
}

/// Stop-word list applied after case folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    #[default]
    English,
    Indonesian,
    /// Keep every token.
    None,
}

impl StopWords {
    pub fn contains(self, token: &str) -> bool {
        match self {
            StopWords::English => ENGLISH.contains(token),
            StopWords::Indonesian => INDONESIAN.contains(token),
            StopWords::None => false,
        }
    }
}

impl FromStr for StopWords {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(StopWords::English),
            "indonesian" | "id" => Ok(StopWords::Indonesian),
            "none" => Ok(StopWords::None),
            other => Err(format!("unknown stop-word list `{other}` (expected english, indonesian or none)")),
        }
    }
}

/// Turns free text into index terms.
///
/// Text is NFKC-normalized and lowercased, split into maximal runs of letters
/// and digits, and filtered by minimum length (in chars) and the stop-word list.
/// Documents and queries must go through the same tokenizer for their vectors
/// to share a column space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_token_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::from_config(&IndexConfig::default()) }
}

impl Tokenizer {
    pub fn new(stop_words: StopWords, min_token_len: usize) -> Self {
        Self { stop_words, min_token_len }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(config.stop_words, config.min_token_len)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        RE.find_iter(&normalized)
            .map(|m| m.as_str())
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}

/// Tokenize with the default configuration (English stop words, tokens of two or more chars).
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("TF-IDF weighs words, 42 times!");
        assert_eq!(t, vec!["tf", "idf", "weighs", "words", "42", "times"]);
    }

    #[test]
    fn single_chars_are_dropped() {
        let t = Tokenizer::new(StopWords::None, 2).tokenize("a b cd e");
        assert_eq!(t, vec!["cd"]);
    }

    #[test]
    fn stop_word_language_is_selectable() {
        let text = "Python adalah bahasa yang populer";
        let en = Tokenizer::new(StopWords::English, 2).tokenize(text);
        let id = Tokenizer::new(StopWords::Indonesian, 2).tokenize(text);
        assert!(en.contains(&"adalah".to_string()));
        assert_eq!(id, vec!["python", "bahasa", "populer"]);
    }

    #[test]
    fn stop_words_parse_from_flags() {
        assert_eq!("Indonesian".parse::<StopWords>(), Ok(StopWords::Indonesian));
        assert_eq!("none".parse::<StopWords>(), Ok(StopWords::None));
        assert!("klingon".parse::<StopWords>().is_err());
    }

    #[test]
    fn english_list_drops_system_and_keeps_did() {
        // "did" and "just" are not on the English list; the rest are.
        let t = tokenize("system two find fire show did just");
        assert_eq!(t, vec!["did", "just"]);
    }
}
