//! Query tokenizer - splits a raw query into keywords / 查询分词器
//!
//! Pipeline:
//! 1. Insert a boundary between Latin/digit runs and Han runs ("AI指令" -> "AI 指令")
//! 2. Split on whitespace and the delimiter set
//! 3. Drop empty tokens
//! 4. Convert Han-containing tokens to the canonical script

use std::sync::Arc;

use super::script::{contains_han, normalize, Script, ScriptClassifier, UnicodeClassifier};

/// Delimiters besides whitespace / 分隔符（空白之外）
pub const DELIMITERS: &[char] = &[',', '，', ':', '：', ';', '；', '_', '.', '-'];

pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Lowercase and remove every delimiter (no script boundaries) / 去除分隔符并转小写
pub fn strip_delimiters(text: &str) -> String {
    text.chars()
        .filter(|c| !is_delimiter(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum CharClass {
    Han,
    Latin,
    Other,
}

/// Insert a space wherever a Latin/digit run touches a Han run / 在中英文交界处插入空格
pub fn insert_script_boundaries(text: &str, classifier: &dyn ScriptClassifier) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev = CharClass::Other;

    for c in text.chars() {
        let class = if classifier.is_han(c) {
            CharClass::Han
        } else if classifier.is_latin_or_digit(c) {
            CharClass::Latin
        } else {
            CharClass::Other
        };

        if matches!(
            (prev, class),
            (CharClass::Latin, CharClass::Han) | (CharClass::Han, CharClass::Latin)
        ) {
            out.push(' ');
        }
        out.push(c);
        prev = class;
    }

    out
}

/// Keyword tokenizer / 关键词分词器
#[derive(Clone)]
pub struct QueryTokenizer {
    classifier: Arc<dyn ScriptClassifier>,
    canonical: Script,
}

impl QueryTokenizer {
    pub fn new(canonical: Script) -> Self {
        Self::with_classifier(Arc::new(UnicodeClassifier), canonical)
    }

    pub fn with_classifier(classifier: Arc<dyn ScriptClassifier>, canonical: Script) -> Self {
        Self { classifier, canonical }
    }

    /// Tokenize a raw query; the same input always yields the same keywords / 对查询进行分词
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        insert_script_boundaries(raw, self.classifier.as_ref())
            .split(is_delimiter)
            .filter(|token| !token.is_empty())
            .map(|token| self.normalize_keyword(token))
            .collect()
    }

    /// Canonical-script form of arbitrary text / 规范字形
    pub fn normalize_keyword(&self, text: &str) -> String {
        if contains_han(text, self.classifier.as_ref()) {
            normalize(text, self.canonical)
        } else {
            text.to_string()
        }
    }
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new(Script::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats only ASCII as Latin and only '中'/'文' as Han
    struct TinyClassifier;

    impl ScriptClassifier for TinyClassifier {
        fn is_han(&self, c: char) -> bool {
            c == '中' || c == '文'
        }

        fn is_latin_or_digit(&self, c: char) -> bool {
            c.is_ascii_alphanumeric()
        }
    }

    #[test]
    fn test_mixed_script_split() {
        let tokenizer = QueryTokenizer::default();
        assert_eq!(tokenizer.tokenize("AI指令"), vec!["AI", "指令"]);
        assert_eq!(tokenizer.tokenize("指令AI生成"), vec!["指令", "AI", "生成"]);
        assert_eq!(tokenizer.tokenize("GPU記憶體"), vec!["GPU", "記憶體"]);
    }

    #[test]
    fn test_delimiters() {
        let tokenizer = QueryTokenizer::default();
        assert_eq!(
            tokenizer.tokenize("seo, 寫作；翻譯:tool_box.v2-beta"),
            vec!["seo", "寫作", "翻譯", "tool", "box", "v2", "beta"]
        );
        assert_eq!(tokenizer.tokenize("a，b：c;d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_query() {
        let tokenizer = QueryTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t ").is_empty());
        assert!(tokenizer.tokenize(",,;-_.").is_empty());
    }

    #[test]
    fn test_no_empty_tokens_and_deterministic() {
        let tokenizer = QueryTokenizer::default();
        for query in ["  GPU  記憶體 ", "--a--", "中文English混合123測試", "，，x，，"] {
            let first = tokenizer.tokenize(query);
            assert!(first.iter().all(|t| !t.is_empty()));
            assert_eq!(first, tokenizer.tokenize(query));
        }
    }

    #[test]
    fn test_han_keywords_normalized() {
        let tokenizer = QueryTokenizer::new(Script::Traditional);
        assert_eq!(tokenizer.tokenize("GPU 记忆体"), vec!["GPU", "記憶體"]);

        let tokenizer = QueryTokenizer::new(Script::Simplified);
        assert_eq!(tokenizer.tokenize("記憶體"), vec!["记忆体"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let tokenizer = QueryTokenizer::default();
        assert_eq!(tokenizer.tokenize("seo seo"), vec!["seo", "seo"]);
    }

    #[test]
    fn test_injected_classifier() {
        let tokenizer = QueryTokenizer::with_classifier(Arc::new(TinyClassifier), Script::Traditional);
        assert_eq!(tokenizer.tokenize("abc中文"), vec!["abc", "中文"]);
        // 日 is not Han for this classifier, so no boundary is inserted
        assert_eq!(tokenizer.tokenize("abc日"), vec!["abc日"]);
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("GPU 記憶體-計算器"), "gpu記憶體計算器");
        assert_eq!(strip_delimiters("Hello, World."), "helloworld");
        assert_eq!(strip_delimiters(" ,; "), "");
    }
}
