//! Han script handling - classification and simplified/traditional conversion / 汉字脚本处理
//!
//! Catalog text is stored in one canonical script; queries are converted into it.
//! Unmapped characters always pass through unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Target Han script / 目标字形
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Simplified,
    #[default]
    Traditional,
}

/// Character class capability used by the tokenizer / 字符分类能力
pub trait ScriptClassifier: Send + Sync {
    fn is_han(&self, c: char) -> bool;
    fn is_latin_or_digit(&self, c: char) -> bool;
}

/// Unicode block based classifier / 基于 Unicode 区段的分类器
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl ScriptClassifier for UnicodeClassifier {
    fn is_han(&self, c: char) -> bool {
        matches!(c,
            '\u{4e00}'..='\u{9fff}' |   // CJK Unified Ideographs
            '\u{3400}'..='\u{4dbf}' |   // CJK Extension A
            '\u{f900}'..='\u{faff}' |   // CJK Compatibility Ideographs
            '\u{20000}'..='\u{2a6df}'   // CJK Extension B
        )
    }

    fn is_latin_or_digit(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || (matches!(c, '\u{00c0}'..='\u{024f}') && c != '\u{00d7}' && c != '\u{00f7}')
    }
}

/// Check if text contains any Han character / 检测文本是否包含汉字
pub fn contains_han(text: &str, classifier: &dyn ScriptClassifier) -> bool {
    text.chars().any(|c| classifier.is_han(c))
}

mod tables;

fn aligned_map(from: &'static str, to: &'static str) -> HashMap<char, char> {
    from.chars().zip(to.chars()).collect()
}

static TO_SIMPLIFIED: Lazy<HashMap<char, char>> =
    Lazy::new(|| aligned_map(tables::T2S_FROM, tables::T2S_TO));

static TO_TRADITIONAL: Lazy<HashMap<char, char>> =
    Lazy::new(|| aligned_map(tables::S2T_FROM, tables::S2T_TO));

static VARIANTS: Lazy<HashMap<char, Vec<char>>> = Lazy::new(|| {
    tables::VARIANT_GROUPS
        .iter()
        .filter_map(|group| {
            let first = group.chars().next()?;
            Some((first, group.chars().collect()))
        })
        .collect()
});

/// Every traditional form of a character that converts to itself, itself first.
///
/// These characters (台, 里, 系, 准, 面, …) are valid traditional text on their own, so
/// conversion leaves them alone and matching accepts any of their forms.
pub fn variants(c: char) -> Option<&'static [char]> {
    VARIANTS.get(&c).map(Vec::as_slice)
}

/// 繁体转简体
pub fn to_simplified(text: &str) -> String {
    text.chars().map(|c| *TO_SIMPLIFIED.get(&c).unwrap_or(&c)).collect()
}

/// 简体转繁体
pub fn to_traditional(text: &str) -> String {
    text.chars().map(|c| *TO_TRADITIONAL.get(&c).unwrap_or(&c)).collect()
}

/// Convert Han characters into `target`, everything else passes through / 转换到目标字形
pub fn normalize(text: &str, target: Script) -> String {
    match target {
        Script::Simplified => to_simplified(text),
        Script::Traditional => to_traditional(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier() {
        let c = UnicodeClassifier;
        assert!(c.is_han('記'));
        assert!(c.is_han('记'));
        assert!(!c.is_han('a'));
        assert!(c.is_latin_or_digit('G'));
        assert!(c.is_latin_or_digit('7'));
        assert!(c.is_latin_or_digit('é'));
        assert!(!c.is_latin_or_digit('×'));
        assert!(!c.is_latin_or_digit('，'));
        assert!(contains_han("GPU記憶體", &c));
        assert!(!contains_han("GPU memory", &c));
    }

    #[test]
    fn test_to_traditional() {
        assert_eq!(to_traditional("记忆体计算器"), "記憶體計算器");
        assert_eq!(normalize("翻译工具", Script::Traditional), "翻譯工具");
    }

    #[test]
    fn test_common_terms() {
        let cases = [
            ("搜寻", "搜尋"),
            ("邮件", "郵件"),
            ("购物", "購物"),
            ("阴虚", "陰虛"),
            ("阳虚", "陽虛"),
            ("体质", "體質"),
            ("载入", "載入"),
            ("觉得", "覺得"),
            ("内容", "內容"),
            ("解释", "解釋"),
            ("点击", "點擊"),
            ("写作", "寫作"),
            ("网站", "網站"),
            ("数据分析", "數據分析"),
            ("图片压缩", "圖片壓縮"),
            ("汇率换算", "匯率換算"),
            ("简历优化", "簡歷優化"),
            ("营销文案", "營銷文案"),
        ];
        for (simplified, traditional) in cases {
            assert_eq!(to_traditional(simplified), traditional, "{simplified}");
            assert_eq!(to_simplified(traditional), simplified, "{traditional}");
        }
    }

    #[test]
    fn test_to_simplified() {
        assert_eq!(to_simplified("記憶體計算器"), "记忆体计算器");
        assert_eq!(to_simplified("臺灣"), "台湾");
        assert_eq!(to_simplified("裡面"), "里面");
    }

    #[test]
    fn test_ambiguous_forms_stay_put() {
        // 系統 and 台灣 are already traditional text
        assert_eq!(to_traditional("系统"), "系統");
        assert_eq!(to_traditional("台湾"), "台灣");
        assert_eq!(to_traditional("里面"), "里面");
    }

    #[test]
    fn test_variants() {
        assert_eq!(variants('台'), Some(&['台', '檯', '臺', '颱'][..]));
        assert_eq!(variants('里'), Some(&['里', '裡'][..]));
        assert!(variants('寻').is_none());
        assert!(variants('尋').is_none());
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize("GPU 123 ok", Script::Traditional), "GPU 123 ok");
        assert_eq!(normalize("", Script::Simplified), "");
    }

    #[test]
    fn test_tables_are_aligned() {
        assert_eq!(tables::T2S_FROM.chars().count(), tables::T2S_TO.chars().count());
        assert_eq!(tables::S2T_FROM.chars().count(), tables::S2T_TO.chars().count());
        assert!(TO_SIMPLIFIED.iter().all(|(t, s)| t != s));
        assert!(TO_TRADITIONAL.iter().all(|(s, t)| s != t));
    }
}
