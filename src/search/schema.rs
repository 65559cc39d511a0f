//! Search request and result types / 搜索请求与结果

use serde::{Deserialize, Serialize};

use crate::models::ToolRecord;

/// Label of the synthetic exact-match evidence entry
pub const PERFECT_MATCH_LABEL: &str = "Perfect Match";

/// One (field, keyword) hit, explain mode only / 匹配明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub field: String,
    pub keyword: String,
    pub content: String,
    pub weight: u32,
}

/// A ranked tool with its score breakdown / 带分数的搜索结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: ToolRecord,
    pub base_score: u32,
    pub matched_keyword_count: usize,
    pub total_keywords: usize,
    pub multiplier: f64,
    pub exact_match_bonus: u32,
    pub final_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<MatchEvidence>>,
}

/// Search options / 搜索选项
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Raw query text / 原始查询
    pub query: String,
    /// Tag filter (None or the all-tags marker means no filter) / 标签过滤
    pub tag: Option<String>,
    /// Attach match evidence / 附带匹配明细
    pub explain: bool,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tag: None,
            explain: false,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = if tag.trim().is_empty() { None } else { Some(tag) };
        self
    }

    pub fn explain(mut self, enabled: bool) -> Self {
        self.explain = enabled;
        self
    }
}
