//! Relevance scoring - one pass computes the weighted sum, the distinct keyword
//! coverage and the match evidence together / 相关性评分
//!
//! final = base * coverage_multiplier(distinct matched keywords) + exact_match_bonus

use std::collections::{HashMap, HashSet};

use super::fields::{FieldWeights, KeywordPattern};
use super::schema::{MatchEvidence, PERFECT_MATCH_LABEL};
use super::tokenizer::strip_delimiters;
use crate::models::ToolRecord;

/// Default exact-match bonus / 完全匹配加分
pub const EXACT_MATCH_BONUS: u32 = 10;

/// Step function over the distinct matched keyword count / 关键词覆盖率倍数
pub fn coverage_multiplier(distinct_matched: usize) -> f64 {
    match distinct_matched {
        0 | 1 => 1.0,
        2 => 2.0,
        3 => 3.5,
        _ => 5.0,
    }
}

/// Score breakdown of one record / 单条记录的分数明细
#[derive(Debug, Clone, PartialEq)]
pub struct RecordScore {
    pub base_score: u32,
    pub matched_keyword_count: usize,
    pub total_keywords: usize,
    pub multiplier: f64,
    pub exact_match_bonus: u32,
    pub final_score: f64,
    /// Filled only when evidence was requested
    pub evidence: Vec<MatchEvidence>,
}

/// Per-request scorer. Patterns are compiled once per distinct keyword and dropped
/// with the request.
pub struct Scorer<'a> {
    weights: &'a FieldWeights,
    patterns: Vec<KeywordPattern>,
    /// Keyword sequence as indices into `patterns` (duplicates preserved)
    sequence: Vec<usize>,
    /// Stripped query forms eligible for the exact-match bonus
    exact_forms: Vec<String>,
    exact_bonus: u32,
}

impl<'a> Scorer<'a> {
    /// `canonical_query` is the raw query converted to the catalog script; it lets a
    /// query typed in the other script still earn the exact-match bonus.
    pub fn new(
        weights: &'a FieldWeights,
        keywords: &[String],
        raw_query: &str,
        canonical_query: &str,
        exact_bonus: u32,
    ) -> Self {
        let mut patterns = Vec::new();
        let mut index_of: HashMap<String, usize> = HashMap::new();
        let mut sequence = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let key = keyword.to_lowercase();
            let idx = *index_of.entry(key).or_insert_with(|| {
                patterns.push(KeywordPattern::new(keyword));
                patterns.len() - 1
            });
            sequence.push(idx);
        }

        let mut exact_forms = Vec::with_capacity(2);
        for form in [strip_delimiters(raw_query), strip_delimiters(canonical_query)] {
            if !form.is_empty() && !exact_forms.contains(&form) {
                exact_forms.push(form);
            }
        }

        Self {
            weights,
            patterns,
            sequence,
            exact_forms,
            exact_bonus,
        }
    }

    pub fn total_keywords(&self) -> usize {
        self.sequence.len()
    }

    /// Recall stage: an empty keyword set passes everything, otherwise at least one
    /// keyword must hit at least one field.
    pub fn recalls(&self, record: &ToolRecord) -> bool {
        self.patterns.is_empty()
            || self
                .patterns
                .iter()
                .any(|p| self.weights.iter().any(|w| w.field.matches(record, p)))
    }

    /// Bonus when the delimiter-stripped, lowercased name equals the stripped query in
    /// either the typed or the canonical script. An empty stripped query never earns it.
    pub fn exact_bonus(&self, record: &ToolRecord) -> u32 {
        let name = strip_delimiters(&record.name);
        if self.exact_forms.iter().any(|form| *form == name) {
            self.exact_bonus
        } else {
            0
        }
    }

    /// Score one record.
    ///
    /// Every matching (keyword, field) pair adds the field weight, with no early exit;
    /// coverage counts a keyword once, at its first matching field.
    pub fn score(&self, record: &ToolRecord, collect_evidence: bool) -> RecordScore {
        let mut base_score = 0u32;
        let mut covered: HashSet<usize> = HashSet::new();
        let mut evidence = Vec::new();

        for &idx in &self.sequence {
            let pattern = &self.patterns[idx];
            for entry in self.weights.iter() {
                let Some(content) = entry.field.find_match(record, pattern) else {
                    continue;
                };
                base_score = base_score.saturating_add(entry.weight);
                covered.insert(idx);
                if collect_evidence {
                    evidence.push(MatchEvidence {
                        field: entry.label.to_string(),
                        keyword: pattern.keyword().to_string(),
                        content: content.to_string(),
                        weight: entry.weight,
                    });
                }
            }
        }

        let matched_keyword_count = covered.len();
        let multiplier = coverage_multiplier(matched_keyword_count);
        let exact_match_bonus = self.exact_bonus(record);

        if collect_evidence && exact_match_bonus > 0 {
            evidence.insert(
                0,
                MatchEvidence {
                    field: PERFECT_MATCH_LABEL.to_string(),
                    keyword: self.exact_forms.first().cloned().unwrap_or_default(),
                    content: record.name.clone(),
                    weight: exact_match_bonus,
                },
            );
        }

        RecordScore {
            base_score,
            matched_keyword_count,
            total_keywords: self.total_keywords(),
            multiplier,
            exact_match_bonus,
            final_score: base_score as f64 * multiplier + exact_match_bonus as f64,
            evidence,
        }
    }
}
