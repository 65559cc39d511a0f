//! Explain mode - match evidence for one record / 搜索结果解释
//!
//! Evidence comes out of the same scoring pass that produces the ranking, so the two
//! can never disagree.

use super::fields::FieldWeights;
use super::schema::MatchEvidence;
use super::scorer::Scorer;
use crate::models::ToolRecord;

/// Evidence list: a "Perfect Match" entry first when the exact-match bonus applies,
/// then one entry per matching (keyword, field) pair in keyword then field order.
pub fn explain(
    weights: &FieldWeights,
    record: &ToolRecord,
    keywords: &[String],
    raw_query: &str,
    canonical_query: &str,
    exact_bonus: u32,
) -> Vec<MatchEvidence> {
    Scorer::new(weights, keywords, raw_query, canonical_query, exact_bonus)
        .score(record, true)
        .evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::schema::PERFECT_MATCH_LABEL;
    use crate::search::scorer::EXACT_MATCH_BONUS;

    #[test]
    fn test_evidence_order() {
        let record = ToolRecord::new("gpu", "GPU記憶體計算器")
            .with_tags(["AI", "工具"])
            .with_description("估算GPU記憶體");
        let keywords = vec!["GPU".to_string(), "記憶體".to_string()];
        let evidence = explain(
            &FieldWeights::default(),
            &record,
            &keywords,
            "GPU 記憶體",
            "GPU 記憶體",
            EXACT_MATCH_BONUS,
        );

        let summary: Vec<(&str, &str, u32)> = evidence
            .iter()
            .map(|e| (e.field.as_str(), e.keyword.as_str(), e.weight))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Name", "GPU", 5),
                ("Description", "GPU", 1),
                ("Name", "記憶體", 5),
                ("Description", "記憶體", 1),
            ]
        );
        assert_eq!(evidence[1].content, "估算GPU記憶體");
    }

    #[test]
    fn test_perfect_match_prepended() {
        let record = ToolRecord::new("seo", "SEO Helper").with_tags(["SEO"]);
        let keywords = vec!["seo".to_string(), "helper".to_string()];
        let evidence = explain(
            &FieldWeights::default(),
            &record,
            &keywords,
            "seo-helper",
            "seo-helper",
            EXACT_MATCH_BONUS,
        );
        assert_eq!(evidence[0].field, PERFECT_MATCH_LABEL);
        assert_eq!(evidence[0].weight, 10);
        assert_eq!(evidence[0].content, "SEO Helper");
        assert_eq!(evidence.len(), 1 + 3);
    }

    #[test]
    fn test_no_match_no_evidence() {
        let record = ToolRecord::new("x", "Other");
        let keywords = vec!["seo".to_string()];
        let evidence = explain(&FieldWeights::default(), &record, &keywords, "seo", "seo", 10);
        assert!(evidence.is_empty());
    }
}
