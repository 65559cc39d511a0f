//! Search engine - broad recall, then precise scoring / 搜索引擎
//!
//! Flow: tokenize → fetch candidates → recall (tag + any keyword hit) → score → rank.
//! Stateless apart from the read-only weight table and script tables, so one engine is
//! shared by every request.

use rayon::prelude::*;

use super::explain;
use super::fields::FieldWeights;
use super::ranker::rank;
use super::schema::{MatchEvidence, ScoredRecord, SearchOptions};
use super::scorer::Scorer;
use super::tokenizer::QueryTokenizer;
use crate::catalog::{tag_filter, CandidateSource};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::models::ToolRecord;

/// Tool relevance search engine / 工具相关性搜索引擎
#[derive(Clone)]
pub struct SearchEngine {
    weights: FieldWeights,
    tokenizer: QueryTokenizer,
    exact_bonus: u32,
    parallel_threshold: usize,
}

impl SearchEngine {
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_tokenizer(config, QueryTokenizer::new(config.canonical_script))
    }

    /// Use a custom tokenizer (e.g. another script classifier)
    pub fn with_tokenizer(config: &SearchConfig, tokenizer: QueryTokenizer) -> Self {
        Self {
            weights: FieldWeights::from_config(&config.weights),
            tokenizer,
            exact_bonus: config.exact_match_bonus,
            parallel_threshold: config.parallel_threshold.max(1),
        }
    }

    pub fn tokenize(&self, query: &str) -> Vec<String> {
        self.tokenizer.tokenize(query)
    }

    /// Fetch candidates, then score and rank them / 搜索（原语操作）
    ///
    /// A failing source is an error, never an empty result. Large candidate sets are
    /// scored on the blocking pool so the rayon work never stalls a runtime worker.
    pub async fn search<S>(&self, source: &S, options: &SearchOptions) -> Result<Vec<ScoredRecord>, SearchError>
    where
        S: CandidateSource + ?Sized,
    {
        let tag = tag_filter(options.tag.as_deref());
        let candidates = source.fetch_active(tag).await.map_err(|e| {
            tracing::error!("Candidate fetch failed: {}", e);
            SearchError::CatalogUnavailable(e)
        })?;

        if candidates.len() < self.parallel_threshold {
            return Ok(self.rank_candidates(candidates, options));
        }

        let engine = self.clone();
        let options = options.clone();
        let ranked = tokio::task::spawn_blocking(move || engine.rank_candidates(candidates, &options))
            .await
            .map_err(|e| {
                tracing::error!("Scoring task failed: {}", e);
                SearchError::Scoring(e)
            })?;
        Ok(ranked)
    }

    /// Score and rank an already materialized candidate set (pure)
    pub fn rank_candidates(&self, candidates: Vec<ToolRecord>, options: &SearchOptions) -> Vec<ScoredRecord> {
        let keywords = self.tokenize(&options.query);
        let canonical_query = self.tokenizer.normalize_keyword(&options.query);
        let scorer = Scorer::new(
            &self.weights,
            &keywords,
            &options.query,
            &canonical_query,
            self.exact_bonus,
        );
        let tag = tag_filter(options.tag.as_deref());
        let candidate_count = candidates.len();

        let score_one = |record: ToolRecord| -> Option<ScoredRecord> {
            if !record.active || tag.is_some_and(|t| !record.has_tag(t)) {
                return None;
            }
            if !scorer.recalls(&record) {
                return None;
            }
            let score = scorer.score(&record, options.explain);
            Some(ScoredRecord {
                record,
                base_score: score.base_score,
                matched_keyword_count: score.matched_keyword_count,
                total_keywords: score.total_keywords,
                multiplier: score.multiplier,
                exact_match_bonus: score.exact_match_bonus,
                final_score: score.final_score,
                evidence: options.explain.then_some(score.evidence),
            })
        };

        let scored: Vec<ScoredRecord> = if candidate_count >= self.parallel_threshold {
            candidates.into_par_iter().filter_map(score_one).collect()
        } else {
            candidates.into_iter().filter_map(score_one).collect()
        };

        tracing::debug!(
            "Search {:?}: {} keywords, {} candidates, {} matched",
            options.query,
            keywords.len(),
            candidate_count,
            scored.len()
        );

        rank(scored)
    }

    /// Evidence for a single record against a raw query / 单条记录的匹配明细
    pub fn explain(&self, record: &ToolRecord, raw_query: &str) -> Vec<MatchEvidence> {
        let keywords = self.tokenize(raw_query);
        let canonical_query = self.tokenizer.normalize_keyword(raw_query);
        explain::explain(
            &self.weights,
            record,
            &keywords,
            raw_query,
            &canonical_query,
            self.exact_bonus,
        )
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::error::CatalogError;
    use async_trait::async_trait;

    struct BrokenSource;

    #[async_trait]
    impl CandidateSource for BrokenSource {
        async fn fetch_active(&self, _tag: Option<&str>) -> Result<Vec<ToolRecord>, CatalogError> {
            Err(CatalogError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            ToolRecord::new("gpu-mem", "GPU記憶體計算器")
                .with_tags(["AI", "工具"])
                .with_description("估算GPU記憶體"),
            ToolRecord::new("gpu-price", "GPU 價格比較")
                .with_tags(["電腦"])
                .with_description("比較顯示卡價格")
                .with_component("GpuPrice"),
            ToolRecord::new("writer", "寫作助手")
                .with_tags(["寫作"])
                .with_instructions("產生文章草稿", "節省時間", "輸入主題"),
            ToolRecord::new("metal", "金屬重量計算器")
                .with_tags(["工具", "製造"])
                .with_component("MetalWeightCalculator"),
            ToolRecord::new("old", "GPU 舊工具").with_tags(["工具"]).inactive(),
        ])
    }

    fn ids(results: &[ScoredRecord]) -> Vec<&str> {
        results.iter().map(|r| r.record.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_gpu_scenario_ranking() {
        let engine = SearchEngine::default();
        let results = engine
            .search(&catalog(), &SearchOptions::new("GPU 記憶體"))
            .await
            .unwrap();

        assert_eq!(ids(&results), vec!["gpu-mem", "gpu-price"]);
        let top = &results[0];
        assert_eq!(top.matched_keyword_count, 2);
        assert_eq!(top.total_keywords, 2);
        assert_eq!(top.multiplier, 2.0);
        assert_eq!(top.base_score, 12);
        assert_eq!(top.final_score, 24.0);
        assert_eq!(top.exact_match_bonus, 0);
        assert!(top.evidence.is_none());

        let second = &results[1];
        assert_eq!(second.base_score, 5);
        assert_eq!(second.final_score, 5.0);
    }

    #[tokio::test]
    async fn test_simplified_terms_hit_traditional_catalog() {
        let catalog = MemoryCatalog::new(vec![
            ToolRecord::new("search", "網站搜尋助手"),
            ToolRecord::new("mail", "電子郵件撰寫"),
            ToolRecord::new("tcm", "中醫體質檢測").with_description("判斷陰虛或陽虛體質"),
            ToolRecord::new("shop", "購物清單產生器"),
        ]);
        let engine = SearchEngine::default();
        for (query, id) in [("搜寻", "search"), ("邮件", "mail"), ("阴虚", "tcm"), ("购物", "shop")] {
            let results = engine.search(&catalog, &SearchOptions::new(query)).await.unwrap();
            assert_eq!(ids(&results), vec![id], "{query}");
        }
    }

    #[tokio::test]
    async fn test_exact_match_outranks() {
        let engine = SearchEngine::default();
        let results = engine
            .search(&catalog(), &SearchOptions::new("GPU記憶體計算器"))
            .await
            .unwrap();
        let top = &results[0];
        assert_eq!(top.record.id, "gpu-mem");
        assert_eq!(top.exact_match_bonus, 10);
        assert_eq!(top.final_score, top.base_score as f64 * top.multiplier + 10.0);
    }

    #[tokio::test]
    async fn test_simplified_query() {
        let engine = SearchEngine::default();
        let results = engine
            .search(&catalog(), &SearchOptions::new("写作"))
            .await
            .unwrap();
        assert_eq!(ids(&results), vec!["writer"]);
    }

    #[tokio::test]
    async fn test_empty_query_returns_all_active() {
        let engine = SearchEngine::default();
        let results = engine.search(&catalog(), &SearchOptions::new("  ")).await.unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.base_score == 0 && r.final_score == 0.0));
        // name order
        assert_eq!(ids(&results), vec!["gpu-price", "gpu-mem", "writer", "metal"]);
    }

    #[tokio::test]
    async fn test_tag_filter_is_subset() {
        let engine = SearchEngine::default();
        for (query, tag) in [("", "工具"), ("GPU", "工具"), ("計算器", "製造"), ("", "AI")] {
            let results = engine
                .search(&catalog(), &SearchOptions::new(query).with_tag(tag))
                .await
                .unwrap();
            assert!(!results.is_empty());
            assert!(results.iter().all(|r| r.record.has_tag(tag)), "{query} / {tag}");
        }

        let ai = engine
            .search(&catalog(), &SearchOptions::new("").with_tag("AI"))
            .await
            .unwrap();
        assert_eq!(ids(&ai), vec!["gpu-mem", "writer"]);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let engine = SearchEngine::default();
        let results = engine
            .search(&catalog(), &SearchOptions::new("區塊鏈"))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_source_failure_is_error() {
        let engine = SearchEngine::default();
        let err = engine
            .search(&BrokenSource, &SearchOptions::new("GPU"))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::CatalogUnavailable(CatalogError::Database(_))));
    }

    #[tokio::test]
    async fn test_explain_matches_score() {
        let engine = SearchEngine::default();
        let results = engine
            .search(&catalog(), &SearchOptions::new("GPU 記憶體").explain(true))
            .await
            .unwrap();
        let top = &results[0];
        let evidence = top.evidence.as_ref().unwrap();
        let weight_sum: u32 = evidence.iter().map(|e| e.weight).sum();
        assert_eq!(weight_sum, top.base_score);
        assert_eq!(evidence, &engine.explain(&top.record, "GPU 記憶體"));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let records: Vec<ToolRecord> = (0..64)
            .map(|i| {
                ToolRecord::new(format!("t{i:02}"), format!("工具 {i}"))
                    .with_tags(if i % 3 == 0 { vec!["SEO"] } else { vec!["寫作"] })
                    .with_description(if i % 2 == 0 { "SEO 寫作" } else { "其他" })
            })
            .collect();
        let options = SearchOptions::new("seo 寫作");

        let sequential = SearchEngine::new(&SearchConfig {
            parallel_threshold: usize::MAX,
            ..SearchConfig::default()
        });
        let parallel = SearchEngine::new(&SearchConfig {
            parallel_threshold: 1,
            ..SearchConfig::default()
        });

        let a = sequential.rank_candidates(records.clone(), &options);
        let b = parallel.rank_candidates(records, &options);
        assert_eq!(a, b);
        assert_eq!(rank(b.clone()), b);
    }

    #[tokio::test]
    async fn test_search_above_threshold_uses_blocking_pool() {
        let engine = SearchEngine::new(&SearchConfig {
            parallel_threshold: 2,
            ..SearchConfig::default()
        });
        let options = SearchOptions::new("GPU 記憶體");
        let results = engine.search(&catalog(), &options).await.unwrap();
        let candidates = catalog().fetch_active(None).await.unwrap();
        assert_eq!(results, engine.rank_candidates(candidates, &options));
        assert_eq!(ids(&results), vec!["gpu-mem", "gpu-price"]);
    }
}
