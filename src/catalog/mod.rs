//! Candidate sources - supply the active tool records to search / 候选工具来源
//!
//! The search engine never touches storage directly; it awaits one full candidate set
//! from a `CandidateSource` and scores it in memory.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::ToolRecord;

pub use sqlite::SqliteCatalog;

/// Tag value that means "every tag" / 表示全部标签
pub const ALL_TAG: &str = "全部";

/// Normalize a requested tag filter; empty and the all-tags marker mean no filter.
pub fn tag_filter(tag: Option<&str>) -> Option<&str> {
    tag.map(str::trim)
        .filter(|t| !t.is_empty() && *t != ALL_TAG)
}

/// Candidate source interface / 候选来源接口
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// All active records visible to search, restricted to `tag` when given.
    async fn fetch_active(&self, tag: Option<&str>) -> Result<Vec<ToolRecord>, CatalogError>;
}

/// In-memory catalog / 内存目录
#[derive(Default)]
pub struct MemoryCatalog {
    records: Vec<ToolRecord>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<ToolRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CandidateSource for MemoryCatalog {
    async fn fetch_active(&self, tag: Option<&str>) -> Result<Vec<ToolRecord>, CatalogError> {
        let tag = tag_filter(tag);
        Ok(self
            .records
            .iter()
            .filter(|r| r.active)
            .cloned()
            .map(ToolRecord::with_implicit_tags)
            .filter(|r| tag.map_or(true, |t| r.has_tag(t)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            ToolRecord::new("a", "寫作助手").with_tags(["寫作"]),
            ToolRecord::new("b", "金屬重量計算器")
                .with_tags(["工具", "製造"])
                .with_component("MetalWeightCalculator"),
            ToolRecord::new("c", "停用工具").with_tags(["工具"]).inactive(),
        ])
    }

    #[test]
    fn test_tag_filter() {
        assert_eq!(tag_filter(None), None);
        assert_eq!(tag_filter(Some("")), None);
        assert_eq!(tag_filter(Some("  ")), None);
        assert_eq!(tag_filter(Some(ALL_TAG)), None);
        assert_eq!(tag_filter(Some(" AI ")), Some("AI"));
    }

    #[tokio::test]
    async fn test_fetch_active_only() {
        let records = catalog().fetch_active(None).await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_by_tag_includes_implicit_ai() {
        let catalog = catalog();
        let ai = catalog.fetch_active(Some("AI")).await.unwrap();
        assert_eq!(ai.len(), 1);
        assert_eq!(ai[0].id, "a");

        let tools = catalog.fetch_active(Some("工具")).await.unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].id, "b");
    }
}
