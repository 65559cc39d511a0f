//! Search module - relevance scoring over tool records / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search module only exposes primitive operations: tokenize, search, explain
//! - Storage is behind `CandidateSource`; the engine never writes
//! - Call direction: API → Search → Catalog (unidirectional) / 调用方向
//!
//! Scoring / 评分：
//! - Weighted field matching (name > tags, what > description, why, how)
//! - Coverage multiplier rewards records matching more distinct keywords
//! - Exact-match bonus when the whole query equals the name
//! - Supports simplified/traditional matching and mixed CJK/Latin queries

pub mod engine;
pub mod explain;
pub mod fields;
pub mod ranker;
pub mod schema;
pub mod scorer;
pub mod script;
pub mod tokenizer;

pub use engine::SearchEngine;
pub use fields::{Field, FieldWeights};
pub use schema::{MatchEvidence, ScoredRecord, SearchOptions};
pub use script::Script;
pub use tokenizer::QueryTokenizer;
