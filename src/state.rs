use tool_search::catalog::SqliteCatalog;
use tool_search::search::SearchEngine;
use tool_search::theme::ThemeRegistry;

/// Shared application state / 应用共享状态
pub struct AppState {
    pub catalog: SqliteCatalog,
    pub engine: SearchEngine,
    pub themes: ThemeRegistry,
    /// Whether `explain=true` is honored / 是否允许解释模式
    pub allow_explain: bool,
}
