use std::path::PathBuf;

/// Candidate source failures / 工具目录错误
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid tags for tool {id}: {source}")]
    Tags {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read seed file {path:?}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path:?}: {source}")]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Search failures. Zero results is never an error.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("candidate source unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    #[error("scoring task failed: {0}")]
    Scoring(#[from] tokio::task::JoinError),
}
