pub mod aitool;
pub mod server;

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Build the HTTP router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        // 工具搜索API
        .route("/api/aitool", get(aitool::search_tools).post(aitool::create_tool))
        .route("/api/aitool/tags", get(aitool::tag_stats))
        .route("/api/aitool/themes", get(aitool::tag_themes))
        .route(
            "/api/aitool/:id",
            get(aitool::get_tool)
                .put(aitool::update_tool)
                .delete(aitool::delete_tool),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
