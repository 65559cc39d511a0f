use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tool_search::catalog::{tag_filter, CandidateSource};
use tool_search::error::CatalogError;
use tool_search::models::{ToolRecord, ToolUpdate};
use tool_search::search::{MatchEvidence, ScoredRecord, SearchOptions};
use tool_search::theme::{tag_statistics, TagStats, TagThemes};

use crate::api::ApiResponse;
use crate::state::AppState;

type ApiError = (StatusCode, Json<ApiResponse<()>>);

fn unavailable(e: impl std::fmt::Display) -> ApiError {
    tracing::error!("Tool catalog unavailable: {}", e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::error(503, "工具目录暂时不可用")),
    )
}

fn not_found(id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(404, &format!("工具不存在: {}", id))),
    )
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(400, message)))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub tag: Option<String>,
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchFilters {
    pub q: String,
    pub tag: Option<String>,
    pub explain: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub tools: Vec<ScoredRecord>,
    pub count: usize,
    pub filters: SearchFilters,
}

/// GET /api/aitool?q=&tag=&explain= - 搜索工具
pub async fn search_tools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchPayload>>, ApiError> {
    let explain = query.explain && state.allow_explain;
    let mut options = SearchOptions::new(query.q.trim()).explain(explain);
    if let Some(tag) = tag_filter(query.tag.as_deref()) {
        options = options.with_tag(tag);
    }

    let tools = state
        .engine
        .search(&state.catalog, &options)
        .await
        .map_err(unavailable)?;

    Ok(Json(ApiResponse::success(SearchPayload {
        count: tools.len(),
        tools,
        filters: SearchFilters {
            q: options.query,
            tag: options.tag,
            explain,
        },
    })))
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolQuery {
    #[serde(default)]
    pub q: String,
}

/// Tool with optional match evidence / 工具详情
#[derive(Debug, Serialize)]
pub struct ToolDetail {
    #[serde(flatten)]
    pub tool: ToolRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<MatchEvidence>>,
}

/// GET /api/aitool/:id?q= - 获取单个工具，带 q 时附上匹配明细
pub async fn get_tool(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ToolQuery>,
) -> Result<Json<ApiResponse<ToolDetail>>, ApiError> {
    let tool = match state.catalog.get_by_id(&id).await {
        Ok(Some(tool)) => tool,
        Ok(None) => return Err(not_found(&id)),
        Err(e) => return Err(unavailable(e)),
    };

    let q = query.q.trim();
    let evidence = (state.allow_explain && !q.is_empty()).then(|| state.engine.explain(&tool, q));
    Ok(Json(ApiResponse::success(ToolDetail { tool, evidence })))
}

/// POST /api/aitool - 新增工具
pub async fn create_tool(
    State(state): State<Arc<AppState>>,
    Json(record): Json<ToolRecord>,
) -> Result<(StatusCode, Json<ApiResponse<ToolRecord>>), ApiError> {
    if record.id.trim().is_empty() || record.name.trim().is_empty() {
        return Err(bad_request("工具ID和名称不能为空"));
    }

    match state.catalog.insert(&record).await {
        Ok(true) => {
            tracing::info!("Tool created: {}", record.id);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(record.with_implicit_tags())),
            ))
        }
        Ok(false) => Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(409, &format!("工具已存在: {}", record.id))),
        )),
        Err(e) => Err(unavailable(e)),
    }
}

/// PUT /api/aitool/:id - 更新工具
pub async fn update_tool(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ToolUpdate>,
) -> Result<Json<ApiResponse<ToolRecord>>, ApiError> {
    if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(bad_request("工具名称不能为空"));
    }

    match state.catalog.update(&id, update).await {
        Ok(Some(tool)) => {
            tracing::info!("Tool updated: {}", id);
            Ok(Json(ApiResponse::success(tool)))
        }
        Ok(None) => Err(not_found(&id)),
        Err(e) => Err(unavailable(e)),
    }
}

/// DELETE /api/aitool/:id - 停用工具
pub async fn delete_tool(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    match state.catalog.deactivate(&id).await {
        Ok(true) => {
            tracing::info!("Tool deactivated: {}", id);
            Ok(Json(ApiResponse {
                code: 200,
                message: "success".to_string(),
                data: None,
            }))
        }
        Ok(false) => Err(not_found(&id)),
        Err(e) => Err(unavailable(e)),
    }
}

async fn active_tools(state: &AppState) -> Result<Vec<ToolRecord>, CatalogError> {
    state.catalog.fetch_active(None).await
}

/// GET /api/aitool/tags - 标签统计
pub async fn tag_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<TagStats>>, ApiError> {
    let tools = active_tools(&state).await.map_err(unavailable)?;
    Ok(Json(ApiResponse::success(tag_statistics(&tools))))
}

/// GET /api/aitool/themes - 标签主题（合并 + 完整）
pub async fn tag_themes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<TagThemes>>, ApiError> {
    let tools = active_tools(&state).await.map_err(unavailable)?;
    Ok(Json(ApiResponse::success(state.themes.themes(&tools))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::Value;
    use sqlx::sqlite::SqlitePoolOptions;
    use tool_search::catalog::SqliteCatalog;
    use tool_search::search::SearchEngine;
    use tool_search::theme::ThemeRegistry;
    use tower::ServiceExt;

    async fn seeded_catalog() -> SqliteCatalog {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let catalog = SqliteCatalog::new(pool);
        catalog.init().await.unwrap();
        for record in [
            ToolRecord::new("gpu-mem", "GPU記憶體計算器")
                .with_tags(["工具"])
                .with_description("估算GPU記憶體")
                .with_component("GpuMemory"),
            ToolRecord::new("writer", "寫作助手")
                .with_tags(["寫作"])
                .with_instructions("產生文章草稿", "節省時間", "輸入主題"),
            ToolRecord::new("seo", "SEO 文案").with_tags(["寫作", "SEO"]),
        ] {
            catalog.insert(&record).await.unwrap();
        }
        catalog
    }

    fn router(catalog: SqliteCatalog, allow_explain: bool) -> axum::Router {
        crate::api::router(Arc::new(AppState {
            catalog,
            engine: SearchEngine::default(),
            themes: ThemeRegistry::default(),
            allow_explain,
        }))
    }

    async fn app(allow_explain: bool) -> axum::Router {
        router(seeded_catalog().await, allow_explain)
    }

    async fn call(app: axum::Router, method: Method, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn call_json(app: axum::Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(app(true).await, Method::GET, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_ranks_and_counts() {
        let (status, body) = call(app(true).await, Method::GET, "/api/aitool?q=GPU").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        let data = &body["data"];
        assert_eq!(data["count"], 1);
        assert_eq!(data["tools"][0]["id"], "gpu-mem");
        assert_eq!(data["tools"][0]["baseScore"], 6);
        assert_eq!(data["filters"]["q"], "GPU");
        assert!(data["tools"][0].get("evidence").is_none());
    }

    #[tokio::test]
    async fn test_search_simplified_with_tag() {
        // 写作, tag=寫作
        let uri = "/api/aitool?q=%E5%86%99%E4%BD%9C&tag=%E5%AF%AB%E4%BD%9C";
        let (status, body) = call(app(true).await, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["data"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"writer") && ids.contains(&"seo"));
        assert_eq!(body["data"]["filters"]["tag"], "寫作");
    }

    #[tokio::test]
    async fn test_explain_respects_config() {
        let (_, body) = call(app(true).await, Method::GET, "/api/aitool?q=GPU&explain=true").await;
        let evidence = body["data"]["tools"][0]["evidence"].as_array().unwrap().clone();
        assert_eq!(evidence[0]["field"], "Name");
        assert_eq!(evidence[0]["weight"], 5);

        let (_, body) = call(app(false).await, Method::GET, "/api/aitool?q=GPU&explain=true").await;
        assert!(body["data"]["tools"][0].get("evidence").is_none());
        assert_eq!(body["data"]["filters"]["explain"], false);
    }

    #[tokio::test]
    async fn test_get_and_delete_tool() {
        let app = app(true).await;
        let (status, body) = call(app.clone(), Method::GET, "/api/aitool/writer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "寫作助手");
        assert!(body["data"]["tags"].as_array().unwrap().iter().any(|t| t == "AI"));

        let (status, _) = call(app.clone(), Method::DELETE, "/api/aitool/writer").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(app.clone(), Method::GET, "/api/aitool/writer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);

        let (status, _) = call(app, Method::DELETE, "/api/aitool/writer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tags_and_themes() {
        let app = app(true).await;
        let (status, body) = call(app.clone(), Method::GET, "/api/aitool/tags").await;
        assert_eq!(status, StatusCode::OK);
        let merged = body["data"]["mergedTags"].as_array().unwrap();
        assert_eq!(merged[0]["tag"], "全部");
        assert_eq!(merged[0]["count"], 3);

        // 工具 and SEO are used once and fold into AI
        assert_eq!(merged[1]["tag"], "AI");
        assert_eq!(merged[1]["count"], 4);
        assert_eq!(body["data"]["allTags"].as_array().unwrap().len(), 4);

        let (status, body) = call(app, Method::GET, "/api/aitool/themes").await;
        assert_eq!(status, StatusCode::OK);
        let merged = body["data"]["merged"].as_array().unwrap();
        assert_eq!(merged[0]["tag"], "全部");
        assert_eq!(merged[1]["tag"], "AI");
        assert_eq!(merged.len(), 3);
        let full = body["data"]["full"].as_array().unwrap();
        assert_eq!(full.len(), 5);
        assert_eq!(full[1]["primary"], "bg-rose-400 bg-opacity-85");
    }

    #[tokio::test]
    async fn test_get_tool_with_evidence() {
        let uri = "/api/aitool/gpu-mem?q=GPU";
        let (status, body) = call(app(true).await, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], "gpu-mem");
        let evidence = body["data"]["evidence"].as_array().unwrap();
        let fields: Vec<&str> = evidence.iter().map(|e| e["field"].as_str().unwrap()).collect();
        assert_eq!(fields, vec!["Name", "Description"]);

        let (_, body) = call(app(false).await, Method::GET, uri).await;
        assert!(body["data"].get("evidence").is_none());
        let (_, body) = call(app(true).await, Method::GET, "/api/aitool/gpu-mem").await;
        assert!(body["data"].get("evidence").is_none());
    }

    #[tokio::test]
    async fn test_create_tool() {
        let app = app(true).await;
        let tool = serde_json::json!({
            "id": "rate",
            "name": "匯率換算器",
            "description": "即時匯率換算",
            "tags": ["金融"],
            "componentId": "ExchangeRate"
        });
        let (status, body) = call_json(app.clone(), Method::POST, "/api/aitool", tool.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["name"], "匯率換算器");

        // 汇率
        let (_, body) = call(app.clone(), Method::GET, "/api/aitool?q=%E6%B1%87%E7%8E%87").await;
        assert_eq!(body["data"]["tools"][0]["id"], "rate");

        let (status, body) = call_json(app.clone(), Method::POST, "/api/aitool", tool).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], 409);

        let blank = serde_json::json!({"id": "x", "name": "  "});
        let (status, _) = call_json(app, Method::POST, "/api/aitool", blank).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_tool() {
        let app = app(true).await;
        let patch = serde_json::json!({"name": "GPU 顯存估算", "tags": ["工具", "AI"]});
        let (status, body) = call_json(app.clone(), Method::PUT, "/api/aitool/gpu-mem", patch).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "GPU 顯存估算");
        assert_eq!(body["data"]["description"], "估算GPU記憶體");

        let (_, body) = call(app.clone(), Method::GET, "/api/aitool/gpu-mem").await;
        assert_eq!(body["data"]["name"], "GPU 顯存估算");

        let patch = serde_json::json!({"name": "無此工具"});
        let (status, body) = call_json(app, Method::PUT, "/api/aitool/missing", patch).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_search_without_results() {
        // 區塊鏈
        let uri = "/api/aitool?q=%E5%8D%80%E5%A1%8A%E9%8F%88";
        let (status, body) = call(app(true).await, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["data"]["count"], 0);
        assert_eq!(body["data"]["tools"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unavailable_catalog_is_503() {
        let catalog = seeded_catalog().await;
        catalog.close().await;
        let app = router(catalog, true);

        let (status, body) = call(app.clone(), Method::GET, "/api/aitool?q=GPU").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], 503);
        assert!(body["data"].is_null());

        let (status, _) = call(app, Method::GET, "/api/aitool/tags").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
