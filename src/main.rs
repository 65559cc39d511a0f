use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod state;

use state::AppState;
use tool_search::catalog::SqliteCatalog;
use tool_search::config;
use tool_search::search::SearchEngine;
use tool_search::theme::ThemeRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tool_search=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    config::init_config().map_err(anyhow::Error::msg)?;
    let app_config = config::config();
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Create data directory if not exists / 创建数据目录
    let data_dir = app_config.get_data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!("Created data directory: {:?}", data_dir);
    }

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| app_config.get_database_url());

    let catalog = SqliteCatalog::connect(&database_url).await?;
    catalog.init().await?;

    // Seed import failures are logged, the server still starts / 导入种子数据
    if let Some(seed_path) = app_config.get_seed_path() {
        if let Err(e) = catalog.import_seed(&seed_path).await {
            tracing::warn!("Seed import skipped: {}", e);
        }
    }
    tracing::info!("Catalog ready: {} active tools", catalog.count_active().await?);

    let state = Arc::new(AppState {
        catalog,
        engine: SearchEngine::new(&app_config.search),
        themes: ThemeRegistry::default(),
        allow_explain: app_config.search.allow_explain,
    });

    let app = api::router(state.clone());

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    state.catalog.close().await;
    Ok(())
}
