pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use state::AppState;

pub async fn serve(host: &str, port: u16, data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir.join("uploads"))
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;

    let state = AppState::new(data_dir.to_path_buf());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health
        .route("/health", get(|| async { "ok" }))
        // Data
        .route("/api/data/upload", post(handlers::data::upload_data))
        .route("/api/data/manifest", get(handlers::data::get_manifest))
        // Pipeline
        .route("/api/grade", post(handlers::grade::grade_upload))
        .route("/api/plot", post(handlers::plot::plot_view))
        // Schema
        .route("/api/schema", get(handlers::schema::get_schema))
        .layer(cors)
        .with_state(state);

    let addr = format!("{host}:{port}");
    info!(%addr, "condor-screen API server listening");
    info!("  Upload: POST http://{addr}/api/data/upload");
    info!("  Grade:  POST http://{addr}/api/grade");
    info!("  Plot:   POST http://{addr}/api/plot");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    axum::serve(listener, app).await.context("running server")?;

    Ok(())
}
