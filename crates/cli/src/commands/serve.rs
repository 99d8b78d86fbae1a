use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use folio_core::{RemoteArticle, format_timestamp};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared, read-only state of the article API
#[derive(Clone)]
pub struct ApiState {
    articles: Arc<Vec<RemoteArticle>>,
}

impl ApiState {
    /// Serve the default catalogue, stamped with the current time
    pub fn new() -> Self {
        Self::with_articles(catalogue(Utc::now()))
    }

    /// Serve a fixed set of articles
    pub fn with_articles(articles: Vec<RemoteArticle>) -> Self {
        Self {
            articles: Arc::new(articles),
        }
    }
}

#[derive(Debug, Serialize)]
struct ServerInfo {
    server: &'static str,
    version: &'static str,
    timestamp: i64,
}

/// Articles published by the API. `created` is the server start time.
fn catalogue(created: DateTime<Utc>) -> Vec<RemoteArticle> {
    let article = |id: i64, title: &str, date: &str, excerpt: &str, content: &str| RemoteArticle {
        id,
        title: title.to_string(),
        date: date.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image: String::new(),
        created: Some(format_timestamp(&created)),
    };

    vec![
        article(
            1,
            "Getting Started with Server-Side Rendering",
            "2025-01-15",
            "The basics of server-side rendering, its core features and how to use them...",
            r#"# Getting Started with Server-Side Rendering

Server-side rendering turns components into an HTML string on the server. The
client receives static markup and hydrates it into a fully interactive page.

## Advantages

1. Fast first paint
2. Better search engine visibility
3. One development model for server and client
4. Less work for the client device
5. Wider browser support

## Getting started

A single scaffolding command creates a new project."#,
        ),
        article(
            2,
            "Composition API Best Practices",
            "2025-01-10",
            "Patterns and advanced techniques for component composition...",
            r#"# Composition API Best Practices

Composition functions give a more flexible way to organise component logic.

## Reusing logic

Extract shared behaviour into composables:

    function useCounter() {
      const count = ref(0)
      const increment = () => count.value++
      const decrement = () => count.value--
      return { count, increment, decrement }
    }

## Reactivity

Use refs and reactive objects to hold state."#,
        ),
        article(
            3,
            "Designing RESTful APIs",
            "2025-01-05",
            "How to design and implement a high quality RESTful API...",
            r#"# Designing RESTful APIs

A compiled language with a good standard library is a natural fit for fast
RESTful services.

## Principles

1. Use the right HTTP method
2. Design clear resource paths
3. Return standard status codes
4. Keep response formats consistent

## Implementation

The standard HTTP server or a small routing library is enough."#,
        ),
    ]
}

/// Build the API router
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/{id}", get(get_article))
        .route("/api/server-info", get(server_info))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the article API on all interfaces
pub async fn run(port: u16) -> Result<()> {
    println!("📰 Starting article API...");

    let state = ApiState::new();
    println!("   ✓ Serving {} articles", state.articles.len());

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    println!("\n🚀 Server running on http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");
    tracing::info!(%addr, "article API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn list_articles(State(state): State<ApiState>) -> Json<Vec<RemoteArticle>> {
    Json(state.articles.as_ref().clone())
}

async fn get_article(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid article ID");
    };

    match state.articles.iter().find(|article| article.id == id) {
        Some(article) => Json(article.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Article not found"),
    }
}

async fn server_info() -> Json<ServerInfo> {
    Json(ServerInfo {
        server: "folio article API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().timestamp(),
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
