//! Page server for articles and navigation

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{ArticleRenderer, ContentSource};
use crate::helpers::{page_shell, url_for};
use crate::Articles;

/// Build the router serving `/` and `{article_root}/:id`
pub fn router<S, R>(articles: Arc<Articles<S, R>>) -> Router
where
    S: ContentSource + 'static,
    R: ArticleRenderer + 'static,
{
    let article_route = url_for(&articles.config.article_root, ":id");

    Router::new()
        .route("/", get(index_handler::<S, R>))
        .route(&article_route, get(article_handler::<S, R>))
        .layer(TraceLayer::new_for_http())
        .with_state(articles)
}

/// Start the server
pub async fn start<S, R>(articles: Articles<S, R>, ip: &str, port: u16) -> Result<()>
where
    S: ContentSource + 'static,
    R: ArticleRenderer + 'static,
{
    let app = router(Arc::new(articles));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Navigation-only landing page
async fn index_handler<S, R>(State(articles): State<Arc<Articles<S, R>>>) -> Response
where
    S: ContentSource + 'static,
    R: ArticleRenderer + 'static,
{
    match articles.navigation_html().await {
        Ok(nav) => Html(page_shell(&articles.config.site_title, &nav, "")).into_response(),
        Err(e) => upstream_error(e),
    }
}

/// Article page with navigation
async fn article_handler<S, R>(
    State(articles): State<Arc<Articles<S, R>>>,
    Path(id): Path<String>,
) -> Response
where
    S: ContentSource + 'static,
    R: ArticleRenderer + 'static,
{
    let nav = match articles.navigation_html().await {
        Ok(nav) => nav,
        Err(e) => return upstream_error(e),
    };

    let body = match articles.article_content(&id).await {
        Ok(body) => body,
        Err(e) => return upstream_error(e),
    };

    let title = &articles.config.site_title;
    if body.is_empty() {
        let page = page_shell(title, &nav, "<p>Article not found.</p>");
        return (StatusCode::NOT_FOUND, Html(page)).into_response();
    }

    Html(page_shell(title, &nav, &body)).into_response()
}

fn upstream_error(e: anyhow::Error) -> Response {
    tracing::error!("Content API error: {:#}", e);
    (StatusCode::BAD_GATEWAY, "Content service unavailable").into_response()
}
